use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a composite entity: the namespace it is declared in plus its
/// name.
///
/// The differ compares declarations by this key only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityKey {
    pub namespace: String,
    pub name: String,
}

impl EntityKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// The default physical view name: `<namespace>_<name>`, lower-cased.
    pub fn default_table_name(&self) -> String {
        format!("{}_{}", self.namespace, self.name).to_lowercase()
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}
