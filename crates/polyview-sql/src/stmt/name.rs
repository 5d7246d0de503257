use std::fmt;

/// A possibly qualified object name. Each part is quoted on its own, so
/// `analytics.pet` renders as `"analytics"."pet"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl From<&str> for Name {
    /// Splits a storage name on `.` into its schema and object parts.
    fn from(value: &str) -> Self {
        Self(value.split('.').map(String::from).collect())
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
