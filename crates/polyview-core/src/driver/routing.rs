use serde::{Deserialize, Serialize};

/// Names the database an operation is meant for.
///
/// With no database named, the operation applies everywhere.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingHint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl RoutingHint {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn database(database: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
        }
    }

    pub fn is_any(&self) -> bool {
        self.database.is_none()
    }

    pub fn applies_to(&self, database: &str) -> bool {
        self.database
            .as_deref()
            .map_or(true, |target| target == database)
    }
}
