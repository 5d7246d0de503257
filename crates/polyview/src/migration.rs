mod history_file;
pub use history_file::HistoryFile;

use crate::CompositeOperation;

use polyview_core::{
    driver::{Executor, Flavor},
    schema::DonorResolver,
    Result,
};
use serde::{Deserialize, Serialize};

/// Separates statements in the SQL text of a migration.
pub const BREAKPOINT: &str = "\n-- #[polyview::breakpoint]\n";

/// A node of the migration graph: an ordered batch of composite operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Migration {
    pub name: String,

    /// Names of the migrations that must be applied first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub operations: Vec<CompositeOperation>,
}

/// Stored migration history.
///
/// Implementations own persistence. polyview only reads the applied
/// migrations and appends new ones.
pub trait MigrationGraph {
    /// Migrations in the order they were applied.
    fn migrations(&self) -> &[Migration];

    /// Records `migration` as the newest node.
    fn record(&mut self, migration: Migration) -> Result<()>;

    /// Name of the newest migration, if any.
    fn leaf(&self) -> Option<&str> {
        self.migrations().last().map(|m| m.name.as_str())
    }

    /// Get the next migration number by parsing the newest migration's name
    fn next_migration_number(&self) -> u32 {
        self.leaf()
            .and_then(|name| {
                // "0003_composite" -> 3
                name.split('_').next()?.parse::<u32>().ok()
            })
            .map(|n| n + 1)
            .unwrap_or(0)
    }
}

impl Migration {
    pub fn new(
        name: impl Into<String>,
        dependencies: Vec<String>,
        operations: Vec<CompositeOperation>,
    ) -> Self {
        Self {
            name: name.into(),
            dependencies,
            operations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Applies every operation forwards, in order. Stops at the first
    /// failure.
    pub fn apply(
        &self,
        executor: &mut dyn Executor,
        resolver: &dyn DonorResolver,
    ) -> Result<()> {
        tracing::info!(
            migration = %self.name,
            operations = self.operations.len(),
            "applying migration"
        );

        for operation in &self.operations {
            operation.database_forwards(executor, resolver)?;
        }
        Ok(())
    }

    /// Applies every operation backwards, newest first.
    pub fn unapply(
        &self,
        executor: &mut dyn Executor,
        resolver: &dyn DonorResolver,
    ) -> Result<()> {
        tracing::info!(
            migration = %self.name,
            operations = self.operations.len(),
            "reverting migration"
        );

        for operation in self.operations.iter().rev() {
            operation.database_backwards(executor, resolver)?;
        }
        Ok(())
    }

    /// Renders the forward statements, joined with breakpoint markers.
    pub fn to_sql(&self, flavor: Flavor, resolver: &dyn DonorResolver) -> Result<String> {
        let statements = self
            .operations
            .iter()
            .map(|operation| operation.forwards_sql(flavor, resolver))
            .collect::<Result<Vec<_>>>()?;

        Ok(statements.join(BREAKPOINT))
    }

    /// Get individual SQL statements by splitting on breakpoint markers.
    pub fn statements(sql: &str) -> Vec<&str> {
        sql.split(BREAKPOINT).filter(|s| !s.is_empty()).collect()
    }
}

/// An in-memory graph, mostly useful for planning without touching disk.
impl MigrationGraph for Vec<Migration> {
    fn migrations(&self) -> &[Migration] {
        self
    }

    fn record(&mut self, migration: Migration) -> Result<()> {
        self.push(migration);
        Ok(())
    }
}
