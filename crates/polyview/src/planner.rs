use crate::{
    CompositeOperation, Config, DeclarationsDiff, DeclarationsDiffItem, HistoricalRecord,
    Migration, MigrationGraph, MigrationPrefixStyle,
};

use polyview_core::{
    schema::{DonorResolver, Registry},
    Result,
};
use std::{fs, path::PathBuf};

/// Turns the difference between recorded history and the current
/// declarations into migrations.
pub struct Planner<'a> {
    registry: &'a Registry,
    resolver: &'a dyn DonorResolver,
    config: &'a Config,
}

impl<'a> Planner<'a> {
    pub fn new(
        registry: &'a Registry,
        resolver: &'a dyn DonorResolver,
        config: &'a Config,
    ) -> Self {
        Self {
            registry,
            resolver,
            config,
        }
    }

    /// Computes the next migration for `graph`, or `None` when the recorded
    /// composites already match the registry.
    ///
    /// Fails when a composite that history still considers materialized can
    /// no longer be rebuilt from the live donors.
    pub fn plan(&self, graph: &dyn MigrationGraph) -> Result<Option<Migration>> {
        let previous = HistoricalRecord::from_graph(graph).resolve(self.resolver)?;
        let diff = DeclarationsDiff::from(&previous, self.registry);

        if diff.is_empty() {
            tracing::debug!(
                composites = self.registry.len(),
                "recorded composites match the declarations; no migration needed"
            );
            return Ok(None);
        }

        let operations: Vec<_> = diff
            .items()
            .iter()
            .map(|item| match item {
                DeclarationsDiffItem::DropComposite(decl) => CompositeOperation::drop(decl),
                DeclarationsDiffItem::CreateComposite(decl) => CompositeOperation::create(decl),
            })
            .collect();

        let name = self.migration_name(graph);
        let dependencies = graph.leaf().map(|leaf| vec![leaf.to_string()]).unwrap_or_default();

        tracing::info!(
            migration = %name,
            creates = diff.to_create().count(),
            drops = diff.to_remove().count(),
            "planned composite migration"
        );

        Ok(Some(Migration::new(name, dependencies, operations)))
    }

    /// Plans the next migration and records it in `graph`.
    pub fn generate(&self, graph: &mut dyn MigrationGraph) -> Result<Option<Migration>> {
        let Some(migration) = self.plan(graph)? else {
            return Ok(None);
        };

        graph.record(migration.clone())?;
        Ok(Some(migration))
    }

    /// Writes the SQL text of `migration` to `<migrations dir>/<name>.sql`
    /// and returns the path written.
    pub fn write_sql(&self, migration: &Migration) -> Result<PathBuf> {
        let sql = migration.to_sql(self.config.flavor, self.resolver)?;

        let dir = self.config.migration.get_migrations_dir();
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.sql", migration.name));
        fs::write(&path, sql)?;
        Ok(path)
    }

    fn migration_name(&self, graph: &dyn MigrationGraph) -> String {
        let suffix = &self.config.migration.migration_name;

        match self.config.migration.prefix_style {
            MigrationPrefixStyle::Sequential => {
                format!("{:04}_{suffix}", graph.next_migration_number())
            }
            MigrationPrefixStyle::Timestamp => {
                let now = jiff::Zoned::now();
                format!("{}_{suffix}", now.strftime("%Y%m%d_%H%M%S"))
            }
        }
    }
}
