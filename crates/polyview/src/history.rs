use crate::{CompositeOperation, MigrationGraph};

use indexmap::IndexMap;
use polyview_core::{
    schema::{CompositeDeclaration, DeclarationDef, DonorResolver, EntityKey, Registry},
    Result,
};

/// Composite entities materialized by previously recorded operations.
///
/// The record is kept in portable form. Definitions are only resolved against
/// live donors once every operation has been replayed, so history may
/// mention donors that no longer exist as long as their composites were
/// dropped along the way.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HistoricalRecord {
    definitions: IndexMap<EntityKey, DeclarationDef>,
}

impl HistoricalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `operations` forwards, starting from an empty record.
    pub fn from_operations<'a>(
        operations: impl IntoIterator<Item = &'a CompositeOperation>,
    ) -> Self {
        let mut record = Self::new();
        for operation in operations {
            operation.state_forwards(&mut record);
        }
        record
    }

    /// Replays every operation of `graph`, in migration order.
    pub fn from_graph(graph: &dyn MigrationGraph) -> Self {
        Self::from_operations(
            graph
                .migrations()
                .iter()
                .flat_map(|migration| &migration.operations),
        )
    }

    /// Replays `operations` and resolves the composites still materialized at
    /// the end.
    pub fn replay<'a>(
        operations: impl IntoIterator<Item = &'a CompositeOperation>,
        resolver: &dyn DonorResolver,
    ) -> Result<Registry> {
        Self::from_operations(operations).resolve(resolver)
    }

    /// Rebuilds every recorded definition against live donors, in the order
    /// they were first created.
    pub fn resolve(&self, resolver: &dyn DonorResolver) -> Result<Registry> {
        Registry::from_declarations(
            self.definitions
                .values()
                .map(|def| CompositeDeclaration::from_def(def, resolver))
                .collect::<Result<Vec<_>>>()?,
        )
    }

    /// Records a definition as materialized. A definition already recorded
    /// under the same key is replaced in place.
    pub fn insert(&mut self, definition: DeclarationDef) {
        self.definitions.insert(definition.key.clone(), definition);
    }

    pub fn remove(&mut self, key: &EntityKey) -> Option<DeclarationDef> {
        self.definitions.shift_remove(key)
    }

    pub fn get(&self, key: &EntityKey) -> Option<&DeclarationDef> {
        self.definitions.get(key)
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.definitions.contains_key(key)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DeclarationDef> + '_ {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
