use crate::HistoricalRecord;

use polyview_core::{
    driver::{Executor, Flavor, RoutingHint},
    schema::{CompositeDeclaration, DeclarationDef, DonorResolver, EntityKey},
    Result,
};
use polyview_sql::ViewCompiler;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Create,
    Drop,
}

/// Creates or drops the view of one composite entity.
///
/// The operation carries the declaration in portable form. Applying it
/// rebuilds the declaration against the donors live at apply time, which may
/// differ from the ones live when the operation was planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeOperation {
    pub kind: OperationKind,

    #[serde(default, skip_serializing_if = "RoutingHint::is_any")]
    pub hint: RoutingHint,

    pub definition: DeclarationDef,
}

impl OperationKind {
    pub fn reverse(self) -> OperationKind {
        match self {
            OperationKind::Create => OperationKind::Drop,
            OperationKind::Drop => OperationKind::Create,
        }
    }
}

impl CompositeOperation {
    pub fn create(decl: &CompositeDeclaration) -> Self {
        Self::new(OperationKind::Create, decl.to_def())
    }

    pub fn drop(decl: &CompositeDeclaration) -> Self {
        Self::new(OperationKind::Drop, decl.to_def())
    }

    pub fn new(kind: OperationKind, definition: DeclarationDef) -> Self {
        Self {
            kind,
            hint: RoutingHint::any(),
            definition,
        }
    }

    pub fn with_hint(mut self, hint: RoutingHint) -> Self {
        self.hint = hint;
        self
    }

    pub fn key(&self) -> &EntityKey {
        &self.definition.key
    }

    pub fn is_create(&self) -> bool {
        matches!(self.kind, OperationKind::Create)
    }

    pub fn is_drop(&self) -> bool {
        matches!(self.kind, OperationKind::Drop)
    }

    /// The operation undoing this one.
    pub fn reverse(&self) -> CompositeOperation {
        CompositeOperation {
            kind: self.kind.reverse(),
            hint: self.hint.clone(),
            definition: self.definition.clone(),
        }
    }

    pub fn is_reversible(&self) -> bool {
        true
    }

    /// Whether the operation is expressed entirely as data-definition
    /// statements.
    pub fn reduces_to_sql(&self) -> bool {
        true
    }

    pub fn describe(&self) -> String {
        let verb = match self.kind {
            OperationKind::Create => "Create",
            OperationKind::Drop => "Drop",
        };
        format!("{verb} composite view {}", self.definition.key)
    }

    pub fn state_forwards(&self, record: &mut HistoricalRecord) {
        apply_state(self.kind, &self.definition, record);
    }

    pub fn state_backwards(&self, record: &mut HistoricalRecord) {
        apply_state(self.kind.reverse(), &self.definition, record);
    }

    pub fn database_forwards(
        &self,
        executor: &mut dyn Executor,
        resolver: &dyn DonorResolver,
    ) -> Result<()> {
        self.execute(self.kind, executor, resolver)
    }

    pub fn database_backwards(
        &self,
        executor: &mut dyn Executor,
        resolver: &dyn DonorResolver,
    ) -> Result<()> {
        self.execute(self.kind.reverse(), executor, resolver)
    }

    /// The statement `database_forwards` would execute.
    pub fn forwards_sql(&self, flavor: Flavor, resolver: &dyn DonorResolver) -> Result<String> {
        self.sql(self.kind, flavor, resolver)
    }

    /// The statement `database_backwards` would execute.
    pub fn backwards_sql(&self, flavor: Flavor, resolver: &dyn DonorResolver) -> Result<String> {
        self.sql(self.kind.reverse(), flavor, resolver)
    }

    fn execute(
        &self,
        kind: OperationKind,
        executor: &mut dyn Executor,
        resolver: &dyn DonorResolver,
    ) -> Result<()> {
        if !executor.allows(&self.hint) {
            tracing::debug!(
                entity = %self.definition.key,
                database = executor.database(),
                "skipping composite operation routed elsewhere"
            );
            return Ok(());
        }

        let sql = self.sql(kind, executor.flavor(), resolver)?;

        tracing::info!(
            entity = %self.definition.key,
            database = executor.database(),
            ?kind,
            "applying composite operation"
        );

        executor.execute(&[sql])
    }

    fn sql(
        &self,
        kind: OperationKind,
        flavor: Flavor,
        resolver: &dyn DonorResolver,
    ) -> Result<String> {
        let decl = CompositeDeclaration::from_def(&self.definition, resolver)?;
        let compiler = ViewCompiler::new(flavor);

        match kind {
            OperationKind::Create => compiler.compile_create(&decl),
            OperationKind::Drop => Ok(compiler.compile_drop(&decl)),
        }
    }
}

fn apply_state(kind: OperationKind, definition: &DeclarationDef, record: &mut HistoricalRecord) {
    match kind {
        OperationKind::Create => record.insert(definition.clone()),
        OperationKind::Drop => {
            record.remove(&definition.key);
        }
    }
}
