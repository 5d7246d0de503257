use super::{Name, Statement};

use polyview_core::schema::CompositeDeclaration;

/// A statement to drop a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropView {
    /// Name of the view.
    pub name: Name,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops the view of `decl`.
    ///
    /// This function _does_ add an `IF EXISTS` clause, so dropping a view that
    /// is already gone succeeds.
    pub fn drop_view(decl: &CompositeDeclaration) -> Self {
        DropView {
            name: Name::from(decl.table()),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropView> for Statement {
    fn from(value: DropView) -> Self {
        Self::DropView(value)
    }
}
