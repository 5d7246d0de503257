use super::Ident;

/// One projected column of a union branch: a donor column exposed under an
/// output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAlias {
    /// Donor column to read
    pub column: Ident,

    /// Name of the column in the view
    pub alias: Ident,
}

impl ColumnAlias {
    /// True when the donor column already has the output name, in which case
    /// no `AS` clause is emitted.
    pub fn is_identity(&self) -> bool {
        self.column == self.alias
    }
}
