use super::{Ident, Name, Select, Statement};

use polyview_core::{schema::CompositeDeclaration, Error, Result};

/// A statement creating the union view of a composite declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateView {
    /// Name of the view
    pub name: Name,

    /// The composite's primary key. Always the synthesized identifier.
    pub primary_key: Ident,

    /// One branch per donor, in donor order. Branches are combined with a
    /// de-duplicating `UNION`.
    pub branches: Vec<Select>,
}

impl Statement {
    /// Creates the view for `decl`.
    ///
    /// Donor order is kept as declared: it fixes the branch order of the
    /// union and must not change between compilations.
    pub fn create_view(decl: &CompositeDeclaration) -> Result<Self> {
        if decl.donors().is_empty() {
            return Err(Error::empty_donor_list(decl.key()));
        }

        let branches = decl
            .donors()
            .iter()
            .map(|donor| Select::from_donor(decl, donor))
            .collect::<Result<Vec<_>>>()?;

        Ok(CreateView {
            name: Name::from(decl.table()),
            primary_key: Ident::from(decl.identifier()),
            branches,
        }
        .into())
    }
}

impl From<CreateView> for Statement {
    fn from(value: CreateView) -> Self {
        Self::CreateView(value)
    }
}
