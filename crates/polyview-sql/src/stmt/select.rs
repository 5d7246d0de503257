use super::{ColumnAlias, Ident, Name};

use polyview_core::{
    schema::{CompositeDeclaration, Donor},
    Error, Result,
};

/// Separates the donor's table name from its primary key value in a
/// synthesized identifier, e.g. `cat.42`.
pub const IDENTIFIER_DELIMITER: &str = ".";

/// One branch of the union: the rows contributed by a single donor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    /// Donor table the rows come from
    pub from: Name,

    /// Globally unique identifier column
    pub identifier: SyntheticId,

    /// Output columns, in declaration order
    pub columns: Vec<ColumnAlias>,
}

/// `<prefix> || cast(<column> as text)`, aliased to the composite identifier.
///
/// Prefixing with the donor's table keeps identifiers from different donors
/// apart without coordinating their key spaces. The result is an opaque
/// string, not a reusable numeric key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticId {
    /// Literal text prepended to the key, `<table><delimiter>`
    pub prefix: String,

    /// Donor primary key column
    pub column: Ident,

    /// Output name of the identifier
    pub alias: Ident,
}

impl Select {
    /// Builds the branch selecting `decl`'s output columns from `donor`.
    ///
    /// Each output field reads the donor field renamed to it, or the donor
    /// field of the same name when no rename exists. A donor with neither
    /// fails the whole compilation.
    pub fn from_donor(decl: &CompositeDeclaration, donor: &Donor) -> Result<Select> {
        let columns = decl
            .fields()
            .iter()
            .map(|output| {
                let source = decl
                    .field_map()
                    .source_name(&donor.id, output)
                    .unwrap_or(output);

                let field = donor
                    .field(source)
                    .ok_or_else(|| Error::unknown_output_field(decl.key(), output, &donor.id))?;

                Ok(ColumnAlias {
                    column: Ident::from(&field.column),
                    alias: Ident::from(output),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Select {
            from: Name::from(&donor.table),
            identifier: SyntheticId {
                prefix: format!("{}{IDENTIFIER_DELIMITER}", donor.table),
                column: Ident::from(&donor.primary_key().column),
                alias: Ident::from(decl.identifier()),
            },
            columns,
        })
    }
}
