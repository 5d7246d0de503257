use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Portable identity of a donor relation.
///
/// This is what gets persisted in migration history instead of a live
/// [`Donor`], so that history can be replayed against whatever model graph
/// exists at apply time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DonorId {
    /// Namespace the donor is declared in (an application label).
    pub namespace: String,

    /// Name of the donor within its namespace.
    pub name: String,
}

/// A relation contributing rows to one or more composite views.
///
/// Owned by the external model system. polyview only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    /// Uniquely identifies the donor
    pub id: DonorId,

    /// Physical name of the table backing the donor
    pub table: String,

    /// The donor's fields, in declaration order
    fields: Vec<DonorField>,

    /// Index into `fields` of the primary key. Checked once in `Donor::new`;
    /// `fields` is never modified afterwards.
    primary_key: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorField {
    /// Name of the field in the application model.
    pub name: String,

    /// Name of the column in the database.
    pub column: String,
}

impl DonorId {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

impl Donor {
    /// Creates a donor, failing if `primary_key` is not one of `fields`.
    pub fn new(
        id: DonorId,
        table: impl Into<String>,
        fields: Vec<DonorField>,
        primary_key: &str,
    ) -> Result<Self> {
        let Some(primary_key) = fields.iter().position(|field| field.name == primary_key) else {
            return Err(Error::invalid_declaration(format!(
                "primary key `{primary_key}` is not a field of donor `{id}`"
            )));
        };

        Ok(Self {
            id,
            table: table.into(),
            fields,
            primary_key,
        })
    }

    pub fn fields(&self) -> &[DonorField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&DonorField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn primary_key(&self) -> &DonorField {
        &self.fields[self.primary_key]
    }
}

impl DonorField {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            column: name.clone(),
            name,
        }
    }

    /// A field stored under a column name different from the field name.
    pub fn with_column(name: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
        }
    }
}

impl From<&str> for DonorField {
    fn from(value: &str) -> Self {
        DonorField::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primary_key_must_be_a_field() {
        let err = Donor::new(
            DonorId::new("pets", "cat"),
            "cat",
            vec!["name".into()],
            "id",
        )
        .unwrap_err();

        assert!(err.is_invalid_declaration());
        assert_eq!(
            err.to_string(),
            "invalid declaration: primary key `id` is not a field of donor `pets.cat`"
        );
    }

    #[test]
    fn field_lookup_uses_field_names() {
        let donor = Donor::new(
            DonorId::new("pets", "cat"),
            "pets_cat",
            vec![DonorField::with_column("id", "cat_id"), "name".into()],
            "id",
        )
        .unwrap();

        assert_eq!(donor.primary_key().column, "cat_id");
        assert!(donor.has_field("name"));
        assert!(!donor.has_field("cat_id"));
        assert_eq!(donor.id.to_string(), "pets.cat");
    }

    #[test]
    fn primary_key_is_fixed_at_construction() {
        let donor = Donor::new(
            DonorId::new("pets", "cat"),
            "cat",
            vec!["name".into(), "id".into(), "coat".into()],
            "id",
        )
        .unwrap();

        let names: Vec<_> = donor.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["name", "id", "coat"]);
        assert_eq!(donor.primary_key().name, "id");

        // Clones share the checked layout.
        let copy = donor.clone();
        assert_eq!(copy.primary_key(), donor.primary_key());
        assert_eq!(copy.fields(), donor.fields());
    }
}
