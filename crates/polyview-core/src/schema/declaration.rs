use super::{Donor, DonorId, DonorResolver, EntityKey, FieldMap, FieldMapEntry, RenameSpec};
use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::Arc};

/// Output name of the synthesized identifier unless configured otherwise.
pub const DEFAULT_IDENTIFIER: &str = "id";

/// A read-only composite entity: the union of rows of several donors.
///
/// Immutable once built. Changing donors or renames means declaring a new
/// composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDeclaration {
    key: EntityKey,

    /// Physical name of the view
    table: String,

    /// Output name of the synthesized identifier column, which is also the
    /// composite's primary key
    identifier: String,

    /// Donors, in union order
    donors: Vec<Arc<Donor>>,

    /// Output fields, excluding the identifier
    fields: Vec<String>,

    field_map: FieldMap,
}

#[derive(Debug)]
pub struct DeclarationBuilder {
    key: EntityKey,
    table: Option<String>,
    identifier: Option<String>,
    donors: Vec<Arc<Donor>>,
    fields: Vec<String>,
    renames: RenameSpec,
}

/// Portable form of a [`CompositeDeclaration`].
///
/// Donors are referenced by identifier so the definition can be stored in
/// migration history and rebuilt later against a different model graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationDef {
    /// Physical name of the view
    pub table: String,

    pub identifier: String,

    pub fields: Vec<String>,

    pub key: EntityKey,

    pub donors: Vec<DonorId>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub renames: Vec<FieldMapEntry>,
}

impl CompositeDeclaration {
    pub fn builder(key: EntityKey) -> DeclarationBuilder {
        DeclarationBuilder {
            key,
            table: None,
            identifier: None,
            donors: vec![],
            fields: vec![],
            renames: RenameSpec::new(),
        }
    }

    /// Rebuilds a declaration from its portable form.
    pub fn from_def(def: &DeclarationDef, resolver: &dyn DonorResolver) -> Result<Self> {
        let donors = def
            .donors
            .iter()
            .map(|id| resolver.resolve(id).ok_or_else(|| Error::unresolved_donor(id)))
            .collect::<Result<Vec<_>>>()?;

        let field_map = FieldMap::deserialize(&def.renames, resolver)?;

        Self::new(
            def.key.clone(),
            def.table.clone(),
            def.identifier.clone(),
            donors,
            def.fields.clone(),
            field_map,
        )
    }

    fn new(
        key: EntityKey,
        table: String,
        identifier: String,
        donors: Vec<Arc<Donor>>,
        fields: Vec<String>,
        field_map: FieldMap,
    ) -> Result<Self> {
        let declaration = Self {
            key,
            table,
            identifier,
            donors,
            fields,
            field_map,
        };
        declaration.verify()?;
        Ok(declaration)
    }

    fn verify(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for donor in &self.donors {
            if !seen.insert(&donor.id) {
                return Err(self.invalid(format!("donor `{}` is listed twice", donor.id)));
            }
        }

        for donor in self.field_map.donors() {
            if !seen.contains(donor) {
                return Err(Error::unresolved_donor(donor).context(self.invalid(
                    "renames refer to a donor outside the declaration",
                )));
            }
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if *field == self.identifier {
                return Err(self.invalid(format!(
                    "output field `{field}` collides with the synthesized identifier"
                )));
            }

            if !seen.insert(field.as_str()) {
                return Err(self.invalid(format!("output field `{field}` is declared twice")));
            }
        }

        if let Some(output) = self.field_map.outputs().find(|output| !seen.contains(*output)) {
            return Err(self.invalid(format!("rename targets undeclared output field `{output}`")));
        }

        Ok(())
    }

    fn invalid(&self, message: impl core::fmt::Display) -> Error {
        Error::invalid_declaration(format!("composite `{}`: {message}", self.key))
    }

    pub fn key(&self) -> &EntityKey {
        &self.key
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn donors(&self) -> &[Arc<Donor>] {
        &self.donors
    }

    pub fn donor(&self, id: &DonorId) -> Option<&Arc<Donor>> {
        self.donors.iter().find(|donor| donor.id == *id)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn field_map(&self) -> &FieldMap {
        &self.field_map
    }

    /// Converts the declaration to its portable form.
    pub fn to_def(&self) -> DeclarationDef {
        DeclarationDef {
            table: self.table.clone(),
            identifier: self.identifier.clone(),
            fields: self.fields.clone(),
            key: self.key.clone(),
            donors: self.donors.iter().map(|donor| donor.id.clone()).collect(),
            renames: self.field_map.serialize(),
        }
    }
}

impl DeclarationBuilder {
    /// Sets the physical view name. Defaults to `<namespace>_<name>`,
    /// lower-cased.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the output name of the synthesized identifier. Defaults to `id`.
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Appends a donor. Union order follows the order donors are added in.
    pub fn donor(mut self, donor: Arc<Donor>) -> Self {
        self.donors.push(donor);
        self
    }

    /// Appends an output field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declares that `donor` exposes its field `source` as `output`.
    pub fn rename(mut self, output: &str, donor: &DonorId, source: &str) -> Self {
        self.renames.rename(output, donor, source);
        self
    }

    /// Replaces the accumulated renames with `renames`.
    pub fn renames(mut self, renames: RenameSpec) -> Self {
        self.renames = renames;
        self
    }

    pub fn build(self) -> Result<CompositeDeclaration> {
        let field_map = FieldMap::build(&self.renames, &self.donors)?;
        let table = self
            .table
            .unwrap_or_else(|| self.key.default_table_name());
        let identifier = self
            .identifier
            .unwrap_or_else(|| DEFAULT_IDENTIFIER.to_string());

        CompositeDeclaration::new(
            self.key,
            table,
            identifier,
            self.donors,
            self.fields,
            field_map,
        )
    }
}
