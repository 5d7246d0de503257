use super::{Donor, DonorId, DonorResolver};
use crate::{Error, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};

/// Raw rename input as written by application code: for each output field,
/// which field of which donor feeds it.
///
/// Entries are kept as written. Validation happens when the renames are turned
/// into a [`FieldMap`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameSpec {
    entries: Vec<RenameEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RenameEntry {
    output: String,
    donor: DonorId,
    source: String,
}

/// Bidirectional mapping between donor-local fields and the shared output
/// fields of one composite declaration.
///
/// A donor/output pair that is absent from the map means the donor exposes
/// the output field under the same name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldMap {
    /// output -> donor -> source. Sorted by output name; donors keep the
    /// declaration order.
    by_output: BTreeMap<String, IndexMap<DonorId, String>>,

    /// donor -> source -> output
    by_source: IndexMap<DonorId, IndexMap<String, String>>,
}

/// Serialized form of one output field of a [`FieldMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapEntry {
    /// The composite-level field name
    pub output: String,

    /// Donor fields renamed to `output`, in donor declaration order
    pub sources: Vec<FieldSource>,
}

/// A `(namespace, donor, field)` triple referring to one donor-local field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSource {
    pub namespace: String,
    pub donor: String,
    pub field: String,
}

impl RenameSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `donor` exposes its field `source` as `output`.
    pub fn rename(
        &mut self,
        output: impl Into<String>,
        donor: &DonorId,
        source: impl Into<String>,
    ) -> &mut Self {
        self.entries.push(RenameEntry {
            output: output.into(),
            donor: donor.clone(),
            source: source.into(),
        });
        self
    }

    /// Declares one output field fed by several donors at once, mirroring the
    /// `newname -> {donor -> oldname}` declaration surface.
    pub fn group<'a, I, S>(&mut self, output: &str, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a DonorId, S)>,
        S: Into<String>,
    {
        for (donor, source) in sources {
            self.rename(output, donor, source);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl FieldMap {
    /// Builds a field map from a rename spec.
    ///
    /// `donors` is the declaration's ordered donor list. Every donor named in
    /// the renames must be one of them, and every renamed field must exist on its
    /// donor.
    pub fn build(spec: &RenameSpec, donors: &[Arc<Donor>]) -> Result<FieldMap> {
        if let Some(entry) = spec
            .entries
            .iter()
            .find(|entry| !donors.iter().any(|donor| donor.id == entry.donor))
        {
            return Err(Error::unresolved_donor(&entry.donor).context(crate::err!(
                "rename of `{}` refers to a donor outside the declaration",
                entry.output
            )));
        }

        let mut field_map = FieldMap::default();

        // Insert donor by donor so each output lists its donors in
        // declaration order.
        for donor in donors {
            for entry in spec.entries.iter().filter(|entry| entry.donor == donor.id) {
                field_map.insert(donor, &entry.output, &entry.source)?;
            }
        }

        tracing::debug!(
            outputs = field_map.by_output.len(),
            renames = spec.len(),
            "built field map"
        );

        Ok(field_map)
    }

    /// Reconstructs a field map from its serialized form, resolving donors
    /// through `resolver`.
    ///
    /// The same checks as [`FieldMap::build`] run again, since the live donor
    /// may have changed since the entries were written.
    pub fn deserialize(
        entries: &[FieldMapEntry],
        resolver: &dyn DonorResolver,
    ) -> Result<FieldMap> {
        let mut resolved: IndexMap<DonorId, Arc<Donor>> = IndexMap::new();
        let mut field_map = FieldMap::default();

        for entry in entries {
            for source in &entry.sources {
                let id = source.donor_id();
                let donor = match resolved.get(&id) {
                    Some(donor) => donor.clone(),
                    None => {
                        let donor = resolver
                            .resolve(&id)
                            .ok_or_else(|| Error::unresolved_donor(&id))?;
                        resolved.insert(id, donor.clone());
                        donor
                    }
                };

                field_map.insert(&donor, &entry.output, &source.field)?;
            }
        }

        tracing::debug!(
            outputs = field_map.by_output.len(),
            donors = resolved.len(),
            "deserialized field map"
        );

        Ok(field_map)
    }

    fn insert(&mut self, donor: &Donor, output: &str, source: &str) -> Result<()> {
        if !donor.has_field(source) {
            return Err(Error::invalid_field_reference(&donor.id, source));
        }

        if let Some(existing) = self.source_name(&donor.id, output) {
            if existing != source {
                return Err(Error::ambiguous_output(&donor.id, output, existing, source));
            }
        }

        if let Some(existing) = self.output_name(&donor.id, source) {
            if existing != output {
                return Err(Error::ambiguous_source(&donor.id, source, existing, output));
            }
        }

        self.by_output
            .entry(output.to_string())
            .or_default()
            .insert(donor.id.clone(), source.to_string());

        self.by_source
            .entry(donor.id.clone())
            .or_default()
            .insert(source.to_string(), output.to_string());

        Ok(())
    }

    /// Returns the output name `donor`'s field `source` is renamed to, if an
    /// explicit rename exists.
    pub fn output_name(&self, donor: &DonorId, source: &str) -> Option<&str> {
        self.by_source.get(donor)?.get(source).map(String::as_str)
    }

    /// Returns the field of `donor` renamed to `output`, if an explicit rename
    /// exists.
    pub fn source_name(&self, donor: &DonorId, output: &str) -> Option<&str> {
        self.by_output.get(output)?.get(donor).map(String::as_str)
    }

    /// Donors that carry at least one rename.
    pub fn donors(&self) -> impl Iterator<Item = &DonorId> + '_ {
        self.by_source.keys()
    }

    /// Output names that carry at least one rename, sorted.
    pub fn outputs(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_output.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_output.is_empty()
    }

    /// Number of `(donor, source) -> output` renames.
    pub fn len(&self) -> usize {
        self.by_output.values().map(IndexMap::len).sum()
    }

    /// Serializes the map to portable entries, ordered by output name and then
    /// by donor declaration order.
    pub fn serialize(&self) -> Vec<FieldMapEntry> {
        self.by_output
            .iter()
            .map(|(output, sources)| FieldMapEntry {
                output: output.clone(),
                sources: sources
                    .iter()
                    .map(|(donor, field)| FieldSource {
                        namespace: donor.namespace.clone(),
                        donor: donor.name.clone(),
                        field: field.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl FieldSource {
    pub fn donor_id(&self) -> DonorId {
        DonorId::new(&self.namespace, &self.donor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DonorField, DonorSet};
    use pretty_assertions::assert_eq;

    fn make_donor(name: &str, fields: &[&str]) -> Donor {
        Donor::new(
            DonorId::new("pets", name),
            name,
            fields.iter().map(|field| DonorField::new(*field)).collect(),
            "id",
        )
        .unwrap()
    }

    fn pets() -> (DonorSet, Arc<Donor>, Arc<Donor>) {
        let mut set = DonorSet::new();
        let cat = set.insert(make_donor(
            "cat",
            &["id", "name", "meow_volume", "purr_volume", "coat_type"],
        ));
        let dog = set.insert(make_donor(
            "dog",
            &["id", "name", "bark_volume", "coat_description"],
        ));
        (set, cat, dog)
    }

    fn pet_spec(cat: &Donor, dog: &Donor) -> RenameSpec {
        let mut spec = RenameSpec::new();
        spec.group("volume", [(&cat.id, "meow_volume"), (&dog.id, "bark_volume")])
            .group("coat", [(&cat.id, "coat_type"), (&dog.id, "coat_description")]);
        spec
    }

    #[test]
    fn lookups_in_both_directions() {
        let (_, cat, dog) = pets();
        let map = FieldMap::build(&pet_spec(&cat, &dog), &[cat.clone(), dog.clone()]).unwrap();

        assert_eq!(map.source_name(&cat.id, "volume"), Some("meow_volume"));
        assert_eq!(map.source_name(&dog.id, "coat"), Some("coat_description"));
        assert_eq!(map.output_name(&dog.id, "bark_volume"), Some("volume"));
        assert_eq!(map.output_name(&cat.id, "coat_type"), Some("coat"));

        // Not renamed: identity is implied, not stored.
        assert_eq!(map.source_name(&cat.id, "name"), None);
        assert_eq!(map.output_name(&cat.id, "name"), None);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn unknown_field_fails_construction() {
        let (_, cat, dog) = pets();
        let mut spec = RenameSpec::new();
        spec.rename("volume", &dog.id, "howl_volume");

        let err = FieldMap::build(&spec, &[cat, dog]).unwrap_err();
        assert!(err.is_invalid_field_reference());
    }

    #[test]
    fn two_fields_on_one_output_is_ambiguous() {
        let (_, cat, dog) = pets();
        let mut spec = RenameSpec::new();
        spec.rename("volume", &cat.id, "meow_volume")
            .rename("volume", &cat.id, "purr_volume");

        let err = FieldMap::build(&spec, &[cat, dog]).unwrap_err();
        assert!(err.is_ambiguous_mapping());
        assert_eq!(
            err.to_string(),
            "ambiguous mapping: donor `pets.cat` maps both `meow_volume` and `purr_volume` to `volume`"
        );
    }

    #[test]
    fn one_field_on_two_outputs_is_ambiguous() {
        let (_, cat, dog) = pets();
        let mut spec = RenameSpec::new();
        spec.rename("volume", &cat.id, "meow_volume")
            .rename("loudness", &cat.id, "meow_volume");

        let err = FieldMap::build(&spec, &[cat, dog]).unwrap_err();
        assert!(err.is_ambiguous_mapping());
    }

    #[test]
    fn repeated_rename_is_not_ambiguous() {
        let (_, cat, dog) = pets();
        let mut spec = RenameSpec::new();
        spec.rename("volume", &cat.id, "meow_volume")
            .rename("volume", &cat.id, "meow_volume");

        let map = FieldMap::build(&spec, &[cat, dog]).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn rename_of_foreign_donor_fails() {
        let (_, cat, dog) = pets();
        let mut spec = RenameSpec::new();
        spec.rename("volume", &dog.id, "bark_volume");

        let err = FieldMap::build(&spec, &[cat]).unwrap_err();
        assert!(err.root().is_unresolved_donor());
    }

    #[test]
    fn serialize_orders_by_output_then_donor_order() {
        let (_, cat, dog) = pets();

        // Renames list dog first; declaration lists cat first.
        let mut spec = RenameSpec::new();
        spec.rename("volume", &dog.id, "bark_volume")
            .rename("volume", &cat.id, "meow_volume")
            .rename("coat", &dog.id, "coat_description");

        let map = FieldMap::build(&spec, &[cat, dog]).unwrap();
        let entries = map.serialize();

        let outputs: Vec<_> = entries.iter().map(|entry| entry.output.as_str()).collect();
        assert_eq!(outputs, ["coat", "volume"]);

        let volume: Vec<_> = entries[1]
            .sources
            .iter()
            .map(|source| (source.donor.as_str(), source.field.as_str()))
            .collect();
        assert_eq!(volume, [("cat", "meow_volume"), ("dog", "bark_volume")]);
    }

    #[test]
    fn deserialize_preserves_lookups() {
        let (set, cat, dog) = pets();
        let map = FieldMap::build(&pet_spec(&cat, &dog), &[cat.clone(), dog.clone()]).unwrap();

        let restored = FieldMap::deserialize(&map.serialize(), &set).unwrap();
        assert_eq!(restored, map);
        assert_eq!(restored.serialize(), map.serialize());

        for donor in [&cat, &dog] {
            for field in donor.fields() {
                assert_eq!(
                    restored.output_name(&donor.id, &field.name),
                    map.output_name(&donor.id, &field.name)
                );
            }
            for output in ["volume", "coat", "name"] {
                assert_eq!(
                    restored.source_name(&donor.id, output),
                    map.source_name(&donor.id, output)
                );
            }
        }
    }

    #[test]
    fn deserialize_fails_on_missing_donor() {
        let (mut set, cat, dog) = pets();
        let entries = FieldMap::build(&pet_spec(&cat, &dog), &[cat, dog.clone()])
            .unwrap()
            .serialize();

        set.remove(&dog.id);

        let err = FieldMap::deserialize(&entries, &set).unwrap_err();
        assert!(err.is_unresolved_donor());
        assert_eq!(err.to_string(), "unresolved donor `pets.dog`");
    }
}
