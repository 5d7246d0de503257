use super::{CompositeDeclaration, EntityKey};
use crate::{Error, Result};

use indexmap::IndexMap;

/// The composite entities currently declared by the application.
///
/// Built once per planning run by enumerating every namespace's
/// declarations, then handed to the planner read-only.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    declarations: IndexMap<EntityKey, CompositeDeclaration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration. Each key, and each view name, may only be
    /// registered once.
    pub fn register(&mut self, declaration: CompositeDeclaration) -> Result<()> {
        if self.declarations.contains_key(declaration.key()) {
            return Err(Error::invalid_declaration(format!(
                "composite `{}` is registered twice",
                declaration.key()
            )));
        }

        if let Some(existing) = self.iter().find(|d| d.table() == declaration.table()) {
            return Err(Error::invalid_declaration(format!(
                "composite `{}` uses view `{}`, already used by `{}`",
                declaration.key(),
                declaration.table(),
                existing.key()
            )));
        }

        self.declarations.insert(declaration.key().clone(), declaration);
        Ok(())
    }

    /// Builds a registry from an enumeration of declarations.
    pub fn from_declarations(
        declarations: impl IntoIterator<Item = CompositeDeclaration>,
    ) -> Result<Registry> {
        let mut registry = Registry::new();
        for declaration in declarations {
            registry.register(declaration)?;
        }
        Ok(registry)
    }

    pub fn get(&self, key: &EntityKey) -> Option<&CompositeDeclaration> {
        self.declarations.get(key)
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.declarations.contains_key(key)
    }

    /// Declarations in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CompositeDeclaration> + '_ {
        self.declarations.values()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Whether the host migration autodetector should handle the entity
    /// itself. Composite entities are managed through composite operations,
    /// so this is `false` for every registered key.
    pub fn requires_autodetection(&self, key: &EntityKey) -> bool {
        !self.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DeclarationBuilder, Donor, DonorField, DonorId};
    use std::sync::Arc;

    fn make_declaration(name: &str) -> CompositeDeclaration {
        make_builder(name).build().unwrap()
    }

    fn make_builder(name: &str) -> DeclarationBuilder {
        let donor = Arc::new(
            Donor::new(
                DonorId::new("pets", "cat"),
                "cat",
                vec![DonorField::new("id"), DonorField::new("name")],
                "id",
            )
            .unwrap(),
        );

        CompositeDeclaration::builder(EntityKey::new("pets", name))
            .donor(donor)
            .field("name")
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = Registry::new();
        registry.register(make_declaration("Pet")).unwrap();
        registry.register(make_declaration("Animal")).unwrap();

        let names: Vec<_> = registry.iter().map(|decl| decl.key().name.as_str()).collect();
        assert_eq!(names, ["Pet", "Animal"]);

        let pet = EntityKey::new("pets", "Pet");
        assert!(registry.get(&pet).is_some());
        assert!(!registry.requires_autodetection(&pet));
        assert!(registry.requires_autodetection(&EntityKey::new("pets", "Cat")));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let registry =
            Registry::from_declarations([make_declaration("Pet"), make_declaration("Pet")]);

        let err = registry.unwrap_err();
        assert!(err.is_invalid_declaration());
        assert_eq!(
            err.to_string(),
            "invalid declaration: composite `pets.Pet` is registered twice"
        );
    }

    #[test]
    fn keys_differing_only_in_case_share_a_view() {
        let err = Registry::from_declarations([make_declaration("Pet"), make_declaration("pet")])
            .unwrap_err();

        assert!(err.is_invalid_declaration());
        assert_eq!(
            err.to_string(),
            "invalid declaration: composite `pets.pet` uses view `pets_pet`, already used by `pets.Pet`"
        );
    }

    #[test]
    fn explicit_view_name_must_be_unique() {
        let mut registry = Registry::new();
        registry
            .register(make_builder("Pet").table("animals").build().unwrap())
            .unwrap();

        let err = registry
            .register(make_builder("Animal").table("animals").build().unwrap())
            .unwrap_err();
        assert!(err.is_invalid_declaration());
        assert_eq!(registry.len(), 1);

        registry
            .register(make_builder("Animal").table("all_animals").build().unwrap())
            .unwrap();
        assert_eq!(registry.len(), 2);
    }
}
