mod support;

use polyview::{
    schema::{EntityKey, Registry},
    DeclarationsDiff, DeclarationsDiffItem,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use support::*;

fn keys<'a>(
    decls: impl Iterator<Item = &'a polyview::schema::CompositeDeclaration>,
) -> Vec<String> {
    decls.map(|decl| decl.key().to_string()).collect()
}

#[test]
fn no_change_is_empty() {
    let donors = make_donors();
    let previous = make_registry([make_pet(&donors)]);
    let current = make_registry([make_pet(&donors)]);

    let diff = DeclarationsDiff::from(&previous, &current);
    assert!(diff.is_empty());
    assert_eq!(diff.to_create().count(), 0);
    assert_eq!(diff.to_remove().count(), 0);
}

#[test]
fn create_from_nothing() {
    let donors = make_donors();
    let previous = Registry::new();
    let current = make_registry([make_pet(&donors)]);

    let diff = DeclarationsDiff::from(&previous, &current);
    assert_eq!(keys(diff.to_create()), ["pets.Pet"]);
    assert_eq!(diff.to_remove().count(), 0);
}

#[test]
fn drops_come_first_and_orders_are_stable() {
    let donors = make_donors();
    let previous = make_registry([
        make_named(&donors, "A", &[cat()]),
        make_named(&donors, "B", &[dog()]),
        make_named(&donors, "C", &[parrot()]),
    ]);
    let current = make_registry([
        make_named(&donors, "E", &[cat(), dog()]),
        make_named(&donors, "B", &[dog()]),
        make_named(&donors, "D", &[parrot()]),
    ]);

    let diff = DeclarationsDiff::from(&previous, &current);
    let items: Vec<_> = diff
        .items()
        .iter()
        .map(|item| match item {
            DeclarationsDiffItem::DropComposite(decl) => format!("drop {}", decl.key()),
            DeclarationsDiffItem::CreateComposite(decl) => format!("create {}", decl.key()),
        })
        .collect();

    assert_eq!(
        items,
        ["drop pets.A", "drop pets.C", "create pets.E", "create pets.D"]
    );
}

#[test]
fn set_properties() {
    let donors = make_donors();
    let names = ["A", "B", "C", "D", "E", "F"];

    // Every split of the names into (previous, current) membership.
    for mask in 0u32..(1 << (2 * names.len())) {
        let in_previous = |i: usize| mask & (1 << i) != 0;
        let in_current = |i: usize| mask & (1 << (i + names.len())) != 0;

        let previous = make_registry(
            (0..names.len())
                .filter(|i| in_previous(*i))
                .map(|i| make_named(&donors, names[i], &[cat()])),
        );
        let current = make_registry(
            (0..names.len())
                .filter(|i| in_current(*i))
                .map(|i| make_named(&donors, names[i], &[cat()])),
        );

        let diff = DeclarationsDiff::from(&previous, &current);
        let create: BTreeSet<_> = diff.to_create().map(|d| d.key().clone()).collect();
        let remove: BTreeSet<_> = diff.to_remove().map(|d| d.key().clone()).collect();

        let expected_create: BTreeSet<_> = (0..names.len())
            .filter(|i| in_current(*i) && !in_previous(*i))
            .map(|i| EntityKey::new("pets", names[i]))
            .collect();
        let expected_remove: BTreeSet<_> = (0..names.len())
            .filter(|i| in_previous(*i) && !in_current(*i))
            .map(|i| EntityKey::new("pets", names[i]))
            .collect();

        assert!(create.is_disjoint(&remove));
        assert_eq!(create, expected_create);
        assert_eq!(remove, expected_remove);
        assert_eq!(diff.len(), create.len() + remove.len());
    }
}

#[test]
fn identity_is_by_key_only() {
    let donors = make_donors();

    // Same key, different donors: not detected.
    let previous = make_registry([make_named(&donors, "Pet", &[cat()])]);
    let current = make_registry([make_named(&donors, "Pet", &[cat(), dog(), parrot()])]);

    assert!(DeclarationsDiff::from(&previous, &current).is_empty());
}

#[test]
fn into_iter_yields_items() {
    let donors = make_donors();
    let previous = Registry::new();
    let current = make_registry([make_pet(&donors)]);

    let items: Vec<_> = DeclarationsDiff::from(&previous, &current)
        .into_iter()
        .collect();
    assert!(matches!(
        items.as_slice(),
        [DeclarationsDiffItem::CreateComposite(decl)] if decl.key().to_string() == "pets.Pet"
    ));
}
