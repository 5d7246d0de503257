use polyview_core::{
    driver::Flavor,
    schema::{CompositeDeclaration, Donor, DonorField, DonorId, EntityKey},
};
use polyview_sql::{stmt::DropView, Serializer, Statement, ViewCompiler};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn make_pet() -> CompositeDeclaration {
    let cat = Arc::new(
        Donor::new(
            DonorId::new("pets", "cat"),
            "cat",
            vec![DonorField::new("id"), DonorField::new("name")],
            "id",
        )
        .unwrap(),
    );

    CompositeDeclaration::builder(EntityKey::new("pets", "Pet"))
        .donor(cat)
        .field("name")
        .build()
        .unwrap()
}

#[test]
fn drop_view_per_flavor() {
    let pet = make_pet();

    assert_eq!(
        ViewCompiler::new(Flavor::Postgresql).compile_drop(&pet),
        "DROP VIEW IF EXISTS \"pets_pet\";"
    );
    assert_eq!(
        ViewCompiler::new(Flavor::Sqlite).compile_drop(&pet),
        "DROP VIEW IF EXISTS \"pets_pet\";"
    );
    assert_eq!(
        ViewCompiler::new(Flavor::Mysql).compile_drop(&pet),
        "DROP VIEW IF EXISTS `pets_pet`;"
    );
}

#[test]
fn drop_does_not_need_donors() {
    let decl = CompositeDeclaration::builder(EntityKey::new("pets", "Ghost"))
        .build()
        .unwrap();

    assert_eq!(
        ViewCompiler::new(Flavor::Postgresql).compile_drop(&decl),
        "DROP VIEW IF EXISTS \"pets_ghost\";"
    );
}

#[test]
fn drop_view_without_if_exists() {
    let stmt: Statement = DropView {
        name: "pets_pet".into(),
        if_exists: false,
    }
    .into();

    assert!(stmt.is_drop_view());
    assert_eq!(stmt.view_name().to_string(), "pets_pet");
    assert_eq!(
        Serializer::postgresql().serialize(&stmt),
        "DROP VIEW \"pets_pet\";"
    );
}

#[test]
fn qualified_view_name() {
    let stmt: Statement = DropView {
        name: polyview_sql::stmt::Name(vec!["analytics".into(), "pet".into()]),
        if_exists: true,
    }
    .into();

    assert_eq!(
        Serializer::mysql().serialize(&stmt),
        "DROP VIEW IF EXISTS `analytics`.`pet`;"
    );
}
