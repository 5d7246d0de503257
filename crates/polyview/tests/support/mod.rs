#![allow(dead_code)]

use polyview::{
    driver::{Executor, Flavor},
    schema::{CompositeDeclaration, Donor, DonorField, DonorId, DonorSet, EntityKey, Registry},
    Error, Result,
};
use std::sync::{Arc, Mutex, Once};

/// Statements executed against a [`RecordingExecutor`], shared with the test
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    statements: Arc<Mutex<Vec<String>>>,
}

impl ExecLog {
    pub fn len(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.lock().unwrap().is_empty()
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.statements.lock().unwrap().clear();
    }
}

/// An executor that records statements instead of running them
#[derive(Debug)]
pub struct RecordingExecutor {
    database: String,
    flavor: Flavor,
    log: ExecLog,

    /// When set, every execution fails with this message
    fail_with: Option<String>,
}

impl RecordingExecutor {
    pub fn new(database: &str, flavor: Flavor) -> (Self, ExecLog) {
        let log = ExecLog::default();
        let executor = Self {
            database: database.to_string(),
            flavor,
            log: log.clone(),
            fail_with: None,
        };
        (executor, log)
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }
}

impl Executor for RecordingExecutor {
    fn database(&self) -> &str {
        &self.database
    }

    fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn execute(&mut self, statements: &[String]) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(Error::execution_failure(std::io::Error::other(
                message.clone(),
            )));
        }

        self.log
            .statements
            .lock()
            .unwrap()
            .extend(statements.iter().cloned());
        Ok(())
    }
}

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn make_donor(name: &str, fields: &[&str]) -> Donor {
    Donor::new(
        DonorId::new("pets", name),
        name,
        fields.iter().map(|field| DonorField::new(*field)).collect(),
        "id",
    )
    .unwrap()
}

/// The cat and dog donors.
pub fn make_donors() -> DonorSet {
    let mut donors = DonorSet::new();
    donors.insert(make_donor(
        "cat",
        &["id", "name", "meow_volume", "coat_type"],
    ));
    donors.insert(make_donor(
        "dog",
        &["id", "name", "bark_volume", "coat_description"],
    ));
    donors.insert(make_donor("parrot", &["id", "name"]));
    donors
}

pub fn cat() -> DonorId {
    DonorId::new("pets", "cat")
}

pub fn dog() -> DonorId {
    DonorId::new("pets", "dog")
}

pub fn parrot() -> DonorId {
    DonorId::new("pets", "parrot")
}

/// `pets.Pet`: cats and dogs with their volume and coat renamed.
pub fn make_pet(donors: &DonorSet) -> CompositeDeclaration {
    CompositeDeclaration::builder(EntityKey::new("pets", "Pet"))
        .donor(donors.get(&cat()).unwrap().clone())
        .donor(donors.get(&dog()).unwrap().clone())
        .fields(["name", "volume", "coat"])
        .rename("volume", &cat(), "meow_volume")
        .rename("volume", &dog(), "bark_volume")
        .rename("coat", &cat(), "coat_type")
        .rename("coat", &dog(), "coat_description")
        .build()
        .unwrap()
}

/// A composite over `donors` exposing only `name`.
pub fn make_named(donors: &DonorSet, name: &str, ids: &[DonorId]) -> CompositeDeclaration {
    let mut builder = CompositeDeclaration::builder(EntityKey::new("pets", name)).field("name");
    for id in ids {
        builder = builder.donor(donors.get(id).unwrap().clone());
    }
    builder.build().unwrap()
}

pub fn make_registry(declarations: impl IntoIterator<Item = CompositeDeclaration>) -> Registry {
    Registry::from_declarations(declarations).unwrap()
}
