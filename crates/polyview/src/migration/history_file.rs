use super::{Migration, MigrationGraph};

use polyview_core::{bail, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const HISTORY_FILE_VERSION: u32 = 1;

/// History file containing every recorded composite migration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFile {
    /// History file format version
    version: u32,

    /// Migration history
    #[serde(default)]
    migrations: Vec<Migration>,
}

impl HistoryFile {
    /// Create a new empty history file
    pub fn new() -> Self {
        Self {
            version: HISTORY_FILE_VERSION,
            migrations: Vec::new(),
        }
    }

    /// Load a history file from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        contents.parse()
    }

    /// Save the history file to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(anyhow::Error::from)?;
        std::fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// Loads the history file, or returns an empty one if it does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }

    /// Remove the newest migration, returning it
    pub fn pop_migration(&mut self) -> Option<Migration> {
        self.migrations.pop()
    }
}

impl MigrationGraph for HistoryFile {
    fn migrations(&self) -> &[Migration] {
        &self.migrations
    }

    fn record(&mut self, migration: Migration) -> Result<()> {
        if self.migrations.iter().any(|m| m.name == migration.name) {
            bail!("migration `{}` is already recorded", migration.name);
        }

        self.migrations.push(migration);
        Ok(())
    }
}

impl Default for HistoryFile {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for HistoryFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: HistoryFile = toml::from_str(s).map_err(anyhow::Error::from)?;

        if file.version != HISTORY_FILE_VERSION {
            return Err(Error::invalid_declaration(format!(
                "unsupported history file version: {}. Expected version {}",
                file.version, HISTORY_FILE_VERSION
            )));
        }

        Ok(file)
    }
}

impl fmt::Display for HistoryFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml_str = toml::to_string_pretty(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml_str)
    }
}
