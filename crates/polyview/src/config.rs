use polyview_core::{
    driver::Flavor,
    schema::{CompositeDeclaration, DeclarationBuilder, EntityKey, DEFAULT_IDENTIFIER},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Configuration for planning and writing composite migrations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQL dialect migrations are rendered for
    pub flavor: Flavor,

    /// Output name of the synthesized identifier column
    pub identifier: String,

    /// Migration-related configuration
    pub migration: MigrationConfig,
}

/// Configuration for migration operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Path to the migrations folder
    pub migrations_path: PathBuf,

    /// Name of the history file, relative to the migrations folder
    pub history_file: String,

    /// Style of migration name prefixes
    pub prefix_style: MigrationPrefixStyle,

    /// Name given to generated migrations, after the prefix
    pub migration_name: String,
}

/// Style for migration name prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationPrefixStyle {
    /// Sequential numbering (e.g., 0001_, 0002_, 0003_)
    Sequential,

    /// Timestamp-based (e.g., 20240112_153045_)
    Timestamp,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flavor: Flavor::default(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
            migration: MigrationConfig::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        contents.parse()
    }

    /// Loads the config, or returns the defaults if the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if std::fs::exists(&path)? {
            return Self::load(path);
        }
        Ok(Self::default())
    }

    /// Set the migration configuration
    pub fn migration(mut self, migration: MigrationConfig) -> Self {
        self.migration = migration;
        self
    }

    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Starts a declaration using the configured identifier name.
    pub fn declare(&self, key: EntityKey) -> DeclarationBuilder {
        CompositeDeclaration::builder(key).identifier(&self.identifier)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s).map_err(anyhow::Error::from)?)
    }
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            migrations_path: PathBuf::from("migrations"),
            history_file: "history.toml".to_string(),
            prefix_style: MigrationPrefixStyle::Sequential,
            migration_name: "composite".to_string(),
        }
    }
}

impl MigrationConfig {
    /// Create a new MigrationConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the migrations path
    pub fn migrations_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.migrations_path = path.into();
        self
    }

    pub fn history_file(mut self, name: impl Into<String>) -> Self {
        self.history_file = name.into();
        self
    }

    /// Set the migration prefix style
    pub fn prefix_style(mut self, style: MigrationPrefixStyle) -> Self {
        self.prefix_style = style;
        self
    }

    pub fn migration_name(mut self, name: impl Into<String>) -> Self {
        self.migration_name = name.into();
        self
    }

    pub fn get_history_file_path(&self) -> PathBuf {
        self.migrations_path.join(&self.history_file)
    }

    /// Directory the SQL text of generated migrations is written to
    pub fn get_migrations_dir(&self) -> PathBuf {
        self.migrations_path.clone()
    }
}
