mod config;
pub use config::{Config, MigrationConfig, MigrationPrefixStyle};

mod diff;
pub use diff::{DeclarationsDiff, DeclarationsDiffItem};

mod history;
pub use history::HistoricalRecord;

pub mod migration;
pub use migration::{HistoryFile, Migration, MigrationGraph};

mod operation;
pub use operation::{CompositeOperation, OperationKind};

mod planner;
pub use planner::Planner;

pub use polyview_core::{driver, schema, Error, Result};
pub use polyview_sql::ViewCompiler;
