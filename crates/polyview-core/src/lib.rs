pub mod driver;
pub use driver::Executor;

mod error;
pub use error::{Error, IntoError};

pub mod schema;

/// A Result type alias that uses polyview's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
