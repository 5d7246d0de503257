mod flavor;
pub use flavor::Flavor;

mod routing;
pub use routing::RoutingHint;

use crate::Result;

use std::fmt::Debug;

/// Executes data-definition statements against a backing store.
///
/// polyview never retries or rolls back: a failed statement is reported
/// through [`Error::execution_failure`](crate::Error::execution_failure) and
/// the caller decides what happens next.
pub trait Executor: Debug {
    /// Alias of the database this executor talks to.
    fn database(&self) -> &str;

    /// SQL dialect spoken by the store.
    fn flavor(&self) -> Flavor;

    /// Execute `statements` in order, stopping at the first failure.
    fn execute(&mut self, statements: &[String]) -> Result<()>;

    /// Whether an operation carrying `hint` applies to this store.
    fn allows(&self, hint: &RoutingHint) -> bool {
        hint.applies_to(self.database())
    }
}
