use super::Error;

/// Error surfaced by the backing-store executor.
///
/// The wrapped error is kept as-is so callers see exactly what the store
/// reported.
#[derive(Debug)]
pub(super) struct ExecutionFailureError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ExecutionFailureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ExecutionFailureError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a failed statement execution.
    ///
    /// Executors wrap whatever their database client returned with this.
    pub fn execution_failure(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ExecutionFailure(ExecutionFailureError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is an execution failure.
    pub fn is_execution_failure(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExecutionFailure(_))
    }
}
