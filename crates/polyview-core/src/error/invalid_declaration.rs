use super::Error;

/// Error when a donor or composite declaration is malformed.
///
/// This occurs when:
/// - An output field is listed twice or collides with the synthesized identifier
/// - A donor is listed twice in one declaration
/// - A donor's primary key is not one of its fields
/// - A composite entity is registered twice
#[derive(Debug)]
pub(super) struct InvalidDeclarationError {
    message: Box<str>,
}

impl std::error::Error for InvalidDeclarationError {}

impl core::fmt::Display for InvalidDeclarationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid declaration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid declaration error.
    pub fn invalid_declaration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDeclaration(
            InvalidDeclarationError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid declaration error.
    pub fn is_invalid_declaration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDeclaration(_))
    }
}
