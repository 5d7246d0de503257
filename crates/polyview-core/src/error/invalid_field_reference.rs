use super::Error;
use crate::schema::DonorId;

/// Error when a rename refers to a field its donor does not declare.
///
/// Raised while a [`FieldMap`](crate::schema::FieldMap) is built or
/// deserialized, never deferred to compilation.
#[derive(Debug)]
pub(super) struct InvalidFieldReferenceError {
    donor: DonorId,
    field: Box<str>,
}

impl std::error::Error for InvalidFieldReferenceError {}

impl core::fmt::Display for InvalidFieldReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid field reference: donor `{}` has no field `{}`",
            self.donor, self.field
        )
    }
}

impl Error {
    /// Creates an invalid field reference error.
    pub fn invalid_field_reference(donor: &DonorId, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidFieldReference(
            InvalidFieldReferenceError {
                donor: donor.clone(),
                field: field.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid field reference error.
    pub fn is_invalid_field_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFieldReference(_))
    }
}
