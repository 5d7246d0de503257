use super::Error;
use crate::schema::{DonorId, EntityKey};

/// Error when an output field cannot be sourced from one of the donors.
///
/// Every donor must either rename one of its fields to the output name or
/// carry a field of the same name. Partial coverage is never null-filled.
#[derive(Debug)]
pub(super) struct UnknownOutputFieldError {
    entity: EntityKey,
    field: Box<str>,
    donor: DonorId,
}

impl std::error::Error for UnknownOutputFieldError {}

impl core::fmt::Display for UnknownOutputFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown output field: `{}` of composite `{}` has no source on donor `{}`",
            self.field, self.entity, self.donor
        )
    }
}

impl Error {
    /// Creates an unknown output field error.
    pub fn unknown_output_field(
        entity: &EntityKey,
        field: impl Into<String>,
        donor: &DonorId,
    ) -> Error {
        Error::from(super::ErrorKind::UnknownOutputField(
            UnknownOutputFieldError {
                entity: entity.clone(),
                field: field.into().into(),
                donor: donor.clone(),
            },
        ))
    }

    /// Returns `true` if this error is an unknown output field error.
    pub fn is_unknown_output_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownOutputField(_))
    }
}
