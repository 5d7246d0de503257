use super::Error;
use crate::schema::EntityKey;

#[derive(Debug)]
pub(super) struct EmptyDonorListError {
    entity: EntityKey,
}

impl std::error::Error for EmptyDonorListError {}

impl core::fmt::Display for EmptyDonorListError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "empty donor list: composite `{}` declares no donors",
            self.entity
        )
    }
}

impl Error {
    /// Creates an empty donor list error.
    pub fn empty_donor_list(entity: &EntityKey) -> Error {
        Error::from(super::ErrorKind::EmptyDonorList(EmptyDonorListError {
            entity: entity.clone(),
        }))
    }

    /// Returns `true` if this error is an empty donor list error.
    pub fn is_empty_donor_list(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyDonorList(_))
    }
}
