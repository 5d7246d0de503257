use super::Error;
use crate::schema::DonorId;

/// Error when a portable donor identifier does not resolve to a live donor.
#[derive(Debug)]
pub(super) struct UnresolvedDonorError {
    donor: DonorId,
}

impl std::error::Error for UnresolvedDonorError {}

impl core::fmt::Display for UnresolvedDonorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unresolved donor `{}`", self.donor)
    }
}

impl Error {
    /// Creates an unresolved donor error.
    ///
    /// Reconstruction of a declaration from its portable form reports this
    /// when the model graph no longer knows one of the donors.
    pub fn unresolved_donor(donor: &DonorId) -> Error {
        Error::from(super::ErrorKind::UnresolvedDonor(UnresolvedDonorError {
            donor: donor.clone(),
        }))
    }

    /// Returns `true` if this error is an unresolved donor error.
    pub fn is_unresolved_donor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedDonor(_))
    }
}
