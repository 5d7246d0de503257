use super::Error;
use crate::schema::DonorId;

/// Error when a rename map would make one union column ambiguous.
///
/// This occurs when:
/// - Two fields of the same donor are renamed to the same output name
/// - One field of a donor is renamed to two different output names
#[derive(Debug)]
pub(super) struct AmbiguousMappingError {
    donor: DonorId,
    kind: Ambiguity,
}

#[derive(Debug)]
enum Ambiguity {
    Output {
        output: Box<str>,
        first: Box<str>,
        second: Box<str>,
    },
    Source {
        source: Box<str>,
        first: Box<str>,
        second: Box<str>,
    },
}

impl std::error::Error for AmbiguousMappingError {}

impl core::fmt::Display for AmbiguousMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            Ambiguity::Output {
                output,
                first,
                second,
            } => write!(
                f,
                "ambiguous mapping: donor `{}` maps both `{}` and `{}` to `{}`",
                self.donor, first, second, output
            ),
            Ambiguity::Source {
                source,
                first,
                second,
            } => write!(
                f,
                "ambiguous mapping: donor `{}` maps `{}` to both `{}` and `{}`",
                self.donor, source, first, second
            ),
        }
    }
}

impl Error {
    /// Creates an ambiguous mapping error for two donor fields that collide on
    /// one output name.
    pub fn ambiguous_output(
        donor: &DonorId,
        output: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::AmbiguousMapping(AmbiguousMappingError {
            donor: donor.clone(),
            kind: Ambiguity::Output {
                output: output.into().into(),
                first: first.into().into(),
                second: second.into().into(),
            },
        }))
    }

    /// Creates an ambiguous mapping error for one donor field that is renamed
    /// to two output names.
    pub fn ambiguous_source(
        donor: &DonorId,
        source: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::AmbiguousMapping(AmbiguousMappingError {
            donor: donor.clone(),
            kind: Ambiguity::Source {
                source: source.into().into(),
                first: first.into().into(),
                second: second.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is an ambiguous mapping error.
    pub fn is_ambiguous_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousMapping(_))
    }
}
