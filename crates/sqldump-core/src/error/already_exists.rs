use super::Error;

/// Error when the derived dump destination is already taken.
///
/// Raised before any query runs against the source. The caller has to pick a
/// different destination; the dump is never retried.
#[derive(Debug)]
pub(super) struct AlreadyExistsError {
    path: Box<str>,
}

impl std::error::Error for AlreadyExistsError {}

impl core::fmt::Display for AlreadyExistsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "dump already exists: {}", self.path)
    }
}

impl Error {
    /// Creates an already exists error for the given destination.
    pub fn already_exists(path: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AlreadyExists(AlreadyExistsError {
            path: path.into().into(),
        }))
    }

    /// Returns `true` if this error is an already exists error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::AlreadyExists(_))
    }
}
