use super::Error;

/// Error when `SHOW CREATE TABLE` echoes a different table than requested.
#[derive(Debug)]
pub(super) struct UnexpectedTableError {
    requested: Box<str>,
    returned: Box<str>,
}

impl std::error::Error for UnexpectedTableError {}

impl core::fmt::Display for UnexpectedTableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unexpected table: requested `{}`, source returned `{}`",
            self.requested, self.returned
        )
    }
}

impl Error {
    /// Creates an unexpected table error.
    pub fn unexpected_table(requested: impl Into<String>, returned: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnexpectedTable(UnexpectedTableError {
            requested: requested.into().into(),
            returned: returned.into().into(),
        }))
    }

    /// Returns `true` if this error is an unexpected table error.
    pub fn is_unexpected_table(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnexpectedTable(_))
    }
}
