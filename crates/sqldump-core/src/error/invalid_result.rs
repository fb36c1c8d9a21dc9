use super::Error;

/// Error when a query result has an unexpected structure.
///
/// This occurs when:
/// - A scalar query returns no rows
/// - `SHOW CREATE TABLE` returns fewer than two columns
/// - A table listing row carries no table name
///
/// The source answered the query, but the shape of the answer doesn't match
/// what the dump expected.
#[derive(Debug)]
pub(super) struct InvalidResult {
    message: Box<str>,
}

impl std::error::Error for InvalidResult {}

impl core::fmt::Display for InvalidResult {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResult {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidResult(_))
    }
}
