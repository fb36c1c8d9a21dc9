use super::Error;

/// Error when a full-table selection reports no columns.
///
/// A table with columns but no rows is fine; a table with no columns at all is
/// treated as a malformed schema.
#[derive(Debug)]
pub(super) struct NoColumnsError {
    table: Box<str>,
}

impl std::error::Error for NoColumnsError {}

impl core::fmt::Display for NoColumnsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no columns in table {}", self.table)
    }
}

impl Error {
    /// Creates a no columns error for the given table.
    pub fn no_columns(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoColumns(NoColumnsError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a no columns error.
    pub fn is_no_columns(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::NoColumns(_))
    }
}
