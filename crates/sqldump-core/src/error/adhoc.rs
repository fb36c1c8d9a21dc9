use super::Error;

/// Free-form error built from a format string.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an ad-hoc error from format arguments.
    ///
    /// Prefer the [`err!`](crate::err) and [`bail!`](crate::bail) macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message = match args.as_str() {
            Some(s) => s.into(),
            None => args.to_string().into(),
        };
        Error::from(super::ErrorKind::Adhoc(AdhocError { message }))
    }
}
