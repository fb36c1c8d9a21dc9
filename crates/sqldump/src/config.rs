use crate::{Error, Result, ValueEncoding};

use jiff::Zoned;
use std::path::{Path, PathBuf};

/// File extension of every dump written by [`Dumper::dump`](crate::Dumper::dump).
pub const DUMP_EXTENSION: &str = "sql";

/// Configuration for dump operations
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Directory the dump file is created in
    pub dir: PathBuf,

    /// `strftime` format used to derive the dump file name from the current
    /// time (e.g. `%Y%m%d%H%M%S` produces `20240112153045.sql`)
    pub name_format: String,

    /// How column values are turned into SQL literals
    pub encoding: ValueEncoding,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            name_format: "%Y%m%d%H%M%S".to_string(),
            encoding: ValueEncoding::default(),
        }
    }
}

impl DumpConfig {
    /// Create a new DumpConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Set the file name format
    pub fn name_format(mut self, format: impl Into<String>) -> Self {
        self.name_format = format.into();
        self
    }

    /// Set the value encoding
    pub fn encoding(mut self, encoding: ValueEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn get_dir(&self) -> &Path {
        &self.dir
    }

    /// Derives the path of the dump taken at `now`.
    pub fn dump_path(&self, now: &Zoned) -> Result<PathBuf> {
        let name = jiff::fmt::strtime::format(&self.name_format, now).map_err(|err| {
            Error::invalid_config(format!(
                "cannot format dump name with `{}`: {err}",
                self.name_format
            ))
        })?;

        if name.is_empty() {
            return Err(Error::invalid_config("dump name format produced an empty name"));
        }

        Ok(self.dir.join(format!("{name}.{DUMP_EXTENSION}")))
    }
}
