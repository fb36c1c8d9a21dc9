mod error;
pub use error::Error;

pub mod source;
pub use source::{Cursor, Row, Rows, Source};

/// A Result type alias that uses sqldump's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
