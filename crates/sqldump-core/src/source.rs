mod row;
pub use row::Row;

mod rows;
pub use rows::Rows;

use crate::{async_trait, Error, Result};

use std::fmt::Debug;

/// A connection the dump reads from.
///
/// Every value is handed back as text: the dump never looks at column types,
/// so drivers render numbers, dates and blobs into their textual form before
/// returning them.
#[async_trait]
pub trait Source: Debug + Send {
    /// Runs a query and returns an open cursor over its result.
    ///
    /// The cursor borrows the connection; only one cursor is ever open at a
    /// time, and dropping it releases the underlying result set.
    async fn query<'a>(&'a mut self, sql: &'a str) -> Result<Box<dyn Cursor + 'a>>;

    /// Runs a query that is expected to produce a single row.
    ///
    /// Extra rows are ignored. An empty result is an invalid result error.
    async fn query_row(&mut self, sql: &str) -> Result<Row> {
        let mut cursor = self.query(sql).await?;

        match cursor.next().await? {
            Some(row) => Ok(row),
            None => Err(Error::invalid_result(format!(
                "query returned no rows; sql={sql}"
            ))),
        }
    }
}

/// An open result set.
#[async_trait]
pub trait Cursor: Send {
    /// Column names, in the order the source reports them.
    fn columns(&self) -> &[String];

    /// Fetches the next row, or `None` once the result set is exhausted.
    async fn next(&mut self) -> Result<Option<Row>>;
}
