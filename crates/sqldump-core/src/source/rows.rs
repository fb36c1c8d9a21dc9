use super::{Cursor, Row};
use crate::{async_trait, Result};

use std::collections::VecDeque;

/// A fully buffered result set.
///
/// Useful for sources that fetch everything up front, and for tests.
#[derive(Debug, Default, Clone)]
pub struct Rows {
    columns: Vec<String>,
    rows: VecDeque<Row>,
}

impl Rows {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows: rows.into(),
        }
    }

    /// A result with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl Cursor for Rows {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    async fn next(&mut self) -> Result<Option<Row>> {
        Ok(self.rows.pop_front())
    }
}
