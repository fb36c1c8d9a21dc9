mod table;
mod values;

use crate::{err, Result, Source, TableRecord, ValueEncoder, ValueEncoding};

/// Exports single tables into [`TableRecord`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableExporter {
    encoder: ValueEncoder,
}

impl TableExporter {
    pub fn new(encoding: ValueEncoding) -> Self {
        Self {
            encoder: ValueEncoder::new(encoding),
        }
    }

    /// Reads the table's `CREATE TABLE` statement and all of its rows.
    ///
    /// Either step failing fails the whole table; no partial record is
    /// returned.
    #[tracing::instrument(skip(self, source), err)]
    pub async fn export<S>(&self, source: &mut S, name: &str) -> Result<TableRecord>
    where
        S: Source + ?Sized,
    {
        self.export_table(source, name)
            .await
            .map_err(|e| e.context(err!("failed to export table {name}")))
    }

    async fn export_table<S>(&self, source: &mut S, name: &str) -> Result<TableRecord>
    where
        S: Source + ?Sized,
    {
        let create_statement = table::create_statement(source, name).await?;
        let values_clause = values::values_clause(source, name, &self.encoder).await?;

        Ok(TableRecord::new(name, create_statement, values_clause))
    }
}
