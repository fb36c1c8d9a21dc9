use crate::{
    DumpConfig, DumpDocument, Error, Query, Renderer, Result, Source, TableExporter, VERSION,
};

use jiff::Zoned;
use std::path::PathBuf;
use tokio::{
    fs::OpenOptions,
    io::{AsyncWrite, AsyncWriteExt},
};

/// Format of the completion timestamp at the end of every dump.
const COMPLETED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Dumps every table of a [`Source`].
///
/// A dump is all-or-nothing: tables are exported one after the other, in the
/// order the source lists them, and the first failure aborts the whole dump.
/// Nothing already written to the destination is rolled back.
#[derive(Debug)]
pub struct Dumper<S> {
    source: S,
    config: DumpConfig,
}

impl<S: Source> Dumper<S> {
    /// Create a new Dumper with the default configuration
    pub fn new(source: S) -> Self {
        Self::with_config(source, DumpConfig::default())
    }

    /// Create a new Dumper with a custom configuration
    pub fn with_config(source: S, config: DumpConfig) -> Self {
        Self { source, config }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    pub fn source(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Writes a new dump file into the configured directory.
    ///
    /// The file is named after the current time using the configured name
    /// format. If that file already exists the dump fails before touching the
    /// source. Returns the path of the written file.
    #[tracing::instrument(skip_all, err, fields(dir = %self.config.dir.display()))]
    pub async fn dump(&mut self) -> Result<PathBuf> {
        let path = self.config.dump_path(&Zoned::now())?;

        if tokio::fs::try_exists(&path).await? {
            return Err(Error::already_exists(path.display().to_string()));
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    Error::already_exists(path.display().to_string())
                }
                _ => Error::from(err),
            })?;

        self.dump_to(&mut file).await?;

        tracing::info!(path = %path.display(), "dump completed");

        Ok(path)
    }

    /// Renders a full dump into `sink`.
    pub async fn dump_to<W>(&mut self, sink: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let document = self.document().await?;
        let rendered = Renderer::new().render(&document)?;

        sink.write_all(rendered.as_bytes()).await?;
        sink.flush().await?;

        Ok(())
    }

    /// Collects the dump document without rendering it.
    pub async fn document(&mut self) -> Result<DumpDocument> {
        let server_version = self.server_version().await?;
        let tables = self.tables().await?;

        tracing::debug!(%server_version, tables = tables.len(), "enumerated tables");

        let exporter = TableExporter::new(self.config.encoding);
        let mut document = DumpDocument::new(VERSION, server_version);

        for name in &tables {
            let table = exporter.export(&mut self.source, name).await?;
            document.push(table);
        }

        document.finalize(completed_at(&Zoned::now())?);

        Ok(document)
    }

    async fn server_version(&mut self) -> Result<String> {
        let row = self
            .source
            .query_row(&Query::ServerVersion.to_string())
            .await?;

        match row.get(0) {
            Some(version) => Ok(version.to_string()),
            None => Err(Error::invalid_result("server version is NULL")),
        }
    }

    async fn tables(&mut self) -> Result<Vec<String>> {
        let sql = Query::ShowTables.to_string();
        let mut cursor = self.source.query(&sql).await?;
        let mut tables = Vec::new();

        while let Some(row) = cursor.next().await? {
            match row.get(0) {
                Some(name) => tables.push(name.to_string()),
                None => return Err(Error::invalid_result("table listing returned a NULL name")),
            }
        }

        Ok(tables)
    }
}

fn completed_at(now: &Zoned) -> Result<String> {
    jiff::fmt::strtime::format(COMPLETED_AT_FORMAT, now)
        .map_err(|err| Error::render(format!("cannot format completion time: {err}")))
}
