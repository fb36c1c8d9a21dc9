//! Logical SQL dumps of a live database.
//!
//! A [`Dumper`] reads every table's `CREATE TABLE` statement and rows from a
//! [`Source`], and writes them out as a script that can be replayed against a
//! compatible server.
//!
//! ```no_run
//! # async fn run(source: impl sqldump::Source) -> sqldump::Result<()> {
//! use sqldump::{DumpConfig, Dumper};
//!
//! let config = DumpConfig::new().dir("/var/backups/mysql");
//! let path = Dumper::with_config(source, config).dump().await?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::{DumpConfig, DUMP_EXTENSION};

mod document;
pub use document::{DumpDocument, TableRecord};

mod dumper;
pub use dumper::Dumper;

mod encode;
pub use encode::{ValueEncoder, ValueEncoding};

mod export;
pub use export::TableExporter;

mod query;
pub use query::Query;

pub mod render;
pub use render::Renderer;

pub use sqldump_core::{async_trait, bail, err, Cursor, Error, Result, Row, Rows, Source};

/// Version of the dump format writer, stamped into every dump header.
pub const VERSION: &str = "0.1.0";
