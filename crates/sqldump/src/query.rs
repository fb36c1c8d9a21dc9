use std::fmt;

/// The queries a dump issues against its source.
///
/// Table names are interpolated as-is, the way the source enumerated them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// `SELECT version()`
    ServerVersion,

    /// `SHOW TABLES`, one table name per row
    ShowTables,

    /// `SHOW CREATE TABLE <name>`, one row of (echoed name, DDL)
    ShowCreateTable(&'a str),

    /// `SELECT * FROM <name>`
    SelectAll(&'a str),
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::ServerVersion => f.write_str("SELECT version()"),
            Query::ShowTables => f.write_str("SHOW TABLES"),
            Query::ShowCreateTable(name) => write!(f, "SHOW CREATE TABLE {name}"),
            Query::SelectAll(name) => write!(f, "SELECT * FROM {name}"),
        }
    }
}
