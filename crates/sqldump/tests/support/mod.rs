#![allow(dead_code)]

use sqldump::{async_trait, bail, Cursor, Error, Result, Row, Rows, Source};
use std::sync::{Arc, Mutex};

/// An in-memory source that answers the dump's queries from fixed tables and
/// records every query it receives.
#[derive(Debug, Clone)]
pub struct MemorySource {
    version: String,
    tables: Vec<MemoryTable>,
    log: QueryLog,
}

#[derive(Debug, Clone)]
pub struct MemoryTable {
    name: String,
    create_statement: String,
    echo: Option<String>,
    columns: Vec<String>,
    rows: Vec<Row>,
    broken: bool,
}

/// Shared handle on the queries a [`MemorySource`] has seen.
#[derive(Debug, Clone, Default)]
pub struct QueryLog {
    queries: Arc<Mutex<Vec<String>>>,
}

impl MemorySource {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            tables: Vec::new(),
            log: QueryLog::default(),
        }
    }

    pub fn table(mut self, table: MemoryTable) -> Self {
        self.tables.push(table);
        self
    }

    pub fn log(&self) -> QueryLog {
        self.log.clone()
    }

    fn find(&self, name: &str) -> Result<&MemoryTable> {
        match self.tables.iter().find(|table| table.name == name) {
            Some(table) => Ok(table),
            None => bail!("table `{name}` doesn't exist"),
        }
    }

    fn answer(&self, sql: &str) -> Result<Rows> {
        if sql == "SELECT version()" {
            return Ok(Rows::new(
                vec!["version()".into()],
                vec![row(&[Some(self.version.as_str())])],
            ));
        }

        if sql == "SHOW TABLES" {
            let rows = self
                .tables
                .iter()
                .map(|table| row(&[Some(table.name.as_str())]))
                .collect();
            return Ok(Rows::new(vec!["Tables_in_test".into()], rows));
        }

        if let Some(name) = sql.strip_prefix("SHOW CREATE TABLE ") {
            let table = self.find(name)?;
            let echo = table.echo.as_deref().unwrap_or(&table.name);
            return Ok(Rows::new(
                vec!["Table".into(), "Create Table".into()],
                vec![row(&[Some(echo), Some(table.create_statement.as_str())])],
            ));
        }

        if let Some(name) = sql.strip_prefix("SELECT * FROM ") {
            let table = self.find(name)?;
            if table.broken {
                return Err(Error::driver(std::io::Error::other(format!(
                    "Table '{name}' is marked as crashed"
                ))));
            }
            return Ok(Rows::new(table.columns.clone(), table.rows.clone()));
        }

        bail!("unsupported query: {sql}")
    }
}

#[async_trait]
impl Source for MemorySource {
    async fn query<'a>(&'a mut self, sql: &'a str) -> Result<Box<dyn Cursor + 'a>> {
        self.log.push(sql);
        Ok(Box::new(self.answer(sql)?))
    }
}

impl MemoryTable {
    /// A table whose DDL is derived from its column names, all typed `text`.
    pub fn new(name: &str, columns: &[&str]) -> Self {
        let defs = columns
            .iter()
            .map(|column| format!("  `{column}` text"))
            .collect::<Vec<_>>()
            .join(",\n");

        Self {
            name: name.to_string(),
            create_statement: format!("CREATE TABLE `{name}` (\n{defs}\n)"),
            echo: None,
            columns: columns.iter().map(|column| column.to_string()).collect(),
            rows: Vec::new(),
            broken: false,
        }
    }

    pub fn create_statement(mut self, sql: &str) -> Self {
        self.create_statement = sql.to_string();
        self
    }

    pub fn row(mut self, values: &[Option<&str>]) -> Self {
        self.rows.push(row(values));
        self
    }

    /// Makes `SHOW CREATE TABLE` answer for a different table.
    pub fn echo(mut self, name: &str) -> Self {
        self.echo = Some(name.to_string());
        self
    }

    /// Makes `SELECT *` on this table fail.
    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }
}

impl QueryLog {
    fn push(&self, sql: &str) {
        self.queries.lock().unwrap().push(sql.to_string());
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn contains(&self, sql: &str) -> bool {
        self.queries.lock().unwrap().iter().any(|query| query == sql)
    }
}

pub fn row(values: &[Option<&str>]) -> Row {
    values.iter().copied().collect()
}

/// The `users`/`logs` database used across tests.
pub fn users_and_logs() -> MemorySource {
    MemorySource::new("8.0.36")
        .table(
            MemoryTable::new("users", &["id", "name"])
                .create_statement("CREATE TABLE `users` (\n  `id` int,\n  `name` text\n)")
                .row(&[Some("1"), Some("alice")])
                .row(&[Some("2"), Some("bob")]),
        )
        .table(MemoryTable::new("logs", &["id", "message"]))
}

/// Replaces the completion time so rendered dumps can be compared verbatim.
pub fn strip_completed_at(dump: &str) -> String {
    let (body, _) = dump
        .rsplit_once("-- Dump completed on ")
        .expect("dump has no completion line");
    format!("{body}-- Dump completed on <time>\n")
}
