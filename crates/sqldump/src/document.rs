/// One table's DDL and serialized rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    name: String,
    create_statement: String,
    values_clause: String,
}

impl TableRecord {
    pub fn new(
        name: impl Into<String>,
        create_statement: impl Into<String>,
        values_clause: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            create_statement: create_statement.into(),
            values_clause: values_clause.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `CREATE TABLE` statement exactly as the source reported it,
    /// without a trailing semicolon.
    pub fn create_statement(&self) -> &str {
        &self.create_statement
    }

    /// Comma-joined row tuples, empty when the table has no rows.
    pub fn values_clause(&self) -> &str {
        &self.values_clause
    }

    pub fn has_values(&self) -> bool {
        !self.values_clause.is_empty()
    }
}

/// Everything that ends up in a dump file.
///
/// Tables are appended in the order the source enumerated them. The document
/// is finalized by stamping the completion time once the last table is in;
/// only a finalized document can be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpDocument {
    tool_version: String,
    server_version: String,
    tables: Vec<TableRecord>,
    completed_at: Option<String>,
}

impl DumpDocument {
    pub fn new(tool_version: impl Into<String>, server_version: impl Into<String>) -> Self {
        Self {
            tool_version: tool_version.into(),
            server_version: server_version.into(),
            tables: Vec::new(),
            completed_at: None,
        }
    }

    pub fn push(&mut self, table: TableRecord) {
        debug_assert!(
            self.completed_at.is_none(),
            "table pushed to a finalized dump document"
        );
        self.tables.push(table);
    }

    /// Stamps the completion time.
    pub fn finalize(&mut self, completed_at: impl Into<String>) {
        self.completed_at = Some(completed_at.into());
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn server_version(&self) -> &str {
        &self.server_version
    }

    pub fn tables(&self) -> &[TableRecord] {
        &self.tables
    }

    pub fn completed_at(&self) -> Option<&str> {
        self.completed_at.as_deref()
    }

    pub fn is_finalized(&self) -> bool {
        self.completed_at.is_some()
    }
}
