//! Turns a finalized [`DumpDocument`] into the text of a dump file.

#[macro_use]
mod fmt;
use fmt::ToSql;

mod comment;
use comment::{Banner, Comment};

mod statement;
use statement::{CreateTable, DropTable, Insert, LockTables, UnlockTables};

use crate::{DumpDocument, Error, Result, TableRecord};

/// Renders dump documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct Renderer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the rendered dump
    dst: &'a mut String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `document` into a string.
    ///
    /// Output depends on nothing but the document, so rendering the same
    /// document twice yields identical bytes.
    pub fn render(&self, document: &DumpDocument) -> Result<String> {
        let mut ret = String::new();
        self.render_into(document, &mut ret)?;
        Ok(ret)
    }

    /// Appends the rendered `document` to `dst`.
    ///
    /// On error, `dst` may already hold part of the dump.
    pub fn render_into(&self, document: &DumpDocument, dst: &mut String) -> Result<()> {
        let Some(completed_at) = document.completed_at() else {
            return Err(Error::render("dump document was not finalized"));
        };

        let f = &mut Formatter { dst };

        fmt!(f,
            Comment::new("Go SQL Dump ", document.tool_version()),
            "--\n",
            "-- ------------------------------------------------------\n",
            Comment::new("Server version\t", document.server_version()),
            "\n\n",
        );

        for table in document.tables() {
            self.render_table(table, f)?;
        }

        fmt!(f, "\n", Comment::new("Dump completed on ", completed_at));

        Ok(())
    }

    fn render_table(&self, table: &TableRecord, f: &mut Formatter<'_>) -> Result<()> {
        let name = table.name();

        if name.is_empty() {
            return Err(Error::render("table record has an empty name"));
        }

        fmt!(f,
            "\n",
            Banner::new("Table structure for table ", name),
            "\n",
            DropTable::if_exists(name),
            CreateTable::new(table.create_statement()),
        );

        if table.has_values() {
            fmt!(f,
                "\n",
                Banner::new("Dumping data for table ", name),
                "\n",
                LockTables::write(name),
                Insert::new(name, table.values_clause()),
                UnlockTables,
            );
        }

        Ok(())
    }
}
