//! Statements written into the dump, one per line, each terminated by `;`.

use super::{Formatter, ToSql};

pub(super) struct DropTable<'a> {
    name: &'a str,
}

impl<'a> DropTable<'a> {
    pub(super) fn if_exists(name: &'a str) -> Self {
        Self { name }
    }
}

impl ToSql for DropTable<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "DROP TABLE IF EXISTS ", self.name, ";\n");
    }
}

/// The source-reported DDL, written verbatim.
pub(super) struct CreateTable<'a> {
    sql: &'a str,
}

impl<'a> CreateTable<'a> {
    pub(super) fn new(sql: &'a str) -> Self {
        Self { sql }
    }
}

impl ToSql for CreateTable<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.sql, ";\n");
    }
}

pub(super) struct LockTables<'a> {
    name: &'a str,
}

impl<'a> LockTables<'a> {
    pub(super) fn write(name: &'a str) -> Self {
        Self { name }
    }
}

impl ToSql for LockTables<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "LOCK TABLES ", self.name, " WRITE;\n");
    }
}

pub(super) struct UnlockTables;

impl ToSql for UnlockTables {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "UNLOCK TABLES;\n");
    }
}

/// A single bulk insert carrying every row of the table.
pub(super) struct Insert<'a> {
    name: &'a str,
    values: &'a str,
}

impl<'a> Insert<'a> {
    pub(super) fn new(name: &'a str, values: &'a str) -> Self {
        Self { name, values }
    }
}

impl ToSql for Insert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "INSERT INTO ", self.name, " VALUES ", self.values, ";\n");
    }
}
