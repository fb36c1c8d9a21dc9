use super::{Formatter, ToSql};

/// A single `-- ` comment line.
pub(super) struct Comment<'a> {
    label: &'a str,
    value: &'a str,
}

impl<'a> Comment<'a> {
    pub(super) fn new(label: &'a str, value: &'a str) -> Self {
        Self { label, value }
    }
}

impl ToSql for Comment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "-- ", self.label, self.value, "\n");
    }
}

/// A comment line framed by empty `--` lines, introducing a section.
pub(super) struct Banner<'a>(Comment<'a>);

impl<'a> Banner<'a> {
    pub(super) fn new(label: &'a str, table: &'a str) -> Self {
        Self(Comment::new(label, table))
    }
}

impl ToSql for Banner<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "--\n", self.0, "--\n");
    }
}
