use crate::Row;

/// How column values are turned into SQL string literals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ValueEncoding {
    /// Wrap the value in single quotes as-is.
    ///
    /// Nothing is escaped, so a value containing `'` produces a script that
    /// doesn't parse. NULL is written as `''`, the same as the empty string.
    #[default]
    Verbatim,

    /// MySQL string escaping, and NULL written as a bare `NULL`.
    Escaped,
}

/// Turns single cells, and whole rows, into SQL literal text.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueEncoder {
    encoding: ValueEncoding,
}

impl ValueEncoder {
    pub fn new(encoding: ValueEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> ValueEncoding {
        self.encoding
    }

    /// Returns the literal for a single cell.
    pub fn literal(&self, value: Option<&str>) -> String {
        let mut dst = String::new();
        self.encode(value, &mut dst);
        dst
    }

    /// Appends the literal for a single cell to `dst`.
    pub fn encode(&self, value: Option<&str>, dst: &mut String) {
        match (self.encoding, value) {
            (ValueEncoding::Verbatim, value) => {
                dst.push('\'');
                dst.push_str(value.unwrap_or_default());
                dst.push('\'');
            }
            (ValueEncoding::Escaped, None) => dst.push_str("NULL"),
            (ValueEncoding::Escaped, Some(value)) => {
                dst.push('\'');
                escape_into(value, dst);
                dst.push('\'');
            }
        }
    }

    /// Appends a parenthesized tuple of literals, one per cell, to `dst`.
    pub fn encode_row(&self, row: &Row, dst: &mut String) {
        dst.push('(');
        let mut s = "";
        for value in row.iter() {
            dst.push_str(s);
            self.encode(value, dst);
            s = ",";
        }
        dst.push(')');
    }
}

fn escape_into(value: &str, dst: &mut String) {
    for ch in value.chars() {
        match ch {
            '\0' => dst.push_str("\\0"),
            '\'' => dst.push_str("\\'"),
            '"' => dst.push_str("\\\""),
            '\x08' => dst.push_str("\\b"),
            '\n' => dst.push_str("\\n"),
            '\r' => dst.push_str("\\r"),
            '\t' => dst.push_str("\\t"),
            '\x1a' => dst.push_str("\\Z"),
            '\\' => dst.push_str("\\\\"),
            ch => dst.push(ch),
        }
    }
}
