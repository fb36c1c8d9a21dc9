/// A single result row, one text cell per column.
///
/// `None` is SQL NULL as reported by the driver.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<Option<String>>,
}

impl Row {
    pub fn from_vec(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the cell at `index`, `None` if the cell is NULL or out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index)?.as_deref()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<&str>> + '_ {
        self.values.iter().map(|value| value.as_deref())
    }

    pub fn into_inner(self) -> Vec<Option<String>> {
        self.values
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for Row {
    fn from_iter<T: IntoIterator<Item = Option<S>>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().map(|value| value.map(Into::into)).collect())
    }
}
