use super::Value;
use indexmap::IndexMap;

static NULL: Value = Value::Null;

/// A flat row: physical column name to scalar value.
///
/// A column missing from the row reads as `Null`. The dehydrator leaves out
/// every column of an absent embedded value, so `contains` distinguishes an
/// omitted column from one explicitly set to `Null`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Returns the column's value, or `Null` when the row does not contain it.
    pub fn get(&self, column: &str) -> &Value {
        self.columns.get(column).unwrap_or(&NULL)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        self.columns.shift_remove(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
