use super::Value;

use std::ops;

/// An ordered list of field values: one slot per field of the model it
/// instantiates.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    /// Takes the value at `index`, leaving `Null` in its place.
    #[track_caller]
    pub fn take(&mut self, index: usize) -> Value {
        std::mem::take(&mut self.fields[index])
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields[..]
    }
}

impl ops::DerefMut for ValueRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields[..]
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Value> for ValueRecord {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
