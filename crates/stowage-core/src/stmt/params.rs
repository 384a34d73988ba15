use super::Value;
use indexmap::IndexMap;

/// Named parameters bound to a statement, e.g. `:city`.
#[derive(Debug, Default, Clone)]
pub struct Params {
    values: IndexMap<String, Value>,
}

impl Params {
    pub fn new() -> Params {
        Params::default()
    }

    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Params {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}
