use std::fmt;
use std_util::str;

/// A model name as declared. Case conversions derive table names.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    ident: String,
}

impl Name {
    pub fn new(src: &str) -> Self {
        Self {
            ident: src.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.ident
    }

    pub fn snake_case(&self) -> String {
        str::snake_case(&self.ident)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident)
    }
}
