use super::Value;
use crate::{Error, Result};
use std::fmt;

/// The type of a scalar column or primitive field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// String type
    String,
}

impl Type {
    /// Converts `value` so it can be stored in, or compared with, a column of
    /// this type. Integers convert between widths when the value fits.
    pub fn cast(&self, value: Value) -> Result<Value> {
        // Null values are passed through
        if value.is_null() || value.is_a(self) {
            return Ok(value);
        }

        match (value, self) {
            (Value::I32(v), Type::I64) => Ok(Value::I64(v.into())),
            (Value::I64(v), Type::I32) => match i32::try_from(v) {
                Ok(v) => Ok(Value::I32(v)),
                Err(_) => Err(Error::type_conversion(&Value::I64(v), self)),
            },
            (value, _) => Err(Error::type_conversion(&value, self)),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Bool => "Bool",
            Type::I32 => "I32",
            Type::I64 => "I64",
            Type::String => "String",
        };

        f.write_str(name)
    }
}
