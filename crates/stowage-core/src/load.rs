use crate::{stmt::Value, Error, Result};

/// Loads a typed value from the dynamic [`Value`] produced by hydration.
///
/// Embedded value objects implement `Load` by taking the fields of the
/// hydrated record in declaration order. An absent embedded value hydrates to
/// `Null` and loads as `None` through the `Option<T>` implementation. The
/// reverse direction is a plain `From<T> for Value`.
pub trait Load: Sized {
    fn load(value: Value) -> Result<Self>;
}

impl Load for String {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(value) => Ok(value),
            _ => Err(Error::type_conversion(&value, "String")),
        }
    }
}

impl Load for i64 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I64(value) => Ok(value),
            Value::I32(value) => Ok(value.into()),
            _ => Err(Error::type_conversion(&value, "i64")),
        }
    }
}

impl Load for i32 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(value) => Ok(value),
            Value::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(&value, "i32")),
            _ => Err(Error::type_conversion(&value, "i32")),
        }
    }
}

impl Load for bool {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(value) => Ok(value),
            _ => Err(Error::type_conversion(&value, "bool")),
        }
    }
}

impl<T: Load> Load for Option<T> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }
}
