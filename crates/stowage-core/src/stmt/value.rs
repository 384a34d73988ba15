use super::{Type, ValueRecord};
use crate::{Error, Result};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value. An absent embedded value is represented as `Null`.
    #[default]
    Null,

    /// An embedded (or root) model instance, one value per field
    Record(ValueRecord),

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        ValueRecord::from_vec(fields).into()
    }

    /// Returns true if the value can be stored in a column of type `ty`.
    /// `Null` is accepted by every type.
    pub fn is_a(&self, ty: &Type) -> bool {
        matches!(
            (self, ty),
            (Self::Null, _)
                | (Self::Bool(_), Type::Bool)
                | (Self::I32(_), Type::I32)
                | (Self::I64(_), Type::I64)
                | (Self::String(_), Type::String)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&ValueRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_record(&self) -> &ValueRecord {
        match self {
            Self::Record(record) => record,
            _ => panic!("expected record; actual={self:#?}"),
        }
    }

    pub fn into_record(self) -> Result<ValueRecord> {
        match self {
            Self::Record(record) => Ok(record),
            _ => Err(Error::type_conversion(&self, "Record")),
        }
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::String(_) => "String",
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Self {
        Self::Record(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
