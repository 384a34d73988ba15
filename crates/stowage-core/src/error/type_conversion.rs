use super::Error;
use crate::stmt::Value;

/// Error when a value does not have the type its field or target expects.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    from: &'static str,
    to: Box<str>,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.from, self.to)
    }
}

impl Error {
    /// Creates a type conversion error for `value` and the target it could not
    /// be converted to.
    pub fn type_conversion(value: &Value, to: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from: value.variant_name(),
            to: to.to_string().into(),
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
