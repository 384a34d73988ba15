use super::Error;

/// Error when a dotted field path does not name a declared field or a nested
/// embedded field at any level.
#[derive(Debug)]
pub(super) struct UnknownField {
    path: Box<str>,
}

impl std::error::Error for UnknownField {}

impl core::fmt::Display for UnknownField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no field or association named {}", self.path)
    }
}

impl Error {
    /// Creates an unknown field error for the given dotted path.
    pub fn unknown_field(path: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownField {
            path: path.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown field error.
    pub fn is_unknown_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownField(_))
    }
}
