use super::{ModelId, NamingStrategy};

/// Declares that a field holds an embeddable value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedded {
    /// The embeddable model being referenced
    pub target: ModelId,

    /// How the embedded type's column names are prefixed in the owner
    pub column_prefix: ColumnPrefix,
}

/// Column-prefix policy of an embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ColumnPrefix {
    /// Derived from the field name by the naming strategy (`address_`).
    #[default]
    Default,

    /// Prepended verbatim. An empty explicit prefix falls back to
    /// [`ColumnPrefix::Default`].
    Explicit(String),

    /// No prefix: the embedded type's column names are used unchanged.
    None,
}

impl ColumnPrefix {
    pub fn explicit(prefix: impl Into<String>) -> ColumnPrefix {
        ColumnPrefix::Explicit(prefix.into())
    }
}

impl Embedded {
    /// Applies this embedding's prefix policy to `inner`, a column name
    /// relative to the embedded type, for the owning field `field`.
    pub fn column_name(&self, naming: &dyn NamingStrategy, field: &str, inner: &str) -> String {
        match &self.column_prefix {
            ColumnPrefix::Explicit(prefix) if !prefix.is_empty() => format!("{prefix}{inner}"),
            ColumnPrefix::Explicit(_) | ColumnPrefix::Default => {
                naming.embedded_field_to_column_name(field, inner)
            }
            ColumnPrefix::None => inner.to_string(),
        }
    }
}
