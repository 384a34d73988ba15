use std::fmt;
use std_util::str;

/// Translates field names into column names.
///
/// Only the default embedding policy ([`ColumnPrefix::Default`]) consults
/// [`embedded_field_to_column_name`]. Explicit and suppressed prefixes are
/// applied verbatim.
///
/// [`ColumnPrefix::Default`]: super::app::ColumnPrefix::Default
/// [`embedded_field_to_column_name`]: NamingStrategy::embedded_field_to_column_name
pub trait NamingStrategy: fmt::Debug + Send + Sync {
    /// Column name of a primitive field with no explicit storage name.
    fn property_to_column_name(&self, property: &str) -> String;

    /// Column name of `embedded_column` (already relative to the embedded
    /// type) when it is embedded through the field `property`.
    fn embedded_field_to_column_name(&self, property: &str, embedded_column: &str) -> String;
}

/// Keeps field names as declared: `nestedWithPrefix` embedding `id` maps to
/// `nestedWithPrefix_id`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNaming;

/// Snake-cases field names: `createdAt` maps to `created_at`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnderscoreNaming;

impl NamingStrategy for DefaultNaming {
    fn property_to_column_name(&self, property: &str) -> String {
        property.to_string()
    }

    fn embedded_field_to_column_name(&self, property: &str, embedded_column: &str) -> String {
        format!("{property}_{embedded_column}")
    }
}

impl NamingStrategy for UnderscoreNaming {
    fn property_to_column_name(&self, property: &str) -> String {
        str::snake_case(property)
    }

    fn embedded_field_to_column_name(&self, property: &str, embedded_column: &str) -> String {
        format!("{}_{embedded_column}", str::snake_case(property))
    }
}
