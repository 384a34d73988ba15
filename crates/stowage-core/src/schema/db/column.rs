use crate::stmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The physical column name
    pub name: String,

    /// Type of the values stored in the column
    pub ty: stmt::Type,

    /// True if the column may hold `Null`. Columns of a nullable embedding
    /// are always nullable.
    pub nullable: bool,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: stmt::Type) -> Column {
        Column {
            name: name.into(),
            ty,
            nullable: false,
            primary_key: false,
        }
    }
}
