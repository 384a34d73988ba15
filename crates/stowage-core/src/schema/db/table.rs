use super::Column;
use std::fmt;

/// A database table
#[derive(Debug, PartialEq)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's columns. Every model stored in the table contributes its
    /// columns; single-table hierarchies share one table.
    pub columns: Vec<Column>,

    /// Indices into `columns`
    pub primary_key: Vec<usize>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub(crate) fn new(id: TableId, name: String) -> Table {
        Table {
            id,
            name,
            columns: vec![],
            primary_key: vec![],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key.iter().map(|index| &self.columns[*index])
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
