//! Database-level schema: the tables derived from root models.

mod column;
pub use column::Column;

mod table;
pub use table::{Table, TableId};

#[derive(Debug, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    #[track_caller]
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }

    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
