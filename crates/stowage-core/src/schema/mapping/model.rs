use super::Field;
use crate::schema::{
    app::ModelId,
    db::{Column, TableId},
    Name,
};
use crate::{stmt::Value, stmt::Row, Error, Result};
use indexmap::IndexMap;

/// The flattened layout of one model: its metadata tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Model identifier.
    pub id: ModelId,

    pub name: Name,

    /// The table the model is stored in. `None` for embeddables.
    pub table: Option<TableId>,

    /// Physical columns, in the order they are written. The discriminator
    /// column comes first when there is one.
    pub columns: Vec<Column>,

    /// Field tree, one entry per instance slot. Inherited fields come first.
    pub fields: Vec<Field>,

    /// Dotted path of every primitive field to its column index
    pub paths: IndexMap<String, usize>,

    pub discriminator: Option<Discriminator>,
}

/// Single-table inheritance discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discriminator {
    /// Index into `columns`
    pub column: usize,

    /// The value identifying this model. Abstract roots have none.
    pub value: Option<String>,
}

/// A dotted path resolved against a model mapping.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPath<'a> {
    /// The field the path ends at
    pub field: &'a Field,

    model: &'a Model,
}

impl Model {
    #[track_caller]
    pub fn column(&self, index: usize) -> &Column {
        &self.columns[index]
    }

    /// Resolves a dotted path through the field tree. Fails naming the whole
    /// path if any segment is not a field at its depth.
    pub fn resolve_path(&self, path: &str) -> Result<ResolvedPath<'_>> {
        let mut fields = &self.fields[..];
        let mut segments = path.split('.').peekable();

        while let Some(segment) = segments.next() {
            let Some(field) = fields.iter().find(|field| field.name() == segment) else {
                break;
            };

            if segments.peek().is_none() {
                return Ok(ResolvedPath { field, model: self });
            }

            match field {
                Field::Embedded(embedded) => fields = &embedded.fields,
                Field::Primitive(_) => break,
            }
        }

        Err(Error::unknown_field(path))
    }

    pub fn has_field(&self, path: &str) -> bool {
        self.resolve_path(path).is_ok()
    }

    /// Physical column name of a dotted path to a primitive field.
    pub fn column_name(&self, path: &str) -> Result<&str> {
        if let Some(index) = self.paths.get(path) {
            return Ok(&self.columns[*index].name);
        }

        self.resolve_path(path)?;
        Err(crate::err!("`{path}` names an embedded value, not a column"))
    }

    /// Reads the row keyed by dotted path. Nothing is constructed: absent
    /// values read as `Null`.
    pub fn to_array(&self, row: &Row) -> IndexMap<String, Value> {
        self.paths
            .iter()
            .map(|(path, index)| (path.clone(), row.get(&self.columns[*index].name).clone()))
            .collect()
    }
}

impl<'a> ResolvedPath<'a> {
    pub fn is_embedded(&self) -> bool {
        !self.field.is_primitive()
    }

    /// The physical columns addressed by the path
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &'a Column> + 'a {
        let model = self.model;
        self.field
            .columns()
            .iter()
            .map(move |index| &model.columns[*index])
    }
}
