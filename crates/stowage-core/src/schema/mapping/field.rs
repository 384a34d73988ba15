use crate::schema::app::ModelId;
use crate::stmt;

/// One node of a model's field tree, in instance slot order.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Primitive(FieldPrimitive),
    Embedded(FieldEmbedded),
}

/// Maps a primitive field to its column.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPrimitive {
    pub name: String,

    /// Index into the owning model's `columns`
    pub column: usize,

    pub ty: stmt::Type,
}

/// Maps an embedded field to the flattened columns of its value object.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEmbedded {
    pub name: String,

    /// The embeddable model
    pub target: ModelId,

    /// An absent value is hydrated as `Null` only if the embedding is
    /// nullable.
    pub nullable: bool,

    /// The embeddable's fields, with columns indexing the owning model
    pub fields: Vec<Field>,

    /// Every column of the subtree, nested embeddings included
    pub columns: Vec<usize>,
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::Primitive(primitive) => &primitive.name,
            Field::Embedded(embedded) => &embedded.name,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Field::Primitive(_))
    }

    pub fn as_primitive(&self) -> Option<&FieldPrimitive> {
        match self {
            Field::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn as_embedded(&self) -> Option<&FieldEmbedded> {
        match self {
            Field::Embedded(embedded) => Some(embedded),
            _ => None,
        }
    }

    /// Column indices of the field: one for a primitive, the whole subtree for
    /// an embedding.
    pub fn columns(&self) -> &[usize] {
        match self {
            Field::Primitive(primitive) => std::slice::from_ref(&primitive.column),
            Field::Embedded(embedded) => &embedded.columns,
        }
    }

    /// Rewrites column indices after the field moved into another model's
    /// column list.
    pub(crate) fn remap(&mut self, remap: &[usize]) {
        match self {
            Field::Primitive(primitive) => primitive.column = remap[primitive.column],
            Field::Embedded(embedded) => {
                for column in &mut embedded.columns {
                    *column = remap[*column];
                }

                for field in &mut embedded.fields {
                    field.remap(remap);
                }
            }
        }
    }
}
