use super::{Field, FieldId, Name};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Fields declared by the model itself. Inherited fields are not repeated
    /// here; see [`Schema::fields`](super::Schema::fields).
    pub fields: Vec<Field>,

    pub kind: ModelKind,

    /// The mapped superclass or root model this model inherits fields from
    pub extends: Option<ModelId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModelKind {
    /// An entity: maps to a table row with its own identity
    Root(ModelRoot),

    /// Contributes fields to the models extending it. Never persisted by
    /// itself.
    MappedSuperclass,

    /// A value object flattened into the table of the model embedding it
    Embeddable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRoot {
    /// If the schema specifies a table to map the model to, this is set.
    pub table_name: Option<String>,

    /// Abstract roots are never instantiated directly; their concrete
    /// subclasses share their table.
    pub is_abstract: bool,

    /// Single-table discriminator column. Declared on the top of the
    /// hierarchy.
    pub discriminator_column: Option<String>,

    /// This model's value in the discriminator column
    pub discriminator_value: Option<String>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    pub fn root(id: ModelId, name: &str, fields: Vec<Field>) -> Model {
        Model::new(id, name, fields, ModelKind::Root(ModelRoot::default()))
    }

    pub fn embeddable(id: ModelId, name: &str, fields: Vec<Field>) -> Model {
        Model::new(id, name, fields, ModelKind::Embeddable)
    }

    pub fn mapped_superclass(id: ModelId, name: &str, fields: Vec<Field>) -> Model {
        Model::new(id, name, fields, ModelKind::MappedSuperclass)
    }

    fn new(id: ModelId, name: &str, fields: Vec<Field>, kind: ModelKind) -> Model {
        Model {
            id,
            name: Name::new(name),
            fields,
            kind,
            extends: None,
        }
    }

    pub fn extends(mut self, parent: ModelId) -> Model {
        self.extends = Some(parent);
        self
    }

    /// Sets the table name of a root model.
    #[track_caller]
    pub fn table_name(mut self, name: &str) -> Model {
        self.expect_root_mut().table_name = Some(name.to_string());
        self
    }

    /// Marks a root model abstract.
    #[track_caller]
    pub fn into_abstract(mut self) -> Model {
        self.expect_root_mut().is_abstract = true;
        self
    }

    /// Declares the single-table discriminator column on a hierarchy root.
    #[track_caller]
    pub fn discriminator_column(mut self, column: &str) -> Model {
        self.expect_root_mut().discriminator_column = Some(column.to_string());
        self
    }

    #[track_caller]
    pub fn discriminator_value(mut self, value: &str) -> Model {
        self.expect_root_mut().discriminator_value = Some(value.to_string());
        self
    }

    pub fn is_root(&self) -> bool {
        matches!(self.kind, ModelKind::Root(_))
    }

    pub fn is_embeddable(&self) -> bool {
        matches!(self.kind, ModelKind::Embeddable)
    }

    pub fn is_mapped_superclass(&self) -> bool {
        matches!(self.kind, ModelKind::MappedSuperclass)
    }

    pub fn as_root(&self) -> Option<&ModelRoot> {
        match &self.kind {
            ModelKind::Root(root) => Some(root),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_root_mut(&mut self) -> &mut ModelRoot {
        match &mut self.kind {
            ModelKind::Root(root) => root,
            _ => panic!("expected root model; name={}", self.name),
        }
    }

    #[track_caller]
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
