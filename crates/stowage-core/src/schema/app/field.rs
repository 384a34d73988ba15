use super::{ColumnPrefix, Embedded, ModelId, Schema};
use crate::stmt;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Uniquely identifies the field within the declaring model.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Primitive or embedded
    pub ty: FieldTy,

    /// True if the field may hold no value. For an embedded field, an absent
    /// value is hydrated as `Null` when all of its columns are null.
    pub nullable: bool,

    /// True if the field is (part of) the identifier
    pub primary_key: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    pub app_name: String,

    /// Explicit column name. Only meaningful for primitive fields.
    pub storage_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    Embedded(Embedded),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPrimitive {
    pub ty: stmt::Type,
}

impl Field {
    pub fn primitive(id: FieldId, name: &str, ty: stmt::Type) -> Field {
        Field {
            id,
            name: FieldName::new(name),
            ty: FieldTy::Primitive(FieldPrimitive { ty }),
            nullable: false,
            primary_key: false,
        }
    }

    pub fn embedded(id: FieldId, name: &str, target: ModelId, column_prefix: ColumnPrefix) -> Field {
        Field {
            id,
            name: FieldName::new(name),
            ty: FieldTy::Embedded(Embedded {
                target,
                column_prefix,
            }),
            nullable: false,
            primary_key: false,
        }
    }

    /// Marks the field nullable.
    pub fn nullable(mut self) -> Field {
        self.nullable = true;
        self
    }

    /// Marks the field as (part of) the identifier.
    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    pub fn storage_name(mut self, name: &str) -> Field {
        self.name.storage_name = Some(name.to_string());
        self
    }

    /// `Owner::field`, naming the model that declares the field.
    pub fn full_name(&self, schema: &Schema) -> String {
        let model = schema.model(self.id.model);
        format!("{}::{}", model.name, self.name.app_name)
    }
}

impl FieldName {
    pub fn new(app_name: &str) -> FieldName {
        FieldName {
            app_name: app_name.to_string(),
            storage_name: None,
        }
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(..))
    }

    pub fn as_primitive(&self) -> Option<&FieldPrimitive> {
        match self {
            Self::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded(..))
    }

    pub fn as_embedded(&self) -> Option<&Embedded> {
        match self {
            Self::Embedded(embedded) => Some(embedded),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_embedded(&self) -> &Embedded {
        match self {
            Self::Embedded(embedded) => embedded,
            _ => panic!("expected embedded field, but was {self:?}"),
        }
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
