pub mod app;

mod builder;
pub use builder::Builder;

pub mod db;

pub mod mapping;
use mapping::Mapping;

mod name;
pub use name::Name;

mod naming;
pub use naming::{DefaultNaming, NamingStrategy, UnderscoreNaming};

use crate::{
    stmt::{Row, Value, ValueRecord},
    Error, Result,
};
use app::ModelId;
use db::Table;
use indexmap::IndexMap;
use mapping::ResolvedPath;
use std::sync::Arc;

#[derive(Debug)]
pub struct Schema {
    /// Application-level schema
    pub app: app::Schema,

    /// Database-level schema
    pub db: Arc<db::Schema>,

    /// Maps the app-level schema to the db-level schema
    pub mapping: Mapping,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the mapping of a root model or an embeddable.
    ///
    /// # Panics
    ///
    /// Panics if the model is a mapped superclass or not part of the schema.
    #[track_caller]
    pub fn mapping_for(&self, id: impl Into<ModelId>) -> &mapping::Model {
        self.mapping.model(id)
    }

    /// The table a root model is stored in. Embeddables have none.
    pub fn table_for(&self, id: impl Into<ModelId>) -> Option<&Table> {
        self.mapping.model(id).table.map(|table| self.db.table(table))
    }

    /// Physical column name of a dotted path to a primitive field.
    pub fn column_name(&self, model: impl Into<ModelId>, path: &str) -> Result<&str> {
        self.mapping_checked(model.into())?.column_name(path)
    }

    /// True if `path` names a field of the model, at any embedding depth.
    pub fn has_field(&self, model: impl Into<ModelId>, path: &str) -> bool {
        self.mapping
            .get(model.into())
            .is_some_and(|mapping| mapping.has_field(path))
    }

    pub fn resolve_path(&self, model: impl Into<ModelId>, path: &str) -> Result<ResolvedPath<'_>> {
        self.mapping_checked(model.into())?.resolve_path(path)
    }

    /// Flattens an instance of the model into a row.
    pub fn to_row(&self, model: impl Into<ModelId>, instance: &ValueRecord) -> Result<Row> {
        self.mapping_checked(model.into())?.dehydrate(instance)
    }

    /// Rebuilds an instance of the model from a row.
    pub fn from_row(&self, model: impl Into<ModelId>, row: &Row) -> Result<ValueRecord> {
        self.mapping_checked(model.into())?.hydrate(row)
    }

    /// Reads a row as a map keyed by dotted field path, e.g.
    /// `address.country.name`.
    pub fn to_array(&self, model: impl Into<ModelId>, row: &Row) -> Result<IndexMap<String, Value>> {
        Ok(self.mapping_checked(model.into())?.to_array(row))
    }

    pub(crate) fn mapping_checked(&self, id: ModelId) -> Result<&mapping::Model> {
        match self.mapping.get(id) {
            Some(mapping) => Ok(mapping),
            None => match self.app.get_model(id) {
                Some(model) => Err(Error::invalid_statement(format!(
                    "mapped superclass `{}` has no mapping of its own",
                    model.name
                ))),
                None => Err(crate::err!("model {id:?} is not part of the schema")),
            },
        }
    }
}
