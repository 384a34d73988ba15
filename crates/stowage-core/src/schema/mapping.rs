mod field;
pub use field::{Field, FieldEmbedded, FieldPrimitive};

mod hydrate;

mod model;
pub use model::{Discriminator, Model, ResolvedPath};

use super::app::ModelId;
use indexmap::IndexMap;

/// Defines how app-level models are flattened into columns.
///
/// Root models and embeddables have a mapping. Embeddable mappings are
/// relative: their column names are not yet prefixed by any owner. Mapped
/// superclasses have none; their fields are part of every subclass mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    /// Per-model mappings indexed by model identifier.
    pub models: IndexMap<ModelId, Model>,
}

impl Mapping {
    /// Returns the mapping for the specified model.
    ///
    /// # Panics
    ///
    /// Panics if the model ID does not exist in the mapping.
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn get(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }
}
