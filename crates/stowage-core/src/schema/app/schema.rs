use super::{Field, FieldId, FieldTy, Model, ModelId, NamingStrategy};
use crate::{Error, Result};
use indexmap::IndexMap;

/// The declared models, keyed by id.
///
/// `from_models` checks referential integrity only: every id is unique and
/// every `extends` and embedded target exists and has the right kind.
/// Structural problems such as embedding cycles and column collisions are
/// reported by the [`Builder`](crate::schema::Builder).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn from_models(models: impl IntoIterator<Item = Model>) -> Result<Schema> {
        let mut schema = Schema::default();

        for model in models {
            if let Some(existing) = schema.models.get(&model.id) {
                return Err(Error::invalid_schema(format!(
                    "models `{}` and `{}` share the id {:?}",
                    existing.name, model.name, model.id
                )));
            }

            for (index, field) in model.fields.iter().enumerate() {
                if field.id != model.id.field(index) {
                    return Err(Error::invalid_schema(format!(
                        "field `{}::{}` has id {:?}, expected {:?}",
                        model.name,
                        field.name.app_name,
                        field.id,
                        model.id.field(index)
                    )));
                }
            }

            schema.models.insert(model.id, model);
        }

        for model in schema.models.values() {
            schema.verify_extends(model)?;

            for field in &model.fields {
                schema.verify_embedded_target(field)?;
            }
        }

        Ok(schema)
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn get_model(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a field by ID
    #[track_caller]
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    /// The models `id` inherits from, most distant ancestor first.
    pub fn ancestors(&self, id: impl Into<ModelId>) -> Vec<&Model> {
        let mut ancestors = vec![];
        let mut next = self.model(id).extends;

        while let Some(parent) = next {
            let parent = self.model(parent);
            ancestors.push(parent);
            next = parent.extends;
        }

        ancestors.reverse();
        ancestors
    }

    /// Every field of the model, inherited fields first, as if all of them
    /// were declared locally.
    pub fn fields(&self, id: impl Into<ModelId>) -> Vec<&Field> {
        let id = id.into();

        self.ancestors(id)
            .into_iter()
            .chain([self.model(id)])
            .flat_map(|model| &model.fields)
            .collect()
    }

    /// Derives the physical column name of a dotted path to a primitive field
    /// without building the mapping.
    pub fn column_name(
        &self,
        model: impl Into<ModelId>,
        path: &str,
        naming: &dyn NamingStrategy,
    ) -> Result<String> {
        let (boundaries, leaf) = self.resolve_path_steps(model.into(), path)?;

        if !leaf.ty.is_primitive() {
            return Err(crate::err!(
                "`{path}` names an embedded value, not a column"
            ));
        }

        let mut name = match &leaf.name.storage_name {
            Some(storage_name) => storage_name.clone(),
            None => naming.property_to_column_name(&leaf.name.app_name),
        };

        for field in boundaries.iter().rev() {
            let embedded = field.ty.expect_embedded();
            name = embedded.column_name(naming, &field.name.app_name, &name);
        }

        Ok(name)
    }

    /// Returns the embedded fields crossed by `path` (outermost first) and the
    /// field it ends at.
    fn resolve_path_steps(&self, model: ModelId, path: &str) -> Result<(Vec<&Field>, &Field)> {
        if self.get_model(model).is_none() {
            crate::bail!("model {model:?} is not part of the schema");
        }

        let mut boundaries = vec![];
        let mut fields = self.fields(model);
        let mut segments = path.split('.').peekable();

        while let Some(segment) = segments.next() {
            let field = fields
                .iter()
                .copied()
                .find(|field| field.name.app_name == segment)
                .ok_or_else(|| Error::unknown_field(path))?;

            if segments.peek().is_none() {
                return Ok((boundaries, field));
            }

            match &field.ty {
                FieldTy::Embedded(embedded) => {
                    fields = self.fields(embedded.target);
                    boundaries.push(field);
                }
                FieldTy::Primitive(_) => return Err(Error::unknown_field(path)),
            }
        }

        Err(Error::unknown_field(path))
    }

    fn verify_extends(&self, model: &Model) -> Result<()> {
        let Some(parent) = model.extends else {
            return Ok(());
        };

        if model.is_embeddable() {
            return Err(Error::invalid_schema(format!(
                "embeddable `{}` cannot extend another model",
                model.name
            )));
        }

        let mut seen = vec![model.id];
        let mut next = Some(parent);

        while let Some(id) = next {
            let Some(parent) = self.models.get(&id) else {
                return Err(Error::invalid_schema(format!(
                    "model `{}` extends a model that was not registered with the schema",
                    model.name
                )));
            };

            if parent.is_embeddable() {
                return Err(Error::invalid_schema(format!(
                    "model `{}` extends embeddable `{}`",
                    model.name, parent.name
                )));
            }

            if seen.contains(&id) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` (transitively) extends itself",
                    model.name
                )));
            }

            seen.push(id);
            next = parent.extends;
        }

        Ok(())
    }

    fn verify_embedded_target(&self, field: &Field) -> Result<()> {
        let Some(embedded) = field.ty.as_embedded() else {
            return Ok(());
        };

        match self.models.get(&embedded.target) {
            Some(target) if target.is_embeddable() => Ok(()),
            Some(target) => Err(Error::invalid_schema(format!(
                "field `{}` embeds `{}`, which is not an embeddable",
                field.full_name(self),
                target.name
            ))),
            None => Err(Error::invalid_schema(format!(
                "field `{}` embeds a model that was not registered with the schema",
                field.full_name(self)
            ))),
        }
    }
}
