mod layout;
use layout::Layout;

mod table;

use super::{app, mapping, DefaultNaming, Mapping, NamingStrategy, Schema};
use crate::{Error, Result};
use app::{FieldTy, ModelId, ModelKind};
use indexmap::IndexMap;
use std::sync::Arc;

/// Builds a [`Schema`] from declared models.
///
/// Building is all-or-nothing: the first structural error aborts the build.
#[derive(Debug, Clone)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,

    /// Derives column names from field names
    naming: Arc<dyn NamingStrategy>,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    /// Build options
    builder: &'a Builder,

    app: &'a app::Schema,

    /// Relative layouts of embeddables, built once and reused by every owner
    embeddables: IndexMap<ModelId, mapping::Model>,

    /// Embeddables currently being resolved, outermost first. Reaching one of
    /// them again means the type embeds itself.
    resolving: Vec<ModelId>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            table_name_prefix: None,
            naming: Arc::new(DefaultNaming),
        }
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn naming(&mut self, naming: impl NamingStrategy + 'static) -> &mut Self {
        self.naming = Arc::new(naming);
        self
    }

    pub fn build(&self, app: app::Schema) -> Result<Schema> {
        let (mapping, db) = {
            let mut cx = BuildSchema::new(self, &app);
            let mut mapping = Mapping::default();

            for model in app.models() {
                // Mapped superclasses only contribute fields to subclasses
                if model.is_mapped_superclass() {
                    continue;
                }

                let built = cx.build_model(model.id)?;
                mapping.models.insert(model.id, built);
            }

            let db = cx.build_tables(&mut mapping)?;
            (mapping, db)
        };

        Ok(Schema {
            app,
            db: Arc::new(db),
            mapping,
        })
    }

    /// Builds the mapping of a single root model or embeddable.
    ///
    /// Tables are only derived by [`Builder::build`], so the returned mapping
    /// has no table.
    pub fn build_model(&self, app: &app::Schema, id: impl Into<ModelId>) -> Result<mapping::Model> {
        BuildSchema::new(self, app).build_model(id.into())
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BuildSchema<'a> {
    fn new(builder: &'a Builder, app: &'a app::Schema) -> Self {
        BuildSchema {
            builder,
            app,
            embeddables: IndexMap::new(),
            resolving: vec![],
        }
    }

    fn build_model(&mut self, id: ModelId) -> Result<mapping::Model> {
        let app = self.app;
        let Some(model) = app.get_model(id) else {
            return Err(crate::err!("model {id:?} is not part of the schema"));
        };

        let mapping = match &model.kind {
            ModelKind::Embeddable => self.embeddable_layout(id)?,
            ModelKind::MappedSuperclass => {
                return Err(Error::invalid_schema(format!(
                    "mapped superclass `{}` has no mapping of its own",
                    model.name
                )))
            }
            ModelKind::Root(_) => self.build_layout(model)?,
        };

        tracing::debug!(
            model = %model.name,
            columns = mapping.columns.len(),
            fields = mapping.fields.len(),
            "built model mapping"
        );

        Ok(mapping)
    }

    /// Builds (or reuses) the layout of an embeddable, with column names
    /// relative to the embeddable itself.
    fn embeddable_layout(&mut self, id: ModelId) -> Result<mapping::Model> {
        if let Some(layout) = self.embeddables.get(&id) {
            return Ok(layout.clone());
        }

        let app = self.app;

        self.resolving.push(id);
        let res = self.build_layout(app.model(id));
        self.resolving.pop();

        let layout = res?;
        self.embeddables.insert(id, layout.clone());
        Ok(layout)
    }

    fn build_layout(&mut self, model: &'a app::Model) -> Result<mapping::Model> {
        let app = self.app;
        let mut layout = Layout::new(model);

        if let Some(root) = model.as_root() {
            let top = self.hierarchy_root(model);

            match top.as_root().and_then(|top| top.discriminator_column.as_ref()) {
                Some(column) => {
                    layout.push_discriminator(column, root.discriminator_value.clone())?
                }
                None if top.id != model.id => {
                    return Err(Error::invalid_schema(format!(
                        "`{}` shares the table of `{}`, which declares no discriminator column",
                        model.name, top.name
                    )))
                }
                None => {}
            }
        }

        for field in app.fields(model.id) {
            match &field.ty {
                FieldTy::Primitive(primitive) => {
                    let name = match &field.name.storage_name {
                        Some(storage_name) => storage_name.clone(),
                        None => self
                            .builder
                            .naming
                            .property_to_column_name(&field.name.app_name),
                    };

                    layout.push_primitive(field, name, primitive.ty)?;
                }
                FieldTy::Embedded(embedded) => {
                    if self.resolving.contains(&embedded.target) {
                        return Err(Error::invalid_schema(format!(
                            "infinite nesting detected for embedded property `{}`; \
                             an embeddable type may not (transitively) embed itself",
                            field.full_name(app)
                        )));
                    }

                    match app.get_model(embedded.target) {
                        Some(target) if target.is_embeddable() => {}
                        Some(target) => {
                            return Err(Error::invalid_schema(format!(
                                "field `{}` embeds `{}`, which is not an embeddable",
                                field.full_name(app),
                                target.name
                            )))
                        }
                        None => {
                            return Err(Error::invalid_schema(format!(
                                "field `{}` embeds a model that was not registered with the schema",
                                field.full_name(app)
                            )))
                        }
                    }

                    let inner = self.embeddable_layout(embedded.target)?;
                    layout.push_embedded(field, embedded, &inner, &*self.builder.naming)?;
                }
            }
        }

        Ok(layout.into_model())
    }

    /// The top-most root of a model's inheritance hierarchy. Every model of
    /// the hierarchy is stored in its table.
    fn hierarchy_root<'m>(&'m self, model: &'m app::Model) -> &'m app::Model {
        self.app
            .ancestors(model.id)
            .into_iter()
            .find(|ancestor| ancestor.is_root())
            .unwrap_or(model)
    }
}
