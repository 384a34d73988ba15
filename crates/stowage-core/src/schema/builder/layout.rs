use crate::{
    schema::{app, db, mapping, NamingStrategy},
    stmt, Error, Result,
};
use indexmap::IndexMap;

/// Accumulates the flattened layout of one model.
pub(super) struct Layout<'a> {
    model: &'a app::Model,
    columns: Vec<db::Column>,
    fields: Vec<mapping::Field>,
    paths: IndexMap<String, usize>,

    /// The field path each column was derived from, for collision errors
    owners: Vec<String>,

    discriminator: Option<mapping::Discriminator>,
}

impl<'a> Layout<'a> {
    pub(super) fn new(model: &'a app::Model) -> Self {
        Layout {
            model,
            columns: vec![],
            fields: vec![],
            paths: IndexMap::new(),
            owners: vec![],
            discriminator: None,
        }
    }

    pub(super) fn push_discriminator(&mut self, name: &str, value: Option<String>) -> Result<()> {
        let column = self.push_column(db::Column::new(name, stmt::Type::String), "<discriminator>")?;
        self.discriminator = Some(mapping::Discriminator { column, value });
        Ok(())
    }

    pub(super) fn push_primitive(
        &mut self,
        field: &app::Field,
        column_name: String,
        ty: stmt::Type,
    ) -> Result<()> {
        self.check_field_name(field)?;

        let name = &field.name.app_name;
        let column = self.push_column(
            db::Column {
                name: column_name,
                ty,
                nullable: field.nullable,
                primary_key: field.primary_key,
            },
            name,
        )?;

        self.fields
            .push(mapping::Field::Primitive(mapping::FieldPrimitive {
                name: name.clone(),
                column,
                ty,
            }));
        self.paths.insert(name.clone(), column);

        Ok(())
    }

    /// Appends the columns of `inner`, the relative layout of the embedded
    /// type, applying the embedding's prefix policy to each column name.
    pub(super) fn push_embedded(
        &mut self,
        field: &app::Field,
        embedded: &app::Embedded,
        inner: &mapping::Model,
        naming: &dyn NamingStrategy,
    ) -> Result<()> {
        self.check_field_name(field)?;

        let name = &field.name.app_name;

        let mut inner_paths = vec![""; inner.columns.len()];
        for (path, index) in &inner.paths {
            inner_paths[*index] = path.as_str();
        }

        let mut remap = Vec::with_capacity(inner.columns.len());

        for (column, inner_path) in inner.columns.iter().zip(inner_paths) {
            let index = self.push_column(
                db::Column {
                    name: embedded.column_name(naming, name, &column.name),
                    ty: column.ty,
                    nullable: column.nullable || field.nullable,
                    primary_key: column.primary_key || field.primary_key,
                },
                &format!("{name}.{inner_path}"),
            )?;

            remap.push(index);
        }

        let mut fields = inner.fields.clone();
        for field in &mut fields {
            field.remap(&remap);
        }

        for (path, index) in &inner.paths {
            self.paths.insert(format!("{name}.{path}"), remap[*index]);
        }

        self.fields
            .push(mapping::Field::Embedded(mapping::FieldEmbedded {
                name: name.clone(),
                target: embedded.target,
                nullable: field.nullable,
                fields,
                columns: remap,
            }));

        Ok(())
    }

    pub(super) fn into_model(self) -> mapping::Model {
        mapping::Model {
            id: self.model.id,
            name: self.model.name.clone(),
            table: None,
            columns: self.columns,
            fields: self.fields,
            paths: self.paths,
            discriminator: self.discriminator,
        }
    }

    fn push_column(&mut self, column: db::Column, owner: &str) -> Result<usize> {
        if let Some(existing) = self.columns.iter().position(|c| c.name == column.name) {
            return Err(Error::invalid_schema(format!(
                "`{}` and `{owner}` of `{}` both map to column `{}`",
                self.owners[existing], self.model.name, column.name
            )));
        }

        tracing::trace!(
            model = %self.model.name,
            column = %column.name,
            path = owner,
            "derived column"
        );

        self.columns.push(column);
        self.owners.push(owner.to_string());
        Ok(self.columns.len() - 1)
    }

    fn check_field_name(&self, field: &app::Field) -> Result<()> {
        if self.fields.iter().any(|f| f.name() == field.name.app_name) {
            return Err(Error::invalid_schema(format!(
                "field `{}` is declared more than once on `{}`",
                field.name.app_name, self.model.name
            )));
        }

        Ok(())
    }
}
