use super::BuildSchema;
use crate::{
    schema::{
        app,
        db::{self, Table, TableId},
        Mapping, Name,
    },
    Error, Result,
};
use indexmap::IndexMap;

impl BuildSchema<'_> {
    /// Derives one table per distinct table name and links each root model
    /// mapping to its table. Models of a single-table hierarchy share the
    /// table of the hierarchy's top root.
    pub(super) fn build_tables(&self, mapping: &mut Mapping) -> Result<db::Schema> {
        let mut table_lookup = IndexMap::<String, TableId>::new();
        let mut tables = vec![];

        for model in self.app.models().filter(|model| model.is_root()) {
            let name = self.table_name_for(model);

            let id = *table_lookup.entry(name.clone()).or_insert_with(|| {
                let id = TableId(tables.len());
                tables.push(Table::new(id, name));
                id
            });

            if let Some(model_mapping) = mapping.models.get_mut(&model.id) {
                model_mapping.table = Some(id);
            }
        }

        for table in &mut tables {
            let models = mapping
                .models
                .values()
                .filter(|model| model.table == Some(table.id))
                .collect::<Vec<_>>();

            // How many of the table's models write each column
            let mut writers = vec![];

            for model in &models {
                for column in &model.columns {
                    match table.columns.iter().position(|c| c.name == column.name) {
                        Some(index) => {
                            let existing = &mut table.columns[index];

                            if existing.ty != column.ty {
                                return Err(Error::invalid_schema(format!(
                                    "column `{}` of table `{}` is mapped as both {} and {}",
                                    column.name, table.name, existing.ty, column.ty
                                )));
                            }

                            existing.nullable |= column.nullable;
                            existing.primary_key |= column.primary_key;
                            writers[index] += 1;
                        }
                        None => {
                            table.columns.push(column.clone());
                            writers.push(1);
                        }
                    }
                }
            }

            // A column not written by every model of the table is null in the
            // rows of the others
            for (column, writers) in table.columns.iter_mut().zip(writers) {
                if writers < models.len() {
                    column.nullable = true;
                }
            }

            table.primary_key = table
                .columns
                .iter()
                .enumerate()
                .filter(|(_, column)| column.primary_key)
                .map(|(index, _)| index)
                .collect();

            tracing::debug!(
                table = %table.name,
                models = models.len(),
                columns = table.columns.len(),
                "built table"
            );
        }

        Ok(db::Schema { tables })
    }

    fn table_name_for(&self, model: &app::Model) -> String {
        let top = self.hierarchy_root(model);

        match top.as_root().and_then(|root| root.table_name.as_ref()) {
            Some(table_name) => self.prefix_table_name(table_name),
            None => self.table_name_from_model(&top.name),
        }
    }

    fn table_name_from_model(&self, model_name: &Name) -> String {
        let base = std_util::str::pluralize(&model_name.snake_case());
        self.prefix_table_name(&base)
    }

    fn prefix_table_name(&self, name: &str) -> String {
        if let Some(prefix) = &self.builder.table_name_prefix {
            format!("{prefix}{name}")
        } else {
            name.to_string()
        }
    }
}
