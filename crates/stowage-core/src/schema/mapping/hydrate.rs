use super::{Field, Model};
use crate::{
    schema::db::Column,
    stmt::{Row, Value, ValueRecord},
    Error, Result,
};

impl Model {
    /// Flattens an instance into a row.
    ///
    /// An embedded slot holding `Null` contributes no columns at all, whatever
    /// the declared nullability of the embedding.
    pub fn dehydrate(&self, instance: &ValueRecord) -> Result<Row> {
        let mut row = Row::new();

        if let Some(discriminator) = &self.discriminator {
            if let Some(value) = &discriminator.value {
                row.set(&self.columns[discriminator.column].name, value);
            }
        }

        check_arity(instance, &self.fields, self.name.as_str())?;
        dehydrate_fields(&self.columns, &self.fields, instance, &mut row)?;

        Ok(row)
    }

    /// Rebuilds an instance from a row. Missing columns read as `Null`.
    ///
    /// A nullable embedding whose columns are all `Null` is left `Null`.
    /// Otherwise the value object is constructed, with `Null` members where
    /// columns are `Null`.
    pub fn hydrate(&self, row: &Row) -> Result<ValueRecord> {
        hydrate_fields(&self.columns, &self.fields, row)
    }

    /// Flattens the value assigned to the field at `path` into its columns.
    /// Columns of absent nested values are set to `Null`, so every column of
    /// the subtree is present in the result.
    pub(crate) fn dehydrate_path(&self, path: &str, value: &Value) -> Result<Row> {
        let resolved = self.resolve_path(path)?;

        if let Field::Embedded(embedded) = resolved.field {
            if value.is_null() && !embedded.nullable {
                return Err(Error::invalid_statement(format!(
                    "embedded field `{path}` is not nullable"
                )));
            }
        }

        let mut row = Row::new();
        dehydrate_field(&self.columns, resolved.field, value, &mut row)?;

        for column in resolved.columns() {
            if !row.contains(&column.name) {
                row.set(&column.name, Value::Null);
            }
        }

        Ok(row)
    }
}

fn dehydrate_fields(
    columns: &[Column],
    fields: &[Field],
    record: &ValueRecord,
    row: &mut Row,
) -> Result<()> {
    for (field, value) in fields.iter().zip(record.iter()) {
        dehydrate_field(columns, field, value, row)?;
    }

    Ok(())
}

fn dehydrate_field(columns: &[Column], field: &Field, value: &Value, row: &mut Row) -> Result<()> {
    match field {
        Field::Primitive(primitive) => {
            row.set(&columns[primitive.column].name, primitive.ty.cast(value.clone())?);
        }
        Field::Embedded(embedded) => match value {
            Value::Null => {}
            Value::Record(record) => {
                check_arity(record, &embedded.fields, &embedded.name)?;
                dehydrate_fields(columns, &embedded.fields, record, row)?;
            }
            _ => {
                return Err(Error::type_conversion(
                    value,
                    format!("embedded `{}`", embedded.name),
                ))
            }
        },
    }

    Ok(())
}

fn hydrate_fields(columns: &[Column], fields: &[Field], row: &Row) -> Result<ValueRecord> {
    let mut values = Vec::with_capacity(fields.len());

    for field in fields {
        let value = match field {
            Field::Primitive(primitive) => {
                let value = row.get(&columns[primitive.column].name);

                if !value.is_a(&primitive.ty) {
                    return Err(Error::type_conversion(value, primitive.ty));
                }

                value.clone()
            }
            Field::Embedded(embedded) => {
                let absent = embedded
                    .columns
                    .iter()
                    .all(|index| row.get(&columns[*index].name).is_null());

                if absent && embedded.nullable {
                    Value::Null
                } else {
                    Value::Record(hydrate_fields(columns, &embedded.fields, row)?)
                }
            }
        };

        values.push(value);
    }

    Ok(ValueRecord::from_vec(values))
}

fn check_arity(record: &ValueRecord, fields: &[Field], name: &str) -> Result<()> {
    if record.len() == fields.len() {
        return Ok(());
    }

    Err(Error::type_conversion(
        &Value::Record(record.clone()),
        format!("`{name}` ({} fields)", fields.len()),
    ))
}
