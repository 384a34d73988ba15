use super::{Delete, Expr, Params, Returning, Row, Select, Type, Update, Value};
use crate::{
    schema::{app::ModelId, mapping, Schema},
    Error, Result,
};

/// A select whose field paths have been replaced by column references.
#[derive(Debug)]
pub struct SelectPlan<'a> {
    pub mapping: &'a mapping::Model,

    /// Lowered filter, including the discriminator predicate of single-table
    /// subclasses
    pub filter: Option<Expr>,

    pub projection: Projection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Hydrate the whole model
    Model,

    /// `(key, column)` pairs. The key is the dotted path of a primitive field.
    Columns(Vec<(String, String)>),
}

/// An update lowered to column assignments.
#[derive(Debug)]
pub struct UpdatePlan<'a> {
    pub mapping: &'a mapping::Model,

    /// `(column, expr)` pairs. An embedded assignment expands to one pair per
    /// column of the embedded value. Expressions other than literals are cast
    /// to the column type.
    pub assignments: Vec<(String, Expr)>,

    pub filter: Option<Expr>,
}

#[derive(Debug)]
pub struct DeletePlan<'a> {
    pub mapping: &'a mapping::Model,
    pub filter: Option<Expr>,
}

impl Schema {
    pub fn lower_select(&self, select: &Select) -> Result<SelectPlan<'_>> {
        let mapping = self.queryable(select.source)?;
        let filter = lower_filter(mapping, select.filter.as_ref())?;

        let projection = match &select.returning {
            Returning::Model => Projection::Model,
            Returning::Paths(paths) => {
                let mut columns = vec![];

                for path in paths {
                    let resolved = mapping.resolve_path(path)?;

                    if resolved.is_embedded() {
                        let prefix = format!("{path}.");

                        for (nested, index) in &mapping.paths {
                            if nested.starts_with(&prefix) {
                                columns.push((nested.clone(), mapping.column(*index).name.clone()));
                            }
                        }
                    } else {
                        columns.push((path.clone(), mapping.column_name(path)?.to_string()));
                    }
                }

                Projection::Columns(columns)
            }
        };

        tracing::debug!(model = %mapping.name, ?filter, "lowered select");

        Ok(SelectPlan {
            mapping,
            filter,
            projection,
        })
    }

    pub fn lower_update(&self, update: &Update) -> Result<UpdatePlan<'_>> {
        let mapping = self.queryable(update.target)?;
        let mut assignments = vec![];

        for assignment in &update.assignments {
            let path = &assignment.path;
            let resolved = mapping.resolve_path(path)?;

            match &assignment.expr {
                Expr::Value(value) => {
                    for (column, value) in mapping.dehydrate_path(path, value)?.iter() {
                        assignments.push((column.to_string(), Expr::Value(value.clone())));
                    }
                }
                _ if resolved.is_embedded() => {
                    return Err(Error::invalid_statement(format!(
                        "embedded field `{path}` can only be assigned a value"
                    )))
                }
                expr => {
                    let column = mapping.column_name(path)?.to_string();
                    let mut expr = lower_expr(mapping, expr)?;

                    if let Some(primitive) = resolved.field.as_primitive() {
                        expr = Expr::cast(expr, primitive.ty);
                    }

                    assignments.push((column, expr));
                }
            }
        }

        let filter = lower_filter(mapping, update.filter.as_ref())?;

        tracing::debug!(
            model = %mapping.name,
            assignments = assignments.len(),
            ?filter,
            "lowered update"
        );

        Ok(UpdatePlan {
            mapping,
            assignments,
            filter,
        })
    }

    pub fn lower_delete(&self, delete: &Delete) -> Result<DeletePlan<'_>> {
        let mapping = self.queryable(delete.from)?;
        let filter = lower_filter(mapping, delete.filter.as_ref())?;

        tracing::debug!(model = %mapping.name, ?filter, "lowered delete");

        Ok(DeletePlan { mapping, filter })
    }

    fn queryable(&self, id: ModelId) -> Result<&mapping::Model> {
        let mapping = self.mapping_checked(id)?;

        if mapping.table.is_none() {
            return Err(Error::invalid_statement(format!(
                "`{}` is an embeddable and cannot be queried on its own",
                mapping.name
            )));
        }

        Ok(mapping)
    }
}

impl SelectPlan<'_> {
    pub fn matches(&self, row: &Row, params: &Params) -> Result<bool> {
        matches(self.filter.as_ref(), row, params)
    }

    /// Builds the result of one matching row: the hydrated instance, or a
    /// record holding the projected columns in key order.
    pub fn project(&self, row: &Row) -> Result<Value> {
        match &self.projection {
            Projection::Model => Ok(Value::Record(self.mapping.hydrate(row)?)),
            Projection::Columns(columns) => Ok(Value::record_from_vec(
                columns
                    .iter()
                    .map(|(_, column)| row.get(column).clone())
                    .collect(),
            )),
        }
    }

    pub fn execute<'r>(
        &self,
        rows: impl IntoIterator<Item = &'r Row>,
        params: &Params,
    ) -> Result<Vec<Value>> {
        let mut results = vec![];

        for row in rows {
            if self.matches(row, params)? {
                results.push(self.project(row)?);
            }
        }

        Ok(results)
    }
}

impl UpdatePlan<'_> {
    /// Applies the assignments if the row matches. Right-hand sides see the
    /// row as it was before the update. If any assignment fails, the row is
    /// left unchanged.
    pub fn apply(&self, row: &mut Row, params: &Params) -> Result<bool> {
        if !matches(self.filter.as_ref(), row, params)? {
            return Ok(false);
        }

        let mut values = Vec::with_capacity(self.assignments.len());
        for (column, expr) in &self.assignments {
            values.push((column, expr.eval(row, params)?));
        }

        for (column, value) in values {
            row.set(column, value);
        }

        Ok(true)
    }

    /// Returns the number of updated rows.
    pub fn execute<'r>(
        &self,
        rows: impl IntoIterator<Item = &'r mut Row>,
        params: &Params,
    ) -> Result<usize> {
        let mut updated = 0;

        for row in rows {
            if self.apply(row, params)? {
                updated += 1;
            }
        }

        Ok(updated)
    }
}

impl DeletePlan<'_> {
    pub fn matches(&self, row: &Row, params: &Params) -> Result<bool> {
        matches(self.filter.as_ref(), row, params)
    }

    /// Removes the matching rows and returns how many were removed. Nothing
    /// is removed if the filter fails on any row.
    pub fn execute(&self, rows: &mut Vec<Row>, params: &Params) -> Result<usize> {
        let mut keep = Vec::with_capacity(rows.len());
        for row in rows.iter() {
            keep.push(!self.matches(row, params)?);
        }

        let before = rows.len();
        let mut keep = keep.into_iter();
        rows.retain(|_| keep.next().unwrap_or(true));

        Ok(before - rows.len())
    }
}

fn matches(filter: Option<&Expr>, row: &Row, params: &Params) -> Result<bool> {
    match filter {
        Some(filter) => filter.eval_filter(row, params),
        None => Ok(true),
    }
}

fn lower_filter(mapping: &mapping::Model, filter: Option<&Expr>) -> Result<Option<Expr>> {
    let filter = filter.map(|expr| lower_expr(mapping, expr)).transpose()?;

    let discriminator = mapping.discriminator.as_ref().and_then(|discriminator| {
        let value = discriminator.value.as_deref()?;
        let column = &mapping.column(discriminator.column).name;
        Some(Expr::eq(Expr::column(column), Expr::value(value)))
    });

    Ok(match (discriminator, filter) {
        (Some(discriminator), Some(filter)) => Some(Expr::and(discriminator, filter)),
        (discriminator, filter) => discriminator.or(filter),
    })
}

fn lower_expr(mapping: &mapping::Model, expr: &Expr) -> Result<Expr> {
    match expr {
        Expr::And(expr_and) => Ok(Expr::and_from_vec(
            expr_and
                .operands
                .iter()
                .map(|operand| lower_expr(mapping, operand))
                .collect::<Result<_>>()?,
        )),
        // Operands compared with a field take the field's column type
        Expr::BinaryOp(expr_binary_op) => {
            let lhs_ty = operand_ty(mapping, &expr_binary_op.lhs)?;
            let rhs_ty = operand_ty(mapping, &expr_binary_op.rhs)?;

            Ok(Expr::binary_op(
                coerce(lower_expr(mapping, &expr_binary_op.lhs)?, rhs_ty)?,
                expr_binary_op.op,
                coerce(lower_expr(mapping, &expr_binary_op.rhs)?, lhs_ty)?,
            ))
        }
        Expr::Cast(expr_cast) => Ok(Expr::cast(
            lower_expr(mapping, &expr_cast.expr)?,
            expr_cast.ty,
        )),
        // `address IS NULL` holds when every column of the value is null
        Expr::IsNull(expr_is_null) => match &*expr_is_null.expr {
            Expr::Path(path) => {
                let resolved = mapping.resolve_path(path)?;

                Ok(Expr::and_from_vec(
                    resolved
                        .columns()
                        .map(|column| Expr::is_null(Expr::column(&column.name)))
                        .collect(),
                ))
            }
            expr => Ok(Expr::is_null(lower_expr(mapping, expr)?)),
        },
        Expr::Path(path) => {
            let resolved = mapping.resolve_path(path)?;

            if resolved.is_embedded() {
                return Err(Error::invalid_statement(format!(
                    "embedded field `{path}` cannot be compared as a whole; compare its fields instead"
                )));
            }

            Ok(Expr::column(mapping.column_name(path)?))
        }
        Expr::Column(_) | Expr::Param(_) | Expr::Value(_) => Ok(expr.clone()),
    }
}

/// The column type of an operand that names a primitive field.
fn operand_ty(mapping: &mapping::Model, expr: &Expr) -> Result<Option<Type>> {
    match expr {
        Expr::Path(path) => {
            let resolved = mapping.resolve_path(path)?;
            Ok(resolved.field.as_primitive().map(|primitive| primitive.ty))
        }
        _ => Ok(None),
    }
}

/// Literals are converted while lowering. Parameters are converted when they
/// are bound, at evaluation time.
fn coerce(expr: Expr, ty: Option<Type>) -> Result<Expr> {
    match (expr, ty) {
        (Expr::Value(value), Some(ty)) => Ok(Expr::Value(ty.cast(value)?)),
        (expr @ Expr::Param(_), Some(ty)) => Ok(Expr::cast(expr, ty)),
        (expr, _) => Ok(expr),
    }
}
