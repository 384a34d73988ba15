use super::{BinaryOp, Expr, Params, Row, Value};
use crate::{Error, Result};

impl Expr {
    /// Evaluates a lowered expression against a row.
    ///
    /// Comparisons follow SQL semantics: comparing with `Null` yields `Null`,
    /// and `AND` is false as soon as one operand is false.
    pub fn eval(&self, row: &Row, params: &Params) -> Result<Value> {
        match self {
            Expr::And(expr_and) => {
                let mut saw_null = false;

                for operand in &expr_and.operands {
                    match operand.eval(row, params)? {
                        Value::Bool(true) => {}
                        Value::Bool(false) => return Ok(Value::Bool(false)),
                        Value::Null => saw_null = true,
                        value => return Err(Error::type_conversion(&value, "Bool")),
                    }
                }

                Ok(if saw_null {
                    Value::Null
                } else {
                    Value::Bool(true)
                })
            }
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval(row, params)?;
                let rhs = expr_binary_op.rhs.eval(row, params)?;

                if lhs.is_null() || rhs.is_null() {
                    return Ok(Value::Null);
                }

                Ok(Value::Bool(match expr_binary_op.op {
                    BinaryOp::Eq => lhs == rhs,
                    BinaryOp::Ne => lhs != rhs,
                }))
            }
            Expr::Cast(expr_cast) => expr_cast.ty.cast(expr_cast.expr.eval(row, params)?),
            Expr::Column(name) => Ok(row.get(name).clone()),
            Expr::IsNull(expr_is_null) => {
                Ok(Value::Bool(expr_is_null.expr.eval(row, params)?.is_null()))
            }
            Expr::Param(name) => params.get(name).cloned().ok_or_else(|| {
                Error::invalid_statement(format!("parameter `{name}` is not bound"))
            }),
            Expr::Path(path) => Err(Error::invalid_statement(format!(
                "field path `{path}` must be lowered before evaluation"
            ))),
            Expr::Value(value) => Ok(value.clone()),
        }
    }

    /// Evaluates the expression as a filter. Only `true` matches.
    pub fn eval_filter(&self, row: &Row, params: &Params) -> Result<bool> {
        Ok(matches!(self.eval(row, params)?, Value::Bool(true)))
    }
}
