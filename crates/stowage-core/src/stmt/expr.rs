use super::{BinaryOp, Type, Value};

/// A filter or assignment expression.
///
/// Statements are written against model fields with [`Expr::Path`]. Lowering
/// resolves every path through the model's mapping and replaces it with
/// [`Expr::Column`] references before the expression is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Converts the value of an expression to a column type
    Cast(ExprCast),

    /// References a physical column of the row being evaluated
    Column(String),

    /// Whether an expression is null
    IsNull(ExprIsNull),

    /// A named parameter bound when the statement is evaluated
    Param(String),

    /// A dotted path to a (possibly nested) model field, e.g. `address.city`
    Path(String),

    /// Evaluates to a constant value
    Value(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    /// Expression to cast
    pub expr: Box<Expr>,

    /// Type to cast to
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut operands = vec![];

        for expr in [lhs.into(), rhs.into()] {
            match expr {
                Self::And(and) => operands.extend(and.operands),
                expr => operands.push(expr),
            }
        }

        Self::And(ExprAnd { operands })
    }

    pub fn and_from_vec(operands: Vec<Self>) -> Self {
        match <[Self; 1]>::try_from(operands) {
            Ok([expr]) => expr,
            Err(operands) => Self::And(ExprAnd { operands }),
        }
    }

    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        Self::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn cast(expr: impl Into<Self>, ty: Type) -> Self {
        Self::Cast(ExprCast {
            expr: Box::new(expr.into()),
            ty,
        })
    }

    pub fn is_null(expr: impl Into<Self>) -> Self {
        Self::IsNull(ExprIsNull {
            expr: Box::new(expr.into()),
        })
    }

    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn param(name: impl Into<String>) -> Self {
        Self::Param(name.into())
    }

    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
