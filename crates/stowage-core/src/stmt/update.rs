use super::Expr;
use crate::schema::app::ModelId;

/// Updates every instance of a model matching the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub target: ModelId,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Expr>,
}

/// `SET <path> = <expr>`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub path: String,
    pub expr: Expr,
}

impl Update {
    pub fn new(target: impl Into<ModelId>) -> Update {
        Update {
            target: target.into(),
            assignments: vec![],
            filter: None,
        }
    }

    pub fn set(mut self, path: impl Into<String>, expr: impl Into<Expr>) -> Update {
        self.assignments.push(Assignment {
            path: path.into(),
            expr: expr.into(),
        });
        self
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Update {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }
}
