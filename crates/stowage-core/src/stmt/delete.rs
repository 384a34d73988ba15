use super::Expr;
use crate::schema::app::ModelId;

/// Deletes every instance of a model matching the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: ModelId,
    pub filter: Option<Expr>,
}

impl Delete {
    pub fn new(from: impl Into<ModelId>) -> Delete {
        Delete {
            from: from.into(),
            filter: None,
        }
    }

    pub fn filter(mut self, expr: impl Into<Expr>) -> Delete {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }
}
