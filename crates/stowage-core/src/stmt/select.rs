use super::Expr;
use crate::schema::app::ModelId;

/// Selects instances of a model, optionally filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub source: ModelId,
    pub filter: Option<Expr>,
    pub returning: Returning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// The whole model: every mapped field
    Model,

    /// The listed dotted field paths. Embedded paths expand to every nested
    /// field beneath them.
    Paths(Vec<String>),
}

impl Select {
    pub fn new(source: impl Into<ModelId>) -> Select {
        Select {
            source: source.into(),
            filter: None,
            returning: Returning::Model,
        }
    }

    /// ANDs `expr` into the statement's filter.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Select {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }

    pub fn returning<I>(mut self, paths: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.returning = Returning::Paths(paths.into_iter().map(Into::into).collect());
        self
    }
}
