use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Eq => "=".fmt(f),
            BinaryOp::Ne => "!=".fmt(f),
        }
    }
}
