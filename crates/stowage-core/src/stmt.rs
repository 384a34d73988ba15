//! Values, rows and the statements that address model fields by dotted path.

mod delete;
pub use delete::Delete;

mod eval;

mod expr;
pub use expr::{Expr, ExprAnd, ExprBinaryOp, ExprCast, ExprIsNull};

mod lower;
pub use lower::{DeletePlan, Projection, SelectPlan, UpdatePlan};

mod op_binary;
pub use op_binary::BinaryOp;

mod params;
pub use params::Params;

mod row;
pub use row::Row;

mod select;
pub use select::{Returning, Select};

mod ty;
pub use ty::Type;

mod update;
pub use update::{Assignment, Update};

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
