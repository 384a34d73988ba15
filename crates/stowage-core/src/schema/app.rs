//! Application-level schema: models as declared, before flattening.

mod embedded;
pub use embedded::{ColumnPrefix, Embedded};

mod field;
pub use field::{Field, FieldId, FieldName, FieldPrimitive, FieldTy};

mod model;
pub use model::{Model, ModelId, ModelKind, ModelRoot};

mod schema;
pub use schema::Schema;

use super::{Name, NamingStrategy};
