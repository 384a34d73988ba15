mod error;
pub use error::Error;

mod load;
pub use load::Load;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses Stowage's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
