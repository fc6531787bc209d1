mod capability;
pub use capability::{Capability, Scalars, Shapes};

mod error;
pub use error::Error;

pub mod schema;

/// A Result type alias that uses modelgql's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Default values carried by source fields and emitted on GraphQL fields.
pub use serde_json::Value;
