//! Converts declared data models into GraphQL object, input object and
//! interface types.
//!
//! ```
//! use modelgql::{Enum, Kind, Model};
//!
//! #[derive(Enum)]
//! #[model(rename_all = "UPPERCASE")]
//! enum Specie {
//!     Dog,
//!     Cat,
//! }
//!
//! #[derive(Model)]
//! struct Pet {
//!     name: String,
//!     specie: Specie,
//! }
//!
//! let ty = modelgql::to_graphql::<Pet>(Kind::Object).unwrap();
//! assert_eq!(ty.name, "PetGql");
//! assert_eq!(
//!     modelgql::sdl::print(&ty),
//!     "type PetGql {\n  name: String!\n  specie: Specie!\n}\n\nenum Specie {\n  DOG\n  CAT\n}\n"
//! );
//! ```

extern crate self as modelgql;

mod adapter;
pub use adapter::{Config, Converter};

pub mod classify;

mod context;
pub use context::Context;

mod convert;

mod field_type;
pub use field_type::FieldType;

#[cfg(feature = "chrono")]
mod field_type_chrono;

#[cfg(feature = "uuid")]
mod field_type_uuid;

mod model;
pub use model::{Enum, IntoModelRef, Model};

mod options;
pub use options::{ConversionOptions, Member};

mod scalars;
pub use scalars::ScalarTable;

pub use modelgql_core::{
    schema::{
        bare_type_name,
        gql::{self, sdl, Kind, ObjectType, Scalar},
        source,
    },
    Capability, Error, Result, Value,
};

pub use modelgql_macros::{Enum, Model};

use std::sync::Arc;

/// Converts `M` with default options, using the process-wide context.
pub fn to_graphql<M: Model>(kind: Kind) -> Result<Arc<ObjectType>> {
    to_graphql_with(M::model_ref(), kind, &ConversionOptions::default())
}

/// Converts any model handle with the given options, using the
/// process-wide context.
pub fn to_graphql_with(
    model: impl IntoModelRef,
    kind: Kind,
    options: &ConversionOptions,
) -> Result<Arc<ObjectType>> {
    Context::global().convert_model(model, kind, options)
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Enum, FieldType, Model, Value};
    pub use modelgql_core::schema::source::{Descriptor, EnumMember, Field};
}
