//! Schemas on both sides of a conversion.
//!
//! [`source`] describes declared models as the source framework reports
//! them. [`gql`] is the GraphQL type system the converter synthesizes.

pub mod gql;

mod name;
pub use name::bare_type_name;

pub mod source;
