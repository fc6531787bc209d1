//! GraphQL type system produced by the converter.

mod enum_type;
pub use enum_type::EnumType;

mod field;
pub use field::Field;

mod object;
pub use object::{Kind, ObjectType};

mod scalar;
pub use scalar::Scalar;

pub mod sdl;

mod ty;
pub use ty::{ObjectRef, TypeRef};
