//! Source-side schema: models, fields and types as declared.

mod class;
pub use class::Class;

mod enumeration;
pub use enumeration::{EnumMember, EnumRef};

mod field;
pub use field::{Descriptor, Field};

mod model;
pub use model::{generate_unique_id, ModelId, ModelRef};

mod primitive;
pub use primitive::Primitive;

mod shape;
pub use shape::Shape;

mod ty;
pub use ty::{Container, Type};
