//! Predicates deciding how a field's shape and type are converted.

use modelgql_core::{
    schema::source::{Shape, Type},
    Capability,
};

/// Returns `true` if fields of this shape become GraphQL lists.
pub fn is_list_shape(cap: &Capability, shape: Shape) -> bool {
    match shape {
        Shape::List
        | Shape::Tuple
        | Shape::TupleEllipsis
        | Shape::Sequence
        | Shape::Set
        | Shape::FrozenSet => true,
        Shape::Iterable => cap.has_shape(shape),
        _ => false,
    }
}

/// Returns `true` if fields of this shape cannot be represented at all.
pub fn is_not_supported_shape(cap: &Capability, shape: Shape) -> bool {
    match shape {
        Shape::Mapping => true,
        Shape::Dict | Shape::DefaultDict | Shape::Counter => cap.has_shape(shape),
        _ => false,
    }
}

pub fn is_enum_type(ty: &Type) -> bool {
    matches!(ty, Type::Enum(_))
}

pub fn is_nested_model_type(ty: &Type) -> bool {
    matches!(ty, Type::Model(_))
}

/// Returns `true` for containers declared without an element type.
pub fn is_field_not_allowed_type(ty: &Type) -> bool {
    matches!(ty, Type::Raw(_))
}
