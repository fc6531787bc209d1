use super::{Container, Shape, Type};
use crate::Value;

/// A field as reported by the source framework.
///
/// Descriptors are read-only input: the converter never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name, unique within its model
    pub name: String,

    /// Declared type. For containers this is usually generic, e.g.
    /// `Vec<String>` is `Generic { origin: List, args: [Str] }`.
    pub ty: Type,

    /// Container structure of the field
    pub shape: Shape,

    /// True if a value must always be supplied
    pub required: bool,

    /// Default value; `None` means the field has no default
    pub default: Option<Value>,

    /// The type as written before the source framework unwrapped it, when
    /// the two differ.
    pub outer_ty: Option<Type>,

    /// False if the container's items are themselves optional
    pub item_required: bool,
}

/// What the source framework knows about a Rust type used as a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    pub ty: Type,
    pub shape: Shape,

    /// The value may be absent (`Option<T>`)
    pub nullable: bool,

    /// Container items may be absent (`Vec<Option<T>>`)
    pub item_nullable: bool,
}

impl Field {
    /// A required, single-valued field without a default.
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            shape: Shape::Singleton,
            required: true,
            default: None,
            outer_ty: None,
            item_required: true,
        }
    }

    /// A required list field with the given item type.
    pub fn list(name: impl Into<String>, item: impl Into<Type>) -> Self {
        Self::new(name, Type::generic(Container::List, [item.into()])).with_shape(Shape::List)
    }

    /// Builds a field from a type descriptor. A field is required when its
    /// type is not nullable and it has no default.
    pub fn from_descriptor(
        name: impl Into<String>,
        descriptor: Descriptor,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: descriptor.ty,
            shape: descriptor.shape,
            required: !descriptor.nullable && default.is_none(),
            default,
            outer_ty: None,
            item_required: !descriptor.item_nullable,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Marks the field as not required.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets a default value. Fields with a default are not required.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self.required = false;
        self
    }

    pub fn with_outer_ty(mut self, outer_ty: impl Into<Type>) -> Self {
        self.outer_ty = Some(outer_ty.into());
        self
    }

    /// Marks the container's items as optional.
    pub fn with_optional_items(mut self) -> Self {
        self.item_required = false;
        self
    }
}

impl Descriptor {
    /// Descriptor for a single, non-nullable value.
    pub fn singleton(ty: impl Into<Type>) -> Self {
        Self {
            ty: ty.into(),
            shape: Shape::Singleton,
            nullable: false,
            item_nullable: false,
        }
    }

    /// Descriptor for a container of `item`.
    pub fn container(shape: Shape, origin: Container, items: impl IntoIterator<Item = Descriptor>) -> Self {
        let items: Vec<_> = items.into_iter().collect();
        let item_nullable = items.first().map_or(false, |item| item.nullable);

        Self {
            ty: Type::generic(origin, items.into_iter().map(|item| item.ty)),
            shape,
            nullable: false,
            item_nullable,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
