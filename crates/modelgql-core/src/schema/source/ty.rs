use super::{Class, EnumRef, ModelRef, Primitive};
use std::sync::Arc;

/// A declared field type.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A leaf type such as a string or a date
    Primitive(Primitive),

    /// An enumeration
    Enum(EnumRef),

    /// Another model, converted recursively
    Model(ModelRef),

    /// A user-defined type with ancestors
    Class(Arc<Class>),

    /// A parameterized container, e.g. `Vec<String>`
    Generic { origin: Container, args: Vec<Type> },

    /// A container declared without an element type
    Raw(Container),

    /// Any value at all
    Any,

    /// An unbound type parameter
    TypeVar(String),

    /// A function
    Callable,

    /// A reference to a type itself, rather than a value of it
    TypeOf(Box<Type>),
}

/// Container families that can appear as a generic origin or as a raw type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    List,
    Tuple,
    Dict,
    Set,
    FrozenSet,
    Sequence,
    Iterable,
}

impl Type {
    pub fn generic(origin: Container, args: impl IntoIterator<Item = Type>) -> Self {
        Self::Generic {
            origin,
            args: args.into_iter().collect(),
        }
    }

    pub fn class(class: Class) -> Self {
        Self::Class(Arc::new(class))
    }

    /// Type arguments, empty unless the type is generic.
    pub fn args(&self) -> &[Type] {
        match self {
            Self::Generic { args, .. } => args,
            _ => &[],
        }
    }

    pub fn as_enum(&self) -> Option<&EnumRef> {
        match self {
            Self::Enum(enum_ref) => Some(enum_ref),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&ModelRef> {
        match self {
            Self::Model(model) => Some(model),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }
}

impl From<Primitive> for Type {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<ModelRef> for Type {
    fn from(value: ModelRef) -> Self {
        Self::Model(value)
    }
}

impl From<EnumRef> for Type {
    fn from(value: EnumRef) -> Self {
        Self::Enum(value)
    }
}

impl From<Class> for Type {
    fn from(value: Class) -> Self {
        Self::class(value)
    }
}
