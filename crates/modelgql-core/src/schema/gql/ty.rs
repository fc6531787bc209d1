use super::{EnumType, ObjectType, Scalar};
use once_cell::sync::OnceCell;
use std::{
    fmt,
    sync::{Arc, Weak},
};

/// The type of a GraphQL field.
#[derive(Clone, PartialEq)]
pub enum TypeRef {
    Scalar(Scalar),
    Enum(Arc<EnumType>),
    Object(ObjectRef),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

/// A reference to an object type that may still be under construction.
///
/// Models that reference each other cannot hold each other's finished
/// definitions. A pending reference knows the name of its target and is
/// resolved once the target has been built; every clone observes the
/// resolution.
///
/// Resolved pending references are back-edges of a cycle and do not keep
/// their target alive. They yield the target for as long as something else
/// (the conversion cache, or a caller) owns it.
#[derive(Clone)]
pub struct ObjectRef {
    name: Arc<str>,
    target: Target,
}

#[derive(Clone)]
enum Target {
    Owned(Arc<ObjectType>),
    Pending(Arc<OnceCell<Weak<ObjectType>>>),
}

impl TypeRef {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    /// Wraps the type in a non-null constraint. Already non-null types are
    /// returned unchanged.
    pub fn non_null(ty: impl Into<Self>) -> Self {
        match ty.into() {
            ty @ Self::NonNull(_) => ty,
            ty => Self::NonNull(Box::new(ty)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            _ => false,
        }
    }

    /// The named type at the bottom of any list / non-null wrappers.
    pub fn leaf(&self) -> &TypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.leaf(),
            ty => ty,
        }
    }

    /// Name of the leaf type.
    pub fn name(&self) -> &str {
        match self.leaf() {
            Self::Scalar(scalar) => scalar.name(),
            Self::Enum(enum_type) => &enum_type.name,
            Self::Object(object) => object.name(),
            Self::List(_) | Self::NonNull(_) => unreachable!(),
        }
    }
}

impl ObjectRef {
    /// A reference to a finished object type.
    pub fn resolved(ty: Arc<ObjectType>) -> Self {
        Self {
            name: Arc::from(ty.name.as_str()),
            target: Target::Owned(ty),
        }
    }

    /// A reference to an object type that has not been built yet.
    pub fn pending(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            target: Target::Pending(Arc::new(OnceCell::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The referenced type, once built and while it is still alive.
    pub fn get(&self) -> Option<Arc<ObjectType>> {
        match &self.target {
            Target::Owned(ty) => Some(ty.clone()),
            Target::Pending(slot) => slot.get().and_then(Weak::upgrade),
        }
    }

    pub fn is_resolved(&self) -> bool {
        match &self.target {
            Target::Owned(_) => true,
            Target::Pending(slot) => slot.get().is_some(),
        }
    }

    /// Binds a pending reference to its target without taking ownership of
    /// it. Returns `false` if the reference was already resolved.
    pub fn resolve(&self, ty: &Arc<ObjectType>) -> bool {
        match &self.target {
            Target::Owned(_) => false,
            Target::Pending(slot) => slot.set(Arc::downgrade(ty)).is_ok(),
        }
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl From<Scalar> for TypeRef {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Arc<EnumType>> for TypeRef {
    fn from(value: Arc<EnumType>) -> Self {
        Self::Enum(value)
    }
}

impl From<ObjectRef> for TypeRef {
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}

impl From<Arc<ObjectType>> for TypeRef {
    fn from(value: Arc<ObjectType>) -> Self {
        Self::Object(ObjectRef::resolved(value))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            ty => f.write_str(ty.name()),
        }
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({self})")
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("name", &self.name)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
