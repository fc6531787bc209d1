use super::Field;
use std::{any::TypeId, fmt, sync::Arc};

/// Generate a unique id for a model or enum built at runtime.
///
/// This function uses a global atomic counter to ensure each call returns a
/// unique id. This is thread-safe and can be called concurrently.
pub fn generate_unique_id() -> usize {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identity of a declared model or enum.
///
/// Conversion results are cached by identity, never by name or shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// Declared by a Rust type
    Type(TypeId),

    /// Built at runtime
    Dynamic(usize),
}

/// A handle to a declared model.
///
/// Field descriptors are produced on demand, so a model may reference itself
/// (directly or through other models) without building an infinite
/// structure.
#[derive(Clone)]
pub struct ModelRef {
    id: ModelId,
    name: Arc<str>,
    fields: Fields,
}

#[derive(Clone)]
enum Fields {
    Static(fn() -> Vec<Field>),
    Dynamic(Arc<[Field]>),
}

impl ModelRef {
    /// Handle for a model backed by a Rust type.
    pub fn from_type(id: TypeId, name: impl Into<Arc<str>>, fields: fn() -> Vec<Field>) -> Self {
        Self {
            id: ModelId::Type(id),
            name: name.into(),
            fields: Fields::Static(fields),
        }
    }

    /// Handle for a model built at runtime. Every call yields a new
    /// identity, even for identical fields.
    pub fn dynamic(name: impl Into<Arc<str>>, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            id: ModelId::Dynamic(generate_unique_id()),
            name: name.into(),
            fields: Fields::Dynamic(fields.into_iter().collect()),
        }
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    /// The model's bare name, without module path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field descriptors in declaration order, freshly produced.
    pub fn fields(&self) -> Vec<Field> {
        match &self.fields {
            Fields::Static(fields) => fields(),
            Fields::Dynamic(fields) => fields.to_vec(),
        }
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for ModelRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("ModelRef")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
