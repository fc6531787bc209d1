use super::{generate_unique_id, ModelId};
use crate::Value;
use std::{any::TypeId, fmt, sync::Arc};

/// A handle to a declared enumeration.
///
/// Only member names reach the GraphQL schema; values are kept for
/// completeness.
#[derive(Clone)]
pub struct EnumRef {
    id: ModelId,
    name: Arc<str>,
    members: Arc<[EnumMember]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: Value,
}

impl EnumRef {
    /// Handle for an enumeration backed by a Rust type.
    pub fn from_type(
        id: TypeId,
        name: impl Into<Arc<str>>,
        members: impl IntoIterator<Item = EnumMember>,
    ) -> Self {
        Self {
            id: ModelId::Type(id),
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }

    /// Handle for an enumeration built at runtime. Every call yields a new
    /// identity.
    pub fn dynamic(name: impl Into<Arc<str>>, members: impl IntoIterator<Item = EnumMember>) -> Self {
        Self {
            id: ModelId::Dynamic(generate_unique_id()),
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl PartialEq for EnumRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for EnumRef {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("EnumRef")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
