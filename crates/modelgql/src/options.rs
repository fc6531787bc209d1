use indexmap::{IndexMap, IndexSet};
use modelgql_core::{
    schema::gql::{Field, Scalar, TypeRef},
    Error, Result, Value,
};

/// Options for converting a single model.
///
/// Nested models are always converted with default options.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConversionOptions {
    /// When set, a required `ID` field with this name is emitted last.
    pub id_field_name: Option<String>,

    /// Fields emitted as given, after the model's own fields. A model field
    /// with the same name is not converted.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub extra_fields: IndexMap<String, Member>,

    /// Model fields never emitted.
    pub exclude_fields: IndexSet<String>,

    /// Overrides the generated type name.
    pub class_name: Option<String>,

    /// When `false`, a previously converted type is not reused. The new
    /// type still replaces the cached one.
    pub use_cache: bool,
}

/// A member of a declarative converter, or an extra field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// A GraphQL field
    Field(Field),

    /// Any other value
    Value(Value),
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id_field_name(mut self, name: impl Into<String>) -> Self {
        self.id_field_name = Some(name.into());
        self
    }

    pub fn extra_field(mut self, name: impl Into<String>, member: impl Into<Member>) -> Self {
        self.extra_fields.insert(name.into(), member.into());
        self
    }

    pub fn exclude_field(mut self, name: impl Into<String>) -> Self {
        self.exclude_fields.insert(name.into());
        self
    }

    pub fn exclude_fields<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.exclude_fields.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// Checks that every extra field is a GraphQL field.
    pub fn validate(&self) -> Result<()> {
        for (name, member) in &self.extra_fields {
            if !member.is_field() {
                return Err(Error::invalid_type(name));
            }
        }

        Ok(())
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            id_field_name: None,
            extra_fields: IndexMap::new(),
            exclude_fields: IndexSet::new(),
            class_name: None,
            use_cache: true,
        }
    }
}

impl Member {
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(field) => Some(field),
            Self::Value(_) => None,
        }
    }
}

impl From<Field> for Member {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<TypeRef> for Member {
    fn from(ty: TypeRef) -> Self {
        Self::Field(Field::new(ty))
    }
}

impl From<Scalar> for Member {
    fn from(scalar: Scalar) -> Self {
        Self::Field(Field::new(scalar))
    }
}

impl From<Value> for Member {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
