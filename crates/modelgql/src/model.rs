use modelgql_core::schema::{
    bare_type_name,
    source::{EnumMember, EnumRef, Field, ModelRef},
};
use std::any::{type_name, TypeId};

/// A data model that can be converted into a GraphQL type.
///
/// Usually implemented with `#[derive(Model)]`.
pub trait Model: Sized + 'static {
    /// The model's name, used as the prefix of generated type names.
    fn model_name() -> String {
        bare_type_name(type_name::<Self>()).to_string()
    }

    /// Field descriptors in declaration order.
    fn model_fields() -> Vec<Field>;

    /// A handle identifying this model.
    fn model_ref() -> ModelRef {
        ModelRef::from_type(TypeId::of::<Self>(), Self::model_name(), Self::model_fields)
    }
}

/// An enumeration usable as a field type.
///
/// Usually implemented with `#[derive(Enum)]`.
pub trait Enum: Sized + 'static {
    fn enum_name() -> String {
        bare_type_name(type_name::<Self>()).to_string()
    }

    fn members() -> Vec<EnumMember>;

    fn enum_ref() -> EnumRef {
        EnumRef::from_type(TypeId::of::<Self>(), Self::enum_name(), Self::members())
    }
}

/// Anything naming a model: a handle, or an instance of a model type.
///
/// Instances always resolve to their type, so converting a value and
/// converting its type produce the same cached result.
pub trait IntoModelRef {
    fn into_model_ref(self) -> ModelRef;
}

impl IntoModelRef for ModelRef {
    fn into_model_ref(self) -> ModelRef {
        self
    }
}

impl IntoModelRef for &ModelRef {
    fn into_model_ref(self) -> ModelRef {
        self.clone()
    }
}

impl<M: Model> IntoModelRef for &M {
    fn into_model_ref(self) -> ModelRef {
        M::model_ref()
    }
}
