use super::{Scalar, TypeRef};
use crate::Value;
use std::fmt;

/// A field of a GraphQL object, input object or interface.
#[derive(Clone, PartialEq)]
pub struct Field {
    /// The field's type, without the non-null constraint implied by
    /// `required`.
    pub ty: TypeRef,

    /// True if the field is non-null.
    pub required: bool,

    /// Default value, shown on input types.
    pub default: Option<Value>,
}

impl Field {
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            ty: ty.into(),
            required: false,
            default: None,
        }
    }

    /// A required opaque identifier, `ID!`.
    pub fn id() -> Self {
        Self::new(Scalar::Id).with_required(true)
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default(mut self, default: Option<Value>) -> Self {
        self.default = default;
        self
    }

    /// The type as it appears in the schema, including the non-null
    /// constraint of a required field.
    pub fn output_ty(&self) -> TypeRef {
        if self.required {
            TypeRef::non_null(self.ty.clone())
        } else {
            self.ty.clone()
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Field");
        debug.field("ty", &self.output_ty().to_string());
        if let Some(default) = &self.default {
            debug.field("default", default);
        }
        debug.finish()
    }
}
