use super::Convert;
use crate::classify;
use modelgql_core::{
    schema::{
        gql::{self, EnumType, TypeRef},
        source::{self, EnumRef, Type},
    },
    Error, Result,
};
use std::sync::Arc;

impl Convert<'_> {
    pub(crate) fn field(&mut self, field: &source::Field) -> Result<gql::Field> {
        let cap = self.state.capability();

        if classify::is_not_supported_shape(&cap, field.shape) {
            return Err(Error::field_not_supported(&field.name));
        }

        let is_list = classify::is_list_shape(&cap, field.shape);

        let item = match field.ty.args() {
            [first, rest @ ..] if is_list => {
                if !rest.is_empty() {
                    tracing::warn!(
                        field = %field.name,
                        args = rest.len() + 1,
                        "container declares more than one type argument; only the first is used"
                    );
                }

                first
            }
            _ => &field.ty,
        };

        let mut ty = self.resolve(field, item)?;

        if is_list {
            if field.required && field.item_required {
                ty = TypeRef::non_null(ty);
            }

            ty = TypeRef::list(ty);
        }

        Ok(gql::Field::new(ty)
            .with_required(field.required)
            .with_default(field.default.clone()))
    }

    fn resolve(&mut self, field: &source::Field, ty: &Type) -> Result<TypeRef> {
        if let Some(enum_ref) = ty.as_enum() {
            return Ok(self.enumeration(enum_ref).into());
        }

        if let Some(model) = ty.as_model() {
            return self.nested(model);
        }

        let scalars = self.state.scalar_table();

        if let Some(scalar) = scalars.get(ty) {
            return Ok(scalar.into());
        }

        if classify::is_field_not_allowed_type(ty) || classify::is_field_not_allowed_type(&field.ty)
        {
            return Err(Error::invalid_list_type(&field.name));
        }

        if let Some(scalar) = field.outer_ty.as_ref().and_then(|outer| scalars.get(outer)) {
            return Ok(scalar.into());
        }

        Err(Error::field_not_supported(&field.name))
    }

    fn enumeration(&mut self, enum_ref: &EnumRef) -> Arc<EnumType> {
        if self.options.use_cache {
            if let Some(ty) = self.state.cached_enum(enum_ref.id()) {
                return ty;
            }
        }

        let ty = Arc::new(EnumType::new(
            enum_ref.name(),
            enum_ref.members().iter().map(|member| member.name.as_str()),
        ));
        self.state.insert_enum(enum_ref.id(), ty.clone());

        tracing::debug!(name = %ty.name, values = ty.values.len(), "converted enum");

        ty
    }
}
