use super::Convert;
use crate::{ConversionOptions, Member};
use modelgql_core::{
    schema::{
        gql::{Field, Kind, ObjectRef, ObjectType, TypeRef},
        source::ModelRef,
    },
    Result,
};
use std::sync::Arc;

impl Convert<'_> {
    pub(crate) fn model(&mut self, model: &ModelRef) -> Result<Arc<ObjectType>> {
        self.options.validate()?;

        let key = (model.id(), self.kind);

        if self.options.use_cache {
            if let Some(ty) = self.state.cached_type(&key) {
                tracing::trace!(model = %model.name(), kind = ?self.kind, "using cached type");
                return Ok(ty);
            }
        }

        let name = match &self.options.class_name {
            Some(name) => name.clone(),
            None => format!("{}{}", model.name(), self.kind.suffix()),
        };

        let slot = ObjectRef::pending(name.as_str());
        self.state.start(key, slot.clone());
        let result = self.object(model, name);
        self.state.finish(&key);

        let ty = Arc::new(result?);
        slot.resolve(&ty);
        self.state.insert_type(key, ty.clone());

        tracing::debug!(
            model = %model.name(),
            name = %ty.name,
            kind = ?self.kind,
            fields = ty.fields.len(),
            "converted model"
        );

        Ok(ty)
    }

    fn object(&mut self, model: &ModelRef, name: String) -> Result<ObjectType> {
        let mut ty = ObjectType::new(name, self.kind);

        for field in model.fields() {
            if self.options.extra_fields.contains_key(&field.name)
                || self.options.exclude_fields.contains(&field.name)
            {
                continue;
            }

            let converted = self.field(&field)?;
            ty.fields.insert(field.name, converted);
        }

        for (name, member) in &self.options.extra_fields {
            if let Member::Field(field) = member {
                ty.fields.insert(name.clone(), field.clone());
            }
        }

        if let Some(id) = &self.options.id_field_name {
            ty.fields.shift_remove(id);
            ty.fields.insert(id.clone(), Field::id());
        }

        Ok(ty)
    }

    /// Reference to a model used as a field type. Nested models are input
    /// objects inside input objects and plain objects everywhere else.
    pub(super) fn nested(&mut self, model: &ModelRef) -> Result<TypeRef> {
        let kind = if self.kind.is_input() {
            Kind::InputObject
        } else {
            Kind::Object
        };

        if let Some(slot) = self.state.in_flight(&(model.id(), kind)) {
            tracing::trace!(model = %model.name(), "referencing model under conversion");
            return Ok(TypeRef::Object(slot));
        }

        let options = ConversionOptions::default();
        let ty = Convert::new(&mut *self.state, kind, &options).model(model)?;

        Ok(ty.into())
    }
}
