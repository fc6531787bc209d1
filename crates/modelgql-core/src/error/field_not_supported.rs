use super::Error;

/// Error when a field has no GraphQL representation.
///
/// This occurs when:
/// - The field uses a mapping shape (`HashMap`, `BTreeMap`, ...)
/// - The field type is not an enum, a nested model, or a known scalar
/// - The scalar the field needs is not available in the configured
///   [`Capability`](crate::Capability)
#[derive(Debug)]
pub(super) struct FieldNotSupported {
    field: Box<str>,
}

impl FieldNotSupported {
    pub(super) fn field(&self) -> &str {
        &self.field
    }
}

impl std::error::Error for FieldNotSupported {}

impl core::fmt::Display for FieldNotSupported {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "field `{}` is not supported", self.field)
    }
}

impl Error {
    /// Creates a field-not-supported error for the named field.
    pub fn field_not_supported(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::FieldNotSupported(FieldNotSupported {
            field: field.into().into(),
        }))
    }

    /// Returns `true` if the field could not be represented.
    ///
    /// This includes [invalid list types](Error::is_invalid_list_type).
    pub fn is_field_not_supported(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::FieldNotSupported(_) | super::ErrorKind::InvalidListType(_)
        )
    }
}
