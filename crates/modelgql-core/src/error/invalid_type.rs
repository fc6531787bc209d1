use super::Error;

/// Error when an extra field supplied through conversion options is not a
/// GraphQL field.
#[derive(Debug)]
pub(super) struct InvalidType {
    key: Box<str>,
}

impl InvalidType {
    pub(super) fn key(&self) -> &str {
        &self.key
    }
}

impl std::error::Error for InvalidType {}

impl core::fmt::Display for InvalidType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid field `{}`: not a GraphQL field", self.key)
    }
}

impl Error {
    /// Creates an invalid type error for the given extra-field key.
    pub fn invalid_type(key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidType(InvalidType {
            key: key.into().into(),
        }))
    }

    /// Returns `true` if the error is an invalid type error.
    pub fn is_invalid_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidType(_))
    }
}
