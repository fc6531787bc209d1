use super::Error;

/// Error when a container field does not declare its element type.
#[derive(Debug)]
pub(super) struct InvalidListType {
    field: Box<str>,
}

impl InvalidListType {
    pub(super) fn field(&self) -> &str {
        &self.field
    }
}

impl std::error::Error for InvalidListType {}

impl core::fmt::Display for InvalidListType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` is not supported: containers must declare their element type, e.g. `Vec<i64>`",
            self.field
        )
    }
}

impl Error {
    /// Creates an invalid list type error for the named field.
    pub fn invalid_list_type(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidListType(InvalidListType {
            field: field.into().into(),
        }))
    }

    /// Returns `true` if the error is an invalid list type error.
    pub fn is_invalid_list_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidListType(_))
    }
}
