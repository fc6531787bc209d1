mod field_not_supported;
mod invalid_config_class;
mod invalid_list_type;
mod invalid_type;

use field_not_supported::FieldNotSupported;
use invalid_config_class::InvalidConfigClass;
use invalid_list_type::InvalidListType;
use invalid_type::InvalidType;
use std::sync::Arc;

/// An error that can occur while converting a model into a GraphQL type.
///
/// Conversion failures form a small hierarchy: an invalid list type is a
/// refinement of an unsupported field, so [`Error::is_field_not_supported`]
/// returns `true` for both.
#[derive(Clone)]
pub struct Error {
    kind: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    FieldNotSupported(FieldNotSupported),
    InvalidListType(InvalidListType),
    InvalidType(InvalidType),
    InvalidConfigClass(InvalidConfigClass),
}

impl Error {
    /// Returns the name of the field (or option key) the error is about, if
    /// any.
    pub fn field_name(&self) -> Option<&str> {
        match &*self.kind {
            ErrorKind::FieldNotSupported(err) => Some(err.field()),
            ErrorKind::InvalidListType(err) => Some(err.field()),
            ErrorKind::InvalidType(err) => Some(err.key()),
            ErrorKind::InvalidConfigClass(_) => None,
        }
    }

    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", self.kind()).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            FieldNotSupported(err) => core::fmt::Display::fmt(err, f),
            InvalidListType(err) => core::fmt::Display::fmt(err, f),
            InvalidType(err) => core::fmt::Display::fmt(err, f),
            InvalidConfigClass(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Arc::new(kind),
        }
    }
}
