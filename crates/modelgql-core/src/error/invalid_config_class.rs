use super::Error;

/// Error when a declarative converter has no usable configuration.
///
/// This occurs when:
/// - The converter does not provide a configuration block
/// - The configuration block does not name a model
#[derive(Debug)]
pub(super) struct InvalidConfigClass {
    message: Box<str>,
}

impl std::error::Error for InvalidConfigClass {}

impl core::fmt::Display for InvalidConfigClass {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid config: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid config error.
    pub fn invalid_config_class(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfigClass(InvalidConfigClass {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the error is an invalid config error.
    pub fn is_invalid_config_class(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConfigClass(_))
    }
}
