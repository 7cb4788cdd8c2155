use super::Error;

/// Error when the service credential blob cannot be turned into credentials.
///
/// This covers malformed JSON as well as well-formed blobs missing the
/// fields needed to reach the document store.
#[derive(Debug)]
pub(super) struct InvalidCredentials {
    message: Box<str>,
}

impl std::error::Error for InvalidCredentials {}

impl core::fmt::Display for InvalidCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid credentials: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid credentials error.
    pub fn invalid_credentials(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidCredentials(InvalidCredentials {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid credentials error.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidCredentials(_))
    }
}
