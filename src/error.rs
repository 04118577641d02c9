//! Error types for the FDF library.
//!
//! Encoding itself never fails. Errors only come from validating loosely-typed
//! input at the public entry points and from the final file write.

/// Result type alias for FDF library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating FDF data.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)] // "Invalid" prefix is intentional for clarity
pub enum Error {
    /// Field data is missing, null, or not a keyed structure
    #[error("Data must be a non-null object")]
    InvalidInput,

    /// Output path is missing, empty, or not textual
    #[error("fileName must be a non-empty string")]
    InvalidPath,

    /// IO error from the underlying file write
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = Error::InvalidInput;
        assert_eq!(format!("{}", err), "Data must be a non-null object");
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath;
        assert_eq!(format!("{}", err), "fileName must be a non-empty string");
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
