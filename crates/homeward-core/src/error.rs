use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{kind} record too short: expected {expected} bytes, got {actual}")]
    TruncatedRecord {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Reference sheet unavailable: {0}")]
    SheetUnavailable(&'static str),

    #[error("Invalid hex record: {0}")]
    InvalidHex(String),

    #[error("Teleport list index {index} out of range (size {size})")]
    RecordOutOfRange { index: usize, size: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_truncated_record_message() {
        let err = Error::TruncatedRecord {
            kind: "teleport",
            expected: 32,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "teleport record too short: expected 32 bytes, got 12"
        );
    }
}
