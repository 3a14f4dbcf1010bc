//! Configuration errors
//!
//! Paths are rendered with `Path::display` so messages show the file the user
//! passed or that discovery found.

use std::path::Path;

use super::ShotsyncError;

pub fn not_found(path: &Path) -> ShotsyncError {
    ShotsyncError::ConfigNotFound {
        path: path.display().to_string(),
    }
}

pub fn read_failed(path: &Path, e: &std::io::Error) -> ShotsyncError {
    ShotsyncError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Attach the file to a YAML error that was raised without one
pub fn parse_failed(path: &Path, reason: String) -> ShotsyncError {
    ShotsyncError::ConfigParseFailed {
        path: path.display().to_string(),
        reason,
    }
}

/// A value that parsed but cannot be used
pub fn invalid(message: impl Into<String>) -> ShotsyncError {
    ShotsyncError::ConfigInvalid {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failed_names_the_file() {
        let err = parse_failed(
            Path::new("conf/shotsync.yaml"),
            "unknown field `colour`".to_string(),
        );
        let message = err.to_string();
        assert!(message.contains("conf/shotsync.yaml"));
        assert!(message.contains("colour"));
    }

    #[test]
    fn test_read_failed_keeps_path_and_reason() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = read_failed(Path::new("shotsync.yaml"), &io_err);
        assert_eq!(
            err.to_string(),
            "Failed to read configuration file: shotsync.yaml: denied"
        );
    }
}
