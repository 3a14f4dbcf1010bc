//! File system errors

use std::path::Path;

use super::ShotsyncError;

/// Creates a directory not found error
pub fn dir_not_found(path: &Path) -> ShotsyncError {
    ShotsyncError::DirectoryNotFound {
        path: path.display().to_string(),
    }
}

pub fn read_failed(path: &Path, e: &std::io::Error) -> ShotsyncError {
    ShotsyncError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub fn write_failed(path: &Path, e: &std::io::Error) -> ShotsyncError {
    ShotsyncError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub fn create_dir_failed(path: &Path, e: &std::io::Error) -> ShotsyncError {
    ShotsyncError::CreateDirFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub fn copy_failed(from: &Path, to: &Path, e: &std::io::Error) -> ShotsyncError {
    ShotsyncError::CopyFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: e.to_string(),
    }
}
