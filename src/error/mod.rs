//! Error types and handling for shotsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by domain:
//! - [`fs`]: File system errors
//! - [`config`]: Configuration errors
//!
//! Per-item conditions (a missing manifest source, an unmatched placeholder)
//! are not errors; they are reported and the run continues. Everything in
//! [`ShotsyncError`] aborts the run.

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shotsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShotsyncError {
    // File system errors
    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(shotsync::fs::dir_not_found),
        help("Check the configured roots or pass them explicitly (--source, --target, --content)")
    )]
    DirectoryNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(shotsync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(shotsync::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(shotsync::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(shotsync::fs::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to walk directory: {path}: {reason}")]
    #[diagnostic(code(shotsync::fs::walk_failed))]
    WalkFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shotsync::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(shotsync::config::not_found),
        help("Pass an existing file with --config or unset SHOTSYNC_CONFIG")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(shotsync::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(shotsync::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(shotsync::config::invalid))]
    ConfigInvalid { message: String },

    // Matching errors
    #[error("Invalid pattern '{pattern}': {reason}")]
    #[diagnostic(code(shotsync::matching::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    #[error("Unknown category: {name}")]
    #[diagnostic(
        code(shotsync::category::unknown),
        help(
            "Known categories: getting-started, business-management, questionnaire, \
             strategic-analysis, financial-analysis, projects, collaboration"
        )
    )]
    UnknownCategory { name: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(shotsync::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

impl From<std::io::Error> for ShotsyncError {
    fn from(err: std::io::Error) -> Self {
        ShotsyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ShotsyncError {
    fn from(err: serde_yaml::Error) -> Self {
        ShotsyncError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<regex::Error> for ShotsyncError {
    fn from(err: regex::Error) -> Self {
        ShotsyncError::InvalidPattern {
            pattern: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for ShotsyncError {
    fn from(err: walkdir::Error) -> Self {
        ShotsyncError::WalkFailed {
            path: err
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShotsyncError>;
