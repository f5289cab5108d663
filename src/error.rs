//! Error types for PKGkeeper operations.
//!
//! This module defines [`PkgkeeperError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PkgkeeperError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PkgkeeperError::Other`) for unexpected errors
//! - Every error is fatal: the run stops at the point of failure, already
//!   applied hold changes are not rolled back

use thiserror::Error;

/// Core error type for PKGkeeper operations.
#[derive(Debug, Error)]
pub enum PkgkeeperError {
    /// A requested package is not installed on the system.
    #[error("Package {package} not installed in system. Can't mark it.")]
    PackageNotInstalled { package: String },

    /// An existence check or hold-list read could not be completed.
    #[error("Query '{command}' failed: {message}")]
    QueryFailed { command: String, message: String },

    /// A hold/unhold invocation could not be executed.
    #[error("Marking of {package} failed: {message}")]
    MutationFailed { package: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PKGkeeper operations.
pub type Result<T> = std::result::Result<T, PkgkeeperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_not_installed_matches_wire_message() {
        let err = PkgkeeperError::PackageNotInstalled {
            package: "not-a-real-pkg".into(),
        };
        assert_eq!(
            err.to_string(),
            "Package not-a-real-pkg not installed in system. Can't mark it."
        );
    }

    #[test]
    fn query_failed_displays_command_and_message() {
        let err = PkgkeeperError::QueryFailed {
            command: "apt-mark showhold".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("apt-mark showhold"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn mutation_failed_displays_package_and_message() {
        let err = PkgkeeperError::MutationFailed {
            package: "nginx".into(),
            message: "spawn failed".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("nginx"));
        assert!(msg.contains("spawn failed"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PkgkeeperError = io_err.into();
        assert!(matches!(err, PkgkeeperError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PkgkeeperError::PackageNotInstalled {
                package: "vim".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
