//! Unified error types for masscal.
//!
//! The calculation engine itself never errors: its only failure mode is an
//! indeterminate result, expressed through `Option` and
//! [`Verdict::Indeterminate`](crate::evaluation::Verdict). The error types
//! here cover the I/O boundary around the engine — loading and validating
//! snapshot files for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for masscal operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CalError {
    /// Errors while loading/decoding a calibration snapshot
    #[error("Failed to load calibration snapshot: {context}")]
    Snapshot {
        context: String,
        #[source]
        source: SnapshotErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific snapshot decoding error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SnapshotErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Convenient Result type for masscal operations
pub type Result<T> = std::result::Result<T, CalError>;

impl CalError {
    /// Create a snapshot error with context
    pub fn snapshot(context: impl Into<String>, source: SnapshotErrorKind) -> Self {
        Self::Snapshot {
            context: context.into(),
            source,
        }
    }

    /// Create a snapshot error for an invalid field value
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::snapshot(
            "invalid field value",
            SnapshotErrorKind::InvalidValue {
                field: field.into(),
                message: message.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for CalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CalError {
    fn from(err: serde_json::Error) -> Self {
        Self::snapshot(
            "JSON deserialization",
            SnapshotErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
pub trait ErrorContext<T> {
    /// Add context to an error, chaining with any existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CalError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: CalError, new_ctx: &str) -> CalError {
    match err {
        CalError::Snapshot {
            context: existing,
            source,
        } => CalError::Snapshot {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CalError::Io {
            path,
            message,
            source,
        } => CalError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        CalError::Config(msg) => CalError::Config(chain_context(new_ctx, &msg)),
        CalError::Validation(msg) => CalError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings: "`new`: `existing`" unless `existing` is empty.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_mentions_snapshot_loading() {
        let err = CalError::invalid_value("verification_division_e", "must be positive");
        let display = format!("{err}");
        assert!(display.contains("snapshot"), "got: {display}");
    }

    #[test]
    fn io_error_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CalError::io("/tmp/record.json", io_err);
        assert!(err.to_string().contains("/tmp/record.json"));
    }

    #[test]
    fn context_chains_rather_than_replaces() {
        let initial: Result<()> = Err(CalError::snapshot(
            "inner",
            SnapshotErrorKind::InvalidJson("boom".to_string()),
        ));
        match initial.context("outer") {
            Err(CalError::Snapshot { context, .. }) => {
                assert!(context.contains("outer"));
                assert!(context.contains("inner"));
            }
            other => panic!("expected snapshot error, got {other:?}"),
        }
    }

    #[test]
    fn with_context_is_lazy() {
        let mut called = false;
        let ok: Result<i32> = Ok(1);
        let _ = ok.with_context(|| {
            called = true;
            "never"
        });
        assert!(!called);
    }
}
