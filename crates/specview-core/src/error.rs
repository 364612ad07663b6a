//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Specification Source Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to fetch {location}: {message}")]
    Fetch { location: String, message: String },

    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Invalid YAML structure")]
    InvalidStructure,

    #[error("Duplicated mapping key '{key}'")]
    DuplicateKey { key: String },

    #[error("Invalid specification source '{source_spec}': {message}")]
    InvalidSource {
        source_spec: String,
        message: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Outbound Action Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Failed to save {path}: {message}")]
    Download { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn fetch(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, reason: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            reason: reason.into(),
        }
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    pub fn invalid_source(source_spec: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSource {
            source_spec: source_spec.into(),
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn download(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Download {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Errors caused by the remote document or the environment, which a
    /// retry may fix
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. }
                | Error::HttpStatus { .. }
                | Error::InvalidStructure
                | Error::DuplicateKey { .. }
                | Error::Yaml(_)
                | Error::Clipboard { .. }
                | Error::Download { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::fetch("https://example.com/opencli.yaml", "connection refused");
        assert_eq!(
            err.to_string(),
            "Failed to fetch https://example.com/opencli.yaml: connection refused"
        );

        assert_eq!(Error::InvalidStructure.to_string(), "Invalid YAML structure");
        assert_eq!(
            Error::http_status(404, "Not Found").to_string(),
            "HTTP 404 Not Found"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_yaml() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(matches!(err, Error::Yaml(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::fetch("a", "b").is_recoverable());
        assert!(Error::http_status(500, "Internal Server Error").is_recoverable());
        assert!(Error::download("/tmp/opencli.yaml", "read-only").is_recoverable());
        assert!(!Error::invalid_source("ftp://x", "unsupported scheme").is_recoverable());
    }

    #[test]
    fn test_download_error_mentions_path() {
        let err = Error::download("/tmp/out/opencli.json", "permission denied");
        assert!(err.to_string().contains("/tmp/out/opencli.json"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_context_keeps_the_original_error() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.context("Failed to clear terminal").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_duplicate_key_is_recoverable() {
        let err = Error::duplicate_key("0");
        assert_eq!(err.to_string(), "Duplicated mapping key '0'");
        assert!(err.is_recoverable());
    }
}
