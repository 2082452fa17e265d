//! Collector error types
//!
//! A missing manifest is not an error; these variants cover a manifest
//! that exists but cannot be read or is not well-formed markup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a collector run
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The manifest exists but could not be read
    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        /// Resolved manifest path
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not well-formed markup
    #[error("Malformed manifest {path}: {message}")]
    ManifestParse {
        /// Resolved manifest path
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },
}

impl CollectorError {
    /// Path of the manifest the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CollectorError::ManifestRead { path, .. } | CollectorError::ManifestParse { path, .. } => {
                path
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CollectorError::ManifestParse {
            path: PathBuf::from("/tmp/AndroidManifest.xml"),
            message: "unexpected end of document".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed manifest /tmp/AndroidManifest.xml: unexpected end of document"
        );

        let err = CollectorError::ManifestRead {
            path: PathBuf::from("/tmp/m.xml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read manifest /tmp/m.xml: denied");
    }

    #[test]
    fn test_error_path() {
        let err = CollectorError::ManifestParse {
            path: PathBuf::from("/a/b.xml"),
            message: String::new(),
        };
        assert_eq!(err.path(), std::path::Path::new("/a/b.xml"));
    }

    #[test]
    fn test_read_error_has_source() {
        use std::error::Error as _;
        let err = CollectorError::ManifestRead {
            path: PathBuf::from("/a"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "io"),
        };
        assert!(err.source().is_some());
    }
}
