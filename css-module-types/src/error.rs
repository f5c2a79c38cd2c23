//! Error types and error handling

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias for type generation operations
pub type Result<T> = std::result::Result<T, TypegenError>;

/// Type generation error
#[derive(Debug, Error)]
pub enum TypegenError {
    /// Root directory is missing, not a directory, or unreadable
    #[error("Root directory not found: {}", path.display())]
    NotFound {
        /// Root directory that was requested
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// Reading a stylesheet, walking the tree, or writing a declaration failed
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// Declaration template failed to render
    #[error("Template error: {0}")]
    Template(String),
}

impl TypegenError {
    pub(crate) fn not_found(path: &Path, source: io::Error) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. } | Self::Io { path, .. } => Some(path),
            Self::Template(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_root() {
        let err = TypegenError::not_found(
            Path::new("missing/src"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("missing/src"));
        assert_eq!(err.path(), Some(Path::new("missing/src")));
    }

    #[test]
    fn test_io_message_names_path() {
        let err = TypegenError::io(
            Path::new("src/button.module.css.d.ts"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(err.to_string().contains("button.module.css.d.ts"));
    }

    #[test]
    fn test_template_error_has_no_path() {
        let err = TypegenError::Template("bad".to_string());
        assert!(err.path().is_none());
    }
}
