//! Error type for the checked path API.

use thiserror::Error;

/// Result alias for the checked path API.
pub type Result<T, E = PathError> = std::result::Result<T, E>;

/// Why a checked combine or normalize call could not produce a path.
///
/// The unchecked functions never fail: they assert on an empty base in debug
/// builds and return the input unchanged on a root escape. The `try_*`
/// variants surface both cases instead.
///
/// # Example
///
/// ```
/// use view_path::{try_normalize_path, PathError};
///
/// match try_normalize_path("/Views/../../Secret") {
///     Ok(path) => println!("resolved: {path}"),
///     Err(PathError::RootEscape { path }) => println!("refused: {path}"),
///     Err(e) => println!("{e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The base path passed to a combine call was empty.
    #[error("base path must not be empty")]
    EmptyBase,

    /// A `..` segment tried to climb above the application root.
    #[error("path escapes the application root: {path}")]
    RootEscape {
        /// The path that could not be normalized, exactly as given.
        path: String,
    },
}

impl PathError {
    /// Create a root escape error.
    pub fn root_escape(path: impl Into<String>) -> Self {
        Self::RootEscape { path: path.into() }
    }

    /// Check if this error is a root escape.
    pub fn is_root_escape(&self) -> bool {
        matches!(self, Self::RootEscape { .. })
    }

    /// Get the offending path, if the error carries one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::RootEscape { path } => Some(path),
            Self::EmptyBase => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PathError::EmptyBase.to_string(), "base path must not be empty");
        assert_eq!(
            PathError::root_escape("../a").to_string(),
            "path escapes the application root: ../a"
        );
    }

    #[test]
    fn test_accessors() {
        let err = PathError::root_escape("/a/../../b");
        assert!(err.is_root_escape());
        assert_eq!(err.path(), Some("/a/../../b"));

        assert!(!PathError::EmptyBase.is_root_escape());
        assert_eq!(PathError::EmptyBase.path(), None);
    }
}
