//! Segment collapsing.

use std::borrow::Cow;

use super::token::{
    CURRENT_DIRECTORY_TOKEN, PARENT_DIRECTORY_TOKEN, TOKENS_REQUIRING_NORMALIZATION,
};
use super::tokenizer::PathTokenizer;
use crate::error::{PathError, Result};

/// Result of a single normalization pass.
pub(crate) enum Normalized {
    /// Already canonical.
    Unchanged,
    /// Rebuilt canonical form.
    Rebuilt(String),
    /// A `..` had nothing left to pop.
    RootEscape,
}

/// Check whether `path` contains any token that normalization would rewrite.
///
/// ```
/// use view_path::requires_normalization;
///
/// assert!(requires_normalization("/a/./b"));
/// assert!(requires_normalization("/a\\\\b"));
/// assert!(!requires_normalization("/a/foo..bar"));
/// ```
#[inline]
pub fn requires_normalization(path: &str) -> bool {
    TOKENS_REQUIRING_NORMALIZATION
        .iter()
        .any(|token| path.contains(token))
}

/// Resolve `.` and `..` segments and collapse separators.
///
/// Paths containing none of the tokens in
/// [`TOKENS_REQUIRING_NORMALIZATION`](super::TOKENS_REQUIRING_NORMALIZATION)
/// are returned borrowed. Otherwise every retained segment is written back
/// with a single leading `/`, so `\` separators disappear.
///
/// A `..` that would climb above the first segment aborts the whole call and
/// the input is returned unchanged. Use [`try_normalize_path`] to observe
/// that case as an error.
///
/// # Example
///
/// ```
/// use view_path::normalize_path;
///
/// assert_eq!(normalize_path("/a/./b/../c"), "/a/c");
/// assert_eq!(normalize_path("/a\\b/./c"), "/a/b/c");
/// assert_eq!(normalize_path("../a"), "../a");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    match normalize(path) {
        Normalized::Rebuilt(normalized) => Cow::Owned(normalized),
        Normalized::Unchanged | Normalized::RootEscape => Cow::Borrowed(path),
    }
}

/// Like [`normalize_path`], but reports a root escape as an error.
pub fn try_normalize_path(path: &str) -> Result<Cow<'_, str>> {
    match normalize(path) {
        Normalized::Rebuilt(normalized) => Ok(Cow::Owned(normalized)),
        Normalized::Unchanged => Ok(Cow::Borrowed(path)),
        Normalized::RootEscape => Err(PathError::root_escape(path)),
    }
}

pub(crate) fn normalize(path: &str) -> Normalized {
    if !requires_normalization(path) {
        return Normalized::Unchanged;
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in PathTokenizer::new(path) {
        match segment {
            "" | CURRENT_DIRECTORY_TOKEN => {}
            PARENT_DIRECTORY_TOKEN => {
                if segments.pop().is_none() {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(path = %path, "path escapes the application root, left unnormalized");
                    return Normalized::RootEscape;
                }
            }
            _ => segments.push(segment),
        }
    }

    let mut normalized = String::with_capacity(path.len());
    for segment in segments {
        normalized.push('/');
        normalized.push_str(segment);
    }
    Normalized::Rebuilt(normalized)
}
