//! Joining a relative view path onto its base.

use std::borrow::Cow;

use super::normalize::{normalize, Normalized};
use crate::error::{PathError, Result};

/// Check whether `path` is already rooted at the application root.
#[inline]
pub fn is_app_rooted(path: &str) -> bool {
    path.starts_with('/')
}

/// Resolve `relative` against `base` and normalize the result.
///
/// A `relative` that starts with `/` is returned verbatim, without
/// normalization. Otherwise it is appended to the directory of `base`
/// (everything up to and including the last `/`) and the joined path goes
/// through [`normalize_path`](super::normalize_path).
///
/// `base` must not be empty. This is only checked by a debug assertion; use
/// [`try_combine_path`] for a checked variant.
///
/// # Example
///
/// ```
/// use view_path::combine_path;
///
/// assert_eq!(combine_path("/Views/Home/", "Index.cshtml"), "/Views/Home/Index.cshtml");
/// assert_eq!(
///     combine_path("/Views/Home/Index.cshtml", "../Shared/_Layout.cshtml"),
///     "/Views/Shared/_Layout.cshtml"
/// );
/// assert_eq!(combine_path("/Views/Home/", "/Shared/_Layout.cshtml"), "/Shared/_Layout.cshtml");
/// ```
pub fn combine_path<'a>(base: &str, relative: &'a str) -> Cow<'a, str> {
    debug_assert!(!base.is_empty(), "base path must not be empty");

    if is_app_rooted(relative) {
        return Cow::Borrowed(relative);
    }

    let joined = join(base, relative);
    match normalize(&joined) {
        Normalized::Rebuilt(normalized) => Cow::Owned(normalized),
        Normalized::Unchanged | Normalized::RootEscape => Cow::Owned(joined),
    }
}

/// Like [`combine_path`], but rejects an empty base and reports a root
/// escape as an error.
///
/// A rooted `relative` is still returned verbatim, even when it contains
/// `..` segments that would escape.
pub fn try_combine_path<'a>(base: &str, relative: &'a str) -> Result<Cow<'a, str>> {
    if base.is_empty() {
        return Err(PathError::EmptyBase);
    }

    if is_app_rooted(relative) {
        return Ok(Cow::Borrowed(relative));
    }

    let joined = join(base, relative);
    match normalize(&joined) {
        Normalized::Rebuilt(normalized) => Ok(Cow::Owned(normalized)),
        Normalized::Unchanged => Ok(Cow::Owned(joined)),
        Normalized::RootEscape => Err(PathError::RootEscape { path: joined }),
    }
}

/// Append `relative` to the directory part of `base`.
///
/// Only `/` is looked for in `base`: bases are expected to be app-rooted
/// already. A base ending in `/` is a directory and is kept whole.
fn join(base: &str, relative: &str) -> String {
    let directory = match base.rfind('/') {
        Some(index) => &base[..=index],
        None => "",
    };

    let mut joined = String::with_capacity(directory.len() + relative.len());
    joined.push_str(directory);
    joined.push_str(relative);
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_base() {
        assert_eq!(combine_path("/Views/Home/", "Index.cshtml"), "/Views/Home/Index.cshtml");
    }

    #[test]
    fn test_file_base() {
        assert_eq!(
            combine_path("/Views/Home/Index.cshtml", "_Layout.cshtml"),
            "/Views/Home/_Layout.cshtml"
        );
    }

    #[test]
    fn test_rooted_relative() {
        let combined = combine_path("/Views/Home/", "/Shared/_Layout.cshtml");
        assert!(matches!(combined, Cow::Borrowed(_)));
        assert_eq!(combined, "/Shared/_Layout.cshtml");
    }

    #[test]
    fn test_rooted_relative_is_not_normalized() {
        assert_eq!(combine_path("/Views/Home/", "/a/../b"), "/a/../b");
        assert_eq!(combine_path("/Views/Home/", "/../../b"), "/../../b");
        assert_eq!(try_combine_path("/Views/Home/", "/../../b").unwrap(), "/../../b");
    }

    #[test]
    fn test_parent_traversal() {
        assert_eq!(
            combine_path("/Views/Home/", "../Shared/_Layout.cshtml"),
            "/Views/Shared/_Layout.cshtml"
        );
        assert_eq!(
            combine_path("/Views/Home/Index.cshtml", "./../Shared\\_Layout.cshtml"),
            "/Views/Shared/_Layout.cshtml"
        );
    }

    #[test]
    fn test_backslash_relative() {
        assert_eq!(
            combine_path("/Views/Home/", "Partials\\\\_Header.cshtml"),
            "/Views/Home/Partials/_Header.cshtml"
        );
        // A single backslash is not a normalization token.
        assert_eq!(
            combine_path("/Views/Home/", "Partials\\_Header.cshtml"),
            "/Views/Home/Partials\\_Header.cshtml"
        );
    }

    #[test]
    fn test_base_backslashes_are_not_directories() {
        assert_eq!(combine_path("/Views\\Home\\Index.cshtml", "_Layout.cshtml"), "/_Layout.cshtml");
    }

    #[test]
    fn test_base_without_separator() {
        assert_eq!(combine_path("Index.cshtml", "_Layout.cshtml"), "_Layout.cshtml");
    }

    #[test]
    fn test_empty_relative() {
        assert_eq!(combine_path("/Views/Home/Index.cshtml", ""), "/Views/Home/");
    }

    #[test]
    fn test_root_escape_returns_joined() {
        assert_eq!(combine_path("/Views/", "../../a"), "/Views/../../a");
    }

    #[test]
    fn test_try_combine() {
        assert_eq!(
            try_combine_path("/Views/Home/", "../Shared/_Layout.cshtml").unwrap(),
            "/Views/Shared/_Layout.cshtml"
        );
        assert_eq!(
            try_combine_path("/Views/Home/", "Index.cshtml").unwrap(),
            "/Views/Home/Index.cshtml"
        );
        assert_eq!(try_combine_path("", "Index.cshtml"), Err(PathError::EmptyBase));
        assert_eq!(
            try_combine_path("/Views/", "../../a"),
            Err(PathError::root_escape("/Views/../../a"))
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "base path must not be empty")]
    fn test_empty_base_asserts() {
        combine_path("", "Index.cshtml");
    }

    #[test]
    fn test_is_app_rooted() {
        assert!(is_app_rooted("/Views"));
        assert!(!is_app_rooted("Views"));
        assert!(!is_app_rooted("\\Views"));
        assert!(!is_app_rooted(""));
    }
}
