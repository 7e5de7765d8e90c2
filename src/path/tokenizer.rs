//! Lazy segment tokenizer.
//!
//! Splits a path on its separators without copying: every segment is a
//! slice of the original buffer. The tokenizer itself is a cheap `Copy` view,
//! so it can be iterated any number of times.
//!
//! ```text
//! "/Views\\Home//Index"
//!   └── "" │ "Views" │ "Home" │ "" │ "Index"
//! ```

use std::iter::FusedIterator;

use super::token::PATH_SEPARATORS;

/// A restartable tokenizer over a path string.
///
/// # Example
///
/// ```
/// use view_path::PathTokenizer;
///
/// let tokenizer = PathTokenizer::new("/Views\\Home");
/// let segments: Vec<&str> = tokenizer.iter().collect();
/// assert_eq!(segments, ["", "Views", "Home"]);
///
/// // Iterating again starts over from the beginning.
/// assert_eq!(tokenizer.iter().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTokenizer<'a> {
    path: &'a str,
    separators: &'a [char],
}

impl<'a> PathTokenizer<'a> {
    /// Tokenize on both `/` and `\`.
    pub fn new(path: &'a str) -> Self {
        Self::with_separators(path, &PATH_SEPARATORS)
    }

    /// Tokenize on a custom separator set.
    pub fn with_separators(path: &'a str, separators: &'a [char]) -> Self {
        Self { path, separators }
    }

    /// The buffer being tokenized.
    pub fn as_str(&self) -> &'a str {
        self.path
    }

    /// Start a fresh pass over the segments.
    pub fn iter(&self) -> Segments<'a> {
        Segments {
            rest: Some(self.path),
            separators: self.separators,
        }
    }
}

impl<'a> IntoIterator for PathTokenizer<'a> {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &PathTokenizer<'a> {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the segments of a [`PathTokenizer`].
///
/// Yields empty slices for leading, trailing and repeated separators;
/// `n` separators always produce `n + 1` segments.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    /// `None` once the final segment has been yielded.
    rest: Option<&'a str>,
    separators: &'a [char],
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.split_once(self.separators) {
            Some((segment, tail)) => {
                self.rest = Some(tail);
                Some(segment)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.rest {
            Some(rest) => (1, Some(rest.len() + 1)),
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Segments<'_> {}
