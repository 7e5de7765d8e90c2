//! Separator and navigation tokens.

/// Characters accepted as path separators.
///
/// `/` is canonical; `\` is accepted on input and rewritten to `/` whenever a
/// path is normalized.
pub const PATH_SEPARATORS: [char; 2] = ['/', '\\'];

/// Segment that refers to the current directory.
pub const CURRENT_DIRECTORY_TOKEN: &str = ".";

/// Segment that refers to the parent directory.
pub const PARENT_DIRECTORY_TOKEN: &str = "..";

/// Substrings whose presence means a path is not in canonical form.
///
/// A path containing none of these is returned untouched by
/// [`normalize_path`](super::normalize_path).
pub const TOKENS_REQUIRING_NORMALIZATION: [&str; 6] = [
    // ./
    "./",
    // .\
    ".\\",
    // ../
    "../",
    // ..\
    "..\\",
    // //
    "//",
    // \\
    "\\\\",
];
