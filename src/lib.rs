//! # view-path
//!
//! App-rooted path helpers for view and template resolution.
//!
//! A rendering pipeline that looks up a layout or partial relative to the view
//! currently being rendered needs two things: join the relative name onto the
//! directory of the current view, and collapse any `.`/`..` segments so the
//! result can be used as a lookup key.
//!
//! - **Combine**: [`combine_path`] joins a relative path onto a base path
//! - **Normalize**: [`normalize_path`] resolves `.`/`..` and collapses `/` and `\`
//! - **Root escape**: a `..` that would climb above the application root is
//!   never resolved; the input comes back unchanged
//!
//! Both functions return [`Cow<str>`](std::borrow::Cow): paths that are
//! already canonical are handed back borrowed, without allocating.
//!
//! ## Quick Start
//!
//! ```
//! use view_path::{combine_path, normalize_path};
//!
//! // Directory base
//! assert_eq!(combine_path("/Views/Home/", "Index.cshtml"), "/Views/Home/Index.cshtml");
//!
//! // File base: the file name is dropped
//! assert_eq!(
//!     combine_path("/Views/Home/Index.cshtml", "../Shared/_Layout.cshtml"),
//!     "/Views/Shared/_Layout.cshtml"
//! );
//!
//! // Rooted paths are trusted as given
//! assert_eq!(combine_path("/Views/Home/", "/a/../b"), "/a/../b");
//!
//! // Root escapes are left alone
//! assert_eq!(normalize_path("../a"), "../a");
//! ```
//!
//! ## Checked API
//!
//! [`try_combine_path`] and [`try_normalize_path`] return a [`PathError`]
//! instead of asserting on an empty base or silently returning an escaping
//! path unchanged.
//!
//! ## Features
//!
//! - `tracing` (default): emit a `trace` event when a root escape is refused

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod path;
pub mod prelude;

// =============================================================================
// Path API
// =============================================================================

pub use path::{
    combine_path, is_app_rooted, normalize_path, requires_normalization, try_combine_path,
    try_normalize_path, PathTokenizer, Segments,
};

// =============================================================================
// Constants
// =============================================================================

pub use path::{
    CURRENT_DIRECTORY_TOKEN, PARENT_DIRECTORY_TOKEN, PATH_SEPARATORS,
    TOKENS_REQUIRING_NORMALIZATION,
};

// =============================================================================
// Errors
// =============================================================================

pub use error::{PathError, Result};
