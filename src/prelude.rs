//! Prelude module for convenient imports.
//!
//! ```
//! use view_path::prelude::*;
//!
//! assert_eq!(combine_path("/Views/Home/", "Index.cshtml"), "/Views/Home/Index.cshtml");
//! ```

// Combine & normalize
pub use crate::path::{
    combine_path, is_app_rooted, normalize_path, requires_normalization, try_combine_path,
    try_normalize_path,
};

// Tokenizer
pub use crate::path::{PathTokenizer, Segments};

// Errors
pub use crate::error::PathError;
