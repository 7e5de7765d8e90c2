//! View path combination and normalization.

mod combine;
mod normalize;
mod token;
mod tokenizer;

pub use combine::{combine_path, is_app_rooted, try_combine_path};
pub use normalize::{normalize_path, requires_normalization, try_normalize_path};
pub use token::{
    CURRENT_DIRECTORY_TOKEN, PARENT_DIRECTORY_TOKEN, PATH_SEPARATORS,
    TOKENS_REQUIRING_NORMALIZATION,
};
pub use tokenizer::{PathTokenizer, Segments};
