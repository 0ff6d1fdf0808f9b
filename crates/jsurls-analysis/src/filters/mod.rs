//! Junk detection and text cleanup for candidate strings.

mod clean;
mod junk;
mod mime;

pub use clean::{
    clean_trailing_sentence_punctuation, clean_unbalanced_brackets, collapse_placeholder_runs,
    consolidate_adjacent_placeholders,
};
pub use junk::{JunkFilter, JunkRule, JUNK_RULES};
pub use mime::MIME_TYPES;
