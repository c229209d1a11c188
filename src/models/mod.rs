// ============ Model implementations ============

pub(crate) mod lexicon;

// Public model structs and lexicon types (for type annotations)
pub use lexicon::{
    Lexicon, LexiconModel, LexiconOptions, DEFAULT_NEGATIVE_FILE, DEFAULT_POSITIVE_FILE,
};
