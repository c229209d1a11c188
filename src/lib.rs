//! Lexicon-based sentiment pipelines in Rust.
//!
//! Scores short text snippets as `Positive`, `Negative`, or `Neutral` by
//! counting how many distinct words of a line appear in a positive and a
//! negative word list. Includes a batch annotator for review files and a
//! self-check for a pair of lexicons.

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;

pub use loaders::LexiconLoader;
pub use pipelines::{annotate, self_check, sentiment};
