use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::error::Result;
use crate::loaders::LexiconLoader;
use crate::pipelines::cache::ModelOptions;
use crate::pipelines::sentiment::model::SentimentAnalysisModel;
use crate::pipelines::sentiment::Prediction;

/// Default positive lexicon file name.
pub const DEFAULT_POSITIVE_FILE: &str = "positive-words.txt";
/// Default negative lexicon file name.
pub const DEFAULT_NEGATIVE_FILE: &str = "negative-words.txt";

/// An immutable set of words associated with one polarity.
///
/// Words are stored verbatim (no case folding) and kept sorted so that match
/// lists come out in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: BTreeSet<String>,
}

impl Lexicon {
    /// Returns `true` if `word` is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the lexicon holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words present in both `self` and `other`.
    pub fn shared_with<'a>(&'a self, other: &'a Lexicon) -> impl Iterator<Item = &'a str> {
        self.words.intersection(&other.words).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Where a [`LexiconModel`] gets its two word lists from.
#[derive(Debug, Clone)]
pub enum LexiconOptions {
    /// Lexicons already in memory.
    InMemory {
        /// Positive words.
        positive: Lexicon,
        /// Negative words.
        negative: Lexicon,
    },
    /// Newline-delimited word files.
    Files {
        /// Path of the positive word list.
        positive: PathBuf,
        /// Path of the negative word list.
        negative: PathBuf,
        /// Lines starting with this prefix are skipped.
        comment_prefix: Option<String>,
    },
}

impl LexiconOptions {
    /// File options pointing at `positive-words.txt` and `negative-words.txt`.
    pub fn default_files() -> Self {
        LexiconOptions::Files {
            positive: PathBuf::from(DEFAULT_POSITIVE_FILE),
            negative: PathBuf::from(DEFAULT_NEGATIVE_FILE),
            comment_prefix: None,
        }
    }
}

impl ModelOptions for LexiconOptions {
    fn cache_key(&self) -> Option<String> {
        match self {
            // Nothing to load, nothing to share.
            LexiconOptions::InMemory { .. } => None,
            LexiconOptions::Files {
                positive,
                negative,
                comment_prefix,
            } => Some(format!(
                "{}|{}|{}",
                positive.display(),
                negative.display(),
                comment_prefix.as_deref().unwrap_or("")
            )),
        }
    }
}

/// Scores text by set overlap with a positive and a negative lexicon.
#[derive(Debug, Clone)]
pub struct LexiconModel {
    positive: Lexicon,
    negative: Lexicon,
}

impl LexiconModel {
    /// Builds the model, loading word files when `options` points at them.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::FileAccess`](crate::error::SentimentError::FileAccess)
    /// if a lexicon file cannot be read.
    pub fn new(options: LexiconOptions) -> Result<Self> {
        let model = match options {
            LexiconOptions::InMemory { positive, negative } => Self { positive, negative },
            LexiconOptions::Files {
                positive,
                negative,
                comment_prefix,
            } => {
                let positive = LexiconLoader::new(positive)
                    .comment_prefix(comment_prefix.clone())
                    .load()?;
                let negative = LexiconLoader::new(negative)
                    .comment_prefix(comment_prefix)
                    .load()?;
                Self { positive, negative }
            }
        };

        let overlap = model.shared_words();
        if overlap > 0 {
            tracing::warn!(overlap, "some words appear in both lexicons");
        }

        Ok(model)
    }

    /// Number of words listed in both lexicons.
    pub fn shared_words(&self) -> usize {
        self.positive.shared_with(&self.negative).count()
    }

    /// The positive lexicon.
    pub fn positive(&self) -> &Lexicon {
        &self.positive
    }

    /// The negative lexicon.
    pub fn negative(&self) -> &Lexicon {
        &self.negative
    }

    /// Splits `text` on single spaces and intersects the word set with both lexicons.
    ///
    /// Repeated words count once. Only `' '` separates words; empty pieces
    /// are dropped.
    pub fn predict(&self, text: &str) -> Prediction {
        let words: BTreeSet<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();

        let positive = words
            .iter()
            .filter(|w| self.positive.contains(w))
            .map(|w| w.to_string())
            .collect();
        let negative = words
            .iter()
            .filter(|w| self.negative.contains(w))
            .map(|w| w.to_string())
            .collect();

        Prediction::from_matches(positive, negative)
    }
}

impl SentimentAnalysisModel for LexiconModel {
    type Options = LexiconOptions;

    fn new(options: Self::Options) -> Result<Self> {
        LexiconModel::new(options)
    }

    fn predict(&self, text: &str) -> Prediction {
        self.predict(text)
    }
}
