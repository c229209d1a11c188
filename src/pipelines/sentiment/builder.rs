use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::error::Result;
use crate::models::{Lexicon, LexiconModel, LexiconOptions};
use crate::pipelines::cache::{global_cache, ModelOptions};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for creating [`SentimentAnalysisPipeline`] instances.
///
/// Use [`Self::lexicon`], [`Self::from_files`], or [`Self::default_files`] as the entry point.
///
/// # Examples
///
/// ```rust,no_run
/// # use lexicon_pipelines::sentiment::SentimentAnalysisPipelineBuilder;
/// # fn main() -> lexicon_pipelines::error::Result<()> {
/// let pipeline = SentimentAnalysisPipelineBuilder::from_files("pos.txt", "neg.txt")
///     .comment_prefix(";")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    options: M::Options,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub(crate) fn new(options: M::Options) -> Self {
        Self { options }
    }

    /// Builds the pipeline with configured settings.
    ///
    /// Models whose options carry a cache key are shared with other pipelines
    /// built from the same options while any of them is alive.
    ///
    /// # Errors
    ///
    /// Returns an error if a lexicon file cannot be read.
    pub fn build(self) -> Result<SentimentAnalysisPipeline<M>>
    where
        M: Send + Sync + 'static,
        M::Options: ModelOptions,
    {
        let model = match self.options.cache_key() {
            Some(key) => global_cache().get_or_create(&key, || M::new(self.options.clone()))?,
            None => Arc::new(M::new(self.options)?),
        };

        Ok(SentimentAnalysisPipeline { model })
    }
}

impl SentimentAnalysisPipelineBuilder<LexiconModel> {
    /// Creates a builder over lexicons already in memory. No file I/O happens.
    pub fn lexicon(positive: Lexicon, negative: Lexicon) -> Self {
        Self::new(LexiconOptions::InMemory { positive, negative })
    }

    /// Creates a builder that loads both lexicons from newline-delimited word files.
    pub fn from_files(positive: impl Into<PathBuf>, negative: impl Into<PathBuf>) -> Self {
        Self::new(LexiconOptions::Files {
            positive: positive.into(),
            negative: negative.into(),
            comment_prefix: None,
        })
    }

    /// Creates a builder for `positive-words.txt` and `negative-words.txt` in the
    /// working directory.
    pub fn default_files() -> Self {
        Self::new(LexiconOptions::default_files())
    }

    /// Skip lexicon file lines starting with `prefix` (e.g. `";"`).
    ///
    /// Has no effect on in-memory lexicons.
    pub fn comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        if let LexiconOptions::Files { comment_prefix, .. } = &mut self.options {
            *comment_prefix = Some(prefix.into());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SentimentError;
    use crate::pipelines::sentiment::Label;

    #[test]
    fn in_memory_build_needs_no_files() {
        let pipeline = SentimentAnalysisPipelineBuilder::lexicon(
            ["good"].into_iter().collect(),
            ["bad"].into_iter().collect(),
        )
        .build()
        .unwrap();
        assert_eq!(pipeline.predict("good").label, Label::Positive);
    }

    #[test]
    fn missing_files_fail_at_build() {
        let err = SentimentAnalysisPipelineBuilder::from_files("no/pos.txt", "no/neg.txt")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SentimentError::FileAccess { .. }));
    }

    #[test]
    fn comment_prefix_is_recorded_for_files() {
        let builder = SentimentAnalysisPipelineBuilder::default_files().comment_prefix(";");
        match builder.options {
            LexiconOptions::Files { comment_prefix, .. } => {
                assert_eq!(comment_prefix.as_deref(), Some(";"))
            }
            LexiconOptions::InMemory { .. } => panic!("expected file options"),
        }
    }
}
