//! Lexicon sentiment pipeline.
//!
//! Classify text as `Positive`, `Negative`, or `Neutral` by counting how many
//! distinct words of a line appear in a positive and a negative word list.
//! Returns the label together with the matched words.
//!
//! # Quick Start
//!
//! ```rust
//! use lexicon_pipelines::sentiment::{Label, Lexicon, SentimentAnalysisPipelineBuilder};
//!
//! # fn main() -> lexicon_pipelines::error::Result<()> {
//! let positive: Lexicon = ["good", "nice"].into_iter().collect();
//! let negative: Lexicon = ["bad", "worthless"].into_iter().collect();
//! let pipeline = SentimentAnalysisPipelineBuilder::lexicon(positive, negative).build()?;
//!
//! let output = pipeline.run("good bad")?;
//! assert_eq!(output.prediction.label, Label::Neutral);
//! # Ok(())
//! # }
//! ```
//!
//! # Scoring rules
//!
//! - A line is split on the space character only; tabs stay inside words.
//! - Words are a set: `"good good good"` scores like `"good"`.
//! - `score = |positive matches| - |negative matches|`; zero is `Neutral`.
//!
//! # Word lists on disk
//!
//! ```rust,no_run
//! # use lexicon_pipelines::sentiment::SentimentAnalysisPipelineBuilder;
//! # fn main() -> lexicon_pipelines::error::Result<()> {
//! // positive-words.txt / negative-words.txt in the working directory
//! let pipeline = SentimentAnalysisPipelineBuilder::default_files().build()?;
//! let output = pipeline.run(&["great phone", "worthless battery"])?;
//! for r in output.results {
//!     println!("{}: {}", r.text, r.prediction.label);
//! }
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::{
    Lexicon, LexiconModel, LexiconOptions, DEFAULT_NEGATIVE_FILE, DEFAULT_POSITIVE_FILE,
};
pub use crate::pipelines::stats::PipelineStats;
pub use builder::SentimentAnalysisPipelineBuilder;
pub use pipeline::{
    BatchOutput, BatchResult, Label, Output, Prediction, SentimentAnalysisPipeline,
};

#[doc(hidden)]
pub use pipeline::SentimentInput;

/// The pipeline built by [`SentimentAnalysisPipelineBuilder::lexicon`] and friends.
pub type LexiconPipeline = SentimentAnalysisPipeline<LexiconModel>;
