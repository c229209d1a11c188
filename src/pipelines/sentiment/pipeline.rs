use super::model::SentimentAnalysisModel;
use crate::error::{Result, SentimentError};
use crate::pipelines::stats::PipelineStats;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

// ============ Output types ============

/// Three-way sentiment outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    /// More positive matches than negative ones.
    Positive,
    /// More negative matches than positive ones.
    Negative,
    /// Equal counts, including no matches at all.
    Neutral,
}

impl Label {
    /// Label for a positive-minus-negative match difference.
    pub fn from_score(score: i64) -> Self {
        match score.signum() {
            1 => Label::Positive,
            -1 => Label::Negative,
            _ => Label::Neutral,
        }
    }

    /// The label as written to results files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentiment prediction with the lexicon words that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// The predicted sentiment.
    pub label: Label,
    /// Positive match count minus negative match count.
    pub score: i64,
    /// Words of the line found in the positive lexicon.
    pub positive: BTreeSet<String>,
    /// Words of the line found in the negative lexicon.
    pub negative: BTreeSet<String>,
}

impl Prediction {
    /// Builds a prediction from the two match sets.
    pub fn from_matches(positive: BTreeSet<String>, negative: BTreeSet<String>) -> Self {
        let score = positive.len() as i64 - negative.len() as i64;
        Self {
            label: Label::from_score(score),
            score,
            positive,
            negative,
        }
    }
}

/// Single-text output from `run()`.
#[derive(Debug)]
pub struct Output {
    /// Sentiment prediction.
    pub prediction: Prediction,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Single result in batch output.
#[derive(Debug)]
pub struct BatchResult {
    /// Input text.
    pub text: String,
    /// Prediction for this input.
    pub prediction: Prediction,
}

/// Batch output from `run()`.
#[derive(Debug)]
pub struct BatchOutput {
    /// Results for each input.
    pub results: Vec<BatchResult>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

// ============ Input trait for type-based dispatch ============

#[doc(hidden)]
pub trait SentimentInput<'a> {
    /// Output type for `.run()`.
    type Output;

    #[doc(hidden)]
    fn into_texts(self) -> Vec<&'a str>;
    #[doc(hidden)]
    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Prediction>,
        stats: PipelineStats,
    ) -> Result<Self::Output>;
}

impl<'a> SentimentInput<'a> for &'a str {
    type Output = Output;

    fn into_texts(self) -> Vec<&'a str> {
        vec![self]
    }

    fn convert_output(
        _texts: Vec<&'a str>,
        mut predictions: Vec<Prediction>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        let prediction = predictions
            .pop()
            .ok_or_else(|| SentimentError::Unexpected("No predictions returned".into()))?;
        Ok(Output { prediction, stats })
    }
}

fn zip_batch(
    texts: Vec<&str>,
    predictions: Vec<Prediction>,
    stats: PipelineStats,
) -> Result<BatchOutput> {
    if texts.len() != predictions.len() {
        return Err(SentimentError::Unexpected(format!(
            "Expected {} predictions, got {}",
            texts.len(),
            predictions.len()
        )));
    }
    let results = texts
        .into_iter()
        .zip(predictions)
        .map(|(text, prediction)| BatchResult {
            text: text.to_string(),
            prediction,
        })
        .collect();
    Ok(BatchOutput { results, stats })
}

impl<'a> SentimentInput<'a> for &'a [&'a str] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Prediction>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        zip_batch(texts, predictions, stats)
    }
}

impl<'a, const N: usize> SentimentInput<'a> for &'a [&'a str; N] {
    type Output = BatchOutput;

    fn into_texts(self) -> Vec<&'a str> {
        self.as_slice().to_vec()
    }

    fn convert_output(
        texts: Vec<&'a str>,
        predictions: Vec<Prediction>,
        stats: PipelineStats,
    ) -> Result<Self::Output> {
        zip_batch(texts, predictions, stats)
    }
}

// ============ Pipeline ============

/// Classifies text sentiment (positive, negative, neutral) by lexicon overlap.
///
/// Construct with [`SentimentAnalysisPipelineBuilder`](super::SentimentAnalysisPipelineBuilder).
/// The pipeline is immutable and cheap to clone; clones share the same lexicons.
///
/// # Examples
///
/// ```rust
/// # use lexicon_pipelines::sentiment::{Label, Lexicon, SentimentAnalysisPipelineBuilder};
/// # fn main() -> lexicon_pipelines::error::Result<()> {
/// let positive: Lexicon = ["good", "nice"].into_iter().collect();
/// let negative: Lexicon = ["bad", "worthless"].into_iter().collect();
/// let pipeline = SentimentAnalysisPipelineBuilder::lexicon(positive, negative).build()?;
///
/// // Single text - direct access
/// let output = pipeline.run("good nice")?;
/// assert_eq!(output.prediction.label, Label::Positive);
///
/// // Batch - results include input text
/// let output = pipeline.run(&["good", "worthless"])?;
/// for r in output.results {
///     println!("{} → {}", r.text, r.prediction.label);
/// }
/// # Ok(())
/// # }
/// ```
pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: Arc<M>,
}

impl<M: SentimentAnalysisModel> Clone for SentimentAnalysisPipeline<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Analyze text sentiment.
    ///
    /// Single input → [`Output`], batch → [`BatchOutput`].
    pub fn run<'a, I: SentimentInput<'a>>(&self, input: I) -> Result<I::Output> {
        let stats_builder = PipelineStats::start();
        let texts = input.into_texts();
        let item_count = texts.len();

        let predictions = self.model.predict_batch(&texts);

        I::convert_output(texts, predictions, stats_builder.finish(item_count))
    }

    /// Scores one line without timing it.
    pub fn predict(&self, text: &str) -> Prediction {
        self.model.predict(text)
    }

    /// The model backing this pipeline.
    pub fn model(&self) -> &M {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Labels every line by its first character, to exercise dispatch without lexicons.
    struct FirstChar;

    impl SentimentAnalysisModel for FirstChar {
        type Options = ();

        fn new(_: ()) -> Result<Self> {
            Ok(FirstChar)
        }

        fn predict(&self, text: &str) -> Prediction {
            let mut positive = BTreeSet::new();
            let mut negative = BTreeSet::new();
            match text.chars().next() {
                Some('+') => {
                    positive.insert(text.to_string());
                }
                Some('-') => {
                    negative.insert(text.to_string());
                }
                _ => {}
            }
            Prediction::from_matches(positive, negative)
        }
    }

    fn pipeline() -> SentimentAnalysisPipeline<FirstChar> {
        SentimentAnalysisPipeline {
            model: Arc::new(FirstChar),
        }
    }

    #[test]
    fn label_follows_sign_of_score() {
        assert_eq!(Label::from_score(3), Label::Positive);
        assert_eq!(Label::from_score(-2), Label::Negative);
        assert_eq!(Label::from_score(0), Label::Neutral);
    }

    #[test]
    fn label_displays_plain_name() {
        assert_eq!(Label::Positive.to_string(), "Positive");
        assert_eq!(Label::Negative.to_string(), "Negative");
        assert_eq!(Label::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn single_input_returns_output() {
        let output = pipeline().run("+yes").unwrap();
        assert_eq!(output.prediction.label, Label::Positive);
        assert_eq!(output.stats.items_processed, 1);
    }

    #[test]
    fn batch_input_keeps_order_and_text() {
        let output = pipeline().run(&["-no", "meh", "+yes"]).unwrap();
        let labels: Vec<_> = output.results.iter().map(|r| r.prediction.label).collect();
        assert_eq!(labels, vec![Label::Negative, Label::Neutral, Label::Positive]);
        assert_eq!(output.results[1].text, "meh");
        assert_eq!(output.stats.items_processed, 3);
    }

    #[test]
    fn empty_batch_is_empty() {
        let texts: &[&str] = &[];
        let output = pipeline().run(texts).unwrap();
        assert!(output.results.is_empty());
    }

    #[test]
    fn prediction_serializes_to_json() {
        let p = Prediction::from_matches(
            ["good".to_string()].into_iter().collect(),
            BTreeSet::new(),
        );
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["label"], "Positive");
        assert_eq!(json["score"], 1);
        assert_eq!(json["positive"][0], "good");
        assert!(json["negative"].as_array().unwrap().is_empty());
    }
}
