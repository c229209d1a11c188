//! Self-check for a lexicon pipeline.
//!
//! Two groups of checks run:
//!
//! 1. Fixed scenarios over a tiny in-memory lexicon pair
//!    (`{good, nice}` / `{bad, worthless}`), including the tie rule: equal
//!    positive and negative counts are `Neutral`.
//! 2. Sampled checks over the pipeline's own lexicons. Words are drawn only
//!    from those that belong to exactly one lexicon and contain no space, so
//!    every sampled word must score as its own polarity and every
//!    positive/negative pair must tie. Words listed in both lexicons are
//!    reported, never removed.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::collections::BTreeSet;

use crate::error::{Result, SentimentError};
use crate::models::Lexicon;
use crate::pipelines::sentiment::{
    Label, LexiconPipeline, Prediction, SentimentAnalysisPipelineBuilder,
};

/// Words sampled from each lexicon unless told otherwise.
pub const DEFAULT_SAMPLES: usize = 20;

/// Knobs for [`run_self_check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfCheckOptions {
    /// Words sampled from each lexicon.
    pub samples: usize,
    /// Seed for sampling; a random seed is drawn (and logged) when `None`.
    pub seed: Option<u64>,
}

impl Default for SelfCheckOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

/// What a passing self-check covered.
#[derive(Debug, Clone)]
pub struct SelfCheckReport {
    /// Number of individual checks that ran.
    pub checks: usize,
    /// Positive words sampled.
    pub sampled_positive: usize,
    /// Negative words sampled.
    pub sampled_negative: usize,
    /// Words present in both lexicons (excluded from sampling).
    pub shared_words: usize,
    /// Seed used for sampling.
    pub seed: u64,
}

#[derive(Default)]
struct Checker {
    checks: usize,
    failures: Vec<String>,
}

impl Checker {
    fn expect_label(&mut self, pipeline: &LexiconPipeline, line: &str, expected: Label) {
        self.checks += 1;
        let actual = pipeline.predict(line).label;
        if actual != expected {
            self.failures
                .push(format!("case {line:?}: expected {expected}, got {actual}"));
        }
    }

    fn expect_prediction(
        &mut self,
        pipeline: &LexiconPipeline,
        line: &str,
        label: Label,
        positive: &[&str],
        negative: &[&str],
    ) {
        self.checks += 1;
        let expected = Prediction::from_matches(words(positive), words(negative));
        let actual = pipeline.predict(line);
        if actual.label != label || actual != expected {
            self.failures.push(format!(
                "case {line:?}: expected {label} {:?} {:?}, got {} {:?} {:?}",
                expected.positive,
                expected.negative,
                actual.label,
                actual.positive,
                actual.negative
            ));
        }
    }

    fn expect_same(&mut self, pipeline: &LexiconPipeline, line: &str, other: &str) {
        self.checks += 1;
        let a = pipeline.predict(line);
        let b = pipeline.predict(other);
        if a != b {
            self.failures.push(format!(
                "case {line:?}: expected same result as {other:?}, got {} vs {}",
                a.label, b.label
            ));
        }
    }
}

fn words(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn scenarios(checker: &mut Checker) -> Result<()> {
    let pipeline = SentimentAnalysisPipelineBuilder::lexicon(
        ["good", "nice"].into_iter().collect(),
        ["bad", "worthless"].into_iter().collect(),
    )
    .build()?;

    checker.expect_prediction(&pipeline, "good nice", Label::Positive, &["good", "nice"], &[]);
    checker.expect_prediction(&pipeline, "worthless", Label::Negative, &[], &["worthless"]);
    checker.expect_prediction(&pipeline, "abcdefghijklmnop", Label::Neutral, &[], &[]);
    checker.expect_prediction(&pipeline, "", Label::Neutral, &[], &[]);
    // one match on each side ties
    checker.expect_prediction(&pipeline, "good bad", Label::Neutral, &["good"], &["bad"]);
    checker.expect_same(&pipeline, "good good good", "good");
    checker.expect_label(&pipeline, &"good ".repeat(100), Label::Positive);
    checker.expect_label(&pipeline, &"bad ".repeat(100), Label::Negative);
    Ok(())
}

/// Words that only `lexicon` lists and that survive splitting on spaces.
fn exclusive_words<'a>(lexicon: &'a Lexicon, other: &Lexicon) -> Vec<&'a str> {
    lexicon
        .iter()
        .filter(|w| !w.is_empty() && !w.contains(' ') && !other.contains(w))
        .collect()
}

/// Runs the fixed scenarios and the sampled lexicon checks.
///
/// # Errors
///
/// Returns [`SentimentError::SelfCheck`] listing every failed case.
pub fn run_self_check(
    pipeline: &LexiconPipeline,
    options: &SelfCheckOptions,
) -> Result<SelfCheckReport> {
    let mut checker = Checker::default();
    scenarios(&mut checker)?;

    let positive = pipeline.model().positive();
    let negative = pipeline.model().negative();
    // already warned about when the model was built
    let shared_words = pipeline.model().shared_words();

    let seed = options.seed.unwrap_or_else(rand::random);
    tracing::debug!(
        seed,
        samples = options.samples,
        shared_words,
        "sampling lexicon words"
    );
    let mut rng = StdRng::seed_from_u64(seed);

    let pos_candidates = exclusive_words(positive, negative);
    let neg_candidates = exclusive_words(negative, positive);
    let pos_words: Vec<&str> = pos_candidates
        .choose_multiple(&mut rng, options.samples)
        .copied()
        .collect();
    let neg_words: Vec<&str> = neg_candidates
        .choose_multiple(&mut rng, options.samples)
        .copied()
        .collect();

    if pos_words.len() < options.samples || neg_words.len() < options.samples {
        tracing::warn!(
            requested = options.samples,
            positive = pos_words.len(),
            negative = neg_words.len(),
            "lexicons have fewer usable words than requested"
        );
    }

    for word in &pos_words {
        checker.expect_label(pipeline, word, Label::Positive);
    }
    for word in &neg_words {
        checker.expect_label(pipeline, word, Label::Negative);
    }
    for (pos, neg) in pos_words.iter().zip(&neg_words) {
        checker.expect_label(pipeline, &format!("{pos} {neg}"), Label::Neutral);
    }

    if !checker.failures.is_empty() {
        return Err(SentimentError::SelfCheck(format!(
            "{} of {} checks failed (seed {seed}): {}",
            checker.failures.len(),
            checker.checks,
            checker.failures.join("; ")
        )));
    }

    Ok(SelfCheckReport {
        checks: checker.checks,
        sampled_positive: pos_words.len(),
        sampled_negative: neg_words.len(),
        shared_words,
        seed,
    })
}
