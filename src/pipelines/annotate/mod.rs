//! Batch annotation of review files.
//!
//! Reads one review per line, scores each trimmed line, and writes a result
//! block per review:
//!
//! ```text
//! <review, trimmed>
//! <matched positive words, e.g. ['good', 'nice']>
//! <matched negative words>
//! <Positive|Negative|Neutral>
//! <blank line>
//! ```
//!
//! The output file is truncated and rewritten on every run, and match lists are
//! sorted, so annotating the same inputs twice yields byte-identical files.
//!
//! ```rust,no_run
//! use lexicon_pipelines::annotate::annotate_file;
//! use lexicon_pipelines::sentiment::SentimentAnalysisPipelineBuilder;
//!
//! # fn main() -> lexicon_pipelines::error::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::default_files().build()?;
//! let summary = annotate_file(&pipeline, "nokia.txt", "results.txt")?;
//! println!("{} reviews, {} positive", summary.reviews, summary.positive);
//! # Ok(())
//! # }
//! ```

pub(crate) mod format;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, SentimentError};
use crate::loaders::read_lines;
use crate::pipelines::sentiment::model::SentimentAnalysisModel;
use crate::pipelines::sentiment::{Label, SentimentAnalysisPipeline};
use crate::pipelines::stats::PipelineStats;

pub use format::{format_words, write_block};

/// Default review file name.
pub const DEFAULT_REVIEW_FILE: &str = "nokia.txt";
/// Default results file name.
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

/// Counts per label for one annotation run.
#[derive(Debug, Clone)]
pub struct AnnotationSummary {
    /// Number of review lines scored.
    pub reviews: usize,
    /// Reviews labelled `Positive`.
    pub positive: usize,
    /// Reviews labelled `Negative`.
    pub negative: usize,
    /// Reviews labelled `Neutral`.
    pub neutral: usize,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Annotates `reviews` into `output`, replacing any previous contents of `output`.
///
/// The review file is read completely before `output` is created, so a missing
/// review file leaves an existing results file untouched.
///
/// # Errors
///
/// Returns [`SentimentError::FileAccess`] if the review file cannot be read or
/// the output file cannot be created or written.
pub fn annotate_file<M: SentimentAnalysisModel>(
    pipeline: &SentimentAnalysisPipeline<M>,
    reviews: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<AnnotationSummary> {
    let reviews = reviews.as_ref();
    let output = output.as_ref();

    let file = File::open(reviews).map_err(|e| SentimentError::file_access(reviews, e))?;
    let lines = read_lines(BufReader::new(file), reviews).collect::<Result<Vec<_>>>()?;

    let file = File::create(output).map_err(|e| SentimentError::file_access(output, e))?;
    let mut writer = BufWriter::new(file);

    let summary = write_annotations(pipeline, lines, &mut writer, output)?;
    writer
        .flush()
        .map_err(|e| SentimentError::file_access(output, e))?;

    tracing::info!(
        reviews = summary.reviews,
        positive = summary.positive,
        negative = summary.negative,
        neutral = summary.neutral,
        elapsed_ms = summary.stats.total_time.as_millis() as u64,
        reviews_per_sec = summary.stats.items_per_second(),
        input = %reviews.display(),
        output = %output.display(),
        "annotated reviews"
    );

    Ok(summary)
}

/// Annotates every line of `reader` into `writer`.
///
/// # Errors
///
/// Returns [`SentimentError::FileAccess`] if reading or writing fails.
pub fn annotate<M, R, W>(
    pipeline: &SentimentAnalysisPipeline<M>,
    reader: R,
    mut writer: W,
) -> Result<AnnotationSummary>
where
    M: SentimentAnalysisModel,
    R: BufRead,
    W: Write,
{
    let input = Path::new("<input>");
    let output = Path::new("<output>");

    let lines = read_lines(reader, input).collect::<Result<Vec<_>>>()?;
    let summary = write_annotations(pipeline, lines, &mut writer, output)?;
    writer
        .flush()
        .map_err(|e| SentimentError::file_access(output, e))?;
    Ok(summary)
}

fn write_annotations<M: SentimentAnalysisModel, W: Write>(
    pipeline: &SentimentAnalysisPipeline<M>,
    lines: Vec<String>,
    writer: &mut W,
    output: &Path,
) -> Result<AnnotationSummary> {
    let stats_builder = PipelineStats::start();
    let (mut positive, mut negative, mut neutral) = (0, 0, 0);

    for line in &lines {
        let line = line.trim();
        let prediction = pipeline.predict(line);
        match prediction.label {
            Label::Positive => positive += 1,
            Label::Negative => negative += 1,
            Label::Neutral => neutral += 1,
        }
        write_block(writer, line, &prediction)
            .map_err(|e| SentimentError::file_access(output, e))?;
    }

    Ok(AnnotationSummary {
        reviews: lines.len(),
        positive,
        negative,
        neutral,
        stats: stats_builder.finish(lines.len()),
    })
}
