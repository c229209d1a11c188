//! `sentiment` - score review lines against positive and negative word lists.
//!
//! # Commands
//!
//! - (none) / `batch`: annotate a review file into a results file
//! - `test` (or `--test`): run the self-check, silent on success
//! - `score <WORD>...`: score one ad-hoc line and print the result
//!
//! Exit codes: 0 on success, 1 on file access errors, 2 when the self-check
//! fails, 64 on command-line usage errors (unknown command, bad option).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use lexicon_pipelines::annotate::{annotate_file, DEFAULT_RESULTS_FILE, DEFAULT_REVIEW_FILE};
use lexicon_pipelines::error::{Result, SentimentError};
use lexicon_pipelines::self_check::{run_self_check, SelfCheckOptions, DEFAULT_SAMPLES};
use lexicon_pipelines::sentiment::{
    LexiconPipeline, Prediction, SentimentAnalysisPipelineBuilder, DEFAULT_NEGATIVE_FILE,
    DEFAULT_POSITIVE_FILE,
};

/// Lexicon sentiment annotator
#[derive(Parser, Debug)]
#[command(name = "sentiment")]
#[command(version)]
#[command(about = "Label review lines Positive, Negative, or Neutral using word lists")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Run the self-check (same as the `test` subcommand)
    #[arg(long)]
    test: bool,

    #[command(flatten)]
    lexicons: LexiconArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
struct LexiconArgs {
    /// Positive word list, one word per line
    #[arg(long, global = true, default_value = DEFAULT_POSITIVE_FILE)]
    positive: PathBuf,

    /// Negative word list, one word per line
    #[arg(long, global = true, default_value = DEFAULT_NEGATIVE_FILE)]
    negative: PathBuf,

    /// Skip word list lines starting with this prefix (e.g. ";")
    #[arg(long, global = true)]
    comment_prefix: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Annotate every line of a review file (default when no command is given)
    Batch(BatchArgs),
    /// Check the lexicons against known labels
    Test(TestArgs),
    /// Score the given words as a single line
    Score(ScoreArgs),
}

#[derive(Args, Debug, PartialEq)]
struct BatchArgs {
    /// Review file, one review per line
    #[arg(long, default_value = DEFAULT_REVIEW_FILE)]
    reviews: PathBuf,

    /// Results file (overwritten)
    #[arg(long, short, default_value = DEFAULT_RESULTS_FILE)]
    output: PathBuf,
}

impl Default for BatchArgs {
    fn default() -> Self {
        Self {
            reviews: PathBuf::from(DEFAULT_REVIEW_FILE),
            output: PathBuf::from(DEFAULT_RESULTS_FILE),
        }
    }
}

#[derive(Args, Debug, PartialEq)]
struct TestArgs {
    /// Words sampled from each lexicon
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,
}

impl Default for TestArgs {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: None,
        }
    }
}

impl From<TestArgs> for SelfCheckOptions {
    fn from(args: TestArgs) -> Self {
        Self {
            samples: args.samples,
            seed: args.seed,
        }
    }
}

#[derive(Args, Debug, PartialEq)]
struct ScoreArgs {
    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,

    /// Words of the line, joined with single spaces (words starting with `-` go after `--`)
    #[arg(required = true, num_args = 1..)]
    words: Vec<String>,
}

impl LexiconArgs {
    fn build(&self) -> Result<LexiconPipeline> {
        let mut builder =
            SentimentAnalysisPipelineBuilder::from_files(&self.positive, &self.negative);
        if let Some(prefix) = &self.comment_prefix {
            builder = builder.comment_prefix(prefix.clone());
        }
        builder.build()
    }
}

fn batch(lexicons: &LexiconArgs, args: BatchArgs) -> Result<()> {
    let pipeline = lexicons.build()?;
    annotate_file(&pipeline, &args.reviews, &args.output)?;
    Ok(())
}

fn self_test(lexicons: &LexiconArgs, args: TestArgs) -> Result<()> {
    let pipeline = lexicons.build()?;
    let report = run_self_check(&pipeline, &args.into())?;
    tracing::info!(
        checks = report.checks,
        seed = report.seed,
        shared_words = report.shared_words,
        "self-check passed"
    );
    Ok(())
}

fn score(lexicons: &LexiconArgs, args: ScoreArgs) -> Result<()> {
    let pipeline = lexicons.build()?;
    let line = args.words.join(" ");
    let prediction = pipeline.predict(&line);

    if args.json {
        println!("{}", serde_json::to_string(&prediction)?);
    } else {
        println!("{}", summary_line(&line, &prediction));
    }
    Ok(())
}

fn summary_line(line: &str, prediction: &Prediction) -> String {
    let join = |words: &std::collections::BTreeSet<String>| {
        words.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    };
    format!(
        "Sentiment:{}; Positive_words:[{}]; Negative_words:[{}]; Given_line:[{}]",
        prediction.label,
        join(&prediction.positive),
        join(&prediction.negative),
        line
    )
}

/// Exit code for command-line usage errors (BSD `EX_USAGE`).
const USAGE_EXIT: u8 = 64;

/// Picks the command to run, treating `--test` as the `test` subcommand.
fn resolve_command(
    test: bool,
    command: Option<Commands>,
) -> std::result::Result<Commands, clap::Error> {
    match (test, command) {
        (true, None) => Ok(Commands::Test(TestArgs::default())),
        (true, Some(_)) => Err(Cli::command().error(
            clap::error::ErrorKind::ArgumentConflict,
            "--test cannot be combined with a subcommand",
        )),
        (false, Some(command)) => Ok(command),
        (false, None) => Ok(Commands::Batch(BatchArgs::default())),
    }
}

fn usage_exit(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::from(USAGE_EXIT)
    } else {
        // --help and --version
        ExitCode::SUCCESS
    }
}

fn exit_code_for_error(err: &SentimentError) -> u8 {
    match err {
        SentimentError::SelfCheck(_) => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_exit(err),
    };

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let command = match resolve_command(cli.test, cli.command) {
        Ok(command) => command,
        Err(err) => return usage_exit(err),
    };

    let result = match command {
        Commands::Batch(args) => batch(&cli.lexicons, args),
        Commands::Test(args) => self_test(&cli.lexicons, args),
        Commands::Score(args) => score(&cli.lexicons, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::from(exit_code_for_error(&err))
        }
    }
}
