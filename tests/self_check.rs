mod common;

use common::Fixture;
use lexicon_pipelines::error::SentimentError;
use lexicon_pipelines::self_check::{run_self_check, SelfCheckOptions};
use lexicon_pipelines::sentiment::SentimentAnalysisPipelineBuilder;

#[test]
fn self_check_passes_on_file_lexicons() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;
    let pipeline =
        SentimentAnalysisPipelineBuilder::from_files(fixture.positive(), fixture.negative())
            .comment_prefix(";")
            .build()?;

    let report = run_self_check(&pipeline, &SelfCheckOptions::default())?;

    // "envious" is on both lists
    assert_eq!(report.shared_words, 1);
    assert_eq!(report.sampled_positive, 4);
    assert_eq!(report.sampled_negative, 3);
    Ok(())
}

#[test]
fn self_check_tolerates_comment_headers() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;
    // without a comment prefix the headers are multi-word entries and are not sampled
    let pipeline =
        SentimentAnalysisPipelineBuilder::from_files(fixture.positive(), fixture.negative())
            .build()?;

    let report = run_self_check(
        &pipeline,
        &SelfCheckOptions {
            samples: 50,
            seed: Some(1),
        },
    )?;
    assert_eq!(report.sampled_positive, 4);
    assert_eq!(report.seed, 1);
    Ok(())
}

#[test]
fn self_check_error_is_distinct_from_file_errors() {
    let err = SentimentError::SelfCheck("1 of 8 checks failed".into());
    assert!(matches!(err, SentimentError::SelfCheck(_)));
    assert!(err.to_string().starts_with("self-check failed"));
}
