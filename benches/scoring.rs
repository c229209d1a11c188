use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lexicon_pipelines::sentiment::{Lexicon, LexiconPipeline, SentimentAnalysisPipelineBuilder};

fn pipeline(size: usize) -> LexiconPipeline {
    let positive: Lexicon = (0..size).map(|i| format!("pos{i}")).collect();
    let negative: Lexicon = (0..size).map(|i| format!("neg{i}")).collect();
    SentimentAnalysisPipelineBuilder::lexicon(positive, negative)
        .build()
        .expect("in-memory lexicons always build")
}

fn bench_predict_simple(c: &mut Criterion) {
    let pipeline = pipeline(2000);
    let line = "the pos12 phone has a neg7 screen but pos99 battery";

    c.bench_function("predict_simple", |b| {
        b.iter(|| pipeline.predict(black_box(line)))
    });
}

fn bench_predict_line_length(c: &mut Criterion) {
    let pipeline = pipeline(2000);
    let mut group = c.benchmark_group("predict_line_length");

    for words in [10, 100, 1000] {
        let line = (0..words)
            .map(|i| if i % 3 == 0 { format!("pos{i}") } else { format!("w{i}") })
            .collect::<Vec<_>>()
            .join(" ");
        group.bench_with_input(BenchmarkId::from_parameter(words), &line, |b, line| {
            b.iter(|| pipeline.predict(black_box(line)))
        });
    }
    group.finish();
}

fn bench_run_batch(c: &mut Criterion) {
    let pipeline = pipeline(2000);
    let lines: Vec<String> = (0..256)
        .map(|i| format!("review {i} pos{} neg{}", i % 50, i % 70))
        .collect();
    let texts: Vec<&str> = lines.iter().map(String::as_str).collect();

    c.bench_function("run_batch_256", |b| {
        b.iter(|| pipeline.run(black_box(texts.as_slice())))
    });
}

criterion_group!(
    benches,
    bench_predict_simple,
    bench_predict_line_length,
    bench_run_batch
);
criterion_main!(benches);
