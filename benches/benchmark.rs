// Benchmarks for key extraction and scoring
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use serde_json::{json, Map, Value};
use termclass::{normalize_keys, Catalogue, Classification, Document, KeyExtractor, ScoreCalculator};

const VOCABULARY: &[&str] = &[
    "tradeId", "firmId", "notional", "maturityDate", "Termination Date", "payLeg",
    "receiveLeg", "Day Count Basis", "strike price", "underlying", "spread", "expiry",
    "principal", "Rate", "payCurrency", "receiveCurrency", "fx rate", "comments",
    "schedule", "counterparty", "Party A", "settlement", "barrier level", "notes",
];

fn generate_document(rng: &mut impl Rng, fields: usize, depth: usize) -> Value {
    let mut map = Map::new();
    for i in 0..fields {
        let key = format!("{} {}", VOCABULARY[rng.random_range(0..VOCABULARY.len())], i % 3);
        let value = if depth > 0 && rng.random_bool(0.2) {
            json!([generate_document(rng, fields / 2, depth - 1)])
        } else {
            json!(rng.random::<f64>())
        };
        map.insert(key, value);
    }
    Value::Object(map)
}

fn benchmark_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let mut rng = StdRng::seed_from_u64(7);

    for fields in [10, 100, 1000].iter() {
        let doc = Document::from(generate_document(&mut rng, *fields, 3));
        group.bench_with_input(BenchmarkId::new("keys", fields), &doc, |b, doc| {
            b.iter(|| KeyExtractor::extract(black_box(doc)));
        });
    }

    group.finish();
}

fn benchmark_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let catalogue = Catalogue::builtin().unwrap();
    let calculator = ScoreCalculator::new(&catalogue);

    for size in [5, 50, 500].iter() {
        let keys = normalize_keys((0..*size).map(|i| {
            if i < VOCABULARY.len() {
                VOCABULARY[i].to_string()
            } else {
                format!("extra field {}", i)
            }
        }));
        group.bench_with_input(BenchmarkId::new("all_types", size), &keys, |b, keys| {
            b.iter(|| {
                let scores = calculator.score(black_box(keys));
                Classification::from_scores(&scores)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_extract, benchmark_score);
criterion_main!(benches);
