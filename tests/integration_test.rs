// Integration tests for termclass
use serde_json::json;
use std::fs;
use std::path::Path;
use termclass::{
    Catalogue, ClassificationPipeline, ClassifierConfig, Document, KeyExtractor, RankMetric,
    ScoreCalculator, TypeConfig,
};

fn pipeline() -> ClassificationPipeline {
    ClassificationPipeline::new(Catalogue::builtin().unwrap())
}

fn write_json(root: &Path, rel: &str, value: &serde_json::Value) {
    write_raw(root, rel, &serde_json::to_string_pretty(value).unwrap());
}

fn write_raw(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn irs_document() -> serde_json::Value {
    json!({
        "instrumentType": "IRS",
        "tradeId": "T-1001",
        "firmId": "FIRM-1",
        "accountId": "ACC-9",
        "currency": "USD",
        "effectiveDate": "2025-01-15",
        "maturityDate": "2030-01-15",
        "notional": 10000000,
        "direction": "PAY",
        "payLeg": {"rate": 0.0425},
        "receiveLeg": {"index": "SOFR"},
        "dayCountConvention": "ACT/360",
        "businessDayConvention": "MODFOLLOWING"
    })
}

#[test]
fn test_exact_interest_rate_swap_ranks_first() {
    let classification = pipeline()
        .classify_keys(&termclass::normalize_keys([
            "instrumentType", "tradeId", "firmId", "accountId", "currency",
            "effectiveDate", "maturityDate", "notional", "direction",
            "payLeg", "receiveLeg", "dayCountConvention", "businessDayConvention",
        ]))
        .unwrap();

    for metric in RankMetric::ALL {
        let top = &classification.ranked_by(metric)[0];
        assert_eq!(top.type_name, "InterestRateSwap", "{}", metric);
        assert_eq!(top.score.mandatory_coverage(), 1.0);
        assert_eq!(top.score.jaccard_score(), 1.0);
    }
}

#[test]
fn test_deposit_mandatory_subset() {
    let classification = pipeline()
        .classify_document(&Document::from(json!({
            "principal": 1000000,
            "depositDate": "2025-03-01",
            "maturityDate": "2025-09-01",
            "interestRate": 0.051,
            "dayCountConvention": "ACT/365"
        })))
        .unwrap();

    let top = &classification.ranked_by_mandatory[0];
    assert_eq!(top.type_name, "MoneyMarketDeposit");
    assert_eq!(top.score.mandatory_coverage(), 1.0);
    assert!(top.score.jaccard_score() < 1.0);
}

#[test]
fn test_alias_counts_in_every_schema_expecting_canonical() {
    let catalogue = Catalogue::builtin().unwrap();
    let keys = KeyExtractor::extract(&Document::from(json!({"termination date": "2030-01-15"})));
    let scores = ScoreCalculator::new(&catalogue).score(&keys);

    for schema in catalogue.registry().iter() {
        assert!(!schema.full_keys().contains("termination date"));
        let matched = scores[schema.type_name()].matched_all_keys().contains("maturitydate");
        assert_eq!(matched, schema.full_keys().contains("maturitydate"), "{}", schema.type_name());
    }
    assert!(scores["InterestRateSwap"].matched_all_keys().contains("maturitydate"));
    assert!(!scores["FXDigital"].matched_all_keys().contains("maturitydate"));
}

#[test]
fn test_empty_object_scores_zero_everywhere() {
    let catalogue = Catalogue::builtin().unwrap();
    let keys = KeyExtractor::extract(&Document::from(json!({})));
    let scores = ScoreCalculator::new(&catalogue).score(&keys);

    assert_eq!(scores.len(), 6);
    for schema in catalogue.registry().iter() {
        let score = &scores[schema.type_name()];
        assert_eq!(score.mandatory_coverage(), 0.0);
        assert_eq!(score.jaccard_score(), 0.0);
        assert_eq!(score.missing_mandatory_keys(), schema.mandatory_keys());
        assert_eq!(score.missing_all_keys(), schema.full_keys());
    }

    // The pipeline reports no classification for such a document
    assert!(pipeline().classify_keys(&keys).is_none());
}

#[test]
fn test_batch_skips_invalid_file_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "T-1001/versions/v1.json", &irs_document());
    write_raw(dir.path(), "T-1001/versions/v2.json", "{ this is not json");
    write_json(
        dir.path(),
        "T-1001/versions/v3.json",
        &json!({"Principal Amount": 1, "Issue Date": "x", "Maturity": "y", "Rate": 0.1, "Day Count Fraction": "ACT/360"}),
    );

    let report = pipeline().run(dir.path());

    assert!(report.root_found);
    assert_eq!(report.processed_count(), 2);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.skipped[0].version_id, "v2");
    assert_eq!(report.skipped[0].kind, "input_parse");

    let v1 = report.get("T-1001", "v1").unwrap();
    assert_eq!(v1.classification.summary.primary_type.as_deref(), Some("InterestRateSwap"));
    let v3 = report.get("T-1001", "v3").unwrap();
    assert_eq!(v3.classification.summary.primary_type.as_deref(), Some("MoneyMarketDeposit"));
}

#[test]
fn test_batch_skips_groups_without_versions() {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "A/versions/v1.json", &irs_document());
    write_json(dir.path(), "B/drafts/v1.json", &irs_document());
    fs::create_dir_all(dir.path().join("C")).unwrap();

    let report = pipeline().run(dir.path());
    assert_eq!(report.processed_count(), 1);
    assert_eq!(report.results[0].group_id, "A");
    assert!(report.skipped.is_empty());
}

#[test]
fn test_parallel_run_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    for group in 0..4 {
        for version in 0..5 {
            let rel = format!("G{}/versions/v{}.json", group, version);
            if version == 2 {
                write_raw(dir.path(), &rel, "");
            } else {
                write_json(dir.path(), &rel, &irs_document());
            }
        }
    }

    let sequential = pipeline().run(dir.path());
    let parallel = pipeline().with_jobs(4).run(dir.path());

    assert_eq!(sequential.processed_count(), 16);
    assert_eq!(
        serde_json::to_string(&sequential.results).unwrap(),
        serde_json::to_string(&parallel.results).unwrap()
    );
    assert_eq!(sequential.skipped, parallel.skipped);
}

#[test]
fn test_classification_is_byte_identical_across_runs() {
    let p = pipeline();
    let doc = Document::from(irs_document());
    let first = serde_json::to_vec(&p.classify_document(&doc)).unwrap();
    let second = serde_json::to_vec(&p.classify_document(&doc)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_config_file_adds_instrument_type() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ClassifierConfig::builtin();
    config.types.push(TypeConfig {
        name: "CommoditySwap".to_string(),
        keys: vec!["commodity".into(), "fixedPrice".into(), "floatingIndex".into(), "quantity".into()],
        mandatory: vec!["commodity".into(), "fixedPrice".into(), "quantity".into()],
    });
    let path = dir.path().join("classifier.json");
    fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

    let catalogue = Catalogue::from_config(&ClassifierConfig::from_path(&path).unwrap()).unwrap();
    assert_eq!(catalogue.registry().len(), 7);

    let classification = ClassificationPipeline::new(catalogue)
        .classify_document(&Document::from(json!({"Commodity": "WTI", "Fixed Price": 71.5, "fixedPrice": 71.5, "Quantity": 1000})))
        .unwrap();
    assert_eq!(classification.summary.primary_type.as_deref(), Some("CommoditySwap"));
}

#[test]
fn test_shipped_config_matches_builtin() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/classifier.json");
    let shipped = ClassifierConfig::from_path(path).unwrap();
    assert_eq!(shipped, ClassifierConfig::builtin());
}
