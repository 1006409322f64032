//! Mandatory-coverage and Jaccard scoring
//!
//! For every instrument type, the normalized input keys are matched
//! against the type's expected keys, literally or through an alias:
//!
//! ```text
//! matched            = { k ∈ input | k ∈ E } ∪ { alias(k) | k ∈ input, k ∉ E, alias(k) ∈ E }
//! mandatory_coverage = |matched ∩ M| / |M|
//! jaccard_score      = |matched| / |input ∪ E|
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use termclass_core::KeySet;
use termclass_schema::{AliasTable, Catalogue, SchemaDefinition};

use crate::rank::RankMetric;

/// Coverage reported for a type with no mandatory keys.
///
/// Nothing is required, so the requirement is vacuously met.
pub const VACUOUS_MANDATORY_COVERAGE: f64 = 1.0;

/// Reported scores are rounded to this many decimal places
pub const SCORE_DECIMALS: i32 = 4;

/// Scores keyed by instrument type name
pub type Scores = BTreeMap<String, ClassificationScore>;

/// How well one input key set fits one instrument type
///
/// Every field is derived from the input keys and the schema; records are
/// only produced by [`ScoreCalculator`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassificationScore {
    mandatory_coverage: f64,
    jaccard_score: f64,
    matched_mandatory_keys: KeySet,
    missing_mandatory_keys: KeySet,
    matched_all_keys: KeySet,
    missing_all_keys: KeySet,
    extra_input_keys: KeySet,
}

impl ClassificationScore {
    /// Result for an input with no keys at all
    fn unmatched(schema: &SchemaDefinition) -> Self {
        Self {
            mandatory_coverage: 0.0,
            jaccard_score: 0.0,
            matched_mandatory_keys: KeySet::new(),
            missing_mandatory_keys: schema.mandatory_keys().clone(),
            matched_all_keys: KeySet::new(),
            missing_all_keys: schema.full_keys().clone(),
            extra_input_keys: KeySet::new(),
        }
    }

    pub fn mandatory_coverage(&self) -> f64 {
        self.mandatory_coverage
    }

    pub fn jaccard_score(&self) -> f64 {
        self.jaccard_score
    }

    /// Value of the given ranking metric
    pub fn metric(&self, metric: RankMetric) -> f64 {
        match metric {
            RankMetric::MandatoryCoverage => self.mandatory_coverage,
            RankMetric::JaccardScore => self.jaccard_score,
        }
    }

    pub fn matched_mandatory_keys(&self) -> &KeySet {
        &self.matched_mandatory_keys
    }

    pub fn missing_mandatory_keys(&self) -> &KeySet {
        &self.missing_mandatory_keys
    }

    /// Canonical keys matched, whether literally or through an alias
    pub fn matched_all_keys(&self) -> &KeySet {
        &self.matched_all_keys
    }

    pub fn missing_all_keys(&self) -> &KeySet {
        &self.missing_all_keys
    }

    /// Input keys that matched nothing in this schema
    pub fn extra_input_keys(&self) -> &KeySet {
        &self.extra_input_keys
    }
}

/// Scores input key sets against every type of a [`Catalogue`]
#[derive(Debug, Clone, Copy)]
pub struct ScoreCalculator<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> ScoreCalculator<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue }
    }

    /// Score `input_keys` against every registered instrument type
    ///
    /// `input_keys` must already be normalized.
    pub fn score(&self, input_keys: &KeySet) -> Scores {
        let registry = self.catalogue.registry();

        if input_keys.is_empty() {
            return registry
                .iter()
                .map(|schema| (schema.type_name().to_string(), ClassificationScore::unmatched(schema)))
                .collect();
        }

        registry
            .iter()
            .map(|schema| {
                let score = score_schema(input_keys, schema, self.catalogue.aliases());
                (schema.type_name().to_string(), score)
            })
            .collect()
    }
}

/// Score a non-empty input key set against a single schema
pub fn score_schema(
    input_keys: &KeySet,
    schema: &SchemaDefinition,
    aliases: &AliasTable,
) -> ClassificationScore {
    let expected = schema.full_keys();
    let mandatory = schema.mandatory_keys();

    let mut matched = KeySet::new();
    let mut contributing = KeySet::new();

    for key in input_keys {
        if expected.contains(key) {
            matched.insert(key.clone());
            contributing.insert(key.clone());
        } else if let Some(canonical) = aliases.resolve(key) {
            if expected.contains(canonical) {
                matched.insert(canonical.to_string());
                contributing.insert(key.clone());
            }
        }
    }

    let matched_mandatory: KeySet = matched.intersection(mandatory).cloned().collect();
    let mandatory_coverage = if mandatory.is_empty() {
        VACUOUS_MANDATORY_COVERAGE
    } else {
        matched_mandatory.len() as f64 / mandatory.len() as f64
    };

    let union = input_keys.union(expected).count();
    let jaccard_score = if union == 0 {
        0.0
    } else {
        matched.len() as f64 / union as f64
    };

    ClassificationScore {
        mandatory_coverage: round_score(mandatory_coverage),
        jaccard_score: round_score(jaccard_score),
        missing_mandatory_keys: mandatory.difference(&matched_mandatory).cloned().collect(),
        missing_all_keys: expected.difference(&matched).cloned().collect(),
        extra_input_keys: input_keys.difference(&contributing).cloned().collect(),
        matched_mandatory_keys: matched_mandatory,
        matched_all_keys: matched,
    }
}

#[inline]
fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (value * factor).round() / factor
}
