//! Ranking of per-type scores
//!
//! Types are ordered by the chosen metric, highest first. Ties are broken
//! by ascending type name, so the ordering is total and never depends on
//! iteration or sort stability.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::score::{ClassificationScore, Scores};

/// Score used to order instrument types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMetric {
    /// Fraction of mandatory keys found
    MandatoryCoverage,
    /// Matched keys over the union of input and expected keys
    JaccardScore,
}

impl RankMetric {
    pub const ALL: [RankMetric; 2] = [RankMetric::MandatoryCoverage, RankMetric::JaccardScore];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankMetric::MandatoryCoverage => "mandatory_coverage",
            RankMetric::JaccardScore => "jaccard_score",
        }
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMetric {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mandatory_coverage" => Ok(RankMetric::MandatoryCoverage),
            "jaccard_score" => Ok(RankMetric::JaccardScore),
            other => Err(RankError::UnknownMetric(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RankError {
    #[error("Unknown ranking metric '{0}' (expected mandatory_coverage or jaccard_score)")]
    UnknownMetric(String),
}

/// One instrument type in a ranked list
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedEntry {
    pub type_name: String,
    pub score: ClassificationScore,
}

/// Orders score mappings by a single metric
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    metric: RankMetric,
}

impl Ranker {
    pub fn new(metric: RankMetric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> RankMetric {
        self.metric
    }

    /// Rank every type of `scores`, best first
    pub fn rank(&self, scores: &Scores) -> Vec<RankedEntry> {
        let mut ranked: Vec<RankedEntry> = scores
            .iter()
            .map(|(type_name, score)| RankedEntry {
                type_name: type_name.clone(),
                score: score.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| self.compare(a, b));
        ranked
    }

    fn compare(&self, a: &RankedEntry, b: &RankedEntry) -> Ordering {
        let a_value = OrderedFloat(a.score.metric(self.metric));
        let b_value = OrderedFloat(b.score.metric(self.metric));
        b_value
            .cmp(&a_value)
            .then_with(|| a.type_name.cmp(&b.type_name))
    }
}

/// Rank `scores` by `metric`, best first
pub fn rank(scores: &Scores, metric: RankMetric) -> Vec<RankedEntry> {
    Ranker::new(metric).rank(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ScoreCalculator;
    use termclass_core::normalize_keys;
    use termclass_schema::{AliasTable, Catalogue, SchemaDefinition, SchemaRegistry};

    fn names(ranked: &[RankedEntry]) -> Vec<&str> {
        ranked.iter().map(|r| r.type_name.as_str()).collect()
    }

    fn tied_catalogue() -> Catalogue {
        let registry = SchemaRegistry::new(vec![
            SchemaDefinition::new("Gamma", ["notional", "strike"], ["notional"]).unwrap(),
            SchemaDefinition::new("Alpha", ["notional", "spread"], ["notional"]).unwrap(),
            SchemaDefinition::new("Beta", ["notional", "currency"], ["notional"]).unwrap(),
            SchemaDefinition::new("Delta", ["currency"], ["currency"]).unwrap(),
        ])
        .unwrap();
        Catalogue::new(registry, AliasTable::new())
    }

    #[test]
    fn test_metric_parse_and_display() {
        assert_eq!("jaccard_score".parse::<RankMetric>().unwrap(), RankMetric::JaccardScore);
        assert_eq!(
            " mandatory_coverage".parse::<RankMetric>().unwrap(),
            RankMetric::MandatoryCoverage
        );
        assert!(matches!(
            "confidence".parse::<RankMetric>(),
            Err(RankError::UnknownMetric(m)) if m == "confidence"
        ));
        assert_eq!(RankMetric::MandatoryCoverage.to_string(), "mandatory_coverage");
        assert_eq!(serde_json::to_string(&RankMetric::JaccardScore).unwrap(), "\"jaccard_score\"");
    }

    #[test]
    fn test_ties_break_by_ascending_name() {
        let catalogue = tied_catalogue();
        let scores = ScoreCalculator::new(&catalogue).score(&normalize_keys(["notional"]));

        let by_mandatory = rank(&scores, RankMetric::MandatoryCoverage);
        assert_eq!(names(&by_mandatory), vec!["Alpha", "Beta", "Gamma", "Delta"]);

        let by_jaccard = rank(&scores, RankMetric::JaccardScore);
        assert_eq!(names(&by_jaccard), vec!["Alpha", "Beta", "Gamma", "Delta"]);
    }

    #[test]
    fn test_orders_by_metric_descending() {
        let catalogue = Catalogue::builtin().unwrap();
        let input = normalize_keys(["underlying", "strike price", "spread", "expiry", "optionType"]);
        let scores = ScoreCalculator::new(&catalogue).score(&input);

        let ranked = rank(&scores, RankMetric::MandatoryCoverage);
        assert_eq!(ranked[0].type_name, "SingleSpreadOption");
        assert_eq!(ranked[0].score.mandatory_coverage(), 1.0);
        for pair in ranked.windows(2) {
            assert!(pair[0].score.mandatory_coverage() >= pair[1].score.mandatory_coverage());
        }
    }

    #[test]
    fn test_rank_is_repeatable() {
        let catalogue = Catalogue::builtin().unwrap();
        let scores = ScoreCalculator::new(&catalogue).score(&normalize_keys(["currency", "tradeId"]));
        let ranker = Ranker::new(RankMetric::JaccardScore);

        let first = ranker.rank(&scores);
        for _ in 0..5 {
            assert_eq!(ranker.rank(&scores), first);
        }
    }

    #[test]
    fn test_rank_empty_scores() {
        assert!(rank(&Scores::new(), RankMetric::JaccardScore).is_empty());
    }
}
