//! Classification outcome and its top-line summary

use serde::Serialize;

use crate::rank::{rank, RankMetric, RankedEntry};
use crate::score::Scores;

/// Both rankings of one input document plus the summary derived from them
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Classification {
    pub summary: ClassificationSummary,
    pub ranked_by_mandatory: Vec<RankedEntry>,
    pub ranked_by_jaccard: Vec<RankedEntry>,
}

impl Classification {
    pub fn from_scores(scores: &Scores) -> Self {
        let ranked_by_mandatory = rank(scores, RankMetric::MandatoryCoverage);
        let ranked_by_jaccard = rank(scores, RankMetric::JaccardScore);
        let summary = ClassificationSummary::compute(&ranked_by_mandatory, &ranked_by_jaccard);
        Self { summary, ranked_by_mandatory, ranked_by_jaccard }
    }

    /// Ranked list for a metric
    pub fn ranked_by(&self, metric: RankMetric) -> &[RankedEntry] {
        match metric {
            RankMetric::MandatoryCoverage => &self.ranked_by_mandatory,
            RankMetric::JaccardScore => &self.ranked_by_jaccard,
        }
    }
}

/// Headline result: the best type by mandatory coverage and its confidence
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassificationSummary {
    /// Type ranked first by mandatory coverage
    pub primary_type: Option<String>,
    /// Mandatory coverage of the primary type, as a percentage
    pub confidence_pct: f64,
    /// Type ranked first by Jaccard score
    pub jaccard_leader: Option<String>,
    /// Whether both rankings agree on the leading type
    pub rankings_agree: bool,
}

impl ClassificationSummary {
    pub fn compute(by_mandatory: &[RankedEntry], by_jaccard: &[RankedEntry]) -> Self {
        let primary = by_mandatory.first();
        let jaccard_leader = by_jaccard.first().map(|r| r.type_name.clone());
        let primary_type = primary.map(|r| r.type_name.clone());

        Self {
            confidence_pct: primary
                .map(|r| r.score.mandatory_coverage() * 100.0)
                .unwrap_or(0.0),
            rankings_agree: primary_type.is_some() && primary_type == jaccard_leader,
            primary_type,
            jaccard_leader,
        }
    }
}
