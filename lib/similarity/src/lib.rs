//! # termclass Similarity
//!
//! Scores a normalized key set against every instrument type of a
//! [`Catalogue`](termclass_schema::Catalogue) and ranks the result.
//!
//! ## Example
//!
//! ```rust
//! use termclass_core::normalize_keys;
//! use termclass_schema::Catalogue;
//! use termclass_similarity::{Classification, ScoreCalculator};
//!
//! let catalogue = Catalogue::builtin().unwrap();
//! let keys = normalize_keys(["Principal", "Issue Date", "Maturity", "Rate", "dayCountConvention"]);
//!
//! let scores = ScoreCalculator::new(&catalogue).score(&keys);
//! let classification = Classification::from_scores(&scores);
//! assert_eq!(classification.summary.primary_type.as_deref(), Some("MoneyMarketDeposit"));
//! ```
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Key set    │────>│ ScoreCalculator │────>│   Ranker    │
//! │ (normalized)│     │ (per type)      │     │ (2 metrics) │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//!                                                    │
//!                                             ┌──────┴──────┐
//!                                             │   Summary   │
//!                                             └─────────────┘
//! ```

pub mod explain;
pub mod rank;
pub mod score;

pub use explain::{Classification, ClassificationSummary};
pub use rank::{rank, RankError, RankMetric, RankedEntry, Ranker};
pub use score::{
    score_schema, ClassificationScore, ScoreCalculator, Scores, SCORE_DECIMALS,
    VACUOUS_MANDATORY_COVERAGE,
};
