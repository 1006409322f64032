//! # termclass
//!
//! Offline classifier for extracted financial term sheets.
//!
//! A term sheet arrives as a nested key/value document of unknown, noisy
//! schema. termclass collects every key in it, matches them (literally or
//! through aliases) against a fixed catalogue of instrument types, and
//! ranks the types by mandatory key coverage and by Jaccard similarity.
//! No external inference service is involved.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! termclass batch ./metadata --output report.json
//! termclass classify ./metadata/T-1001/versions/v3.json
//! termclass schemas
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use termclass::prelude::*;
//!
//! let catalogue = Catalogue::builtin().unwrap();
//! let pipeline = ClassificationPipeline::new(catalogue);
//!
//! let report = pipeline.run("./metadata");
//! for result in &report.results {
//!     println!("{} {} -> {:?}", result.group_id, result.version_id,
//!         result.classification.summary.primary_type);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `termclass-core` - key normalization, document model, key extraction, errors
//! - `termclass-schema` - instrument schema registry, alias table, configuration
//! - `termclass-similarity` - coverage/Jaccard scoring and ranking
//! - `termclass-storage` - read-only access to `group/versions/*.json` snapshots

pub mod pipeline;
pub mod report;

// Re-export core types
pub use termclass_core::{
    normalize_key, normalize_keys, Document, Error, KeyExtractor, KeySet, Result,
};

// Re-export reference data
pub use termclass_schema::{
    AliasConfig, AliasTable, Catalogue, ClassifierConfig, DeadAlias, SchemaDefinition, SchemaError,
    SchemaRegistry, TypeConfig,
};

// Re-export scoring
pub use termclass_similarity::{
    Classification, ClassificationScore, ClassificationSummary, RankMetric, RankedEntry,
    Ranker, ScoreCalculator, Scores,
};

// Re-export storage
pub use termclass_storage::{load_document, VersionFile, VersionStore};

pub use pipeline::{ClassificationPipeline, FileClassification, FileOutcome, SkippedFile};
pub use report::BatchReport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BatchReport, Catalogue, Classification, ClassificationPipeline, ClassifierConfig,
        Document, Error, KeyExtractor, RankMetric, Result, ScoreCalculator,
    };
}
