//! Batch report and result logging

use atomicwrites::{AtomicFile, OverwriteBehavior};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use termclass_core::{Error, Result};
use termclass_similarity::Classification;
use tracing::info;
use uuid::Uuid;

use crate::pipeline::{FileClassification, SkippedFile};

/// Aggregated output of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub root: PathBuf,
    /// False when the base directory did not exist or could not be read
    pub root_found: bool,
    pub results: Vec<FileClassification>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            root: root.as_ref().to_path_buf(),
            root_found: true,
            results: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[inline]
    pub fn processed_count(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Find the result for one group/version
    pub fn get(&self, group_id: &str, version_id: &str) -> Option<&FileClassification> {
        self.results
            .iter()
            .find(|r| r.group_id == group_id && r.version_id == version_id)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON, replacing `path` atomically
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json_pretty()?;
        let file = AtomicFile::new(path.as_ref(), OverwriteBehavior::AllowOverwrite);
        file.write(|f| f.write_all(json.as_bytes()))
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))
    }

    /// One line per classified file, then the totals
    pub fn log_final(&self) {
        for result in &self.results {
            info!(
                "Final classification: group {}, version {} -> {} ({:.2}%)",
                result.group_id,
                result.version_id,
                result.classification.summary.primary_type.as_deref().unwrap_or("unclassified"),
                result.classification.summary.confidence_pct,
            );
        }
        info!(
            "Batch complete: {} classified, {} skipped",
            self.processed_count(),
            self.skipped_count()
        );
    }
}

/// Log the summary and both rankings of a classified file
pub fn log_classification(result: &FileClassification) {
    info!(
        "--- Classification results: group {}, version {} ---",
        result.group_id, result.version_id
    );
    log_rankings(&result.classification);
}

/// Log the summary line followed by the full per-type breakdown
pub fn log_rankings(classification: &Classification) {
    let summary = &classification.summary;
    match summary.primary_type.as_deref() {
        Some(primary) => {
            info!("Primary classification: {}", primary);
            info!(
                "Confidence score: {:.2}% (based on mandatory keys found)",
                summary.confidence_pct
            );
        }
        None => info!("No classification possible based on mandatory key coverage"),
    }

    info!("Ranked by mandatory key coverage:");
    for (rank, entry) in classification.ranked_by_mandatory.iter().enumerate() {
        info!(
            "  {}. {} (mandatory: {:.2}%, jaccard: {:.4}) matched: {:?}, missing: {:?}",
            rank + 1,
            entry.type_name,
            entry.score.mandatory_coverage() * 100.0,
            entry.score.jaccard_score(),
            entry.score.matched_mandatory_keys(),
            entry.score.missing_mandatory_keys(),
        );
    }

    info!("Ranked by Jaccard score:");
    for (rank, entry) in classification.ranked_by_jaccard.iter().enumerate() {
        info!(
            "  {}. {} (jaccard: {:.4}, mandatory: {:.2}%)",
            rank + 1,
            entry.type_name,
            entry.score.jaccard_score(),
            entry.score.mandatory_coverage() * 100.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_roundtrip_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let report = BatchReport::new(dir.path());
        let out = dir.path().join("report.json");

        report.write_to(&out).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();

        assert_eq!(value["run_id"], report.run_id.to_string());
        assert_eq!(value["root_found"], true);
        assert!(value["results"].as_array().unwrap().is_empty());

        // Overwrites an existing report
        report.write_to(&out).unwrap();
    }

    #[test]
    fn test_counts() {
        let report = BatchReport::new("/data");
        assert_eq!(report.processed_count(), 0);
        assert_eq!(report.skipped_count(), 0);
        assert!(report.get("T1", "v1").is_none());
    }
}
