//! Batch classification over a directory of stored term sheets
//!
//! Every file is classified independently (extract -> score -> rank) against
//! the same immutable [`Catalogue`]. Per-file problems are recorded as
//! skips; they never abort the batch.

use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use termclass_core::{Document, Error, KeyExtractor, KeySet, Result};
use termclass_schema::Catalogue;
use termclass_similarity::{Classification, ScoreCalculator};
use termclass_storage::{load_document, VersionFile, VersionStore};
use tracing::{debug, info, warn};

use crate::report::{log_classification, BatchReport};

/// Classification of one stored version file
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileClassification {
    pub group_id: String,
    pub version_id: String,
    /// Number of distinct normalized keys found in the document
    pub key_count: usize,
    #[serde(flatten)]
    pub classification: Classification,
}

/// A version file that produced no classification
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkippedFile {
    pub group_id: String,
    pub version_id: String,
    pub path: PathBuf,
    /// Error kind, e.g. `input_parse` or `empty_input`
    pub kind: String,
    pub reason: String,
}

impl SkippedFile {
    fn new(file: &VersionFile, err: &Error) -> Self {
        Self {
            group_id: file.group_id.clone(),
            version_id: file.version_id.clone(),
            path: file.path.clone(),
            kind: err.kind().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Outcome of classifying one version file
#[derive(Debug, Clone)]
pub enum FileOutcome {
    Classified(FileClassification),
    Skipped(SkippedFile),
}

pub struct ClassificationPipeline {
    catalogue: Catalogue,
    jobs: usize,
}

impl ClassificationPipeline {
    pub fn new(catalogue: Catalogue) -> Self {
        Self { catalogue, jobs: 1 }
    }

    /// Number of worker threads for batch runs; 1 runs sequentially
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    #[inline]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Classify an already normalized key set; `None` when it is empty
    pub fn classify_keys(&self, keys: &KeySet) -> Option<Classification> {
        if keys.is_empty() {
            return None;
        }
        let scores = ScoreCalculator::new(&self.catalogue).score(keys);
        Some(Classification::from_scores(&scores))
    }

    pub fn classify_document(&self, document: &Document) -> Option<Classification> {
        self.classify_keys(&KeyExtractor::extract(document))
    }

    /// Load and classify a single file
    ///
    /// Returns `Ok(None)` when the document parses but contains no keys.
    pub fn classify_file<P: AsRef<Path>>(&self, path: P) -> Result<Option<Classification>> {
        let document = load_document(path.as_ref())?;
        Ok(self.classify_document(&document))
    }

    /// Classify one version file, converting every failure into a skip
    pub fn classify_version(&self, file: &VersionFile) -> FileOutcome {
        info!("Processing {}", file.path.display());

        let keys = match load_document(&file.path) {
            Ok(document) => KeyExtractor::extract(&document),
            Err(e) => {
                warn!("Skipping {}: {}", file.path.display(), e);
                return FileOutcome::Skipped(SkippedFile::new(file, &e));
            }
        };

        debug!("Found {} unique normalized keys: {:?}", keys.len(), keys);

        match self.classify_keys(&keys) {
            Some(classification) => FileOutcome::Classified(FileClassification {
                group_id: file.group_id.clone(),
                version_id: file.version_id.clone(),
                key_count: keys.len(),
                classification,
            }),
            None => {
                let err = Error::EmptyInput(file.path.clone());
                info!("Cannot classify: {}", err);
                FileOutcome::Skipped(SkippedFile::new(file, &err))
            }
        }
    }

    /// Classify every version file under `root`
    pub fn run<P: AsRef<Path>>(&self, root: P) -> BatchReport {
        let store = VersionStore::new(root);
        let mut report = BatchReport::new(store.root());
        info!("Base directory: {}", store.root().display());

        let files = match store.list_versions() {
            Ok(files) => files,
            Err(Error::InputNotFound(path)) => {
                warn!("Base directory not found: {}", path.display());
                report.root_found = false;
                return report;
            }
            Err(e) => {
                warn!("Cannot read base directory {}: {}", store.root().display(), e);
                report.root_found = false;
                return report;
            }
        };

        info!("Found {} version files", files.len());
        for outcome in self.classify_all(&files) {
            match outcome {
                FileOutcome::Classified(result) => {
                    log_classification(&result);
                    report.results.push(result);
                }
                FileOutcome::Skipped(skip) => report.skipped.push(skip),
            }
        }

        report.log_final();
        report
    }

    /// Outcomes in the same order as `files`
    fn classify_all(&self, files: &[VersionFile]) -> Vec<FileOutcome> {
        if self.jobs > 1 {
            match rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build() {
                Ok(pool) => {
                    return pool.install(|| {
                        files.par_iter().map(|f| self.classify_version(f)).collect()
                    });
                }
                Err(e) => warn!("Falling back to sequential run: {}", e),
            }
        }
        files.iter().map(|f| self.classify_version(f)).collect()
    }
}
