// Read-only view over stored term sheet snapshots
//
// Layout: <root>/<group_id>/versions/<version_id>.json
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use termclass_core::{Document, Error, Result};
use tracing::debug;

pub const VERSIONS_DIR: &str = "versions";
pub const VERSION_EXTENSION: &str = "json";

/// One stored snapshot of an extracted document
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionFile {
    pub group_id: String,
    pub version_id: String,
    pub path: PathBuf,
}

pub struct VersionStore {
    root: PathBuf,
}

impl VersionStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    #[must_use]
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Group ids that have a `versions` folder, ascending
    pub fn groups(&self) -> Result<Vec<String>> {
        if !self.exists() {
            return Err(Error::InputNotFound(self.root.clone()));
        }

        let mut groups = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(group_id) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !path.join(VERSIONS_DIR).is_dir() {
                debug!("Skipping group {}: no {} folder", group_id, VERSIONS_DIR);
                continue;
            }
            groups.push(group_id.to_string());
        }

        groups.sort();
        Ok(groups)
    }

    /// Version files of one group, ordered by version id
    pub fn version_files(&self, group_id: &str) -> Result<Vec<VersionFile>> {
        let versions_dir = self.root.join(group_id).join(VERSIONS_DIR);
        if !versions_dir.is_dir() {
            return Err(Error::InputNotFound(versions_dir));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&versions_dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(VERSION_EXTENSION) {
                continue;
            }
            let Some(version_id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            files.push(VersionFile {
                group_id: group_id.to_string(),
                version_id: version_id.to_string(),
                path: path.clone(),
            });
        }

        files.sort();
        Ok(files)
    }

    /// Every version file of every group
    pub fn list_versions(&self) -> Result<Vec<VersionFile>> {
        let mut all = Vec::new();
        for group_id in self.groups()? {
            match self.version_files(&group_id) {
                Ok(files) => all.extend(files),
                Err(e) => debug!("Skipping group {}: {}", group_id, e),
            }
        }
        Ok(all)
    }
}

/// Load a stored document
///
/// The file must exist, be non-empty, parse as JSON and have an object
/// or array at its root.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let content = fs::read(path)?;
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::InputParse {
            path: path.to_path_buf(),
            reason: "file is empty".to_string(),
        });
    }

    let value: serde_json::Value = serde_json::from_slice(&content).map_err(|e| Error::InputParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let document = Document::from(value);
    if !document.is_container() {
        return Err(Error::InputParse {
            path: path.to_path_buf(),
            reason: "expected an object or array at the root".to_string(),
        });
    }

    Ok(document)
}
