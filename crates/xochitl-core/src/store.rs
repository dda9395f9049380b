//! Read access to a xochitl document store
//!
//! The store is a flat directory of per-document sidecar files. The scan
//! yields one result per `*.metadata` file in filesystem order and never
//! aborts on a malformed record; the caller decides how to surface the
//! failure and continues.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, XochitlError};
use crate::record::{ContentInfo, Metadata};

/// Extension of the per-document record files
pub const METADATA_EXT: &str = "metadata";
/// Extension of the optional extended-fields sidecar
pub const CONTENT_EXT: &str = "content";

/// A scanned store entry: the parsed record plus where it came from
#[derive(Debug, Clone)]
pub struct Entry {
    /// Identifier, taken from the metadata file's stem
    pub id: String,
    /// Path of the backing `.metadata` file
    pub path: PathBuf,
    /// The parsed record
    pub metadata: Metadata,
}

impl Entry {
    /// On-disk path prefix shared by all of this document's sidecar files
    pub fn sidecar_prefix(&self) -> PathBuf {
        self.path.with_extension("")
    }
}

/// Handle on a store directory
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store, failing if the directory does not exist
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(XochitlError::StoreNotFound {
                path: root.to_path_buf(),
            });
        }
        Ok(Store {
            root: root.to_path_buf(),
        })
    }

    /// Get the store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the metadata file for an identifier
    pub fn metadata_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{}", id, METADATA_EXT))
    }

    /// Path of the content sidecar for an identifier
    pub fn content_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.{}", id, CONTENT_EXT))
    }

    /// Scan the store, yielding one result per metadata file.
    ///
    /// Order is whatever the filesystem reports. A malformed file yields
    /// `Err` and the scan continues with the next file.
    pub fn entries(&self) -> impl Iterator<Item = Result<Entry>> + '_ {
        WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|dirent| {
                let dirent = match dirent {
                    Ok(dirent) => dirent,
                    Err(e) => return Some(Err(XochitlError::Other(format!("scan failed: {}", e)))),
                };
                if !dirent.file_type().is_file() {
                    return None;
                }
                let path = dirent.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some(METADATA_EXT) {
                    return None;
                }
                Some(load_entry(path))
            })
    }

    /// Load a single entry by identifier
    pub fn entry(&self, id: &str) -> Result<Entry> {
        load_entry(&self.metadata_path(id))
    }

    /// Best-effort load of the content sidecar for an identifier
    pub fn content_info(&self, id: &str) -> Option<ContentInfo> {
        let raw = fs::read_to_string(self.content_path(id)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Every file or directory in the store whose stem is `id`
    pub fn sidecar_paths(&self, id: &str) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for dirent in fs::read_dir(&self.root)? {
            let path = dirent?.path();
            if path.file_stem().and_then(|stem| stem.to_str()) == Some(id) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

fn load_entry(path: &Path) -> Result<Entry> {
    let raw = fs::read_to_string(path).map_err(|e| XochitlError::MalformedRecord {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let metadata: Metadata =
        serde_json::from_str(&raw).map_err(|e| XochitlError::MalformedRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let id = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string();
    Ok(Entry {
        id,
        path: path.to_path_buf(),
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_doc(dir: &Path, id: &str, name: &str, deleted: bool) {
        let raw = format!(
            r#"{{"visibleName":"{}","type":"DocumentType","deleted":{},"parent":""}}"#,
            name, deleted
        );
        fs::write(dir.join(format!("{}.metadata", id)), raw).unwrap();
    }

    #[test]
    fn test_open_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            Store::open(&missing),
            Err(XochitlError::StoreNotFound { .. })
        ));
    }

    #[test]
    fn test_scan_yields_one_entry_per_metadata_file() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "a", "Alpha", false);
        write_doc(dir.path(), "b", "Beta", true);
        // Non-metadata files are ignored by the scan.
        fs::write(dir.path().join("a.content"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "hi").unwrap();

        let store = Store::open(dir.path()).unwrap();
        let mut ids: Vec<String> = store
            .entries()
            .map(|entry| entry.unwrap().id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_scan_survives_malformed_record() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "good", "Good", false);
        fs::write(dir.path().join("bad.metadata"), "{ not json").unwrap();

        let store = Store::open(dir.path()).unwrap();
        let results: Vec<_> = store.entries().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        let err = results.into_iter().find_map(|r| r.err()).unwrap();
        assert!(matches!(err, XochitlError::MalformedRecord { .. }));
        assert!(err.to_string().contains("bad.metadata"));
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let dir = tempdir().unwrap();
        // No "deleted" key.
        fs::write(
            dir.path().join("x.metadata"),
            r#"{"visibleName":"X","type":"DocumentType","parent":""}"#,
        )
        .unwrap();

        let store = Store::open(dir.path()).unwrap();
        let results: Vec<_> = store.entries().collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(
            results[0],
            Err(XochitlError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_sidecar_paths_matches_stem() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "a", "Alpha", false);
        fs::write(dir.path().join("a.content"), "{}").unwrap();
        fs::write(dir.path().join("a.pagedata"), "").unwrap();
        fs::create_dir(dir.path().join("a.thumbnails")).unwrap();
        write_doc(dir.path(), "ab", "Other", false);

        let store = Store::open(dir.path()).unwrap();
        let paths = store.sidecar_paths("a").unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["a.content", "a.metadata", "a.pagedata", "a.thumbnails"]
        );
    }

    #[test]
    fn test_content_info_best_effort() {
        let dir = tempdir().unwrap();
        write_doc(dir.path(), "a", "Alpha", false);
        let store = Store::open(dir.path()).unwrap();

        // Missing sidecar.
        assert!(store.content_info("a").is_none());

        // Malformed sidecar.
        fs::write(dir.path().join("a.content"), "garbage").unwrap();
        assert!(store.content_info("a").is_none());

        fs::write(dir.path().join("a.content"), r#"{"pageCount": 2}"#).unwrap();
        assert_eq!(store.content_info("a").unwrap().page_count, Some(2));
    }
}
