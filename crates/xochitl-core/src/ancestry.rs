//! Hierarchical path resolution
//!
//! A record's `parent` field names the containing folder's identifier; the
//! chain ends at the root, recorded as an empty string. A corrupt store can
//! contain a parent cycle, so the walk keeps a visited set and fails fast
//! instead of looping. Failures carry the partial path resolved below the
//! break so callers can render it with a marker.

use std::collections::HashSet;

use crate::error::{Result, XochitlError};
use crate::store::{Entry, Store};

/// Resolve the display path of an entry: ancestor names from the root down,
/// ending in the entry's own name. A root-level entry yields one segment.
pub fn resolve_path(store: &Store, entry: &Entry) -> Result<Vec<String>> {
    let mut segments = vec![entry.metadata.visible_name.clone()];
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(entry.id.clone());

    let mut parent = entry.metadata.parent.clone();
    while !parent.is_empty() {
        if !seen.insert(parent.clone()) {
            return Err(XochitlError::CyclicAncestry {
                id: parent,
                partial: segments.join("/"),
            });
        }
        if !store.metadata_path(&parent).is_file() {
            return Err(XochitlError::MissingAncestor {
                id: parent,
                partial: segments.join("/"),
            });
        }
        let node = match store.entry(&parent) {
            Ok(node) => node,
            Err(e) => {
                let reason = match e {
                    XochitlError::MalformedRecord { reason, .. } => reason,
                    other => other.to_string(),
                };
                return Err(XochitlError::MalformedAncestor {
                    id: parent,
                    reason,
                    partial: segments.join("/"),
                });
            }
        };
        segments.insert(0, node.metadata.visible_name.clone());
        parent = node.metadata.parent;
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_record(dir: &Path, id: &str, name: &str, kind: &str, parent: &str) {
        let raw = format!(
            r#"{{"visibleName":"{}","type":"{}","deleted":false,"parent":"{}"}}"#,
            name, kind, parent
        );
        fs::write(dir.join(format!("{}.metadata", id)), raw).unwrap();
    }

    #[test]
    fn test_root_level_entry_is_one_segment() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "doc", "Foo", "DocumentType", "");
        let store = Store::open(dir.path()).unwrap();
        let entry = store.entry("doc").unwrap();
        assert_eq!(resolve_path(&store, &entry).unwrap(), vec!["Foo"]);
    }

    #[test]
    fn test_two_levels_deep() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "folder-a", "Folder A", "CollectionType", "");
        write_record(dir.path(), "doc", "Doc", "DocumentType", "folder-a");
        let store = Store::open(dir.path()).unwrap();
        let entry = store.entry("doc").unwrap();
        assert_eq!(
            resolve_path(&store, &entry).unwrap(),
            vec!["Folder A", "Doc"]
        );
    }

    #[test]
    fn test_missing_ancestor_carries_partial() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "folder-a", "Folder A", "CollectionType", "gone");
        write_record(dir.path(), "doc", "Doc", "DocumentType", "folder-a");
        let store = Store::open(dir.path()).unwrap();
        let entry = store.entry("doc").unwrap();
        match resolve_path(&store, &entry) {
            Err(XochitlError::MissingAncestor { id, partial }) => {
                assert_eq!(id, "gone");
                assert_eq!(partial, "Folder A/Doc");
            }
            other => panic!("expected MissingAncestor, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_ancestor() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("folder-a.metadata"), "{ broken").unwrap();
        write_record(dir.path(), "doc", "Doc", "DocumentType", "folder-a");
        let store = Store::open(dir.path()).unwrap();
        let entry = store.entry("doc").unwrap();
        assert!(matches!(
            resolve_path(&store, &entry),
            Err(XochitlError::MalformedAncestor { .. })
        ));
    }

    #[test]
    fn test_cycle_fails_fast() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "a", "A", "CollectionType", "b");
        write_record(dir.path(), "b", "B", "CollectionType", "a");
        write_record(dir.path(), "doc", "Doc", "DocumentType", "a");
        let store = Store::open(dir.path()).unwrap();
        let entry = store.entry("doc").unwrap();
        assert!(matches!(
            resolve_path(&store, &entry),
            Err(XochitlError::CyclicAncestry { .. })
        ));
    }

    #[test]
    fn test_self_parent_is_a_cycle() {
        let dir = tempdir().unwrap();
        write_record(dir.path(), "doc", "Doc", "DocumentType", "doc");
        let store = Store::open(dir.path()).unwrap();
        let entry = store.entry("doc").unwrap();
        assert!(matches!(
            resolve_path(&store, &entry),
            Err(XochitlError::CyclicAncestry { .. })
        ));
    }
}
