use crate::error::{ExtswapError, Result};
use crate::snapshot::{EntryKind, Snapshot};
use crate::suffix::Conversion;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::{debug, info};

/// A single rename inside the converted directory. Names, not paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRename {
    pub from: String,
    pub to: String,
    pub kind: EntryKind,
}

/// Select the matching entries of `snapshot` and compute their new names.
pub fn plan(snapshot: &Snapshot, conversion: &Conversion) -> Vec<PlannedRename> {
    snapshot
        .entries
        .iter()
        .filter_map(|entry| {
            if !conversion.matches(&entry.name) {
                debug!("Leaving {} untouched", entry.name);
                return None;
            }
            let to = conversion.rename(&entry.name);
            if to == entry.name {
                return None;
            }
            Some(PlannedRename {
                from: entry.name.clone(),
                to,
                kind: entry.kind,
            })
        })
        .collect()
}

/// Perform `renames` inside `dir`, in order. The first failure aborts the
/// run; renames already done stay done.
pub fn apply(dir: &Path, renames: &[PlannedRename]) -> Result<()> {
    for rename in renames {
        perform_rename(dir, rename)?;
    }
    Ok(())
}

fn perform_rename(dir: &Path, rename: &PlannedRename) -> Result<()> {
    let from = dir.join(&rename.from);
    let to = dir.join(&rename.to);

    let case_only_rename = rename.from.to_lowercase() == rename.to.to_lowercase();

    if fs::symlink_metadata(&to).is_ok() {
        // On a case-insensitive filesystem a case-only rename finds itself
        // at the destination. Anything else is a real collision.
        if !(case_only_rename && is_case_insensitive_fs(dir)) {
            return Err(ExtswapError::DestinationExists { from, to });
        }

        let temp_name = dir.join(format!("{}.extswap.{}.tmp", rename.from, std::process::id()));
        debug!("Case-only rename, going through {}", temp_name.display());
        rename_entry(&from, &temp_name)?;
        rename_entry(&temp_name, &to)?;
    } else {
        rename_entry(&from, &to)?;
    }

    info!("Renamed {} -> {}", rename.from, rename.to);
    Ok(())
}

fn rename_entry(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| ExtswapError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Probe whether `path` lives on a case-insensitive filesystem.
///
/// Only a marker file this call creates itself is ever removed. If either
/// spelling of the marker is already present the answer is unknown and the
/// filesystem is treated as case-sensitive.
pub fn is_case_insensitive_fs(path: &Path) -> bool {
    let id = std::process::id();
    let test_lower = path.join(format!(".extswap_case_test.{id}"));
    let test_upper = path.join(format!(".EXTSWAP_CASE_TEST.{id}"));

    if fs::symlink_metadata(&test_upper).is_ok() {
        return false;
    }

    match OpenOptions::new().write(true).create_new(true).open(&test_lower) {
        Ok(_) => {
            let case_insensitive = test_upper.exists();
            let _ = fs::remove_file(&test_lower);
            case_insensitive
        },
        // Assume case-sensitive if we can't test
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{snapshot, SnapshotEntry};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn snapshot_of(names: &[&str]) -> Snapshot {
        Snapshot {
            directory: PathBuf::from("."),
            entries: names
                .iter()
                .map(|name| SnapshotEntry {
                    name: (*name).to_string(),
                    kind: EntryKind::File,
                })
                .collect(),
            skipped_non_utf8: 0,
        }
    }

    #[test]
    fn test_plan_selects_only_matching_entries() {
        let snap = snapshot_of(&["a.gs", "b.txt", "c.gs", "d.js"]);
        let renames = plan(&snap, &Conversion::gs_to_js());

        let pairs: Vec<(&str, &str)> = renames
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a.gs", "a.js"), ("c.gs", "c.js")]);
    }

    #[test]
    fn test_plan_replaces_mid_name_occurrences() {
        let snap = snapshot_of(&["gsgraph.gs"]);
        let renames = plan(&snap, &Conversion::gs_to_js());
        assert_eq!(renames[0].to, "jsgraph.js");
    }

    #[test]
    fn test_apply_renames_in_place() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.gs"), "content").unwrap();

        let snap = snapshot(temp_dir.path()).unwrap();
        let renames = plan(&snap, &Conversion::gs_to_js());
        apply(temp_dir.path(), &renames).unwrap();

        assert!(!temp_dir.path().join("a.gs").exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("a.js")).unwrap(),
            "content"
        );
    }

    #[test]
    fn test_apply_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("x.gs"), "source").unwrap();
        fs::write(temp_dir.path().join("x.js"), "existing").unwrap();

        let renames = vec![PlannedRename {
            from: "x.gs".to_string(),
            to: "x.js".to_string(),
            kind: EntryKind::File,
        }];
        let err = apply(temp_dir.path(), &renames).unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("x.js")).unwrap(),
            "existing"
        );
        assert!(temp_dir.path().join("x.gs").exists());
    }

    #[test]
    fn test_apply_aborts_on_vanished_entry() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.gs"), "").unwrap();

        let renames = vec![
            PlannedRename {
                from: "a.gs".to_string(),
                to: "a.js".to_string(),
                kind: EntryKind::File,
            },
            PlannedRename {
                from: "b.gs".to_string(),
                to: "b.js".to_string(),
                kind: EntryKind::File,
            },
        ];
        let err = apply(temp_dir.path(), &renames).unwrap_err();

        match err {
            ExtswapError::Rename { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            },
            other => panic!("unexpected error: {other}"),
        }
        // Nothing after the failure is attempted
        assert!(temp_dir.path().join("b.gs").exists());
    }

    #[test]
    fn test_case_probe_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let _ = is_case_insensitive_fs(temp_dir.path());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_case_probe_leaves_existing_marker_alone() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir
            .path()
            .join(format!(".extswap_case_test.{}", std::process::id()));
        fs::write(&marker, "user data").unwrap();

        assert!(!is_case_insensitive_fs(temp_dir.path()));
        assert_eq!(fs::read_to_string(&marker).unwrap(), "user data");
    }

    #[test]
    fn test_case_probe_ignores_stale_upper_marker() {
        let temp_dir = TempDir::new().unwrap();
        let upper = temp_dir
            .path()
            .join(format!(".EXTSWAP_CASE_TEST.{}", std::process::id()));
        fs::write(&upper, "stale").unwrap();

        assert!(!is_case_insensitive_fs(temp_dir.path()));
        assert_eq!(fs::read_to_string(&upper).unwrap(), "stale");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }
}
