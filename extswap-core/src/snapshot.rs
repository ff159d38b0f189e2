use crate::error::{ExtswapError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Dir
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Entry names of one directory, captured before any rename is applied.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub directory: PathBuf,
    /// Sorted by name.
    pub entries: Vec<SnapshotEntry>,
    /// Entries whose name is not valid UTF-8 and so can never match a suffix.
    pub skipped_non_utf8: usize,
}

impl Snapshot {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len() + self.skipped_non_utf8
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// List `dir` once. Not recursive: subdirectories are entries like any other.
pub fn snapshot(dir: &Path) -> Result<Snapshot> {
    let read_dir_err = |source| ExtswapError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    let mut skipped_non_utf8 = 0;

    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Skipping entry with non-UTF-8 name: {:?}", raw);
                skipped_non_utf8 += 1;
                continue;
            },
        };
        // A failed type lookup should not stop the listing.
        let kind = entry
            .file_type()
            .map_or(EntryKind::Other, EntryKind::from);
        entries.push(SnapshotEntry { name, kind });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(
        "Snapshot of {}: {} entries",
        dir.display(),
        entries.len() + skipped_non_utf8
    );

    Ok(Snapshot {
        directory: dir.to_path_buf(),
        entries,
        skipped_non_utf8,
    })
}
