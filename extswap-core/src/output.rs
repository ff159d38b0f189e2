use crate::rename::PlannedRename;
use crate::suffix::Conversion;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a convert operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertReport {
    pub directory: PathBuf,
    pub conversion: Conversion,
    pub entries_scanned: usize,
    pub renames: Vec<PlannedRename>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for ConvertReport {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "convert",
            "directory": self.directory,
            "source": self.conversion.source,
            "target": self.conversion.target,
            "entries_scanned": self.entries_scanned,
            "renames": self.renames,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        if self.renames.is_empty() {
            return format!(
                "No entries ending in '{}' found in {}",
                self.conversion.source,
                self.directory.display()
            );
        }

        let mut output = String::new();
        for rename in &self.renames {
            let _ = writeln!(output, "{} -> {}", rename.from, rename.to);
        }
        let noun = if self.renames.len() == 1 { "entry" } else { "entries" };
        let _ = write!(
            output,
            "Renamed {} {} ({} scanned)",
            self.renames.len(),
            noun,
            self.entries_scanned
        );
        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
