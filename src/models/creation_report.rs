use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of a successful (or planned, for dry runs) folder and file creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationReport {
    /// Folder name as supplied by the caller
    pub folder: String,
    /// File name as supplied by the caller
    pub file: String,
    /// Full path of the file
    pub path: PathBuf,
    /// Whether the folder had to be created (false if it already existed)
    pub folder_created: bool,
    /// True when nothing was written to disk
    pub dry_run: bool,
    pub created_at: DateTime<Utc>,
}

impl CreationReport {
    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let verb = if self.dry_run { "Would create" } else { "Created" };
        let folder_note = match (self.folder_created, self.dry_run) {
            (true, false) => " (new folder)",
            (true, true) => " (folder would be created)",
            _ => "",
        };
        format!(
            "{} file '{}' in folder '{}'{}",
            verb, self.file, self.folder, folder_note
        )
    }
}
