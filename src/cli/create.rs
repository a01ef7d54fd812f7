use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cli::args::{resolve_arguments, ArgumentMode};
use crate::models::creation_report::CreationReport;
use crate::services::creator::FolderCreator;
use crate::utils::error::Result;

/// Validate the names and create the folder and file
#[derive(Debug, Clone)]
pub struct CreateCommand {
    pub args: Vec<String>,
    pub dry_run: bool,
    pub json: bool,
}

/// JSON response format for the create command
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResponse {
    pub status: String,
    pub mode: ArgumentMode,
    #[serde(flatten)]
    pub report: CreationReport,
}

impl CreateCommand {
    /// Execute against `base_dir` and print the outcome to stdout
    pub fn run(&self, base_dir: &Path) -> Result<CreationReport> {
        let resolved = resolve_arguments(self.args.as_slice())?;
        let creator = FolderCreator::new(base_dir);

        let report = if self.dry_run {
            creator.plan(&resolved.folder_name, &resolved.file_name)?
        } else {
            creator.create(&resolved.folder_name, &resolved.file_name)?
        };

        if self.json {
            let response = CreateResponse {
                status: if report.dry_run { "planned" } else { "created" }.to_string(),
                mode: resolved.mode,
                report: report.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", report.summary());
        }

        info!(base_dir = %base_dir.display(), dry_run = self.dry_run, "create command finished");
        Ok(report)
    }
}
