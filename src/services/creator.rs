// Folder and file creation

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::models::creation_report::CreationReport;
use crate::utils::error::{FileManagerError, Result};
use crate::utils::validation::{validate_file_name, validate_folder_name};

/// Creates `<base_dir>/<folder>/<file>` after validating both names
#[derive(Debug, Clone)]
pub struct FolderCreator {
    base_dir: PathBuf,
}

impl FolderCreator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Validate both names and ensure the folder exists, then create the
    /// empty file inside it.
    ///
    /// The folder step is idempotent. The file is opened with `create_new`,
    /// so an existing file yields [`FileManagerError::FileAlreadyExists`]
    /// and is left untouched.
    pub fn create(&self, folder_name: &str, file_name: &str) -> Result<CreationReport> {
        validate_folder_name(folder_name)?;
        validate_file_name(file_name)?;

        let folder_path = self.base_dir.join(folder_name);
        let folder_created = !folder_path.is_dir();
        if folder_created {
            fs::create_dir_all(&folder_path)?;
            debug!(folder = %folder_path.display(), "created folder");
        } else {
            debug!(folder = %folder_path.display(), "folder already exists");
        }

        let file_path = folder_path.join(file_name);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file_path)
        {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                warn!(path = %file_path.display(), "refusing to overwrite existing file");
                return Err(FileManagerError::FileAlreadyExists {
                    file: file_name.to_string(),
                    folder: folder_name.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        info!(path = %file_path.display(), folder_created, "created file");

        Ok(CreationReport {
            folder: folder_name.to_string(),
            file: file_name.to_string(),
            path: file_path,
            folder_created,
            dry_run: false,
            created_at: Utc::now(),
        })
    }

    /// Run every check [`create`](Self::create) runs without writing anything
    pub fn plan(&self, folder_name: &str, file_name: &str) -> Result<CreationReport> {
        validate_folder_name(folder_name)?;
        validate_file_name(file_name)?;

        let folder_path = self.base_dir.join(folder_name);
        if folder_path.exists() && !folder_path.is_dir() {
            return Err(io::Error::new(
                ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", folder_path.display()),
            )
            .into());
        }

        let file_path = folder_path.join(file_name);
        if file_path.exists() {
            return Err(FileManagerError::FileAlreadyExists {
                file: file_name.to_string(),
                folder: folder_name.to_string(),
            });
        }

        debug!(path = %file_path.display(), "dry run, nothing written");

        Ok(CreationReport {
            folder: folder_name.to_string(),
            file: file_name.to_string(),
            path: file_path,
            folder_created: !folder_path.is_dir(),
            dry_run: true,
            created_at: Utc::now(),
        })
    }
}

impl Default for FolderCreator {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Create `folder_name/file_name` relative to the working directory
pub fn create_folder_and_file(folder_name: &str, file_name: &str) -> Result<()> {
    FolderCreator::default()
        .create(folder_name, file_name)
        .map(|_| ())
}
