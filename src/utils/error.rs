// Common error types for file-manager

use crate::models::name_kind::NameKind;
use crate::utils::validation::MAX_NAME_LENGTH;

/// Every failure the validators, the creator and the argument resolver can report
#[derive(Debug, thiserror::Error)]
pub enum FileManagerError {
    /// Numeric input was neither text nor a number
    #[error("Invalid type '{type_name}'. Expected str, int, or float.")]
    InvalidType { type_name: String },

    /// Numeric input text was empty once trimmed
    #[error("Input cannot be empty or whitespace-only.")]
    EmptyOrWhitespaceInput,

    /// Numeric input text did not parse as a float
    #[error("Invalid input '{input}'. Must be a valid number.")]
    InvalidNumber { input: String },

    #[error("{kind} name cannot be empty.")]
    EmptyName { kind: NameKind },

    #[error(
        "{kind} name exceeds maximum length of {max} characters ({length} given).",
        max = MAX_NAME_LENGTH
    )]
    NameTooLong { kind: NameKind, length: usize },

    #[error("{kind} name '{name}' contains invalid characters.")]
    InvalidCharacters { kind: NameKind, name: String },

    #[error("{kind} name '{name}' is a reserved keyword.")]
    ReservedKeyword { kind: NameKind, name: String },

    #[error("{kind} name '{name}' cannot start or end with spaces.")]
    LeadingTrailingWhitespace { kind: NameKind, name: String },

    #[error("File name '{name}' must include a valid extension (e.g. 'notes.txt').")]
    MissingExtension { name: String },

    /// The target file is already present; it is never overwritten
    #[error("File '{file}' already exists in '{folder}'.")]
    FileAlreadyExists { file: String, folder: String },

    /// `parts` is set when a single argument was split on whitespace
    #[error(
        "Provide exactly 2 arguments: <folder_name> <file_name> ({})",
        describe_count(.given, .parts)
    )]
    InvalidArgumentCount { given: usize, parts: Option<usize> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_count(given: &usize, parts: &Option<usize>) -> String {
    match parts {
        Some(parts) => format!("got {given} argument that splits into {parts} parts"),
        None => format!("got {given}"),
    }
}

pub type Result<T> = std::result::Result<T, FileManagerError>;

/// User-facing rendering of an error: message, optional hint and exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub const EXIT_FAILURE: i32 = 1;
    pub const EXIT_USAGE: i32 = 2;
    pub const EXIT_CONFIG: i32 = 3;

    pub fn from_error(err: &FileManagerError) -> Self {
        let (hint, exit_code) = match err {
            FileManagerError::InvalidArgumentCount { .. } => (
                Some(
                    "Usage:\n  file-manager <folder_name> <file_name>\n  file-manager \"<folder_name> <file_name>\""
                        .to_string(),
                ),
                Self::EXIT_USAGE,
            ),
            FileManagerError::InvalidCharacters { kind: NameKind::Folder, .. } => (
                Some("Folder names may use letters, digits, '_', '-' and inner spaces.".to_string()),
                Self::EXIT_FAILURE,
            ),
            FileManagerError::InvalidCharacters { kind: NameKind::File, .. } => (
                Some(
                    "File names may use letters, digits, '_', '-', '.' and inner spaces."
                        .to_string(),
                ),
                Self::EXIT_FAILURE,
            ),
            FileManagerError::ReservedKeyword { .. } => (
                Some(
                    "CON, PRN, AUX, NUL, COM1-COM9 and LPT1-LPT9 are reserved device names."
                        .to_string(),
                ),
                Self::EXIT_FAILURE,
            ),
            FileManagerError::FileAlreadyExists { .. } => (
                Some("Choose a different file name; existing files are never overwritten.".to_string()),
                Self::EXIT_FAILURE,
            ),
            FileManagerError::Config(_) => (None, Self::EXIT_CONFIG),
            _ => (None, Self::EXIT_FAILURE),
        };

        Self {
            message: err.to_string(),
            hint,
            exit_code,
        }
    }

    /// Print the error (and hint, if any) to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}
