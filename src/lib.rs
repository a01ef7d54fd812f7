// file-manager - validate folder and file names, then create them
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used items
pub use cli::args::{parse_arguments, resolve_arguments};
pub use models::raw_input::RawInput;
pub use services::creator::{create_folder_and_file, FolderCreator};
pub use utils::error::{FileManagerError, Result};
pub use utils::validation::{validate_file_name, validate_folder_name, validate_input};
