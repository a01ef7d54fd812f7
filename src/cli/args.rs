// Resolution of positional tokens into a folder name and a file name

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::error::{FileManagerError, Result};

/// How the two names were supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentMode {
    /// `<folder_name> <file_name>` as two tokens
    Separate,
    /// `"<folder_name> <file_name>"` as one token (debugger mode)
    Combined,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArguments {
    pub folder_name: String,
    pub file_name: String,
    pub mode: ArgumentMode,
}

/// Resolve positional tokens, keeping track of which form was used.
///
/// Two tokens are taken as-is. A single token is split on whitespace and
/// must yield exactly two parts. Every other shape is an argument count error.
pub fn resolve_arguments<S: AsRef<str>>(args: &[S]) -> Result<ResolvedArguments> {
    let resolved = match args {
        [folder, file] => ResolvedArguments {
            folder_name: folder.as_ref().to_string(),
            file_name: file.as_ref().to_string(),
            mode: ArgumentMode::Separate,
        },
        [combined] => {
            let parts: Vec<&str> = combined.as_ref().split_whitespace().collect();
            match parts.as_slice() {
                [folder, file] => ResolvedArguments {
                    folder_name: (*folder).to_string(),
                    file_name: (*file).to_string(),
                    mode: ArgumentMode::Combined,
                },
                _ => {
                    return Err(FileManagerError::InvalidArgumentCount {
                        given: 1,
                        parts: Some(parts.len()),
                    })
                }
            }
        }
        _ => {
            return Err(FileManagerError::InvalidArgumentCount {
                given: args.len(),
                parts: None,
            })
        }
    };

    debug!(
        folder = %resolved.folder_name,
        file = %resolved.file_name,
        mode = ?resolved.mode,
        "resolved arguments"
    );

    Ok(resolved)
}

/// Resolve positional tokens into `(folder_name, file_name)`
pub fn parse_arguments<S: AsRef<str>>(args: &[S]) -> Result<(String, String)> {
    let resolved = resolve_arguments(args)?;
    Ok((resolved.folder_name, resolved.file_name))
}
