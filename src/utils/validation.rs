// Validation of user-supplied names and numeric input

use std::sync::LazyLock;

use regex::Regex;

use crate::models::name_kind::NameKind;
use crate::models::raw_input::RawInput;
use crate::utils::error::{FileManagerError, Result};

/// Longest folder or file name accepted, in characters
pub const MAX_NAME_LENGTH: usize = 255;

/// Device names reserved by legacy Windows filesystems
pub const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

static FOLDER_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\- ]+$").expect("folder name pattern is valid"));

static FILE_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-. ]+$").expect("file name pattern is valid"));

/// Coerce a loosely typed value into a float.
///
/// Text is trimmed before parsing and may use `_` between digits as a
/// separator (`1_000.5`). Integers and floats convert directly.
/// Any other type is rejected by name.
#[allow(clippy::cast_precision_loss)]
pub fn validate_input(value: &RawInput) -> Result<f64> {
    match value {
        RawInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(FileManagerError::EmptyOrWhitespaceInput);
            }
            strip_digit_separators(trimmed)
                .and_then(|digits| digits.parse::<f64>().ok())
                .ok_or_else(|| FileManagerError::InvalidNumber { input: text.clone() })
        }
        RawInput::Integer(value) => Ok(*value as f64),
        RawInput::Float(value) => Ok(*value),
        RawInput::Other(_) => Err(FileManagerError::InvalidType {
            type_name: value.type_name().to_string(),
        }),
    }
}

/// Remove `_` separators; `None` if one is not between two ASCII digits
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_string());
    }

    let chars: Vec<char> = text.chars().collect();
    let mut digits = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            let after = chars.get(i + 1);
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        digits.push(c);
    }
    Some(digits)
}

/// Validate a folder name. Success is silent.
pub fn validate_folder_name(name: &str) -> Result<()> {
    validate_name(name, NameKind::Folder)
}

/// Validate a file name, which additionally needs an extension. Success is silent.
pub fn validate_file_name(name: &str) -> Result<()> {
    validate_name(name, NameKind::File)?;

    if !has_extension(name) {
        return Err(FileManagerError::MissingExtension {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Whether `name` is a reserved device name, ignoring case
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

// Rule order matters: the first failing rule is the one reported.
fn validate_name(name: &str, kind: NameKind) -> Result<()> {
    if name.is_empty() {
        return Err(FileManagerError::EmptyName { kind });
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(FileManagerError::NameTooLong { kind, length });
    }

    if name.starts_with(char::is_whitespace) || name.ends_with(char::is_whitespace) {
        return Err(FileManagerError::LeadingTrailingWhitespace {
            kind,
            name: name.to_string(),
        });
    }

    let allowed = if kind.allows_dot() {
        &FILE_NAME_CHARS
    } else {
        &FOLDER_NAME_CHARS
    };
    if !allowed.is_match(name) {
        return Err(FileManagerError::InvalidCharacters {
            kind,
            name: name.to_string(),
        });
    }

    if is_reserved_name(base_name(name, kind)) {
        return Err(FileManagerError::ReservedKeyword {
            kind,
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Part of the name checked against the reserved set.
/// Windows treats `CON.txt` like `CON`, so file names drop everything from the first dot.
fn base_name(name: &str, kind: NameKind) -> &str {
    match kind {
        NameKind::Folder => name,
        NameKind::File => name.split('.').next().unwrap_or(name),
    }
}

fn has_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, extension)) => !stem.is_empty() && !extension.is_empty(),
        None => false,
    }
}
