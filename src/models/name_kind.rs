use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of name a validator is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    /// A folder (directory) name
    Folder,
    /// A file name, which must carry an extension
    File,
}

impl NameKind {
    /// Whether `.` belongs to the allowed character set
    pub const fn allows_dot(self) -> bool {
        matches!(self, Self::File)
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "Folder"),
            Self::File => write!(f, "File"),
        }
    }
}
