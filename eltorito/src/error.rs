//! Error types for boot image extraction

use core::fmt;

/// Result type for extraction operations
pub type Result<T> = core::result::Result<T, ExtractError>;

/// Errors that can occur while locating or extracting a boot image
///
/// Every variant is fatal to the current extraction; descriptor corruption
/// is not transient and nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// Source yielded fewer bytes than a fixed-size read requires
    Truncated,

    /// Volume descriptor does not identify an El Torito bootable volume
    NotBootable,

    /// Boot catalog validation entry header or key bytes failed their checks
    InvalidValidationEntry,

    /// Initial catalog entry is not marked bootable
    NotBootableEntry,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => write!(f, "source truncated or unreadable"),
            Self::NotBootable => write!(f, "not a bootable El Torito cd image"),
            Self::InvalidValidationEntry => write!(f, "invalid boot catalog validation entry"),
            Self::NotBootableEntry => write!(f, "initial catalog entry is not bootable"),
        }
    }
}
