//! Boot platform identifiers

use crate::types::BootPlatform;

impl BootPlatform {
    /// Classify a raw platform id; unrecognized values are kept, not rejected
    pub fn from_id(id: u8) -> Self {
        match id {
            0x00 => Self::X86,
            0x01 => Self::PowerPC,
            0x02 => Self::Mac,
            other => Self::Unknown(other),
        }
    }

    /// Human-readable platform label
    pub fn label(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::PowerPC => "PowerPC",
            Self::Mac => "Mac",
            Self::Unknown(_) => "unknown",
        }
    }
}
