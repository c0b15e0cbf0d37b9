//! Initial/default boot catalog entry

use crate::types::{BootMediaType, Le16, Le32, VIRTUAL_SECTOR_SIZE};

/// Initial/Default Entry (catalog bytes 32-63)
#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct InitialEntry {
    /// Boot indicator (0x88 = bootable, 0x00 = not bootable)
    pub boot_indicator: u8,

    /// Raw media type id
    pub media: u8,

    /// Load segment (0 = default 0x7C0)
    pub load_segment: Le16,

    /// System type (partition type of the embedded image)
    pub system_type: u8,

    /// Unused
    pub unused1: u8,

    /// Virtual sector count claimed by the catalog
    pub sector_count: Le16,

    /// Start of the embedded image, in 2048-byte physical sectors
    pub load_rba: Le32,

    /// Unused
    pub unused2: [u8; 20],
}

impl InitialEntry {
    /// Bootable indicator
    pub const BOOTABLE: u8 = 0x88;

    /// Is this entry marked bootable?
    pub fn is_bootable(&self) -> bool {
        self.boot_indicator == Self::BOOTABLE
    }

    /// Classify the emulated media type
    pub fn media_type(&self) -> BootMediaType {
        BootMediaType::from_id(self.media)
    }
}

impl BootMediaType {
    /// Classify a raw media id; unrecognized values are kept, not rejected
    pub fn from_id(id: u8) -> Self {
        match id {
            0 => Self::NoEmulation,
            1 => Self::Floppy12M,
            2 => Self::Floppy144M,
            3 => Self::Floppy288M,
            4 => Self::HardDisk,
            other => Self::Unknown(other),
        }
    }

    /// Human-readable media label
    pub fn label(self) -> &'static str {
        match self {
            Self::NoEmulation => "no emulation",
            Self::Floppy12M => "1.2meg floppy",
            Self::Floppy144M => "1.44meg floppy",
            Self::Floppy288M => "2.88meg floppy",
            Self::HardDisk => "harddisk",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Emulated capacity in 512-byte virtual sectors
    ///
    /// Zero when the type does not imply a fixed capacity (no emulation,
    /// hard disk, unknown).
    pub fn emulated_sector_count(self) -> u32 {
        match self {
            Self::Floppy12M => 1200 * 1024 / VIRTUAL_SECTOR_SIZE as u32,
            Self::Floppy144M => 1440 * 1024 / VIRTUAL_SECTOR_SIZE as u32,
            Self::Floppy288M => 2880 * 1024 / VIRTUAL_SECTOR_SIZE as u32,
            _ => 0,
        }
    }
}
