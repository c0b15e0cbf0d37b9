//! Partition table lookup for hard-disk emulated images
//!
//! The catalog's sector count is not reliable for hard-disk media; the
//! embedded image's own partition table gives the true extent.

use crate::error::{ExtractError, Result};
use crate::types::Le32;

/// Byte offset of the partition table within the image's first sector
pub const PARTITION_TABLE_OFFSET: usize = 446;

/// One 16-byte partition table slot
#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct PartitionRecord {
    /// Bootable flag
    pub boot_indicator: u8,

    /// CHS address of the first sector
    pub starting_chs: [u8; 3],

    /// Partition type
    pub os_type: u8,

    /// CHS address of the last sector
    pub ending_chs: [u8; 3],

    /// First sector, in 512-byte LBA units
    pub starting_lba: Le32,

    /// Sector count, in 512-byte LBA units
    pub size_in_lba: Le32,
}

impl PartitionRecord {
    /// Record size (16 bytes)
    pub const SIZE: usize = 16;

    /// Cast the first table slot out of the image's first sector
    ///
    /// Only the first of the four slots is consulted.
    pub fn parse_first(sector: &[u8]) -> Result<&Self> {
        if sector.len() < PARTITION_TABLE_OFFSET + Self::SIZE {
            return Err(ExtractError::Truncated);
        }

        Ok(unsafe { &*(sector[PARTITION_TABLE_OFFSET..].as_ptr() as *const Self) })
    }

    /// Total image extent implied by this slot, in 512-byte sectors
    pub fn total_sectors(&self) -> u32 {
        self.starting_lba.get() + self.size_in_lba.get()
    }
}
