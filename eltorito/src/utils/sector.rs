//! Sector reads against a block device
//!
//! El Torito mixes two units: 2048-byte physical sectors for addressing and
//! 512-byte virtual sectors for sizing. Reads here are addressed in physical
//! sectors and sized in virtual sectors.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{ExtractError, Result};
use crate::types::{SECTOR_SIZE, VIRTUAL_SECTOR_SIZE};
use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;

/// 512-byte blocks per physical sector
const BLOCKS_PER_SECTOR: u64 = (SECTOR_SIZE / VIRTUAL_SECTOR_SIZE) as u64;

/// Read `count` virtual sectors starting at a physical sector boundary
///
/// The device must present 512-byte blocks. Returns exactly `count * 512`
/// bytes or [`ExtractError::Truncated`]; callers trust the returned length
/// and do not re-check it.
pub fn read_virtual<B: BlockIo>(
    device: &mut B,
    physical_sector: u64,
    count: usize,
) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; count * VIRTUAL_SECTOR_SIZE];
    let lba = Lba(physical_sector * BLOCKS_PER_SECTOR);
    device
        .read_blocks(lba, &mut buffer)
        .map_err(|_| ExtractError::Truncated)?;
    Ok(buffer)
}
