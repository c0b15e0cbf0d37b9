//! El Torito boot image extraction
//!
//! Walks the boot record volume descriptor, the boot catalog, and the
//! media-specific size rules to pull the embedded boot image out of a disc
//! image.

pub mod catalog;
pub mod entry;
pub mod mbr;
pub mod platform;
pub mod validation;

use alloc::vec::Vec;

use crate::error::Result;
use crate::report::{ReportSink, ReportValue};
use crate::types::{BootMediaType, VIRTUAL_SECTOR_SIZE};
use crate::utils::sector;
use crate::volume;
use gpt_disk_io::BlockIo;

pub use catalog::BootCatalog;
pub use entry::InitialEntry;
pub use validation::ValidationEntry;

/// Decode and validate the boot catalog's leading entries
///
/// Reads one virtual sector at `catalog_sector` and yields owned copies of
/// the validation and initial entries. Decoded fields are reported in order:
/// `platform`, `manufacturer`, `platform_string`, `media`, `media_type`.
pub fn decode_catalog<B: BlockIo, R: ReportSink>(
    device: &mut B,
    catalog_sector: u32,
    report: &mut R,
) -> Result<(ValidationEntry, InitialEntry)> {
    let data = sector::read_virtual(device, catalog_sector as u64, 1)?;
    let parsed = BootCatalog::parse(&data)?;
    let validation = *parsed.validation;
    let initial = *parsed.initial;

    report.record(
        "platform",
        ReportValue::Unsigned(validation.platform_id as u32),
    );
    report.record("manufacturer", ReportValue::Text(validation.manufacturer()));
    report.record(
        "platform_string",
        ReportValue::Text(validation.platform().label()),
    );
    report.record("media", ReportValue::Unsigned(initial.media as u32));
    report.record("media_type", ReportValue::Text(initial.media_type().label()));

    Ok((validation, initial))
}

/// Resolve the true image length in 512-byte virtual sectors
///
/// Floppy types carry a fixed capacity. Hard-disk images are measured by a
/// side read of their own partition table. Anything that resolves to zero,
/// including no-emulation and unrecognized media, falls back to the
/// catalog's own sector count.
pub fn resolve_sector_count<B: BlockIo>(device: &mut B, initial: &InitialEntry) -> Result<u32> {
    let count = match initial.media_type() {
        BootMediaType::HardDisk => hard_disk_sector_count(device, initial.load_rba.get())?,
        media => media.emulated_sector_count(),
    };

    if count == 0 {
        return Ok(initial.sector_count.get() as u32);
    }
    Ok(count)
}

/// Read the embedded image's partition table to learn its extent
fn hard_disk_sector_count<B: BlockIo>(device: &mut B, load_rba: u32) -> Result<u32> {
    let data = sector::read_virtual(device, load_rba as u64, 1)?;
    let record = mbr::PartitionRecord::parse_first(&data)?;
    Ok(record.total_sectors())
}

/// Extract the embedded boot image
///
/// The sole whole-image entry point: decodes the boot record and catalog,
/// resolves the image's byte range, and returns the image bytes. Stage
/// failures propagate unchanged; nothing is retried or recovered. Every
/// decoded field is pushed to `report` on the way, and the sink never
/// affects the result.
pub fn extract_boot_image<B: BlockIo, R: ReportSink>(
    device: &mut B,
    report: &mut R,
) -> Result<Vec<u8>> {
    let record = volume::decode_boot_record(device, report)?;
    let (_validation, initial) = decode_catalog(device, record.catalog_sector.get(), report)?;

    let count = resolve_sector_count(device, &initial)?;
    let start = initial.load_rba.get();

    report.record(
        "sector_size",
        ReportValue::Unsigned(VIRTUAL_SECTOR_SIZE as u32),
    );
    report.record("sector_count", ReportValue::Unsigned(count));
    report.record("sector_start", ReportValue::Unsigned(start));

    sector::read_virtual(device, start as u64, count as usize)
}
