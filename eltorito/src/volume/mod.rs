//! Volume descriptor handling
//!
//! The volume descriptor area of an ISO9660 image begins at sector 16. On a
//! bootable disc the boot record volume descriptor is required to occupy
//! sector 17, so it is read at its fixed position rather than walked.

pub mod boot_record;

use crate::error::Result;
use crate::report::{ReportSink, ReportValue};
use crate::types::BOOT_RECORD_SECTOR;
use crate::utils::sector;
use gpt_disk_io::BlockIo;

pub use boot_record::BootRecordDescriptor;

/// Decode and validate the boot record volume descriptor
///
/// Reads physical sector 17 and yields the descriptor pointing at the boot
/// catalog. Decoded fields are reported in order: `iso`, `vers`, `spec`,
/// `partition`.
pub fn decode_boot_record<B: BlockIo, R: ReportSink>(
    device: &mut B,
    report: &mut R,
) -> Result<BootRecordDescriptor> {
    let data = sector::read_virtual(device, BOOT_RECORD_SECTOR, 1)?;
    let descriptor = *BootRecordDescriptor::parse(&data)?;

    report.record(
        "iso",
        ReportValue::Text(core::str::from_utf8(&descriptor.identifier).unwrap_or("")),
    );
    report.record("vers", ReportValue::Unsigned(descriptor.version as u32));
    report.record("spec", ReportValue::Text(&descriptor.specifier()));
    report.record(
        "partition",
        ReportValue::Unsigned(descriptor.catalog_sector.get()),
    );

    Ok(descriptor)
}
