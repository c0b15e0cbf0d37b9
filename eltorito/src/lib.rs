//! El Torito boot image extraction
//!
//! A `no_std` implementation of the El Torito descriptor walk: locate the
//! boot record volume descriptor on an ISO9660 disc image, decode the boot
//! catalog, and extract the embedded boot image.
//!
//! # Overview
//!
//! Bootable optical discs layer the El Torito specification over ISO9660: a
//! boot record volume descriptor at sector 17 points at a boot catalog,
//! whose validation and initial entries describe an embedded floppy,
//! hard-disk, or no-emulation boot image. This crate provides:
//! - Boot record volume descriptor parsing and validation
//! - Boot catalog validation and initial/default entry decoding
//! - Media classification and image size resolution, including the
//!   hard-disk partition-table case
//! - Whole-image extraction into a byte buffer
//!
//! # Architecture
//!
//! The implementation is layered:
//! 1. **Sector layer** - 512-byte-unit reads addressed in 2048-byte sectors
//! 2. **Volume layer** - boot record volume descriptor at sector 17
//! 3. **Catalog layer** - validation and initial/default entries
//! 4. **Extraction layer** - size resolution and the final image read
//!
//! # Usage
//!
//! ```ignore
//! use eltorito::{extract_boot_image, NullReport};
//!
//! // Extract the boot image from a block device presenting 512-byte blocks
//! let image = extract_boot_image(&mut block_io, &mut NullReport)?;
//! ```
//!
//! Every decoded field is pushed to a [`ReportSink`] in decode order; pass
//! [`NullReport`] when diagnostics are not wanted.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod boot;
pub mod error;
pub mod report;
pub mod types;
pub mod utils;
pub mod volume;

pub use error::{ExtractError, Result};
pub use report::{NullReport, ReportSink, ReportValue, Transcript};
pub use types::{BootMediaType, BootPlatform};

// High-level API exports
pub use boot::{decode_catalog, extract_boot_image};
pub use volume::decode_boot_record;
