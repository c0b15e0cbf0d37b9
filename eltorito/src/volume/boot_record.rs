//! Boot Record Volume Descriptor (El Torito)
//!
//! Points to the El Torito boot catalog which describes the bootable image.

use alloc::string::String;

use crate::error::{ExtractError, Result};
use crate::types::Le32;
use crate::utils::string;

/// Boot Record Volume Descriptor (type 0, physical sector 17)
///
/// Only the first 75 bytes of the sector are interpreted; the remainder is
/// boot-system specific.
#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct BootRecordDescriptor {
    /// Volume descriptor type code
    pub type_code: u8,
    /// Standard identifier "CD001"
    pub identifier: [u8; 5],
    /// Descriptor version
    pub version: u8,
    /// Boot system identifier, reduces to "EL TORITO SPECIFICATION"
    pub boot_system_id: [u8; 32],
    /// Unused (boot identifier)
    pub unused: [u8; 32],
    /// Absolute sector of the boot catalog (32-bit LE)
    pub catalog_sector: Le32,
}

impl BootRecordDescriptor {
    /// ISO9660 standard identifier
    pub const MAGIC: &'static [u8; 5] = b"CD001";

    /// Boot system identifier after reduction
    pub const EL_TORITO: &'static str = "EL TORITO SPECIFICATION";

    /// Interpreted prefix of the descriptor sector
    pub const SIZE: usize = 75;

    /// Cast and validate the descriptor from raw sector data
    ///
    /// Fails with [`ExtractError::NotBootable`] unless both the standard
    /// identifier and the boot system identifier check out.
    pub fn parse(data: &[u8]) -> Result<&Self> {
        if data.len() < Self::SIZE {
            return Err(ExtractError::Truncated);
        }

        let descriptor = unsafe { &*(data.as_ptr() as *const Self) };

        if &descriptor.identifier != Self::MAGIC || descriptor.specifier() != Self::EL_TORITO {
            return Err(ExtractError::NotBootable);
        }

        Ok(descriptor)
    }

    /// Boot system identifier reduced to uppercase letters and spaces
    pub fn specifier(&self) -> String {
        string::filter_uppercase_and_spaces(&self.boot_system_id)
    }
}
