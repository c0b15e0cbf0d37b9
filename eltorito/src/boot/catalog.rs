//! Boot catalog parsing
//!
//! The boot catalog opens with a validation entry followed by the
//! initial/default entry. Only those two are read; section headers and
//! section entries are out of scope.

use super::entry::InitialEntry;
use super::validation::ValidationEntry;
use crate::error::{ExtractError, Result};

/// Boot Catalog
pub struct BootCatalog<'a> {
    /// Validation entry (bytes 0-31)
    pub validation: &'a ValidationEntry,

    /// Initial/default boot entry (bytes 32-63)
    pub initial: &'a InitialEntry,
}

impl<'a> BootCatalog<'a> {
    /// Catalog entry size (32 bytes)
    pub const ENTRY_SIZE: usize = 32;

    /// Minimum catalog size (validation + initial entry)
    pub const MIN_SIZE: usize = Self::ENTRY_SIZE * 2;

    /// Parse the two leading catalog entries from sector data
    ///
    /// Fails with [`ExtractError::InvalidValidationEntry`] when the
    /// validation entry's header id or key bytes are off, and with
    /// [`ExtractError::NotBootableEntry`] when the initial entry is not
    /// marked bootable.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < Self::MIN_SIZE {
            return Err(ExtractError::Truncated);
        }

        let validation = unsafe { &*(data.as_ptr() as *const ValidationEntry) };
        if !validation.is_valid() {
            return Err(ExtractError::InvalidValidationEntry);
        }

        let initial = unsafe { &*(data[Self::ENTRY_SIZE..].as_ptr() as *const InitialEntry) };
        if !initial.is_bootable() {
            return Err(ExtractError::NotBootableEntry);
        }

        Ok(Self {
            validation,
            initial,
        })
    }
}
