use crate::common::MemoryBlockDevice;
use eltorito::utils::checksum;

/// Lays out a minimal bootable disc image at raw byte offsets
///
/// Volume descriptors land at their conventional sectors: primary at 16,
/// boot record at 17, set terminator at 18. The boot catalog goes to
/// sector 19.
pub struct ImageBuilder {
    data: Vec<u8>,
}

impl ImageBuilder {
    /// Sector the boot record points the catalog at
    pub const CATALOG_SECTOR: u32 = 19;

    pub fn new(total_physical_sectors: usize) -> Self {
        let mut data = vec![0u8; total_physical_sectors * 2048];

        // Primary Volume Descriptor (sector 16)
        let pvd = 16 * 2048;
        data[pvd] = 1;
        data[pvd + 1..pvd + 6].copy_from_slice(b"CD001");
        data[pvd + 6] = 1;

        // Boot Record Volume Descriptor (sector 17)
        let boot = 17 * 2048;
        data[boot] = 0;
        data[boot + 1..boot + 6].copy_from_slice(b"CD001");
        data[boot + 6] = 1;
        data[boot + 7..boot + 30].copy_from_slice(b"EL TORITO SPECIFICATION");
        data[boot + 71..boot + 75].copy_from_slice(&Self::CATALOG_SECTOR.to_le_bytes());

        // Volume Descriptor Set Terminator (sector 18)
        let term = 18 * 2048;
        data[term] = 255;
        data[term + 1..term + 6].copy_from_slice(b"CD001");
        data[term + 6] = 1;

        Self { data }
    }

    /// Write the validation and initial entries at the catalog sector
    ///
    /// The validation entry carries a checksum word that makes its words
    /// sum to zero.
    #[allow(dead_code)]
    pub fn catalog_entry(
        &mut self,
        platform: u8,
        media: u8,
        sector_count: u16,
        load_rba: u32,
    ) -> &mut Self {
        let off = Self::CATALOG_SECTOR as usize * 2048;

        // Validation entry
        self.data[off] = 0x01;
        self.data[off + 1] = platform;
        self.data[off + 4..off + 14].copy_from_slice(b"TEST MEDIA");
        self.data[off + 30] = 0x55;
        self.data[off + 31] = 0xAA;
        let complement = checksum::complement_16(&self.data[off..off + 32]);
        self.data[off + 28..off + 30].copy_from_slice(&complement.to_le_bytes());

        // Initial/default entry
        let entry = off + 32;
        self.data[entry] = 0x88;
        self.data[entry + 1] = media;
        self.data[entry + 6..entry + 8].copy_from_slice(&sector_count.to_le_bytes());
        self.data[entry + 8..entry + 12].copy_from_slice(&load_rba.to_le_bytes());

        self
    }

    /// Fill `count` virtual sectors of image content starting at `load_rba`
    #[allow(dead_code)]
    pub fn image_content(&mut self, load_rba: u32, count: usize, seed: u8) -> &mut Self {
        let start = load_rba as usize * 2048;
        for (i, byte) in self.data[start..start + count * 512].iter_mut().enumerate() {
            *byte = seed.wrapping_add(i as u8);
        }
        self
    }

    /// Write the first partition table slot inside the embedded image
    #[allow(dead_code)]
    pub fn partition_entry(
        &mut self,
        load_rba: u32,
        starting_lba: u32,
        size_in_lba: u32,
    ) -> &mut Self {
        let table = load_rba as usize * 2048 + 446;
        self.data[table + 8..table + 12].copy_from_slice(&starting_lba.to_le_bytes());
        self.data[table + 12..table + 16].copy_from_slice(&size_in_lba.to_le_bytes());
        self
    }

    pub fn build(&self) -> MemoryBlockDevice {
        MemoryBlockDevice::new(self.data.clone())
    }
}
