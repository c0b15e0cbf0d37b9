//! Word-wise checksum over catalog entries

/// Sum of the little-endian 16-bit words in `data`
pub fn checksum_16(data: &[u8]) -> u16 {
    data.chunks_exact(2)
        .fold(0u16, |sum, pair| {
            sum.wrapping_add(u16::from_le_bytes([pair[0], pair[1]]))
        })
}

/// A well-formed validation entry's words sum to zero
pub fn verify_checksum_16(data: &[u8]) -> bool {
    checksum_16(data) == 0
}

/// Checksum word that makes the words of `data` sum to zero
pub fn complement_16(data: &[u8]) -> u16 {
    0u16.wrapping_sub(checksum_16(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_words() {
        let data = [0x01, 0x00, 0x02, 0x00];
        assert_eq!(checksum_16(&data), 0x0003);
    }

    #[test]
    fn complement_zeroes_the_sum() {
        let mut entry = [0u8; 32];
        entry[0] = 0x01;
        entry[30] = 0x55;
        entry[31] = 0xAA;
        let complement = complement_16(&entry);
        entry[28..30].copy_from_slice(&complement.to_le_bytes());
        assert!(verify_checksum_16(&entry));
    }
}
