//! Byte-string helpers for fixed-width ASCII fields

use alloc::string::String;

/// Strip trailing spaces and NULs from a fixed-width field
pub fn trim_padding(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 && (bytes[end - 1] == b' ' || bytes[end - 1] == 0) {
        end -= 1;
    }
    &bytes[..end]
}

/// Reduce a field to its uppercase ASCII letters and spaces, trimmed
///
/// The boot system identifier is compared after this reduction, which drops
/// NUL padding along with any boot-system specific noise.
pub fn filter_uppercase_and_spaces(bytes: &[u8]) -> String {
    let filtered: String = bytes
        .iter()
        .map(|&b| b as char)
        .filter(|c| c.is_ascii_uppercase() || *c == ' ')
        .collect();
    String::from(filtered.trim())
}
