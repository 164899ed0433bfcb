//! Whole-image checksum compatible with the ESP8266 SDK bootloader.

use crc::{CRC_32_ISO_HDLC, Crc};

/// CRC32 variant used by the 8266 SDK bootloader to verify a packed image.
///
/// The raw CRC-32/ISO-HDLC value is post-processed: if the high bit is set
/// the stored value is the bitwise complement, otherwise it is the raw value
/// plus one. The `+ 1` branch is intentionally not a complement; the
/// bootloader's verification routine expects exactly this transform.
pub fn bootloader_crc32(data: &[u8]) -> u32 {
    const CRC: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);
    let raw = CRC.checksum(data);
    if raw & 0x8000_0000 != 0 {
        raw ^ 0xFFFF_FFFF
    } else {
        raw + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_takes_increment_branch() {
        // CRC-32/ISO-HDLC of "" is 0x00000000
        assert_eq!(bootloader_crc32(&[]), 1);
    }

    #[test]
    fn test_high_bit_set_takes_complement_branch() {
        // CRC-32/ISO-HDLC of "123456789" is 0xCBF43926
        assert_eq!(bootloader_crc32(b"123456789"), 0xCBF43926 ^ 0xFFFF_FFFF);
        assert_eq!(bootloader_crc32(b"123456789"), 0x340B_C6D9);
    }

    #[test]
    fn test_high_bit_clear_takes_increment_branch() {
        // CRC-32/ISO-HDLC of the fox pangram is 0x414FA339
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(bootloader_crc32(data), 0x414F_A33A);
    }
}
