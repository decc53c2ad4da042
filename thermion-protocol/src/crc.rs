//! CRC-8 checksum (Dallas/iButton one-wire variant)
//!
//! Polynomial x^8 + x^5 + x^4 + 1 in bit-reflected form (0x8C), initial
//! value 0. Receivers verify a frame by recomputing this over the checked
//! span and comparing against the checksum byte.

const POLY: u8 = 0x8C;

/// Fold one byte into a running CRC-8
pub fn crc8_update(crc: u8, byte: u8) -> u8 {
    let mut crc = crc ^ byte;
    for _ in 0..8 {
        crc = if crc & 1 != 0 { (crc >> 1) ^ POLY } else { crc >> 1 };
    }
    crc
}

/// CRC-8 over a byte slice, starting from 0
pub fn crc8(data: &[u8]) -> u8 {
    data.iter().fold(0, |crc, &byte| crc8_update(crc, byte))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_slice_is_zero() {
        assert_eq!(crc8(&[]), 0);
    }

    #[test]
    fn test_dallas_rom_id_vector() {
        // Classic one-wire ROM id example: the device reports 0xA2 as the
        // CRC of its first seven id bytes.
        let rom = [0x02, 0x1C, 0xB8, 0x01, 0x00, 0x00, 0x00];
        assert_eq!(crc8(&rom), 0xA2);
    }

    #[test]
    fn test_update_matches_slice_fold() {
        let data = [0x12, 0x34, 0x56];
        let mut crc = 0;
        for &byte in &data {
            crc = crc8_update(crc, byte);
        }
        assert_eq!(crc, crc8(&data));
    }

    proptest! {
        /// Appending the checksum to the checked data always yields 0.
        #[test]
        fn prop_appended_crc_folds_to_zero(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let crc = crc8(&data);
            prop_assert_eq!(crc8_update(crc, crc), 0);
        }

        /// A single flipped bit is always detected.
        #[test]
        fn prop_single_bit_flip_detected(
            data in proptest::collection::vec(any::<u8>(), 1..32),
            idx in 0usize..32,
            bit in 0u8..8,
        ) {
            let idx = idx % data.len();
            let mut corrupted = data.clone();
            corrupted[idx] ^= 1 << bit;
            prop_assert_ne!(crc8(&data), crc8(&corrupted));
        }
    }
}
