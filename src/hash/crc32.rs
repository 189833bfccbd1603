// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::Hash32;

/// Reflected CRC-32 generator polynomial
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// CRC-32 remainders of all 4-bit values
///
/// Trades the usual 256-entry table for two lookups per byte.
pub const CRC32_NIBBLE_TABLE: [u32; 16] = [
    0x0000_0000, 0x1DB7_1064, 0x3B6E_20C8, 0x26D9_30AC, //
    0x76DC_4190, 0x6B6B_51F4, 0x4DB2_6158, 0x5005_713C, //
    0xEDB8_8320, 0xF00F_9344, 0xD6D6_A3E8, 0xCB61_B38C, //
    0x9B64_C2B0, 0x86D3_D2D4, 0xA00A_E278, 0xBDBD_F21C, //
];

// NOTE: Index is masked to 4 bits, the table has 16 entries
#[allow(clippy::indexing_slicing)]
const fn step(register: u32, nibble: u8) -> u32 {
    (register >> 4) ^ CRC32_NIBBLE_TABLE[((register & 0xF) ^ (nibble & 0xF) as u32) as usize]
}

/// Computes the standard CRC-32 (IEEE) of a byte slice.
#[must_use]
pub const fn crc32(bytes: &[u8]) -> u32 {
    crc32_with_seed(bytes, 0)
}

/// Computes the CRC-32 of a byte slice, continuing from a previous CRC value.
///
/// `crc32_with_seed(b, crc32(a))` equals the CRC of `a` followed by `b`.
#[must_use]
pub const fn crc32_with_seed(bytes: &[u8], seed: u32) -> u32 {
    let mut register = !seed;
    let mut rest = bytes;

    while let [byte, tail @ ..] = rest {
        register = step(register, *byte & 0xF);
        register = step(register, *byte >> 4);
        rest = tail;
    }

    !register
}

/// CRC-32 with polynomial `0xEDB88320`, reflected
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Crc32;

impl Hash32 for Crc32 {
    fn name(&self) -> &'static str {
        "crc32"
    }

    fn default_seed(&self) -> u32 {
        0
    }

    fn hash32_with_seed(&self, bytes: &[u8], seed: u32) -> u32 {
        crc32_with_seed(bytes, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn crc32_nibble_table_matches_polynomial() {
        for (nibble, expected) in CRC32_NIBBLE_TABLE.iter().enumerate() {
            let mut remainder = nibble as u32;

            for _ in 0..4 {
                remainder = if remainder & 1 == 1 {
                    (remainder >> 1) ^ CRC32_POLYNOMIAL
                } else {
                    remainder >> 1
                };
            }

            assert_eq!(*expected, remainder, "nibble {nibble}");
        }
    }

    #[test]
    fn crc32_check_value() {
        assert_eq!(0xCBF4_3926, crc32(b"123456789"));
    }

    #[test]
    fn crc32_vectors() {
        assert_eq!(0, crc32(b""));
        assert_eq!(0xE8B7_BE43, crc32(b"a"));
        assert_eq!(0x9EF6_1F95, crc32(b"foobar"));
        assert_eq!(0x3F45_6CAD, crc32(&[0xFF, 0x80]));
    }

    #[test]
    fn crc32_chaining() {
        assert_eq!(crc32(b"123456789"), crc32_with_seed(b"456789", crc32(b"123")));
    }

    #[test]
    fn crc32_const() {
        const CHECK: u32 = crc32(b"123456789");
        assert_eq!(CHECK, Crc32.hash32(b"123456789"));
    }
}
