// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::Hash32;

/// Initial accumulator of [`djb2a`]
pub const DJB2A_SEED: u32 = 5_381;

/// Computes the DJB2a digest (`h = 33 * h ^ byte`) of a byte slice.
#[must_use]
pub const fn djb2a(bytes: &[u8]) -> u32 {
    djb2a_with_seed(bytes, DJB2A_SEED)
}

/// Computes the DJB2a digest of a byte slice, starting with `seed` as accumulator.
#[must_use]
pub const fn djb2a_with_seed(bytes: &[u8], seed: u32) -> u32 {
    let mut h = seed;
    let mut rest = bytes;

    while let [byte, tail @ ..] = rest {
        h = h.wrapping_mul(33) ^ *byte as u32;
        rest = tail;
    }

    h
}

/// Bernstein's hash, XOR variant
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Djb2a;

impl Hash32 for Djb2a {
    fn name(&self) -> &'static str {
        "djb2a"
    }

    fn default_seed(&self) -> u32 {
        DJB2A_SEED
    }

    fn hash32_with_seed(&self, bytes: &[u8], seed: u32) -> u32 {
        djb2a_with_seed(bytes, seed)
    }
}
