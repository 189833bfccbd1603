// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::Hash32;

/// 32-bit FNV offset basis
pub const FNV1A_SEED: u32 = 0x811C_9DC5;

/// 32-bit FNV prime
pub const FNV1A_PRIME: u32 = 0x0100_0193;

/// Computes the 32-bit FNV-1a digest of a byte slice.
#[must_use]
pub const fn fnv1a(bytes: &[u8]) -> u32 {
    fnv1a_with_seed(bytes, FNV1A_SEED)
}

/// Computes the 32-bit FNV-1a digest of a byte slice, starting with `seed`
/// instead of the offset basis.
#[must_use]
pub const fn fnv1a_with_seed(bytes: &[u8], seed: u32) -> u32 {
    let mut h = seed;
    let mut rest = bytes;

    while let [byte, tail @ ..] = rest {
        h = (h ^ *byte as u32).wrapping_mul(FNV1A_PRIME);
        rest = tail;
    }

    h
}

/// Fowler-Noll-Vo hash, 1a variant
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Fnv1a;

impl Hash32 for Fnv1a {
    fn name(&self) -> &'static str {
        "fnv1a"
    }

    fn default_seed(&self) -> u32 {
        FNV1A_SEED
    }

    fn hash32_with_seed(&self, bytes: &[u8], seed: u32) -> u32 {
        fnv1a_with_seed(bytes, seed)
    }
}
