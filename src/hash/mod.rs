// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Seedable 32-bit hash functions over byte strings
//!
//! Every algorithm is a pure `const fn`, so digests of literals can be computed
//! at compile time and digests of runtime buffers with the same code.
//!
//! The seed is the starting state of the algorithm:
//!
//! - `djb2a` and `fnv1a` start their accumulator at the seed, so the digest of `a`
//!   can be used as seed to continue hashing `b`
//! - `crc32` takes a previous CRC value as seed (the register starts at `!seed`)
//! - `murmur3` mixes the seed into its initial state
//!
//! Bytes are always treated as unsigned.

mod crc32;
mod djb2a;
mod fnv1a;
mod murmur3;

pub use crc32::{crc32, crc32_with_seed, Crc32, CRC32_NIBBLE_TABLE, CRC32_POLYNOMIAL};
pub use djb2a::{djb2a, djb2a_with_seed, Djb2a, DJB2A_SEED};
pub use fnv1a::{fnv1a, fnv1a_with_seed, Fnv1a, FNV1A_PRIME, FNV1A_SEED};
pub use murmur3::{murmur3_32, murmur3_32_const, Murmur3};

use enum_dispatch::enum_dispatch;

/// Calculates a 32-bit digest from a byte slice.
#[enum_dispatch]
pub trait Hash32 {
    /// Gets the readable hash function name (e.g. "murmur3")
    fn name(&self) -> &'static str;

    /// Seed used by [`Hash32::hash32`]
    fn default_seed(&self) -> u32;

    /// Hashes a byte slice to a 32-bit digest, starting from the given seed
    fn hash32_with_seed(&self, bytes: &[u8], seed: u32) -> u32;

    /// Hashes a byte slice to a 32-bit digest, using the default seed
    fn hash32(&self, bytes: &[u8]) -> u32 {
        self.hash32_with_seed(bytes, self.default_seed())
    }
}

/// One of the supported hash functions
///
/// # Examples
///
/// ```
/// use hash_array::{Hash32, HashFunction};
///
/// let function: HashFunction = "murmur3".parse()?;
/// assert_eq!(0xBA6B_D213, function.hash32(b"test"));
/// # Ok::<(), hash_array::Error>(())
/// ```
#[enum_dispatch(Hash32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(test, derive(strum::EnumIter))]
pub enum HashFunction {
    /// See [`djb2a`]
    Djb2a(Djb2a),

    /// See [`fnv1a`]
    Fnv1a(Fnv1a),

    /// See [`crc32`]
    Crc32(Crc32),

    /// See [`murmur3_32`]
    Murmur3(Murmur3),
}

impl HashFunction {
    /// All hash functions, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Djb2a(Djb2a),
        Self::Fnv1a(Fnv1a),
        Self::Crc32(Crc32),
        Self::Murmur3(Murmur3),
    ];
}

impl Default for HashFunction {
    fn default() -> Self {
        Self::Murmur3(Murmur3)
    }
}

impl std::fmt::Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for HashFunction {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|function| function.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::Error::UnknownHashFunction(s.into()))
    }
}
