// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! MurmurHash3, x86 32-bit variant
//!
//! The input is split into 4-byte little-endian blocks and a 0-3 byte tail:
//!
//! ```text
//! h = seed
//! for each block k:  h = rotl(h ^ mix_k(k), 13) * 5 + 0xE6546B64
//! tail (zero-padded): h ^= mix_k(tail)
//! h = fmix(h ^ len)
//! ```
//!
//! There are two evaluations of the same fold: [`murmur3_32_const`] peels blocks off
//! with slice patterns and is meant for `const` contexts, [`murmur3_32`] folds over
//! `as_chunks` and is meant for runtime buffers.

use super::Hash32;

const C1: u32 = 0xCC9E_2D51;
const C2: u32 = 0x1B87_3593;
const BLOCK_MUL: u32 = 5;
const BLOCK_ADD: u32 = 0xE654_6B64;

const FMIX_1: u32 = 0x85EB_CA6B;
const FMIX_2: u32 = 0xC2B2_AE35;

const BLOCK_SIZE: usize = 4;

const fn mix_k(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

const fn mix_h(h: u32, k: u32) -> u32 {
    (h ^ mix_k(k))
        .rotate_left(13)
        .wrapping_mul(BLOCK_MUL)
        .wrapping_add(BLOCK_ADD)
}

const fn fmix(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(FMIX_1);
    h ^= h >> 13;
    h = h.wrapping_mul(FMIX_2);
    h ^= h >> 16;
    h
}

const fn tail_block(tail: &[u8]) -> u32 {
    match *tail {
        [a, b, c] => u32::from_le_bytes([a, b, c, 0]),
        [a, b] => u32::from_le_bytes([a, b, 0, 0]),
        [a] => a as u32,
        _ => 0,
    }
}

// NOTE: The x86_32 variant mixes in the length modulo 2^32
#[allow(clippy::cast_possible_truncation)]
const fn finish(h: u32, tail: &[u8], len: usize) -> u32 {
    // mix_k(0) == 0, so an empty tail leaves `h` unchanged
    fmix(h ^ mix_k(tail_block(tail)) ^ len as u32)
}

const fn fold_blocks(blocks: &[u8], mut h: u32) -> u32 {
    let mut rest = blocks;

    while let [a, b, c, d, tail @ ..] = rest {
        h = mix_h(h, u32::from_le_bytes([*a, *b, *c, *d]));
        rest = tail;
    }

    h
}

/// Computes the MurmurHash3 (x86, 32-bit) digest in a `const` context.
///
/// Walks the input with slice patterns, so it works in `const` items on inputs
/// of any length. [`murmur3_32`] returns the same digest and is faster at runtime.
///
/// # Examples
///
/// ```
/// use hash_array::hash::murmur3_32_const;
///
/// const TEST: u32 = murmur3_32_const(b"test", 0);
/// assert_eq!(0xBA6B_D213, TEST);
/// ```
#[must_use]
pub const fn murmur3_32_const(bytes: &[u8], seed: u32) -> u32 {
    let (blocks, tail) = bytes.split_at(bytes.len() - bytes.len() % BLOCK_SIZE);
    finish(fold_blocks(blocks, seed), tail, bytes.len())
}

/// Computes the MurmurHash3 (x86, 32-bit) digest of a byte slice.
#[must_use]
pub fn murmur3_32(bytes: &[u8], seed: u32) -> u32 {
    let (blocks, tail) = bytes.as_chunks::<BLOCK_SIZE>();

    let h = blocks
        .iter()
        .fold(seed, |h, block| mix_h(h, u32::from_le_bytes(*block)));

    finish(h, tail, bytes.len())
}

const _: () = assert!(murmur3_32_const(b"test", 0) == 0xBA6B_D213);
const _: () = assert!(murmur3_32_const(b"Hello, world!", 0x9747_B28C) == 0x2488_4CBA);

/// MurmurHash3, x86 32-bit variant
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Murmur3;

impl Hash32 for Murmur3 {
    fn name(&self) -> &'static str {
        "murmur3"
    }

    fn default_seed(&self) -> u32 {
        0
    }

    fn hash32_with_seed(&self, bytes: &[u8], seed: u32) -> u32 {
        murmur3_32(bytes, seed)
    }
}
