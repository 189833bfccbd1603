// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Seedable 32-bit string hashes and a fixed-capacity open-addressing table.
//!
//! ##### About
//!
//! This crate provides two independent building blocks:
//!
//! - A family of deterministic hash functions (`djb2a`, `fnv1a`, `crc32` and
//!   MurmurHash3 x86/32) mapping a byte string and a seed to a 32-bit digest.
//!   All of them are `const fn`, so digests of literals can be computed at
//!   compile time, see [`hash32!`].
//!
//! - [`HashArray`], a table with a fixed number of slots mapping 32-bit keys
//!   (typically digests) to values. Collisions are resolved by linear probing,
//!   and deletions shift entries backward instead of leaving tombstones.
//!
//! [`CollisionDetector`] combines both to find different strings sharing a digest.
//!
//! Key `0` marks empty slots in a [`HashArray`], so a digest of `0` cannot be stored.
//! The table does not resize, and holds at most `N - 1` entries.
//!
//! ```
//! use hash_array::{hash::murmur3_32, HashArray};
//!
//! let mut table = HashArray::<&str, 1_024>::new();
//!
//! for word in ["apple", "banana", "cherry"] {
//!     table.upsert(murmur3_32(word.as_bytes(), 0), word);
//! }
//!
//! assert_eq!(Some(&"banana"), table.find(murmur3_32(b"banana", 0)));
//! ```

#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![allow(clippy::option_if_let_else)]
#![warn(clippy::redundant_feature_names)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

/// Computes the MurmurHash3 digest (seed `0`) of a string literal at compile time.
///
/// # Examples
///
/// ```
/// use hash_array::hash32;
///
/// const APPLE: u32 = hash32!("apple");
/// const BANANA: u32 = hash32!("banana");
///
/// let digest = hash_array::hash::murmur3_32(b"banana", 0);
///
/// let fruit = match digest {
///     APPLE => "apple",
///     BANANA => "banana",
///     _ => "unknown",
/// };
///
/// assert_eq!("banana", fruit);
/// ```
#[macro_export]
macro_rules! hash32 {
    ($s:literal) => {
        const { $crate::hash::murmur3_32_const(str::as_bytes($s), 0) }
    };
}

mod collision;
mod error;

pub mod hash;

mod hash_array;

/// Utility functions
pub mod util;

/// Digest of a hash function
pub type Digest = u32;

pub use {
    collision::{CollisionDetector, Observation, Record, DEFAULT_DETECTOR_CAPACITY},
    error::{Error, Result},
    hash::{Hash32, HashFunction},
    hash_array::{HashArray, Iter, EMPTY_KEY},
};
