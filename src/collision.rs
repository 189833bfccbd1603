// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{Digest, Hash32, HashArray, HashFunction};

/// Default number of digests a [`CollisionDetector`] can track (minus one)
pub const DEFAULT_DETECTOR_CAPACITY: usize = 1 << 16;

/// What a [`CollisionDetector`] learned from an input
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Observation<'a> {
    /// Digest was not seen before
    New,

    /// Digest was seen before, for the same string
    Repeat,

    /// Digest was seen before, for a different string
    Collision {
        /// First string that produced the digest
        previous: &'a str,
    },

    /// Digest cannot be tracked (digest `0`, or no free slot left)
    Untracked,
}

/// Digest of an input, and how it relates to earlier inputs
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Record<'a> {
    /// Digest of the input
    pub digest: Digest,

    /// Classification of the digest
    pub observation: Observation<'a>,
}

/// Hashes strings and detects different strings sharing a digest
///
/// # Examples
///
/// ```
/// use hash_array::{CollisionDetector, HashFunction, Observation};
///
/// let mut detector = CollisionDetector::<32>::new(HashFunction::default(), 0);
///
/// assert_eq!(Observation::New, detector.observe("apple").observation);
/// assert_eq!(Observation::Repeat, detector.observe("apple").observation);
/// ```
pub struct CollisionDetector<'a, const N: usize = DEFAULT_DETECTOR_CAPACITY> {
    function: HashFunction,
    seed: u32,
    seen: HashArray<&'a str, N>,
}

impl<'a, const N: usize> CollisionDetector<'a, N> {
    /// Creates a detector hashing with `function`, starting from `seed`.
    #[must_use]
    pub fn new(function: HashFunction, seed: u32) -> Self {
        Self {
            function,
            seed,
            seen: HashArray::new(),
        }
    }

    /// Returns the hash function in use.
    #[must_use]
    pub fn function(&self) -> HashFunction {
        self.function
    }

    /// Returns the seed in use.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the number of distinct digests tracked so far.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.seen.len()
    }

    /// Hashes `input` and compares it to the first input seen with the same digest.
    pub fn observe(&mut self, input: &'a str) -> Record<'a> {
        let digest = self.function.hash32_with_seed(input.as_bytes(), self.seed);

        let observation = match self.seen.find(digest) {
            Some(&previous) if previous == input => Observation::Repeat,
            Some(&previous) => Observation::Collision { previous },
            None => match self.seen.try_upsert(digest, input) {
                Ok(_) => Observation::New,
                Err(e) => {
                    log::warn!("not tracking digest {digest:#010x} of {input:?}: {e}");
                    Observation::Untracked
                }
            },
        };

        Record {
            digest,
            observation,
        }
    }
}
