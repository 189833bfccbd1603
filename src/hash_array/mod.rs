// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A fixed-capacity open-addressing table keyed by 32-bit digests
//!
//! The table has `N` slots, allocated once. A key lives on the linear probe
//! sequence starting at `key % N`, stepping by one slot and wrapping around at
//! the end, with no empty slot between its home slot and its actual slot.
//!
//! Key `0` marks an empty slot, so a digest of `0` cannot be stored.
//! Operations that take a key treat `0` as never present, inserting it fails
//! with [`crate::Error::ReservedKey`].
//!
//! Deletions do not leave tombstones. Instead, the entries following the removed
//! one in its cluster are shifted backward to close the gap
//! (backward-shift deletion).
//!
//! The table never resizes and holds at most `N - 1` entries, so that every probe
//! ends at an empty slot. Lookups are O(1) on average under low load, but degrade
//! linearly with the length of the cluster a key falls into.

mod iter;
mod probe;


pub use iter::Iter;

use crate::Error;
use probe::{backward_shift, distance, home_slot};

/// Key marking an empty slot
pub const EMPTY_KEY: u32 = 0;

/// A fixed-capacity mapping from non-zero `u32` keys to values
///
/// # Examples
///
/// ```
/// use hash_array::HashArray;
///
/// let mut table = HashArray::<&str, 16>::new();
///
/// table.upsert(17, "a");
/// table.upsert(1, "b");
///
/// assert_eq!(Some(&"a"), table.find(17));
/// assert_eq!(Some("a"), table.remove(17));
///
/// // 1 got shifted into its home slot, and is still reachable
/// assert_eq!(Some(&"b"), table.find(1));
/// assert_eq!(None, table.find(17));
/// ```
#[derive(Clone)]
pub struct HashArray<T, const N: usize> {
    keys: Box<[u32]>,

    // NOTE: keys[i] != EMPTY_KEY <=> values[i].is_some()
    values: Box<[Option<T>]>,

    len: usize,
}

impl<T, const N: usize> Default for HashArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for HashArray<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// NOTE: Slot indices are always produced by `probe`, so they are < N
#[allow(clippy::indexing_slicing)]
impl<T, const N: usize> HashArray<T, N> {
    /// Creates an empty table with `N` slots.
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N >= 2, "a hash array needs at least 2 slots") };

        Self {
            keys: vec![EMPTY_KEY; N].into_boxed_slice(),
            values: std::iter::repeat_with(|| None).take(N).collect(),
            len: 0,
        }
    }

    /// Returns the number of slots.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Walks the probe sequence of `key`.
    ///
    /// Returns `Ok(slot)` of the key, or `Err(slot)` of the empty slot the probe
    /// ended at.
    fn probe(&self, key: u32) -> Result<usize, usize> {
        debug_assert_ne!(EMPTY_KEY, key);

        let mut slot = home_slot(key, N);

        // NOTE: Terminates because there is always at least one empty slot
        loop {
            match self.keys[slot] {
                EMPTY_KEY => return Err(slot),
                k if k == key => return Ok(slot),
                _ => slot = probe::next_slot(slot, N),
            }
        }
    }

    fn find_slot(&self, key: u32) -> Option<usize> {
        if key == EMPTY_KEY {
            return None;
        }
        self.probe(key).ok()
    }

    /// Returns the slot of `key`, occupying a new one if it is not stored yet.
    fn claim(&mut self, key: u32) -> crate::Result<usize> {
        if key == EMPTY_KEY {
            return Err(Error::ReservedKey);
        }

        match self.probe(key) {
            Ok(slot) => Ok(slot),
            Err(slot) => {
                if self.len + 1 >= N {
                    return Err(Error::Full { capacity: N });
                }

                log::trace!(
                    "inserting key {key} into slot {slot} (home slot {})",
                    home_slot(key, N),
                );

                self.keys[slot] = key;
                self.len += 1;

                Ok(slot)
            }
        }
    }

    /// Inserts or overwrites the value of `key`, returning a reference to it.
    ///
    /// An overwritten value is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedKey`] for key `0`, and [`Error::Full`] if `key`
    /// is new and the table already holds `N - 1` entries.
    pub fn try_upsert(&mut self, key: u32, value: T) -> crate::Result<&mut T> {
        let slot = self.claim(key)?;
        Ok(self.values[slot].insert(value))
    }

    /// Inserts or overwrites the value of `key`, returning a reference to it.
    ///
    /// An overwritten value is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `key` is `0`, or if `key` is new and the table already holds
    /// `N - 1` entries. Use [`HashArray::try_upsert`] to handle those cases.
    pub fn upsert(&mut self, key: u32, value: T) -> &mut T {
        match self.try_upsert(key, value) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the value of `key`, inserting `default` first if it is not stored.
    ///
    /// # Errors
    ///
    /// Same as [`HashArray::try_upsert`].
    pub fn try_get_or_insert(&mut self, key: u32, default: T) -> crate::Result<&mut T> {
        let slot = self.claim(key)?;
        Ok(self.values[slot].get_or_insert(default))
    }

    /// Returns the value of `key`, inserting `default` first if it is not stored.
    ///
    /// # Panics
    ///
    /// Same as [`HashArray::upsert`].
    pub fn get_or_insert(&mut self, key: u32, default: T) -> &mut T {
        match self.try_get_or_insert(key, default) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns the value of `key`, or `default` if it is not stored.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: u32, default: &'a T) -> &'a T {
        self.find(key).unwrap_or(default)
    }

    /// Returns the value of `key`.
    #[must_use]
    pub fn find(&self, key: u32) -> Option<&T> {
        let slot = self.find_slot(key)?;
        self.values[slot].as_ref()
    }

    /// Returns the value of `key` mutably.
    #[must_use]
    pub fn find_mut(&mut self, key: u32) -> Option<&mut T> {
        let slot = self.find_slot(key)?;
        self.values[slot].as_mut()
    }

    /// Returns `true` if `key` is stored.
    #[must_use]
    pub fn contains_key(&self, key: u32) -> bool {
        self.find_slot(key).is_some()
    }

    /// Returns how many slots past its home slot `key` is stored.
    ///
    /// This is the number of extra probes a lookup of `key` needs.
    #[must_use]
    pub fn displacement(&self, key: u32) -> Option<usize> {
        let slot = self.find_slot(key)?;
        Some(distance(home_slot(key, N), slot, N))
    }

    /// Removes `key`, returning its value.
    ///
    /// Later entries of the same cluster are shifted backward, so no tombstone
    /// is left behind.
    pub fn remove(&mut self, key: u32) -> Option<T> {
        let slot = self.find_slot(key)?;

        log::trace!("removing key {key} from slot {slot}");

        self.len -= 1;
        backward_shift(&mut self.keys, &mut self.values, slot)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.keys.fill(EMPTY_KEY);
        self.values.fill_with(|| None);
        self.len = 0;
    }

    /// Iterates over all entries in slot order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.keys, &self.values, self.len)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a HashArray<T, N> {
    type Item = (u32, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
