// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! Slot arithmetic over the circular probe sequence

use super::EMPTY_KEY;

/// Returns the slot a key's probe sequence starts at.
pub(crate) const fn home_slot(key: u32, capacity: usize) -> usize {
    key as usize % capacity
}

/// Returns the slot after `slot`, wrapping around at the end.
pub(crate) const fn next_slot(slot: usize, capacity: usize) -> usize {
    if slot + 1 == capacity {
        0
    } else {
        slot + 1
    }
}

/// Returns the number of steps from `from` forward to `to`.
pub(crate) const fn distance(from: usize, to: usize, capacity: usize) -> usize {
    if from <= to {
        to - from
    } else {
        capacity - from + to
    }
}

/// Returns `true` if `pos` lies in the half-open circular range `(start, end]`,
/// walking forward from `start`.
///
/// The range is empty if `start == end`.
pub(crate) const fn in_cyclic_range(start: usize, pos: usize, end: usize) -> bool {
    if start <= end {
        start < pos && pos <= end
    } else {
        start < pos || pos <= end
    }
}

/// Empties `hole` and closes the gap by shifting the rest of its cluster backward.
///
/// An entry at `slot` may only move into the hole if its home slot is *not* in
/// `(hole, slot]`, otherwise the hole would sit in front of its home slot and
/// the entry could no longer be reached from there.
///
/// Returns the value previously held by `hole`.
///
/// Requires at least one empty slot outside of `hole`'s cluster, which holds
/// as long as the table is never full.
#[allow(clippy::indexing_slicing)]
pub(crate) fn backward_shift<T>(
    keys: &mut [u32],
    values: &mut [Option<T>],
    mut hole: usize,
) -> Option<T> {
    let capacity = keys.len();
    debug_assert_eq!(capacity, values.len(), "keys and values are parallel");

    // NOTE: All slot indices below are reduced modulo the capacity
    keys[hole] = EMPTY_KEY;
    let removed = values[hole].take();

    let mut slot = next_slot(hole, capacity);

    loop {
        let key = keys[slot];

        if key == EMPTY_KEY {
            break;
        }

        let home = home_slot(key, capacity);

        if !in_cyclic_range(hole, home, slot) {
            log::trace!("shifting key {key} from slot {slot} back to slot {hole}");

            keys[hole] = key;
            keys[slot] = EMPTY_KEY;
            values.swap(hole, slot);

            hole = slot;
        }

        slot = next_slot(slot, capacity);
    }

    removed
}
