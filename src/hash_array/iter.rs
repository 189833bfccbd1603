// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use std::iter::{FusedIterator, Zip};
use std::slice;

/// Iterator over the entries of a [`crate::HashArray`], in slot order
pub struct Iter<'a, T> {
    slots: Zip<slice::Iter<'a, u32>, slice::Iter<'a, Option<T>>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(keys: &'a [u32], values: &'a [Option<T>], len: usize) -> Self {
        Self {
            slots: keys.iter().zip(values.iter()),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        for (key, value) in self.slots.by_ref() {
            if let Some(value) = value {
                self.remaining -= 1;
                return Some((*key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
