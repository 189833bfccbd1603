// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Represents errors that can occur when hashing or using a [`crate::HashArray`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key `0` marks empty slots and cannot be stored
    ReservedKey,

    /// Inserting a new key would leave the table without an empty slot
    Full {
        /// Fixed slot count of the table
        capacity: usize,
    },

    /// Integer could not be parsed (input)
    InvalidNumber(String),

    /// Unknown hash function name (input)
    UnknownHashFunction(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReservedKey => write!(f, "HashArrayError: key 0 is reserved for empty slots"),
            Self::Full { capacity } => {
                write!(f, "HashArrayError: table is full (capacity {capacity})")
            }
            Self::InvalidNumber(s) => write!(f, "HashArrayError: invalid number {s:?}"),
            Self::UnknownHashFunction(s) => {
                write!(f, "HashArrayError: unknown hash function {s:?}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Hash array result
pub type Result<T> = std::result::Result<T, Error>;
