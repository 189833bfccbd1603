// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::Error;

/// Parses an integer the way `strtol(s, _, 0)` reads it.
///
/// - `0x` or `0X` prefix: hexadecimal
/// - leading `0`: octal
/// - otherwise: decimal
///
/// A leading `-` wraps the value around (`"-1"` is `u32::MAX`).
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if the string is empty, contains anything
/// but digits of its base, or does not fit into 32 bits.
///
/// # Examples
///
/// ```
/// use hash_array::util::parse_prefixed_u32;
///
/// assert_eq!(Ok(255), parse_prefixed_u32("0xff"));
/// assert_eq!(Ok(8), parse_prefixed_u32("010"));
/// assert_eq!(Ok(u32::MAX), parse_prefixed_u32("-1"));
/// assert!(parse_prefixed_u32("12abc").is_err());
/// ```
pub fn parse_prefixed_u32(s: &str) -> crate::Result<u32> {
    let invalid = || Error::InvalidNumber(s.into());

    let unsigned = s.trim_start();

    let (negative, unsigned) = match unsigned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, unsigned.strip_prefix('+').unwrap_or(unsigned)),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, unsigned.trim_start_matches('0'))
    } else {
        (10, unsigned)
    };

    // NOTE: `from_str_radix` would accept a second sign
    if unsigned.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    // leading zeros of an octal number may be all there is
    if digits.is_empty() {
        return if radix == 8 { Ok(0) } else { Err(invalid()) };
    }

    let magnitude = u32::from_str_radix(digits, radix).map_err(|_| invalid())?;

    Ok(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Formats a digest as `printf` would with `%10u` or `%#.8x`.
///
/// Like C's `#` flag, hex output has no `0x` prefix for a digest of `0`.
#[derive(Copy, Clone, Debug)]
pub struct DisplayDigest {
    digest: u32,
    hex: bool,
}

impl DisplayDigest {
    /// Wraps a digest for display.
    #[must_use]
    pub fn new(digest: u32, hex: bool) -> Self {
        Self { digest, hex }
    }
}

impl std::fmt::Display for DisplayDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.hex, self.digest) {
            (true, 0) => write!(f, "00000000"),
            (true, digest) => write!(f, "{digest:#010x}"),
            (false, digest) => write!(f, "{digest:>10}"),
        }
    }
}
