// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

use crate::errors::ParseUInt64Error;

/// Represents an unsigned 64 bit integer.
///
/// Counting starts at zero and every increment yields the next value.
/// Incrementing past [`u64::MAX`] wraps back to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UInt64 {
    value: u64,
}

impl UInt64 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter that already holds `value`.
    /// The next call to [`UInt64::increment`] returns `value + 1` (modulo 2^64).
    pub fn with_value(value: u64) -> Self {
        Self { value }
    }

    /// Adds one to the counter and returns the new value.
    pub fn increment(&mut self) -> u64 {
        self.value = self.value.wrapping_add(1);
        self.value
    }

    pub fn inc(&mut self) -> u64 {
        self.increment()
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

impl From<u64> for UInt64 {
    fn from(value: u64) -> Self {
        UInt64::with_value(value)
    }
}

impl From<UInt64> for u64 {
    fn from(counter: UInt64) -> Self {
        counter.value
    }
}

impl std::fmt::Display for UInt64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::str::FromStr for UInt64 {
    type Err = ParseUInt64Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseUInt64Error::Empty);
        }

        // u64::from_str accepts a leading '+' but rejects '-'
        match s.parse::<u64>() {
            Ok(value) => Ok(UInt64::with_value(value)),
            Err(_) => Err(ParseUInt64Error::Invalid(s.to_string())),
        }
    }
}
