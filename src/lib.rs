// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

//! Provides bounded counters.

#[macro_use]
pub mod logging;
pub mod errors;
pub mod uint64;
pub mod commands;
pub mod host;
pub mod prelude;

pub use uint64::UInt64;

pub mod constants {
    pub const E_UINT64_ARGS: &str = "expected a positive integer";
    /// Most hosts a single `a-b` range may address.
    pub const MAX_DESTINATOR_RANGE: usize = 1024;
}
