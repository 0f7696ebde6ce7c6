// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

mod channel;
pub use channel::*;
mod parsing;
pub use parsing::*;

use crate::uint64::UInt64;
use structopt::*;

/// A command that can be sent to counter hosts.
/// 
/// Prefix the command by the IDs of the hosts you want to send that command to.
/// For instance, `2-5,7 inc` will increment the counters of hosts 2, 3, 4, 5 and 7.
#[derive(StructOpt, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Increments the counter and prints the new value
    Inc,
    /// Prints the current value
    Get,
    /// Overwrites the current value
    Set {
        value: UInt64,
    },
    /// Brings the counter back to zero
    Reset,
    SetLogLevel {
        level: u8,
    },
}
