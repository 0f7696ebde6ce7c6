// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

pub use {
    crate::{
        commands::*,
        errors::*,
        host::*,
        uint64::*,
        constants::*,
        error, warn, info, debug, trace, logging::LogLevel,
    },
    async_channel::{Sender, Receiver},
};
