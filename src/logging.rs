// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

pub const OFF: u8 = 0;
pub const ERROR: u8 = 1;
pub const WARN: u8 = 2;
pub const INFO: u8 = 3;
pub const DEBUG: u8 = 4;
pub const TRACE: u8 = 5;

/// Runtime verbosity of a single counter host.
///
/// Clones share the same level, so a host and whoever spawned it can both change it.
/// Messages that pass this level still go through the `log` facade and its own filter.
#[derive(Clone, Debug)]
pub struct LogLevel {
    value: std::sync::Arc<std::sync::atomic::AtomicU8>,
}

impl LogLevel {
    pub fn from(value: u8) -> Self {
        Self {
            value: std::sync::Arc::new(std::sync::atomic::AtomicU8::new(value.min(TRACE))),
        }
    }

    pub fn load(&self) -> u8 {
        self.value.load(std::sync::atomic::Ordering::Relaxed)
    }

    /// Levels above [`TRACE`] are clamped.
    pub fn set(&self, value: u8) {
        self.value.store(value.min(TRACE), std::sync::atomic::Ordering::Relaxed)
    }

    pub fn enabled(&self, level: u8) -> bool {
        level != OFF && self.load() >= level
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::from(ERROR)
    }
}

#[macro_export]
macro_rules! error {
    ($i:expr, $($arg:expr),+) => {
        if $i.enabled($crate::logging::ERROR) {
            log::error!($($arg,)+);
        }
    }
}

#[macro_export]
macro_rules! warn {
    ($i:expr, $($arg:expr),+) => {
        if $i.enabled($crate::logging::WARN) {
            log::warn!($($arg,)+);
        }
    }
}

#[macro_export]
macro_rules! info {
    ($i:expr, $($arg:expr),+) => {
        if $i.enabled($crate::logging::INFO) {
            log::info!($($arg,)+);
        }
    }
}

#[macro_export]
macro_rules! debug {
    ($i:expr, $($arg:expr),+) => {
        if $i.enabled($crate::logging::DEBUG) {
            log::debug!($($arg,)+);
        }
    }
}

#[macro_export]
macro_rules! trace {
    ($i:expr, $($arg:expr),+) => {
        if $i.enabled($crate::logging::TRACE) {
            log::trace!($($arg,)+);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_level() {
        let ll = LogLevel::default();
        let ll2 = ll.clone();
        assert!(ll.enabled(ERROR));
        assert!(!ll.enabled(WARN));

        ll2.set(DEBUG);
        assert_eq!(ll.load(), DEBUG);
        assert!(ll.enabled(INFO));
        assert!(!ll.enabled(TRACE));

        ll.set(200);
        assert_eq!(ll2.load(), TRACE);

        ll.set(OFF);
        assert!(!ll.enabled(ERROR));
        assert!(!ll.enabled(OFF));
    }
}
