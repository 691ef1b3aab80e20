// Global verbosity system for diagnostic output
// Diagnostics go to stderr so the passenger shell owns stdout.
use std::sync::atomic::{AtomicU8, Ordering};

pub const MAX_VERBOSITY: u8 = 2;

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(0);

pub fn set_verbosity_level(level: u8) {
    let level = level.min(MAX_VERBOSITY);
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > 0 {
        eprintln!("📢 Verbosity level: {} (0=quiet, 1=progress, 2=full)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! v_print {
    (1, $($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= 1 {
            eprintln!($($arg)*);
        }
    };
    (2, $($arg:tt)*) => {
        if $crate::verbosity::get_verbosity_level() >= 2 {
            eprintln!($($arg)*);
        }
    };
}

// Page and build progress (level 1)
#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => { $crate::v_print!(1, $($arg)*); };
}

// Per-request and per-item detail (level 2)
#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => { $crate::v_print!(2, $($arg)*); };
}

// Always print errors regardless of verbosity
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => { eprintln!($($arg)*); };
}
