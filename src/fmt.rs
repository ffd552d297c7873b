//! Logging shims.
//!
//! Forward to `defmt` when the `defmt` feature is enabled. Host builds
//! (tests, tooling) compile the calls away so they need no defmt transport.

#![allow(unused_macros)]

#[cfg(feature = "defmt")]
macro_rules! info {
    ($($arg:tt)*) => { ::defmt::info!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(feature = "defmt")]
macro_rules! warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

// Stub macros when defmt is not available. Arguments are still borrowed
// so values only used for logging do not trip unused-variable lints.
#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($fmt:literal $(, $arg:expr)*) => {{
        let _ = ($fmt, $(&$arg),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($fmt:literal $(, $arg:expr)*) => {{
        let _ = ($fmt, $(&$arg),*);
    }};
}

#[cfg(not(feature = "defmt"))]
macro_rules! warn {
    ($fmt:literal $(, $arg:expr)*) => {{
        let _ = ($fmt, $(&$arg),*);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    #[deny(unused_variables)]
    fn log_arguments_count_as_used() {
        let position = 3u8;
        let period_ms = 1500.0f32;
        info!("Editor: opened for {}", position);
        debug!("Menu: {} -> {}", position, period_ms);
        warn!("no arguments");
    }
}
