//! Feature-gated log output
//!
//! `log` routes through the `log` facade, `esp32-log` prints over the ESP
//! console. With neither enabled the macros only type-check their arguments.
//! The `log_` prefix keeps `warn` clear of the builtin lint attribute.

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { ::log::debug!($($arg)*) };
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { ::log::warn!($($arg)*) };
}

#[cfg(all(feature = "esp32-log", not(feature = "log")))]
macro_rules! log_debug {
    ($($arg:tt)*) => { ::esp_println::println!($($arg)*) };
}

#[cfg(all(feature = "esp32-log", not(feature = "log")))]
macro_rules! log_warn {
    ($($arg:tt)*) => { ::esp_println::println!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "esp32-log")))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(not(any(feature = "log", feature = "esp32-log")))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub(crate) use {log_debug, log_warn};
