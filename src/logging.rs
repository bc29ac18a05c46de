/// Conditional logging module for development builds
///
/// The `log!` macro provides informational console logging that is compiled
/// out of production (release) builds by default. Errors and warnings should
/// continue using `web_sys::console::error_*` and `web_sys::console::warn_*`
/// directly.
///
/// Logging is enabled when building for the browser and either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
/// Conditionally log to console in development builds
///
/// Expands to `web_sys::console::log_1()` in wasm debug builds or when the
/// `console_logging` feature is enabled. Everywhere else it compiles to
/// nothing (zero overhead).
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(all(
            target_arch = "wasm32",
            any(debug_assertions, feature = "console_logging")
        ))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}

pub use log;
