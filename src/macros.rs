//! Variadic call sites.
//!
//! Each argument is either a JSON object or array literal (`{"k": 1}`, `[1, 2]`), `null`,
//! or any Rust expression whose value serializes: `"text"`, `42`, `-1`, `count + 1`,
//! `user.name`.
//!
//! ```
//! use aglog::{BufferSink, JsonFormatter, Level, Logger, LoggerOptions};
//!
//! let buffer = BufferSink::new();
//! let logger = Logger::new(
//!     LoggerOptions::new()
//!         .log_level(Level::Info)
//!         .formatter(JsonFormatter)
//!         .default_logger(buffer.clone()),
//! );
//!
//! aglog::info!(logger, "user", 42, "logged in", {"session": "abc"}).unwrap();
//! assert!(buffer.last().unwrap().contains("user 42 logged in"));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    (@args $method:ident, $logger:expr, [$($done:expr),*]) => {
        $logger.$method(&[$($done),*])
    };
    (@args $method:ident, $logger:expr, [$($done:expr),*] {$($obj:tt)*} $(, $($rest:tt)*)?) => {
        $crate::__emit!(@args $method, $logger,
            [$($done,)* $crate::__private::json!({$($obj)*})] $($($rest)*)?)
    };
    (@args $method:ident, $logger:expr, [$($done:expr),*] [$($arr:tt)*] $(, $($rest:tt)*)?) => {
        $crate::__emit!(@args $method, $logger,
            [$($done,)* $crate::__private::json!([$($arr)*])] $($($rest)*)?)
    };
    (@args $method:ident, $logger:expr, [$($done:expr),*] null $(, $($rest:tt)*)?) => {
        $crate::__emit!(@args $method, $logger,
            [$($done,)* $crate::__private::json!(null)] $($($rest)*)?)
    };
    (@args $method:ident, $logger:expr, [$($done:expr),*] $arg:expr $(, $($rest:tt)*)?) => {
        $crate::__emit!(@args $method, $logger,
            [$($done,)* $crate::__private::json!($arg)] $($($rest)*)?)
    };
    ($method:ident, $logger:expr) => {
        $crate::__emit!(@args $method, $logger, [])
    };
    ($method:ident, $logger:expr, $($rest:tt)*) => {
        $crate::__emit!(@args $method, $logger, [] $($rest)*)
    };
}

/// Logs at `Fatal`. Evaluates to `Result<(), aglog::Error>`.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $($rest:tt)*)?) => { $crate::__emit!(fatal, $logger $(, $($rest)*)?) };
}

/// Logs at `Error`. Evaluates to `Result<(), aglog::Error>`.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $($rest:tt)*)?) => { $crate::__emit!(error, $logger $(, $($rest)*)?) };
}

/// Logs at `Warn`. Evaluates to `Result<(), aglog::Error>`.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $($rest:tt)*)?) => { $crate::__emit!(warn, $logger $(, $($rest)*)?) };
}

/// Logs at `Info`. Evaluates to `Result<(), aglog::Error>`.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $($rest:tt)*)?) => { $crate::__emit!(info, $logger $(, $($rest)*)?) };
}

/// Logs at `Debug`. Evaluates to `Result<(), aglog::Error>`.
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $($rest:tt)*)?) => { $crate::__emit!(debug, $logger $(, $($rest)*)?) };
}

/// Logs at `Trace`. Evaluates to `Result<(), aglog::Error>`.
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $($rest:tt)*)?) => { $crate::__emit!(trace, $logger $(, $($rest)*)?) };
}

/// Force output regardless of threshold. Evaluates to `Result<(), aglog::Error>`.
#[macro_export]
macro_rules! log {
    ($logger:expr $(, $($rest:tt)*)?) => { $crate::__emit!(log, $logger $(, $($rest)*)?) };
}

/// Output only while the verbose flag is set. Evaluates to `Result<(), aglog::Error>`.
#[macro_export]
macro_rules! verbose {
    ($logger:expr $(, $($rest:tt)*)?) => { $crate::__emit!(verbose, $logger $(, $($rest)*)?) };
}
