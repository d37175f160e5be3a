//! Formatted logging macros over the module-level API.
//!
//! Each expands to the matching free function with a `format_args!` payload,
//! keeping the caller's file and line as the reported call site.

/// Log a formatted message at `debug`.
#[macro_export]
macro_rules! debugf {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::debugf($ctx, format_args!($($arg)*))
    };
}

/// Log a formatted message at `info`.
#[macro_export]
macro_rules! infof {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::infof($ctx, format_args!($($arg)*))
    };
}

/// Log a formatted message at `warn`.
#[macro_export]
macro_rules! warnf {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::warnf($ctx, format_args!($($arg)*))
    };
}

/// Log a formatted message at `error`.
#[macro_export]
macro_rules! errorf {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::errorf($ctx, format_args!($($arg)*))
    };
}

/// Log a formatted message at `fatal`, then terminate the process.
#[macro_export]
macro_rules! fatalf {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::fatalf($ctx, format_args!($($arg)*))
    };
}

/// Log a formatted message at `fatal`, then panic.
#[macro_export]
macro_rules! panicf {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::panicf($ctx, format_args!($($arg)*))
    };
}
