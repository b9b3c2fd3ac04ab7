//! Emit macros. Unlike the `Logger` methods they capture the enclosing
//! function's name, and they take positional args for `{}` placeholders.
//!
//! ```
//! let logger = moelog::get_logger("orders");
//! let id = 42;
//! moelog::info!(logger, "order {} accepted", id);
//! ```

/// `Callsite` of the expansion point: enclosing function name and line.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::Callsite::from_type_name(type_name_of(f), line!())
    }};
}

#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger
            .event($level)
            .callsite($crate::callsite!())
            $(.arg(&$arg))*
            .emit($msg)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::DEBUG, $($rest)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::INFO, $($rest)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::WARNING, $($rest)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::ERROR, $($rest)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::CRITICAL, $($rest)+)
    };
}

#[macro_export]
macro_rules! timer {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::TIMER, $($rest)+)
    };
}

#[macro_export]
macro_rules! app_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::APP_INFO, $($rest)+)
    };
}
