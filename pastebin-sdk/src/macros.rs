/// Logging macro with explicit level selection.
///
/// Outside of tests it forwards to [`tracing`] macros.
/// During tests it prints to `stdout`, preserving the log level for context.
///
/// # Examples
/// ```
/// use pastebin::sdk_log;
/// # fn main() {
/// sdk_log!(debug, "listing {} pastes", 42);
/// sdk_log!(warn, "slow response from {}", "pastebin.com");
/// # }
/// ```
#[macro_export]
macro_rules! sdk_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(not(test))]
        $crate::__private::tracing::$level!($($arg)*);
        #[cfg(test)]
        println!("[{}] {}", stringify!($level), format_args!($($arg)*));
    };
}
