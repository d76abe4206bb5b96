//! Handler-building macros.
//!
//! - [`macro@crate::message`] - a [`message`](fn@crate::message) handler whose text is
//!   formatted only when the handler actually runs.
//! - [`macro@crate::wrap`] - the same for [`wrap`](fn@crate::wrap).
//!
//! # Examples
//!
//! ```
//! use errless::try1;
//!
//! let path = String::from("/srv/data.csv");
//! let err = try1(0u64, Some("no such file"))
//!     .err(errless::message!("opening {}", path))
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "opening /srv/data.csv - error: no such file");
//! ```

/// Creates a [`message`](fn@crate::message) handler with lazily formatted text.
///
/// Accepts the same arguments as `format!`. Captured arguments are moved into
/// the handler, so they must be `Send + Sync + 'static`.
///
/// # Examples
///
/// ```
/// use errless::{throw, WrappedError};
///
/// let attempt = 3;
/// let err = throw(Some(WrappedError::new("timeout")), errless::message!("attempt {}", attempt))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "attempt 3 - error: timeout");
/// ```
#[macro_export]
macro_rules! message {
    ($($arg:tt)*) => {
        $crate::Handler::map(move |err| err.with_message($crate::__private::format!($($arg)*)))
    };
}

/// Creates a [`wrap`](fn@crate::wrap) handler with lazily formatted text.
#[macro_export]
macro_rules! wrap {
    ($($arg:tt)*) => {
        $crate::Handler::map(move |err| err.with_wrap($crate::__private::format!($($arg)*)))
    };
}

/// Emits a tracing event under the `errless` target when the `tracing`
/// feature is on; expands to nothing otherwise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!(target: "errless", $($arg)+);
        }
    };
}
