//! Recovery boundaries for the Result channel.
//!
//! A boundary wraps a function body. Aborts travel out of the body as `Err`
//! through `?`; the boundary is where they are finalized into the function's
//! error return. Frames between the abort site and the boundary need no
//! error handling of their own.
//!
//! # Examples
//!
//! ```
//! use errless::{boundary, message, try_result, WrappedResult};
//!
//! fn sum(a: &str, b: &str) -> WrappedResult<i64, std::num::ParseIntError> {
//!     boundary::handle(
//!         |err| err.with_message("sum"),
//!         || {
//!             let x = try_result(a.parse::<i64>()).check()?;
//!             let y = try_result(b.parse::<i64>()).err(message("right operand"))?;
//!             Ok(x + y)
//!         },
//!     )
//! }
//!
//! assert_eq!(sum("10", "20").unwrap(), 30);
//! assert!(sum("10", "2x").unwrap_err().to_string().starts_with("sum - error: right operand"));
//! ```

use crate::types::{WrappedError, WrappedResult};

/// Runs `body` and passes any abort through `on_error`.
///
/// Use [`empty_handler`](crate::empty_handler) when the error should only be
/// propagated.
pub fn handle<T, E, H, F>(on_error: H, body: F) -> WrappedResult<T, E>
where
    H: FnOnce(WrappedError<E>) -> WrappedError<E>,
    F: FnOnce() -> WrappedResult<T, E>,
{
    body().map_err(|err| {
        trace_event!(debug, "boundary resolved abort");
        on_error(err)
    })
}

/// Runs `body` and writes the outcome of `on_error` into `slot` on abort.
///
/// Returns the body's value when it completes. On abort the function returns
/// `None`; `on_error` may itself return `None` to clear the error. Without a
/// slot the error is computed and dropped.
///
/// # Examples
///
/// ```
/// use errless::{boundary, try1, WrappedError};
///
/// let mut slot: Option<WrappedError<&str>> = None;
/// let value = boundary::handle_into(Some(&mut slot), |err| Some(err.with_wrap("job 7")), || {
///     try1(0, Some("quota exceeded")).check()
/// });
///
/// assert_eq!(value, None);
/// assert_eq!(slot.unwrap().to_string(), "job 7 - error: quota exceeded");
/// ```
pub fn handle_into<T, E, H, F>(
    slot: Option<&mut Option<WrappedError<E>>>,
    on_error: H,
    body: F,
) -> Option<T>
where
    H: FnOnce(WrappedError<E>) -> Option<WrappedError<E>>,
    F: FnOnce() -> WrappedResult<T, E>,
{
    match body() {
        Ok(value) => Some(value),
        Err(err) => {
            trace_event!(debug, "boundary resolved abort into slot");
            let resolved = on_error(err);
            if let Some(slot) = slot {
                *slot = resolved;
            }
            None
        },
    }
}

/// Runs `body` and hands any abort to `on_error` for its side effects.
///
/// # Examples
///
/// ```
/// use errless::{boundary, try1};
///
/// let mut report = String::new();
/// let value = boundary::catch(|err| report = format!("process: {err}"), || {
///     try1(1, Some("eof")).check()
/// });
///
/// assert_eq!(value, None);
/// assert_eq!(report, "process: eof");
/// ```
pub fn catch<T, E, H, F>(on_error: H, body: F) -> Option<T>
where
    H: FnOnce(WrappedError<E>),
    F: FnOnce() -> WrappedResult<T, E>,
{
    match body() {
        Ok(value) => Some(value),
        Err(err) => {
            trace_event!(debug, "boundary passed abort to catch callback");
            on_error(err);
            None
        },
    }
}
