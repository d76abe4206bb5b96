//! Non-local aborts that unwind the stack to the nearest boundary.
//!
//! This is the unwinding counterpart of the Result channel. An abort raised
//! with [`abort`], [`throw`] or [`OrAbort::or_abort`] unwinds with an
//! [`Abort`] payload until a boundary ([`handle`], [`handle_into`],
//! [`catch`]) installed on the same thread intercepts it. Intermediate frames
//! need neither `Result` return types nor `?`.
//!
//! Boundaries only resolve `Abort<E>` payloads for their own `E`. Ordinary
//! panics, and aborts carrying a different error type, are re-raised
//! unchanged so that faults are never masked as handled errors. An abort
//! that reaches the top of a thread without a boundary terminates the thread.
//!
//! Requires the `std` feature and a build with `panic = "unwind"`.
//!
//! # Examples
//!
//! ```
//! use errless::unwind::{self, OrAbort};
//! use errless::{empty_handler, message, try_result, WrappedResult};
//!
//! fn parse_pair(a: &str, b: &str) -> (i32, i32) {
//!     let x = try_result(a.parse::<i32>()).check().or_abort();
//!     let y = try_result(b.parse::<i32>()).err(message("second")).or_abort();
//!     (x, y)
//! }
//!
//! fn sum(a: &str, b: &str) -> WrappedResult<i32, std::num::ParseIntError> {
//!     unwind::handle(empty_handler, || {
//!         let (x, y) = parse_pair(a, b);
//!         x + y
//!     })
//! }
//!
//! assert_eq!(sum("1", "2").unwrap(), 3);
//! assert!(sum("1", "z").unwrap_err().to_string().starts_with("second - error: "));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::handler::Handler;
use crate::types::{WrappedError, WrappedResult};

type Payload = Box<dyn Any + Send + 'static>;

/// Unwind payload carrying an aborted error.
pub struct Abort<E>(WrappedError<E>);

impl<E> Abort<E> {
    /// The carried error.
    #[inline]
    pub fn error(&self) -> &WrappedError<E> {
        &self.0
    }

    /// Consumes the payload, returning the carried error.
    #[inline]
    pub fn into_error(self) -> WrappedError<E> {
        self.0
    }
}

impl<E: fmt::Debug> fmt::Debug for Abort<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Abort").field(&self.0).finish()
    }
}

/// Unwinds to the nearest boundary carrying `error`.
///
/// Uses [`std::panic::resume_unwind`], so the panic hook does not run and
/// nothing is printed on the way.
pub fn abort<E>(error: WrappedError<E>) -> !
where
    E: Send + 'static,
{
    trace_event!(debug, "unwinding with abort payload");
    panic::resume_unwind(Box::new(Abort(error)))
}

/// Runs the handler chain like [`throw`](fn@crate::throw) and unwinds if an error is left.
///
/// # Examples
///
/// ```
/// use errless::{message, unwind, WrappedError};
///
/// let result: Result<(), WrappedError<&str>> = unwind::handle(
///     |err| err,
///     || unwind::throw(Some(WrappedError::new("z")), message("ctx")),
/// );
/// assert_eq!(result.unwrap_err().to_string(), "ctx - error: z");
/// ```
pub fn throw<E, I>(pending: Option<WrappedError<E>>, handlers: I)
where
    E: Send + 'static,
    I: IntoIterator<Item = Handler<E>>,
{
    if let Err(error) = crate::throw::throw(pending, handlers) {
        abort(error)
    }
}

/// Finalizes a [`WrappedResult`] on the unwind channel.
pub trait OrAbort<T> {
    /// Returns the success value or unwinds with the error.
    fn or_abort(self) -> T;
}

impl<T, E> OrAbort<T> for WrappedResult<T, E>
where
    E: Send + 'static,
{
    #[inline]
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => abort(error),
        }
    }
}

/// Runs `body`, recognizing `Abort<E>` payloads and re-raising everything else.
fn intercept<T, E, F>(body: F) -> WrappedResult<T, E>
where
    E: Send + 'static,
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => Ok(value),
        Err(payload) => Err(recognize::<E>(payload)),
    }
}

/// Extracts the error from an `Abort<E>` payload; any other payload is
/// re-raised as is.
pub(crate) fn recognize<E>(payload: Payload) -> WrappedError<E>
where
    E: Send + 'static,
{
    match payload.downcast::<Abort<E>>() {
        Ok(abort) => {
            trace_event!(debug, "boundary resolved abort");
            abort.into_error()
        },
        Err(foreign) => {
            trace_event!(warn, "boundary re-raising foreign unwind payload");
            panic::resume_unwind(foreign)
        },
    }
}

/// Runs `body` and converts an abort into `Err(on_error(error))`.
///
/// Foreign panics pass through untouched.
pub fn handle<T, E, H, F>(on_error: H, body: F) -> WrappedResult<T, E>
where
    E: Send + 'static,
    H: FnOnce(WrappedError<E>) -> WrappedError<E>,
    F: FnOnce() -> T,
{
    intercept(body).map_err(on_error)
}

/// Runs `body` and writes the outcome of `on_error` into `slot` on abort.
///
/// # Examples
///
/// ```
/// use errless::unwind::{self, OrAbort};
/// use errless::{try1, WrappedError};
///
/// let mut err: Option<WrappedError<&str>> = None;
/// let value = unwind::handle_into(Some(&mut err), Some, || {
///     try1(5, Some("locked")).check().or_abort()
/// });
///
/// assert_eq!(value, None);
/// assert_eq!(err.unwrap().to_string(), "locked");
/// ```
pub fn handle_into<T, E, H, F>(
    slot: Option<&mut Option<WrappedError<E>>>,
    on_error: H,
    body: F,
) -> Option<T>
where
    E: Send + 'static,
    H: FnOnce(WrappedError<E>) -> Option<WrappedError<E>>,
    F: FnOnce() -> T,
{
    match intercept(body) {
        Ok(value) => Some(value),
        Err(error) => {
            let resolved = on_error(error);
            if let Some(slot) = slot {
                *slot = resolved;
            }
            None
        },
    }
}

/// Runs `body` and hands an abort to `on_error` for its side effects.
pub fn catch<T, E, H, F>(on_error: H, body: F) -> Option<T>
where
    E: Send + 'static,
    H: FnOnce(WrappedError<E>),
    F: FnOnce() -> T,
{
    match intercept(body) {
        Ok(value) => Some(value),
        Err(error) => {
            on_error(error);
            None
        },
    }
}
