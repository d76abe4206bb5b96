//! The abort primitive.
//!
//! [`throw`] runs a handler chain over a pending error. If the error survives
//! the chain, it comes back as `Err`, which the caller forwards with `?` until
//! a [boundary](crate::boundary) finalizes it. For the unwinding flavor see
//! [`unwind::throw`](crate::unwind::throw).

use crate::handler::Handler;
use crate::types::{WrappedError, WrappedResult};

/// Applies `handlers` to `pending` and aborts if an error is left.
///
/// - `None` returns `Ok(())` without invoking any handler.
/// - Handlers run in order. The first one returning `None` resolves the
///   error; later handlers are skipped.
/// - An error surviving the chain is returned as `Err`.
///
/// # Examples
///
/// ```
/// use errless::{message, throw, Handler, WrappedError};
///
/// assert!(throw::<&str, _>(None, message("never runs")).is_ok());
///
/// let resolved = throw(Some(WrappedError::new("eof")), [Handler::new(|_| None), message("skipped")]);
/// assert!(resolved.is_ok());
///
/// let err = throw(Some(WrappedError::new("eof")), message("reading")).unwrap_err();
/// assert_eq!(err.to_string(), "reading - error: eof");
/// ```
pub fn throw<E, I>(pending: Option<WrappedError<E>>, handlers: I) -> WrappedResult<(), E>
where
    I: IntoIterator<Item = Handler<E>>,
{
    let Some(mut error) = pending else {
        return Ok(());
    };

    for handler in handlers {
        match handler.call(error) {
            Some(next) => error = next,
            None => {
                trace_event!(trace, "error resolved by handler");
                return Ok(());
            },
        }
    }

    trace_event!(debug, layers = error.layers().len(), "error survived handler chain");
    Err(error)
}

/// [`throw`] without handlers: aborts whenever an error is pending.
///
/// # Examples
///
/// ```
/// use errless::{check, WrappedError};
///
/// assert!(check::<&str>(None).is_ok());
/// assert_eq!(check(Some(WrappedError::new("boom"))).unwrap_err().to_string(), "boom");
/// ```
#[inline]
pub fn check<E>(pending: Option<WrappedError<E>>) -> WrappedResult<(), E> {
    throw(pending, core::iter::empty())
}
