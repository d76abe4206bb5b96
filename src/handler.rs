//! Error-transforming handlers run by [`throw`](fn@crate::throw) and the
//! [`Attempt`](crate::Attempt) finalizers.
//!
//! A [`Handler`] receives the current error and returns either the error to
//! pass to the next handler (`Some`) or `None` to declare the error resolved,
//! which stops the chain.
//!
//! # Examples
//!
//! ```
//! use errless::{is, message, try1, Handler};
//!
//! let ignore_eof = Handler::resolve_if(is("eof"));
//!
//! let line = try1("partial", Some("eof"))
//!     .err([ignore_eof.clone(), message("reading header")])
//!     .unwrap();
//! assert_eq!(line, "partial");
//!
//! let err = try1("", Some("bad utf-8"))
//!     .err([ignore_eof, message("reading header")])
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "reading header - error: bad utf-8");
//! ```

use core::fmt;

use crate::predicate::Predicate;
use crate::types::alloc_type::{Arc, Cow};
use crate::types::{Layer, LayerKind, WrappedError};

type HandlerFn<E> = dyn Fn(WrappedError<E>) -> Option<WrappedError<E>> + Send + Sync;

/// A reusable, shareable error transformation.
pub struct Handler<E> {
    inner: Arc<HandlerFn<E>>,
}

impl<E> Handler<E> {
    /// Builds a handler from a closure.
    ///
    /// Return `Some(error)` to continue the chain with `error`, or `None` to
    /// resolve the error and skip the remaining handlers.
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(WrappedError<E>) -> Option<WrappedError<E>> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Runs the handler on `error`.
    #[inline]
    pub fn call(&self, error: WrappedError<E>) -> Option<WrappedError<E>> {
        (self.inner)(error)
    }
}

impl<E: 'static> Handler<E> {
    /// Builds a handler that always passes a (possibly rewritten) error on.
    #[inline]
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(WrappedError<E>) -> WrappedError<E> + Send + Sync + 'static,
    {
        Self::new(move |err| Some(f(err)))
    }

    /// Builds a handler that resolves the error when `predicate` matches and
    /// passes it on untouched otherwise.
    pub fn resolve_if(predicate: Predicate<E>) -> Self {
        Self::new(move |err| if predicate.matches(&err) { None } else { Some(err) })
    }

    /// The chain form of [`empty_handler`]: passes the error on unchanged.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Some)
    }
}

impl<E> Clone for Handler<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

/// A single handler iterates as itself, so finalizers accept one handler, an
/// array of them, or a `Vec`.
impl<E> IntoIterator for Handler<E> {
    type Item = Handler<E>;
    type IntoIter = core::iter::Once<Handler<E>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        core::iter::once(self)
    }
}

fn layered<E: 'static>(kind: LayerKind, text: impl Into<Cow<'static, str>>) -> Handler<E> {
    let text = text.into();
    Handler::map(move |err| err.with_layer(Layer::new(kind, text.clone())))
}

/// Prefixes the error with `text`.
///
/// The result renders as `"<text> - error: <original>"` and still matches
/// [`is`](crate::is) predicates for the original error.
///
/// # Examples
///
/// ```
/// use errless::{is, message, throw, WrappedError};
///
/// let err = throw(Some(WrappedError::new("eof")), message("parsing header")).unwrap_err();
/// assert_eq!(err.to_string(), "parsing header - error: eof");
/// assert!(is("eof").matches(&err));
/// ```
pub fn message<E: 'static>(text: impl Into<Cow<'static, str>>) -> Handler<E> {
    layered(LayerKind::Message, text)
}

/// Wraps the error with `text`.
///
/// Renders exactly like [`message`]; the layer is tagged [`LayerKind::Wrap`].
pub fn wrap<E: 'static>(text: impl Into<Cow<'static, str>>) -> Handler<E> {
    layered(LayerKind::Wrap, text)
}

/// Identity error callback for boundaries that only propagate.
///
/// # Examples
///
/// ```
/// use errless::{boundary, empty_handler, try_result, WrappedResult};
///
/// fn parse(input: &str) -> WrappedResult<u32, std::num::ParseIntError> {
///     boundary::handle(empty_handler, || try_result(input.parse::<u32>()).check())
/// }
///
/// assert!(parse("x").is_err());
/// ```
#[inline]
pub fn empty_handler<E>(error: WrappedError<E>) -> WrappedError<E> {
    error
}

/// Adds an `in span '<name>'` message layer taken from the current tracing span.
///
/// Requires the `tracing` feature.
#[cfg(feature = "tracing")]
pub fn span_context<E: 'static>() -> Handler<E> {
    Handler::map(|err| {
        let span = tracing::Span::current();
        let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
        err.with_message(std::format!("in span '{}'", name))
    })
}
