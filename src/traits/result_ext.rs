//! Extension traits connecting plain `Result`s to the attempt machinery.
//!
//! # Examples
//!
//! ```
//! use errless::traits::{AttemptExt, WrappedResultExt};
//! use errless::WrappedResult;
//!
//! fn load(path: &str) -> WrappedResult<String, std::io::Error> {
//!     std::fs::read_to_string(path).or_message("reading settings")
//! }
//!
//! let err = load("/definitely/missing.toml").and_message("starting up").unwrap_err();
//! assert!(err.to_string().starts_with("starting up - error: reading settings - error: "));
//! ```

use crate::types::alloc_type::Cow;
use crate::types::{Attempt, WrappedResult};

/// Extension trait turning a `Result` into an [`Attempt`] or a [`WrappedResult`].
pub trait AttemptExt<T, E> {
    /// Wraps the result in an [`Attempt`]. The error path carries `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use errless::contains;
    /// use errless::traits::AttemptExt;
    ///
    /// let port = "80x".parse::<u16>()
    ///     .attempt()
    ///     .when(contains("overflow"))
    ///     .check()
    ///     .unwrap();
    /// assert_eq!(port, 0);
    /// ```
    fn attempt(self) -> Attempt<T, E>
    where
        T: Default;

    /// Wraps the result in an [`Attempt`] whose error path carries `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::TcpStream;
    ///
    /// use errless::traits::AttemptExt;
    /// use errless::{boundary, contains, empty_handler, WrappedResult};
    ///
    /// enum Link {
    ///     Online(TcpStream),
    ///     Offline,
    /// }
    ///
    /// fn link(addr: &str) -> WrappedResult<Link, std::io::Error> {
    ///     boundary::handle(empty_handler, || {
    ///         let link = TcpStream::connect(addr)
    ///             .map(Link::Online)
    ///             .attempt_or(Link::Offline)
    ///             .when(contains("refused"))
    ///             .check()?;
    ///         Ok(link)
    ///     })
    /// }
    ///
    /// assert!(matches!(link("not an address").unwrap(), Link::Offline));
    /// ```
    fn attempt_or(self, default: T) -> Attempt<T, E>;

    /// Wraps the result in an [`Attempt`] over `Option<T>`: `Some` on success,
    /// `None` on the error path. No `Default` bound on `T`.
    fn attempt_optional(self) -> Attempt<Option<T>, E>;

    /// Lifts the error into a [`WrappedError`](crate::WrappedError) carrying a
    /// message layer. `Ok` passes through.
    fn or_message(self, text: impl Into<Cow<'static, str>>) -> WrappedResult<T, E>;
}

impl<T, E> AttemptExt<T, E> for Result<T, E> {
    #[inline]
    fn attempt(self) -> Attempt<T, E>
    where
        T: Default,
    {
        Attempt::from_result(self)
    }

    #[inline]
    fn attempt_or(self, default: T) -> Attempt<T, E> {
        Attempt::from_result_or(self, default)
    }

    #[inline]
    fn attempt_optional(self) -> Attempt<Option<T>, E> {
        Attempt::from_result_optional(self)
    }

    #[inline]
    fn or_message(self, text: impl Into<Cow<'static, str>>) -> WrappedResult<T, E> {
        self.map_err(|e| crate::WrappedError::new(e).with_message(text))
    }
}

/// Extension trait for results that already carry a [`WrappedError`](crate::WrappedError).
pub trait WrappedResultExt<T, E> {
    /// Pushes a message layer onto the error, if any.
    fn and_message(self, text: impl Into<Cow<'static, str>>) -> Self;

    /// Pushes a wrap layer onto the error, if any.
    fn and_wrap(self, text: impl Into<Cow<'static, str>>) -> Self;
}

impl<T, E> WrappedResultExt<T, E> for WrappedResult<T, E> {
    #[inline]
    fn and_message(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|e| e.with_message(text))
    }

    #[inline]
    fn and_wrap(self, text: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|e| e.with_wrap(text))
    }
}
