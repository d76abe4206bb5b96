//! Error-matching predicates used by [`Attempt::when`](crate::Attempt::when).
//!
//! A [`Predicate`] is a pure `&WrappedError<E> -> bool` function. Predicates
//! are reference counted, so cloning one is cheap, and they are `Send + Sync`,
//! so a single value can be shared by every call site and thread.
//!
//! # Examples
//!
//! ```
//! use errless::{contains, is, try1, WrappedError};
//!
//! #[derive(Debug, PartialEq)]
//! enum DbError { NotFound, Timeout(String) }
//!
//! // A missing row is not a failure here: keep the default value.
//! let rows = try1(Vec::<u32>::new(), Some(DbError::NotFound))
//!     .when(!is(DbError::NotFound))
//!     .check();
//! assert_eq!(rows.unwrap(), Vec::<u32>::new());
//!
//! let timeout = contains::<&str>("timeout");
//! assert!(timeout.matches(&WrappedError::new("read timeout")));
//! ```

use core::error::Error;
use core::fmt::{self, Display};
use core::ops::Not;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

use crate::types::alloc_type::{Arc, Cow};
use crate::types::WrappedError;

type PredicateFn<E> = dyn Fn(&WrappedError<E>) -> bool + Send + Sync;

/// A reusable, shareable error classifier.
pub struct Predicate<E> {
    inner: Arc<PredicateFn<E>>,
}

impl<E> Predicate<E> {
    /// Builds a predicate from a closure over the whole wrapped error.
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&WrappedError<E>) -> bool + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Evaluates the predicate against `error`.
    #[inline]
    pub fn matches(&self, error: &WrappedError<E>) -> bool {
        (self.inner)(error)
    }
}

impl<E: 'static> Predicate<E> {
    /// Both predicates must match. `other` is skipped when `self` fails.
    pub fn and(self, other: Predicate<E>) -> Self {
        Self::new(move |err| self.matches(err) && other.matches(err))
    }

    /// Either predicate may match. `other` is skipped when `self` matches.
    pub fn or(self, other: Predicate<E>) -> Self {
        Self::new(move |err| self.matches(err) || other.matches(err))
    }
}

impl<E: 'static> Not for Predicate<E> {
    type Output = Predicate<E>;

    fn not(self) -> Self::Output {
        Predicate::new(move |err| !self.matches(err))
    }
}

impl<E> Clone for Predicate<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// A single predicate iterates as itself, so [`Attempt::when`](crate::Attempt::when)
/// accepts one predicate, an array of them, or a `Vec`.
impl<E> IntoIterator for Predicate<E> {
    type Item = Predicate<E>;
    type IntoIter = core::iter::Once<Predicate<E>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        core::iter::once(self)
    }
}

/// Matches when the error's core equals `target`.
///
/// Layers added by handlers are looked through, so the predicate still
/// matches after `message`/`wrap` have been applied. Only the core itself is
/// compared; errors the core reports through [`Error::source`] are not. Use
/// [`caused_by`] to search that chain.
///
/// # Examples
///
/// ```
/// use errless::{is, WrappedError};
///
/// let err = WrappedError::new(404u16).with_message("fetching profile");
/// assert!(is(404u16).matches(&err));
/// assert!(!is(500u16).matches(&err));
/// ```
pub fn is<E>(target: E) -> Predicate<E>
where
    E: PartialEq + Send + Sync + 'static,
{
    Predicate::new(move |err| err.core_error() == &target)
}

/// Negation of [`is`].
pub fn is_not<E>(target: E) -> Predicate<E>
where
    E: PartialEq + Send + Sync + 'static,
{
    !is(target)
}

/// Matches when the rendered error, layers included, contains `substring`.
///
/// # Examples
///
/// ```
/// use errless::{contains, WrappedError};
///
/// let err = WrappedError::new("permission denied").with_message("opening /etc/shadow");
/// assert!(contains("denied").matches(&err));
/// assert!(contains("/etc/shadow").matches(&err));
/// assert!(!contains("not found").matches(&err));
/// ```
pub fn contains<E>(substring: impl Into<Cow<'static, str>>) -> Predicate<E>
where
    E: Display + 'static,
{
    let substring = substring.into();
    Predicate::new(move |err| err.to_string().contains(substring.as_ref()))
}

/// Matches when the core, or any error in its [`Error::source`] chain, is a
/// `C` equal to `target`.
///
/// # Examples
///
/// ```
/// use std::fmt;
///
/// use errless::{caused_by, WrappedError};
///
/// #[derive(Debug, PartialEq)]
/// struct Refused;
///
/// impl fmt::Display for Refused {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("connection refused")
///     }
/// }
///
/// impl std::error::Error for Refused {}
///
/// #[derive(Debug)]
/// struct SyncFailed(Refused);
///
/// impl fmt::Display for SyncFailed {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("sync failed")
///     }
/// }
///
/// impl std::error::Error for SyncFailed {
///     fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
///         Some(&self.0)
///     }
/// }
///
/// let err = WrappedError::new(SyncFailed(Refused)).with_message("nightly job");
/// assert!(caused_by(Refused).matches(&err));
/// ```
pub fn caused_by<E, C>(target: C) -> Predicate<E>
where
    E: Error + 'static,
    C: Error + PartialEq + Send + Sync + 'static,
{
    Predicate::new(move |err| {
        let mut current: Option<&(dyn Error + 'static)> = Some(err.core_error());
        while let Some(cause) = current {
            if cause.downcast_ref::<C>() == Some(&target) {
                return true;
            }
            current = cause.source();
        }
        false
    })
}

/// Matches when `f` accepts the core error.
///
/// # Examples
///
/// ```
/// use errless::{core_matches, WrappedError};
///
/// let server_error = core_matches(|code: &u16| *code >= 500);
/// assert!(server_error.matches(&WrappedError::new(503)));
/// assert!(!server_error.matches(&WrappedError::new(404)));
/// ```
pub fn core_matches<E, F>(f: F) -> Predicate<E>
where
    E: 'static,
    F: Fn(&E) -> bool + Send + Sync + 'static,
{
    Predicate::new(move |err| f(err.core_error()))
}
