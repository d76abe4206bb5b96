use crate::handler::{message, wrap, Handler};
use crate::predicate::{is, is_not, Predicate};
use crate::throw::throw;
use crate::types::alloc_type::Cow;
use crate::types::{WrappedError, WrappedResult};

/// Captures the outputs of a fallible call and decides what to do with its error.
///
/// An `Attempt` carries the call's values (`()`, a single value, or a tuple),
/// its pending error, and a one-shot *suppression* flag. Conditions attached
/// with [`when`](Self::when) decide whether the next finalizer handles the
/// error; finalizers ([`err`](Self::err), [`fallback`](Self::fallback), ...)
/// consume the attempt and either hand the values back or abort with `Err`.
///
/// # Type Parameters
///
/// * `T` - The carried values
/// * `E` - The core error type
///
/// # Examples
///
/// ```
/// use errless::{contains, message, try2, try_result, WrappedResult};
///
/// fn port(raw: &str) -> WrappedResult<u16, std::num::ParseIntError> {
///     let (host, port) = try2("localhost", raw, None::<std::num::ParseIntError>).check()?;
///     let parsed = try_result(port.parse::<u16>())
///         .when(contains("invalid digit"))
///         .err(message(format!("parsing port for {host}")))?;
///     Ok(parsed)
/// }
///
/// assert_eq!(port("8080").unwrap(), 8080);
/// assert!(port("x").is_err());
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Attempt<T, E> {
    values: T,
    pending: Option<WrappedError<E>>,
    suppressed: bool,
}

/// Captures a call that produces no value besides its error.
///
/// # Examples
///
/// ```
/// use errless::{contains, try0};
///
/// // "x" does not contain "y": the error is dropped at this site.
/// assert!(try0(Some("x")).when(contains("y")).check().is_ok());
/// ```
#[inline]
pub fn try0<E>(error: Option<E>) -> Attempt<(), E> {
    Attempt::new((), error)
}

/// Captures one value and its error.
///
/// # Examples
///
/// ```
/// use errless::try1;
///
/// assert_eq!(try1(4, None::<&str>).check().unwrap(), 4);
/// assert_eq!(try1(0, Some("boom")).check().unwrap_err().to_string(), "boom");
/// ```
#[inline]
pub fn try1<A, E>(a: A, error: Option<E>) -> Attempt<A, E> {
    Attempt::new(a, error)
}

/// Captures a `Result` in one step.
///
/// The value and the error travel together, so the success value is never
/// lost. On `Err` the carried value is `T::default()`. For value types
/// without a `Default`, see [`Attempt::from_result_or`] and
/// [`Attempt::from_result_optional`].
///
/// # Examples
///
/// ```
/// use errless::{boundary, empty_handler, try_result, WrappedResult};
///
/// fn sum(a: &str, b: &str) -> WrappedResult<i32, std::num::ParseIntError> {
///     boundary::handle(empty_handler, || {
///         let x = try_result(a.parse::<i32>()).check()?;
///         let y = try_result(b.parse::<i32>()).check()?;
///         Ok(x + y)
///     })
/// }
///
/// assert_eq!(sum("10", "20").unwrap(), 30);
/// assert!(sum("10", "2o").is_err());
/// ```
#[inline]
pub fn try_result<T: Default, E>(result: Result<T, E>) -> Attempt<T, E> {
    Attempt::from_result(result)
}

/// Captures two values and their error.
#[inline]
pub fn try2<A, B, E>(a: A, b: B, error: Option<E>) -> Attempt<(A, B), E> {
    Attempt::new((a, b), error)
}

/// Captures three values and their error.
#[inline]
pub fn try3<A, B, C, E>(a: A, b: B, c: C, error: Option<E>) -> Attempt<(A, B, C), E> {
    Attempt::new((a, b, c), error)
}

/// Captures four values and their error.
#[inline]
pub fn try4<A, B, C, D, E>(a: A, b: B, c: C, d: D, error: Option<E>) -> Attempt<(A, B, C, D), E> {
    Attempt::new((a, b, c, d), error)
}

/// Captures five values and their error.
#[inline]
pub fn try5<A, B, C, D, F, E>(
    a: A,
    b: B,
    c: C,
    d: D,
    f: F,
    error: Option<E>,
) -> Attempt<(A, B, C, D, F), E> {
    Attempt::new((a, b, c, d, f), error)
}

impl<T, E> Attempt<T, E> {
    /// Creates an attempt from the carried values and an optional error.
    #[inline]
    pub fn new(values: T, error: Option<E>) -> Self {
        Self::from_pending(values, error.map(WrappedError::new))
    }

    /// Creates an attempt whose error already carries layers.
    #[inline]
    pub fn from_pending(values: T, pending: Option<WrappedError<E>>) -> Self {
        Self { values, pending, suppressed: false }
    }

    /// Creates an attempt from a `Result`.
    ///
    /// On `Err` the carried values are `T::default()`, so a suppressed or
    /// resolved error hands back default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use errless::{is, Attempt};
    ///
    /// let count = Attempt::from_result("7".parse::<u32>()).check().unwrap();
    /// assert_eq!(count, 7);
    ///
    /// let fallback = Attempt::from_result(Err::<u32, _>("missing"))
    ///     .when(!is("missing"))
    ///     .check()
    ///     .unwrap();
    /// assert_eq!(fallback, 0);
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self
    where
        T: Default,
    {
        match result {
            Ok(values) => Self::new(values, None),
            Err(error) => Self::new(T::default(), Some(error)),
        }
    }

    /// Creates an attempt from a `Result`, carrying `default` on `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use errless::{is, Attempt};
    ///
    /// struct Conn(&'static str);
    ///
    /// let conn = Attempt::from_result_or(Err("refused"), Conn("offline"))
    ///     .when(!is("refused"))
    ///     .check()
    ///     .unwrap();
    /// assert_eq!(conn.0, "offline");
    /// ```
    #[inline]
    pub fn from_result_or(result: Result<T, E>, default: T) -> Self {
        match result {
            Ok(values) => Self::new(values, None),
            Err(error) => Self::new(default, Some(error)),
        }
    }

    /// The carried values.
    #[inline]
    pub fn values(&self) -> &T {
        &self.values
    }

    /// The pending error, if any.
    #[inline]
    pub fn pending(&self) -> Option<&WrappedError<E>> {
        self.pending.as_ref()
    }

    /// Whether the next finalizer will skip error handling.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Splits the attempt into its values and pending error, discarding the
    /// suppression state.
    #[inline]
    pub fn into_parts(self) -> (T, Option<WrappedError<E>>) {
        (self.values, self.pending)
    }

    /// Transforms the carried values, keeping the error and suppression state.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Attempt<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Attempt { values: f(self.values), pending: self.pending, suppressed: self.suppressed }
    }

    /// Transforms the pending error's core type, keeping its layers.
    #[inline]
    pub fn map_core<G, F>(self, f: F) -> Attempt<T, G>
    where
        F: FnOnce(E) -> G,
    {
        Attempt {
            values: self.values,
            pending: self.pending.map(|err| err.map_core(f)),
            suppressed: self.suppressed,
        }
    }

    /// Makes the next finalizer conditional on the pending error.
    ///
    /// When no predicate matches, the next finalizer skips error handling.
    /// Successive calls combine: the error stays handled only while every
    /// call has matched at least one of its predicates. Without a pending
    /// error the state is left as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use errless::{contains, try1};
    ///
    /// let attempt = try1(1, Some("disk quota exceeded"))
    ///     .when([contains("quota"), contains("full")])
    ///     .when(contains("disk"));
    /// assert!(!attempt.is_suppressed());
    ///
    /// let skipped = try1(1, Some("disk quota exceeded"))
    ///     .when(contains("network"))
    ///     .when(contains("disk"));
    /// assert!(skipped.is_suppressed());
    /// ```
    pub fn when<I>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<E>>,
    {
        let was_allowed = !self.suppressed;
        self.suppressed = match &self.pending {
            None => !was_allowed,
            Some(err) => !(was_allowed && predicates.into_iter().any(|p| p.matches(err))),
        };
        self
    }

    /// `when(is(target))`.
    #[inline]
    pub fn if_is(self, target: E) -> Self
    where
        E: PartialEq + Send + Sync + 'static,
    {
        self.when(is(target))
    }

    /// `when(is_not(target))`.
    #[inline]
    pub fn if_not(self, target: E) -> Self
    where
        E: PartialEq + Send + Sync + 'static,
    {
        self.when(is_not(target))
    }

    /// Finalizes the attempt, running `handlers` over the pending error.
    ///
    /// - Suppressed: returns the values; the error is dropped at this site.
    /// - Otherwise: runs [`throw`](fn@crate::throw). An error surviving the
    ///   chain is returned as `Err`; otherwise the values are returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use errless::{message, try2};
    ///
    /// let (user, age) = try2("ann", 31, None::<&str>).err(message("loading user")).unwrap();
    /// assert_eq!((user, age), ("ann", 31));
    ///
    /// let err = try2("", 0, Some("no rows")).err(message("loading user")).unwrap_err();
    /// assert_eq!(err.to_string(), "loading user - error: no rows");
    /// ```
    pub fn err<I>(self, handlers: I) -> WrappedResult<T, E>
    where
        I: IntoIterator<Item = Handler<E>>,
    {
        if self.suppressed {
            return Ok(self.values);
        }
        throw(self.pending, handlers)?;
        Ok(self.values)
    }

    /// Alias for [`err`](Self::err).
    #[inline]
    pub fn with<I>(self, handlers: I) -> WrappedResult<T, E>
    where
        I: IntoIterator<Item = Handler<E>>,
    {
        self.err(handlers)
    }

    /// Short alias for [`err`](Self::err).
    #[inline]
    pub fn e<I>(self, handlers: I) -> WrappedResult<T, E>
    where
        I: IntoIterator<Item = Handler<E>>,
    {
        self.err(handlers)
    }

    /// [`err`](Self::err) without handlers.
    #[inline]
    pub fn check(self) -> WrappedResult<T, E> {
        self.err(core::iter::empty())
    }

    /// `err(message(text))`.
    #[inline]
    pub fn err_message(self, text: impl Into<Cow<'static, str>>) -> WrappedResult<T, E>
    where
        E: 'static,
    {
        self.err(message(text))
    }

    /// `err(wrap(text))`.
    #[inline]
    pub fn err_wrap(self, text: impl Into<Cow<'static, str>>) -> WrappedResult<T, E>
    where
        E: 'static,
    {
        self.err(wrap(text))
    }

    /// Replaces the values using the pending error instead of aborting.
    ///
    /// - Suppressed: aborts with the pending error, no handler involved.
    ///   Note the asymmetry with [`err`](Self::err), which drops the error
    ///   when suppressed.
    /// - Otherwise: returns `handler(error)` when an error is pending and the
    ///   carried values when none is; never aborts.
    ///
    /// # Examples
    ///
    /// ```
    /// use errless::{contains, try1};
    ///
    /// let n = try1(0, Some("empty input")).fallback(|_| 10).unwrap();
    /// assert_eq!(n, 10);
    ///
    /// // The condition does not match, so the fallback is not allowed to run.
    /// let err = try1(0, Some("empty input"))
    ///     .when(contains("timeout"))
    ///     .fallback(|_| 10)
    ///     .unwrap_err();
    /// assert_eq!(err.to_string(), "empty input");
    /// ```
    pub fn fallback<F>(self, handler: F) -> WrappedResult<T, E>
    where
        F: FnOnce(WrappedError<E>) -> T,
    {
        if self.suppressed {
            throw(self.pending, core::iter::empty())?;
            return Ok(self.values);
        }
        match self.pending {
            Some(err) => Ok(handler(err)),
            None => Ok(self.values),
        }
    }
}

impl<T, E> Attempt<Option<T>, E> {
    /// Creates an attempt from a `Result` whose value type has no default.
    ///
    /// The value is carried as `Some` on `Ok` and `None` on `Err`.
    #[inline]
    pub fn from_result_optional(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::new(Some(value), None),
            Err(error) => Self::new(None, Some(error)),
        }
    }
}

impl<T: Default, E> From<Result<T, E>> for Attempt<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}
