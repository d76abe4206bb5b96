//! Error carrier types.
//!
//! - [`WrappedError`]: the pending error, an original error plus the message
//!   layers handlers stacked on top of it.
//! - [`Attempt`]: the fluent wrapper around a fallible call's values and its
//!   pending error.
//!
//! # Examples
//!
//! ```
//! use errless::{message, try1};
//!
//! let err = try1(0, Some("disk full"))
//!     .err(message("saving report"))
//!     .unwrap_err();
//!
//! assert_eq!(err.to_string(), "saving report - error: disk full");
//! assert_eq!(err.core_error(), &"disk full");
//! ```
use smallvec::SmallVec;

pub(crate) mod alloc_type;
pub mod attempt;
pub mod wrapped_error;

pub use attempt::*;
pub use wrapped_error::*;

/// SmallVec-backed collection used for message layers.
///
/// Uses inline storage for one element; most errors get at most one
/// message before reaching their boundary.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Result alias whose error side is a [`WrappedError`].
///
/// This is the return type of every finalizer and of the Result-channel
/// boundaries.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The core error type
pub type WrappedResult<T, E> = Result<T, WrappedError<E>>;

/// Boxed [`WrappedError`] for reduced stack size.
pub type BoxedWrappedError<E> = alloc_type::Box<WrappedError<E>>;

/// Result alias with a boxed [`WrappedError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The core error type
pub type BoxedWrappedResult<T, E> = Result<T, BoxedWrappedError<E>>;
