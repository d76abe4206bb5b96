//! Call-site error propagation.
//!
//! `errless` lets a function short-circuit on a failed call without an
//! explicit check after every fallible step, and still report the error
//! through its normal return value.
//!
//! The pieces, leaf to root:
//!
//! - [`Predicate`]s ([`is`], [`is_not`], [`contains`]) classify an error.
//! - [`Handler`]s ([`message`], [`wrap`]) transform it, or resolve it by
//!   returning `None`.
//! - [`throw`] runs a handler chain and aborts if an error is left.
//! - [`Attempt`] (built with [`try0`] .. [`try5`] or [`try_result`]) carries a call's values and
//!   error through a fluent chain before the abort decision.
//! - [`boundary`] finalizes aborts into the function's error return.
//!
//! Aborts travel as `Err` through `?` by default. The [`unwind`] module
//! (`std` feature) provides the same flow as a true non-local exit.
//!
//! # Examples
//!
//! ## Short-circuiting with context
//!
//! ```
//! use errless::{boundary, empty_handler, try_result, WrappedResult};
//!
//! fn sum_with_message(a: &str, b: &str) -> WrappedResult<i32, std::num::ParseIntError> {
//!     boundary::handle(empty_handler, || {
//!         let x = try_result(a.parse::<i32>()).err_message("cannot convert to int")?;
//!         let y = try_result(b.parse::<i32>()).err_message("cannot convert to int")?;
//!         Ok(x + y)
//!     })
//! }
//!
//! assert_eq!(sum_with_message("10", "20").unwrap(), 30);
//! let err = sum_with_message("10", "20t").unwrap_err();
//! assert!(err.to_string().starts_with("cannot convert to int - error: invalid digit"));
//! ```
//!
//! ## Conditional handling
//!
//! ```
//! use errless::{contains, message, try0};
//!
//! // The predicate does not match "x": the error is not handled at this site.
//! assert!(try0(Some("x")).when(contains("y")).check().is_ok());
//!
//! let err = try0(Some("z")).with(message("ctx")).unwrap_err();
//! assert_eq!(err.to_string(), "ctx - error: z");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

/// Result-channel recovery boundaries
pub mod boundary;
/// Error-transforming handlers
pub mod handler;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error-matching predicates
pub mod predicate;
/// The abort primitive
pub mod throw;
/// Extension traits for `Result`
pub mod traits;
/// WrappedError and Attempt
pub mod types;

/// Unwinding aborts and boundaries (requires `std` feature)
#[cfg(feature = "std")]
pub mod unwind;

/// Async boundaries (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use handler::{empty_handler, message, wrap, Handler};
pub use predicate::{caused_by, contains, core_matches, is, is_not, Predicate};
pub use throw::{check, throw};
pub use traits::*;
pub use types::{
    try0, try1, try2, try3, try4, try5, try_result, Attempt, BoxedWrappedResult, ErrorVec, Layer, LayerKind,
    WrappedError, WrappedResult, LAYER_SEPARATOR,
};

#[cfg(feature = "tracing")]
pub use handler::span_context;

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
