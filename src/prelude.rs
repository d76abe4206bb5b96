//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use errless::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Constructors**: [`try0`] .. [`try5`], [`try_result`]
//! - **Types**: [`Attempt`], [`WrappedError`], [`WrappedResult`], [`Handler`], [`Predicate`]
//! - **Predicates**: [`is`], [`is_not`], [`contains`]
//! - **Handlers**: [`message`], [`wrap`], [`empty_handler`]
//! - **Traits**: [`AttemptExt`], [`WrappedResultExt`], and `OrAbort` with `std`
//!
//! # Examples
//!
//! ```
//! use errless::prelude::*;
//!
//! fn read_port(raw: &str) -> WrappedResult<u16, std::num::ParseIntError> {
//!     boundary::handle(empty_handler, || raw.parse::<u16>().attempt().err_message("reading port"))
//! }
//!
//! assert_eq!(read_port("8080").unwrap(), 8080);
//! assert!(read_port("http").is_err());
//! ```

pub use crate::boundary;
pub use crate::handler::{empty_handler, message, wrap, Handler};
pub use crate::predicate::{caused_by, contains, is, is_not, Predicate};
pub use crate::throw::throw;
pub use crate::traits::{AttemptExt, WrappedResultExt};
pub use crate::types::{
    try0, try1, try2, try3, try4, try5, try_result, Attempt, WrappedError, WrappedResult,
};

#[cfg(feature = "std")]
pub use crate::unwind::{self, OrAbort};
