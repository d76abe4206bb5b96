//! Extension traits.
//!
//! - [`AttemptExt`]: turns a plain `Result` into an [`Attempt`](crate::Attempt)
//!   or a [`WrappedResult`](crate::WrappedResult).
//! - [`WrappedResultExt`]: adds layers to results that already carry a
//!   [`WrappedError`](crate::WrappedError).
//! - [`OrAbort`](crate::unwind::OrAbort) lives in [`crate::unwind`] because it
//!   needs the `std` feature.

pub mod result_ext;

pub use result_ext::{AttemptExt, WrappedResultExt};
