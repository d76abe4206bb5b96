//! Async boundaries.
//!
//! A boundary installed on one task never sees aborts raised on another, so
//! every task that aborts needs its own. [`HandleFuture`] is that boundary for
//! a future: it finalizes `Err` outputs through an error callback and also
//! intercepts [unwind-channel](crate::unwind) aborts raised while the inner
//! future is polled.
//!
//! # Feature Flag
//!
//! Requires the `async` feature; [`spawn_handled`] additionally requires
//! `async-tokio`.
//!
//! ```toml
//! [dependencies]
//! errless = { version = "0.3", features = ["async"] }
//! ```

mod future_ext;
mod handle_future;
#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use future_ext::FutureHandleExt;
pub use handle_future::{handle_async, HandleFuture};
#[cfg(feature = "async-tokio")]
pub use tokio_ext::spawn_handled;
