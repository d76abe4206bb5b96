//! Tokio-specific async extensions.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! errless = { version = "0.3", features = ["async-tokio"] }
//! ```

use core::future::Future;

use tokio::task::JoinHandle;

use crate::types::{WrappedError, WrappedResult};

use super::handle_future::HandleFuture;

/// Spawns `future` on the current Tokio runtime with its own boundary.
///
/// Aborts raised inside the task, on either channel, end up in the task's
/// output as `Err(on_error(error))` instead of failing the join.
///
/// # Example
///
/// ```rust
/// use errless::async_ext::spawn_handled;
/// use errless::unwind::OrAbort;
/// use errless::{try1, WrappedError};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let handle = spawn_handled(
///     async {
///         let v = try1(0u8, Some("worker failed")).check().or_abort();
///         Ok::<_, WrappedError<&str>>(v)
///     },
///     |err| err.with_wrap("task 3"),
/// );
///
/// let err = handle.await.unwrap().unwrap_err();
/// assert_eq!(err.to_string(), "task 3 - error: worker failed");
/// # }
/// ```
pub fn spawn_handled<Fut, H, T, E>(future: Fut, on_error: H) -> JoinHandle<WrappedResult<T, E>>
where
    Fut: Future<Output = WrappedResult<T, E>> + Send + 'static,
    H: FnOnce(WrappedError<E>) -> WrappedError<E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    tokio::spawn(HandleFuture::new(future, on_error))
}
