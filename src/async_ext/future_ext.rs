//! Extension trait for `Future<Output = WrappedResult<T, E>>`.
//!
//! Provides `.handle_with()` for futures, mirroring
//! [`boundary::handle`](crate::boundary::handle).

use core::future::Future;

use crate::types::{WrappedError, WrappedResult};

use super::handle_future::HandleFuture;

/// Extension trait installing a boundary around a future.
///
/// # Examples
///
/// ```rust
/// use errless::async_ext::FutureHandleExt;
/// use errless::{empty_handler, try1, WrappedResult};
///
/// async fn fetch(id: u32) -> WrappedResult<String, &'static str> {
///     let raw = try1(String::new(), (id == 0).then_some("bad id")).err_message("fetching")?;
///     Ok(raw)
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let err = fetch(0).handle_with(empty_handler).await.unwrap_err();
/// assert_eq!(err.to_string(), "fetching - error: bad id");
/// # }
/// ```
pub trait FutureHandleExt<T, E>: Future<Output = WrappedResult<T, E>> + Sized {
    /// Finalizes aborts of this future through `on_error`.
    #[inline]
    fn handle_with<H>(self, on_error: H) -> HandleFuture<Self, H>
    where
        H: FnOnce(WrappedError<E>) -> WrappedError<E>,
    {
        HandleFuture::new(self, on_error)
    }
}

impl<F, T, E> FutureHandleExt<T, E> for F where F: Future<Output = WrappedResult<T, E>> {}
