//! Future wrapper acting as a recovery boundary.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{WrappedError, WrappedResult};
use crate::unwind::recognize;

pin_project! {
    /// A future that finalizes its inner future's aborts.
    ///
    /// `Err` outputs and `Abort<E>` unwinds raised during `poll` are both
    /// passed through `on_error`. Other panics are re-raised unchanged.
    ///
    /// # Cancel Safety
    ///
    /// `HandleFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use errless::async_ext::handle_async;
    /// use errless::unwind::OrAbort;
    /// use errless::{try1, WrappedError};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let result = handle_async(
    ///     async {
    ///         let peers = try1(0, Some("no peers")).check().or_abort();
    ///         Ok::<_, WrappedError<&str>>(peers)
    ///     },
    ///     |err| err.with_message("syncing"),
    /// )
    /// .await;
    ///
    /// assert_eq!(result.unwrap_err().to_string(), "syncing - error: no peers");
    /// # }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct HandleFuture<Fut, H> {
        #[pin]
        future: Fut,
        on_error: Option<H>,
    }
}

impl<Fut, H> HandleFuture<Fut, H> {
    /// Wraps `future` with a boundary using `on_error`.
    #[inline]
    pub fn new(future: Fut, on_error: H) -> Self {
        Self { future, on_error: Some(on_error) }
    }
}

/// Installs a boundary around `future`.
///
/// Use [`empty_handler`](crate::empty_handler) when the error should only be
/// propagated.
#[inline]
pub fn handle_async<Fut, H, T, E>(future: Fut, on_error: H) -> HandleFuture<Fut, H>
where
    Fut: Future<Output = WrappedResult<T, E>>,
    H: FnOnce(WrappedError<E>) -> WrappedError<E>,
{
    HandleFuture::new(future, on_error)
}

impl<Fut, H, T, E> Future for HandleFuture<Fut, H>
where
    Fut: Future<Output = WrappedResult<T, E>>,
    H: FnOnce(WrappedError<E>) -> WrappedError<E>,
    E: Send + 'static,
{
    type Output = WrappedResult<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let future = this.future;

        let polled = match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(poll) => poll,
            Err(payload) => Poll::Ready(Err(recognize::<E>(payload))),
        };

        polled.map(|res| {
            res.map_err(|err| {
                let on_error = this
                    .on_error
                    .take()
                    .expect("HandleFuture polled after completion; this is a bug");
                on_error(err)
            })
        })
    }
}

impl<Fut, H, T, E> FusedFuture for HandleFuture<Fut, H>
where
    Fut: FusedFuture<Output = WrappedResult<T, E>>,
    H: FnOnce(WrappedError<E>) -> WrappedError<E>,
    E: Send + 'static,
{
    fn is_terminated(&self) -> bool {
        self.on_error.is_none() || self.future.is_terminated()
    }
}
