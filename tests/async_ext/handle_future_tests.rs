use std::panic::{self, AssertUnwindSafe};

use errless::async_ext::{handle_async, FutureHandleExt};
use errless::unwind::OrAbort;
use errless::{empty_handler, try1, WrappedError, WrappedResult};

async fn lookup(key: &'static str) -> WrappedResult<u32, &'static str> {
    let value = try1(7, (key != "known").then_some("no such key")).err_message(key)?;
    Ok(value)
}

async fn lookup_or_abort(key: &'static str) -> u32 {
    try1(7, (key != "known").then_some("no such key")).check().or_abort()
}

#[tokio::test]
async fn ok_output_passes_through() {
    let value = handle_async(lookup("known"), |err| err.with_message("unused")).await;
    assert_eq!(value.unwrap(), 7);
}

#[tokio::test]
async fn err_output_goes_through_callback() {
    let err = handle_async(lookup("ghost"), |err| err.with_message("cache")).await.unwrap_err();
    assert_eq!(err.to_string(), "cache - error: ghost - error: no such key");
}

#[tokio::test]
async fn unwinding_abort_inside_poll_is_intercepted() {
    let err = handle_async(
        async {
            let v = lookup_or_abort("ghost").await;
            Ok::<_, WrappedError<&str>>(v)
        },
        |err| err.with_wrap("resolver"),
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "resolver - error: no such key");
}

#[tokio::test]
async fn handle_with_extension() {
    let err = lookup("ghost").handle_with(empty_handler).await.unwrap_err();
    assert_eq!(err.core_error(), &"no such key");
}

#[test]
fn foreign_panic_escapes_the_future_boundary() {
    let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        runtime.block_on(handle_async(
            async {
                if true {
                    panic::panic_any(7u8);
                }
                Ok::<(), WrappedError<&str>>(())
            },
            empty_handler,
        ))
    }));

    assert_eq!(outcome.unwrap_err().downcast_ref::<u8>(), Some(&7));
}
