use std::num::ParseIntError;
use std::panic;
use std::thread;

use errless::unwind::{self, Abort, OrAbort};
use errless::{contains, empty_handler, message, try0, try1, try_result, WrappedError};

fn parse_all(inputs: &[&str]) -> Vec<i32> {
    inputs
        .iter()
        .map(|raw| try_result(raw.parse::<i32>()).err(message(format!("item {raw}"))).or_abort())
        .collect()
}

#[test]
fn empty_handler_boundary_yields_the_aborted_error() {
    let err = unwind::handle::<_, &str, _, _>(empty_handler, || try1(0, Some("boom")).check().or_abort())
        .unwrap_err();
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn abort_crosses_frames_without_results() {
    let ok = unwind::handle::<_, ParseIntError, _, _>(empty_handler, || parse_all(&["1", "2"]));
    assert_eq!(ok.unwrap(), [1, 2]);

    let err = unwind::handle::<_, ParseIntError, _, _>(|err| err.with_message("batch"), || {
        parse_all(&["1", "x", "y"])
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "batch - error: item x - error: invalid digit found in string");
}

#[test]
fn throw_with_nil_error_does_not_unwind() {
    let value = unwind::handle::<_, &str, _, _>(empty_handler, || {
        unwind::throw::<&str, _>(None, message("unused"));
        5
    });
    assert_eq!(value.unwrap(), 5);
}

#[test]
fn check_with_message_scenario() {
    let err = unwind::handle::<(), &str, _, _>(empty_handler, || {
        try0(Some("z")).with(message("ctx")).or_abort();
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "ctx - error: z");
}

#[test]
fn suppressed_error_does_not_unwind() {
    let value = unwind::handle::<_, &str, _, _>(empty_handler, || {
        try0(Some("x")).when(contains("y")).check().or_abort();
        "returned normally"
    });
    assert_eq!(value.unwrap(), "returned normally");
}

#[test]
fn handle_into_writes_slot() {
    let mut slot = None;
    let value = unwind::handle_into::<(), &str, _, _>(
        Some(&mut slot),
        |err| Some(err.with_wrap("job 9")),
        || unwind::abort::<&str>(WrappedError::new("quota")),
    );

    assert_eq!(value, None);
    assert_eq!(slot.unwrap().to_string(), "job 9 - error: quota");
}

#[test]
fn catch_sets_enclosing_state() {
    let mut report = String::new();
    let value = unwind::catch(
        |err: WrappedError<&str>| report = err.to_string(),
        || try1(1, Some("eof")).err_message("reading").or_abort(),
    );

    assert_eq!(value, None);
    assert_eq!(report, "reading - error: eof");
}

#[test]
fn foreign_panics_are_not_handled() {
    let outcome = panic::catch_unwind(|| {
        let _ = unwind::handle::<(), &str, _, _>(empty_handler, || panic::panic_any("a real bug"));
    });

    let payload = outcome.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"a real bug"));
}

#[test]
fn unhandled_abort_terminates_only_its_thread() {
    let outer = unwind::handle::<_, &str, _, _>(empty_handler, || {
        let worker = thread::spawn(|| try1(0, Some("worker failed")).check().or_abort());
        worker.join()
    });

    let joined = outer.expect("abort on another thread must not reach this boundary");
    let payload = joined.unwrap_err();
    let abort = payload.downcast::<Abort<&str>>().expect("abort payload");
    assert_eq!(abort.error().to_string(), "worker failed");
}

#[test]
fn nested_boundaries_resolve_innermost_first() {
    let outer = unwind::handle::<(), &str, _, _>(|err| err.with_message("outer"), || {
        let inner = unwind::handle::<(), &str, _, _>(|err| err.with_message("inner"), || {
            unwind::abort::<&str>(WrappedError::new("e"))
        });
        inner.or_abort()
    });

    assert_eq!(outer.unwrap_err().to_string(), "outer - error: inner - error: e");
}
