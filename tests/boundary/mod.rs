use std::num::ParseIntError;

use errless::{
    boundary, contains, empty_handler, message, try1, try2, try_result, WrappedError, WrappedResult,
};

fn parse(raw: &str) -> WrappedResult<i64, ParseIntError> {
    let value = try_result(raw.parse::<i64>()).err(message(format!("parsing {raw:?}")))?;
    Ok(value)
}

fn total(a: &str, b: &str) -> WrappedResult<i64, ParseIntError> {
    let (x, y) = (parse(a)?, parse(b)?);
    Ok(x + y)
}

fn sum(a: &str, b: &str) -> WrappedResult<i64, ParseIntError> {
    boundary::handle(|err| err.with_message("sum"), || total(a, b))
}

#[test]
fn normal_return_is_untouched() {
    assert_eq!(sum("40", "2").unwrap(), 42);
}

#[test]
fn intermediate_frames_are_skipped() {
    let err = sum("40", "2x").unwrap_err();
    assert_eq!(err.to_string(), "sum - error: parsing \"2x\" - error: invalid digit found in string");
}

#[test]
fn handle_into_writes_the_slot() {
    let mut slot = None;
    let value = boundary::handle_into(Some(&mut slot), Some, || try1(3, Some("x")).check());

    assert_eq!(value, None);
    assert_eq!(slot, Some(WrappedError::new("x")));
}

#[test]
fn handle_into_leaves_slot_alone_on_success() {
    let mut slot = Some(WrappedError::new("stale"));
    let value = boundary::handle_into(Some(&mut slot), Some, || try1(3, None).check());

    assert_eq!(value, Some(3));
    assert_eq!(slot, Some(WrappedError::new("stale")));
}

#[test]
fn handle_into_callback_can_clear_the_error() {
    let mut slot = Some(WrappedError::new("stale"));
    let value = boundary::handle_into(Some(&mut slot), |_| None, || try1(3, Some("x")).check());

    assert_eq!(value, None);
    assert_eq!(slot, None);
}

#[test]
fn handle_into_without_slot_still_runs_callback() {
    let mut seen = None;
    let value = boundary::handle_into(
        None,
        |err: WrappedError<&str>| {
            seen = Some(err.to_string());
            Some(err)
        },
        || try1(3, Some("x")).err_message("ctx"),
    );

    assert_eq!(value, None);
    assert_eq!(seen.as_deref(), Some("ctx - error: x"));
}

#[test]
fn catch_reports_through_callback() {
    let files = ["a.txt", "b.txt", "c.txt"];
    let mut failures = Vec::new();

    let sizes: Vec<_> = files
        .iter()
        .filter_map(|name| {
            boundary::catch(
                |err| failures.push(err.to_string()),
                || {
                    let (size, _) = try2(name.len(), *name, name.starts_with('b').then_some("unreadable"))
                        .err_message(format!("reading {name}"))?;
                    Ok(size)
                },
            )
        })
        .collect();

    assert_eq!(sizes, [5, 5]);
    assert_eq!(failures, ["reading b.txt - error: unreadable"]);
}

#[test]
fn suppressed_errors_do_not_reach_the_boundary() {
    let result = boundary::handle(empty_handler, || {
        let n = try1(7, Some("cache miss")).when(contains("corrupt")).check()?;
        Ok(n * 2)
    });

    assert_eq!(result.unwrap(), 14);
}
