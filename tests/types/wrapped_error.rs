use std::error::Error;

use errless::{is, Layer, LayerKind, WrappedError, LAYER_SEPARATOR};

#[test]
fn display_renders_most_recent_layer_first() {
    let err = WrappedError::new("eof").with_message("reading header").with_wrap("loading archive");

    assert_eq!(err.to_string(), "loading archive - error: reading header - error: eof");
    assert_eq!(LAYER_SEPARATOR, " - error: ");
}

#[test]
fn alternate_display_lists_messages() {
    let err = WrappedError::new("eof").with_message("reading header").with_message("loading archive");

    assert_eq!(
        format!("{err:#}"),
        "Error: eof\nMessages:\n  - loading archive\n  - reading header"
    );
    assert_eq!(format!("{:#}", WrappedError::new("eof")), "Error: eof");
}

#[test]
fn layers_keep_insertion_order() {
    let err = WrappedError::new(1u8).with_message("a").with_wrap("b");

    let kinds: Vec<_> = err.layers().iter().map(Layer::kind).collect();
    assert_eq!(kinds, [LayerKind::Message, LayerKind::Wrap]);

    let newest_first: Vec<_> = err.layers_iter().map(Layer::text).collect();
    assert_eq!(newest_first, ["b", "a"]);
}

#[test]
fn source_is_the_core_error() {
    let parse = "x".parse::<i32>().unwrap_err();
    let err = WrappedError::new(parse.clone()).with_message("parsing");

    let source = err.source().expect("core error exposed as source");
    assert_eq!(source.to_string(), parse.to_string());
}

#[test]
fn layers_do_not_hide_the_core() {
    let err = WrappedError::new(503u16).with_message("fetch").with_wrap("sync");
    assert!(is(503u16).matches(&err));
    assert_eq!(err.into_core(), 503);
}

#[test]
fn map_core_preserves_layers() {
    let err = WrappedError::new(7u8).with_message("job").map_core(|code| format!("exit {code}"));

    assert_eq!(err.core_error(), "exit 7");
    assert_eq!(err.to_string(), "job - error: exit 7");
}

#[test]
fn new_error_has_no_layers() {
    let err = WrappedError::new("plain");
    assert!(err.layers().is_empty());
    assert_eq!(format!("{err}"), format!("{:#}", err).trim_start_matches("Error: "));
}

#[test]
fn boxed_result_alias_keeps_the_error() {
    fn load() -> errless::BoxedWrappedResult<u8, &'static str> {
        errless::try1(0, Some("gone")).err_message("loading").map_err(Box::new)
    }

    let err = load().unwrap_err();
    assert_eq!(err.to_string(), "loading - error: gone");
    assert!(is("gone").matches(&err));
}
