use errless::{LayerKind, WrappedError};

#[test]
fn wrapped_error_serializes_core_and_layers() {
    let err = WrappedError::new(String::from("disk full")).with_message("writing wal").with_wrap("commit");

    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["core_error"], "disk full");
    assert_eq!(json["layers"][0]["kind"], "Message");
    assert_eq!(json["layers"][0]["text"], "writing wal");
    assert_eq!(json["layers"][1]["kind"], "Wrap");
}

#[test]
fn wrapped_error_deserializes_back() {
    let err = WrappedError::new(404u16).with_message("fetching avatar");

    let json = serde_json::to_string(&err).unwrap();
    let decoded: WrappedError<u16> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, err);
    assert_eq!(decoded.layers()[0].kind(), LayerKind::Message);
    assert_eq!(decoded.to_string(), "fetching avatar - error: 404");
}
