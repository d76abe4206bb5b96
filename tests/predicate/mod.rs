use errless::{caused_by, contains, core_matches, is, is_not, message, throw, try1, Predicate, WrappedError};

#[derive(Debug, PartialEq)]
enum Fetch {
    Timeout,
    Status(u16),
}

impl std::fmt::Display for Fetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fetch::Timeout => f.write_str("timed out"),
            Fetch::Status(code) => write!(f, "status {code}"),
        }
    }
}

#[test]
fn is_sees_through_handler_layers() {
    let err = throw(Some(WrappedError::new(Fetch::Timeout)), [message("a"), message("b")]).unwrap_err();

    assert!(is(Fetch::Timeout).matches(&err));
    assert!(!is_not(Fetch::Timeout).matches(&err));
    assert!(is_not(Fetch::Status(500)).matches(&err));
}

#[test]
fn contains_searches_the_rendered_chain() {
    let err = WrappedError::new(Fetch::Status(502)).with_message("calling billing");

    assert!(contains("billing").matches(&err));
    assert!(contains("status 502").matches(&err));
    assert!(contains("billing - error: status").matches(&err));
    assert!(!contains("timed out").matches(&err));
}

#[test]
fn core_matches_inspects_the_core_only() {
    let server = core_matches(|e: &Fetch| matches!(e, Fetch::Status(code) if *code >= 500));

    assert!(server.matches(&WrappedError::new(Fetch::Status(503)).with_message("retrying")));
    assert!(!server.matches(&WrappedError::new(Fetch::Status(404))));
    assert!(!server.matches(&WrappedError::new(Fetch::Timeout)));
}

#[test]
fn combinators_compose() {
    let retryable = is(Fetch::Timeout).or(contains("status 503"));
    let quiet = !contains("billing");
    let both = retryable.clone().and(quiet);

    let timeout = WrappedError::new(Fetch::Timeout);
    let billing = WrappedError::new(Fetch::Status(503)).with_message("billing");

    assert!(retryable.matches(&timeout));
    assert!(retryable.matches(&billing));
    assert!(both.matches(&timeout));
    assert!(!both.matches(&billing));
}

#[test]
fn predicates_are_shareable_across_threads() {
    let predicate: Predicate<Fetch> = is(Fetch::Timeout);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let predicate = predicate.clone();
            std::thread::spawn(move || predicate.matches(&WrappedError::new(Fetch::Timeout)))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[derive(Debug, PartialEq)]
enum Disk {
    Full,
    ReadOnly,
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Disk::Full => f.write_str("disk full"),
            Disk::ReadOnly => f.write_str("read-only filesystem"),
        }
    }
}

impl std::error::Error for Disk {}

#[derive(Debug)]
struct Upload {
    cause: Disk,
}

impl std::fmt::Display for Upload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("upload failed")
    }
}

impl std::error::Error for Upload {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

#[test]
fn caused_by_includes_the_core_itself() {
    let err = WrappedError::new(Disk::Full);
    assert!(is(Disk::Full).matches(&err));
    assert!(caused_by::<Disk, _>(Disk::Full).matches(&err));
}

#[test]
fn caused_by_walks_the_source_chain() {
    let err = WrappedError::new(Upload { cause: Disk::Full }).with_message("syncing photos");

    assert!(caused_by(Disk::Full).matches(&err));
    assert!(!caused_by(Disk::ReadOnly).matches(&err));
}

#[test]
fn caused_by_drives_suppression() {
    let kept = try1(3, Some(Upload { cause: Disk::ReadOnly })).when(caused_by(Disk::Full)).check();
    assert_eq!(kept.unwrap(), 3);

    let failed = try1(3, Some(Upload { cause: Disk::Full })).when(caused_by(Disk::Full)).check();
    assert_eq!(failed.unwrap_err().to_string(), "upload failed");
}
