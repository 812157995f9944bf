//! Shared helpers for the integration suites.

#![allow(dead_code)]

use eml::ast::{Object, Single, Standard, StandardVaried, Work};
use eml::{parse, ParseError, Session};

/// Header used by most end-to-end inputs.
pub const HEADER: &str = r#"{"version":"1.0","weight":"lbs"}"#;

/// Parses `body` under the standard header.
pub fn parse_body(body: &str) -> Result<Session, ParseError> {
    parse(&format!("{HEADER}{body}"))
}

/// The error `body` must fail with.
pub fn parse_body_err(body: &str) -> ParseError {
    parse_body(body).expect_err("body should fail to parse")
}

/// Parses `body` and returns the one single token it must contain.
pub fn single_token(body: &str) -> Single {
    let session = parse_body(body).expect("body should parse");
    assert_eq!(session.objects.len(), 1, "expected exactly one object");
    match session.objects.into_iter().next() {
        Some(Object::Single(single)) => single,
        other => panic!("expected a single token, got {other:?}"),
    }
}

/// The standard work a single must carry.
pub fn standard_work(single: &Single) -> &Standard {
    match &single.work {
        Work::Standard(standard) => standard,
        other => panic!("expected standard work, got {other:?}"),
    }
}

/// The varied work a single must carry.
pub fn varied_work(single: &Single) -> &StandardVaried {
    match &single.work {
        Work::StandardVaried(varied) => varied,
        other => panic!("expected varied work, got {other:?}"),
    }
}
