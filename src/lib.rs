//! Parsing for EML, the Exercise Markup Language.
//!
//! EML is a compact notation for strength-training sessions: a `{…}` header
//! followed by work tokens (single exercises, supersets, and circuits).
//!
//! ```text
//! {"version":"1.0","weight":"lbs"}"squat":5x5@120;"plank":3x60T;
//! ```
//!
//! The parser is a single-pass recursive descent recognizer over the input
//! bytes. It produces a [`Session`] tree, fails fast on the first error, and
//! never panics on malformed input. The AST's `Display` impls emit canonical
//! EML, so parsing the output of `Display` reproduces the same tree, and
//! [`formatter`] renders a session as English for human readers.
//!
//! ## Examples
//!
//! ```
//! use eml::ast::{Object, Work};
//! use eml::parse;
//!
//! let session = parse(r#"{"version":"1.0","weight":"lbs"}"squat":5x5@120;"#).unwrap();
//! assert_eq!(session.version.as_deref(), Some("1.0"));
//!
//! let Object::Single(single) = &session.objects[0] else { panic!() };
//! assert_eq!(single.name, "squat");
//!
//! let Work::Standard(standard) = &single.work else { panic!() };
//! assert_eq!(standard.sets, 5);
//! ```

pub mod ast;
pub mod cli;
pub mod formatter;
pub mod parser;

pub use ast::Session;
pub use parser::{parse, ParseError};
