//! Recursive descent parser for EML programs.
//!
//! The parser walks the input bytes left to right, dispatching on the
//! character under the cursor, and never rewinds. A [`Parser`] value holds
//! all of the state for one parse, so concurrent calls to [`parse`] are
//! independent.
//!
//! The pieces, leaves first: a fixed-point number accumulator, a bounded
//! string reader, the header parser, the single-token state machine, the
//! group parser for `super`/`circuit`, and the top-level driver in this
//! module.

mod errors;
mod group;
mod header;
mod number;
mod single;

pub use errors::ParseError;

use crate::ast::{Object, Session};

/// Longest string the reader accepts, in bytes.
pub const MAX_STRING_LENGTH: usize = 128;

/// Parses a complete EML program into a [`Session`].
///
/// The input is consumed in one pass; the first error aborts the parse and
/// nothing of the partial result is returned.
///
/// # Examples
///
/// ```
/// let session = eml::parse(r#"{"weight":"kg"}"press":3x5@60;"#).unwrap();
/// assert_eq!(session.weight_unit.as_deref(), Some("kg"));
/// assert_eq!(session.objects.len(), 1);
/// ```
pub fn parse(input: &str) -> Result<Session, ParseError> {
    Parser::new(input).run()
}

/// Cursor state for one parse.
pub(crate) struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            position: 0,
        }
    }

    /// The top-level driver: a header section, then work tokens until the
    /// input runs out. `;` separates tokens and is skipped here; the header
    /// is only legal before any content.
    fn run(mut self) -> Result<Session, ParseError> {
        let mut session = Session::default();
        let mut header_seen = false;

        while let Some(current) = self.peek() {
            match current {
                b'{' => {
                    if header_seen || !session.objects.is_empty() {
                        return Err(self.unexpected());
                    }
                    self.parse_header(&mut session)?;
                    header_seen = true;
                }
                b's' | b'c' => {
                    let group = self.parse_group()?;
                    session.objects.push(Object::Group(group));
                }
                b'"' => {
                    let single = self.parse_single()?;
                    session.objects.push(Object::Single(single));
                }
                b';' => self.advance(),
                _ => return Err(self.unexpected()),
            }
        }

        Ok(session)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let current = self.peek();
        if current.is_some() {
            self.position += 1;
        }
        current
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// An unexpected-character error for the character under the cursor.
    fn unexpected(&self) -> ParseError {
        let found = self.text[self.position..]
            .chars()
            .next()
            .unwrap_or('\u{FFFD}');
        ParseError::UnexpectedCharacter {
            found,
            position: self.position,
        }
    }

    /// Reads a quoted string. Enters on the opening `"`, leaves past the
    /// closing one. Strings must be non-empty and within
    /// [`MAX_STRING_LENGTH`] bytes.
    fn read_string(&mut self) -> Result<String, ParseError> {
        self.advance(); // opening quote
        let start = self.position;

        loop {
            match self.peek() {
                Some(b'"') => {
                    let text = &self.text[start..self.position];
                    self.advance();
                    if text.is_empty() {
                        return Err(ParseError::EmptyString);
                    }
                    return Ok(text.to_owned());
                }
                Some(_) => {
                    if self.position - start >= MAX_STRING_LENGTH {
                        return Err(ParseError::StringTooLong);
                    }
                    self.advance();
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }
}
