//! The header section: `{"parameter":"value",…}`.

use super::{ParseError, Parser};
use crate::ast::{HeaderEntry, Session};

/// Longest stored `version` value, in characters.
pub const MAX_VERSION_CHARS: usize = 12;

/// Longest stored `weight` unit, in characters.
pub const MAX_WEIGHT_UNIT_CHARS: usize = 3;

impl Parser<'_> {
    /// Parses the header section. Enters on `{`, leaves past `}`.
    ///
    /// Every pair lands in [`Session::headers`]; the recognized keys
    /// `version` and `weight` are additionally copied onto the session,
    /// truncated to their stored widths, later pairs overwriting earlier
    /// ones. Unknown keys are kept, not rejected.
    pub(super) fn parse_header(&mut self, session: &mut Session) -> Result<(), ParseError> {
        if self.bump() != Some(b'{') {
            return Err(ParseError::MissingHeaderOpener);
        }

        loop {
            match self.peek() {
                Some(b'}') => {
                    self.advance();
                    return Ok(());
                }
                Some(b',') => self.advance(),
                Some(b'"') => {
                    let entry = self.parse_header_pair()?;
                    recognize(session, &entry);
                    session.headers.push(entry);
                }
                Some(_) => return Err(self.unexpected()),
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }

    /// Reads one `"parameter":"value"` pair. Enters on the parameter's `"`.
    fn parse_header_pair(&mut self) -> Result<HeaderEntry, ParseError> {
        let parameter = self.read_string()?;

        match self.peek() {
            Some(b':') => self.advance(),
            Some(_) => return Err(self.unexpected()),
            None => return Err(ParseError::UnexpectedEnd),
        }

        match self.peek() {
            Some(b'"') => {}
            Some(_) => return Err(self.unexpected()),
            None => return Err(ParseError::UnexpectedEnd),
        }
        let value = self.read_string()?;

        Ok(HeaderEntry { parameter, value })
    }
}

fn recognize(session: &mut Session, entry: &HeaderEntry) {
    match entry.parameter.as_str() {
        "version" => session.version = Some(truncated(&entry.value, MAX_VERSION_CHARS)),
        "weight" => session.weight_unit = Some(truncated(&entry.value, MAX_WEIGHT_UNIT_CHARS)),
        _ => {}
    }
}

fn truncated(value: &str, limit: usize) -> String {
    value.chars().take(limit).collect()
}
