//! Groups: `super(…)` and `circuit(…)`.

use super::{ParseError, Parser};
use crate::ast::{Group, GroupKind};

impl Parser<'_> {
    /// Parses a group. Enters on the `s` or `c` of the keyword, leaves past
    /// the closing `)`.
    ///
    /// Members separate themselves with the `;` each single consumes, so
    /// between members the group only ever sees `"` or `)`.
    pub(super) fn parse_group(&mut self) -> Result<Group, ParseError> {
        let kind = match self.peek() {
            Some(b'c') => GroupKind::Circuit,
            _ => GroupKind::Super,
        };
        self.expect_keyword(kind.keyword())?;

        match self.peek() {
            Some(b'(') => self.advance(),
            Some(_) => return Err(self.unexpected()),
            None => return Err(ParseError::UnexpectedEnd),
        }

        let mut singles = Vec::new();
        loop {
            match self.peek() {
                Some(b'"') => singles.push(self.parse_single()?),
                Some(b')') => {
                    self.advance();
                    if singles.is_empty() {
                        return Err(ParseError::EmptyGroup);
                    }
                    return Ok(Group { kind, singles });
                }
                Some(_) => return Err(self.unexpected()),
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }

    /// Requires the exact keyword at the cursor, byte for byte.
    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        for expected in keyword.bytes() {
            match self.peek() {
                Some(actual) if actual == expected => self.advance(),
                Some(_) => return Err(self.unexpected()),
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
        Ok(())
    }
}
