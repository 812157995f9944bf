//! Error types for the parser.
//!
//! `parse` fails fast: the first error encountered is returned, nothing of
//! the partial result survives, and no error is ever downgraded or retried.

use std::fmt;

/// Everything that can go wrong while parsing an EML program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The header parser was entered on something other than `{`.
    MissingHeaderOpener,
    /// An exercise name was not followed by `:`.
    MissingNameWorkSeparator,
    /// A character that no parser state accepts.
    UnexpectedCharacter { found: char, position: usize },
    /// The input ended inside a token.
    UnexpectedEnd,
    /// A `super` or `circuit` closed without any members.
    EmptyGroup,
    /// A varied rep list holds more entries than the sets count.
    ExtraVariableReps,
    /// A varied rep list closed with fewer entries than the sets count.
    MissingVariableReps,
    /// A modifier was applied before any work description.
    ModifierOnNoneWork,
    /// `F` was used before any work description.
    FailureOnNoneWork,
    /// `F` appeared after a varied rep list closed.
    FailureAsMacro,
    /// `T` appeared after a varied rep list closed.
    TimeAsMacro,
    /// A sets count contained a radix point.
    FractionalSets,
    /// A radix point outside a weight or RPE value.
    FractionalValue,
    /// A second radix point in one number.
    DuplicateRadix,
    /// A radix point with no digit after it.
    MissingDigitAfterRadix,
    /// More than two digits after the radix point.
    TooManyFractionalDigits,
    /// An integer above the representable range.
    IntegralOverflow,
    /// A fixed-point value above the representable range.
    FixedPointOverflow,
    /// `""` where a non-empty string is required.
    EmptyString,
    /// A string longer than the reader accepts.
    StringTooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingHeaderOpener => {
                write!(f, "Header must begin with '{{'")
            }
            ParseError::MissingNameWorkSeparator => {
                write!(f, "Expected ':' between an exercise name and its work")
            }
            ParseError::UnexpectedCharacter { found, position } => {
                write!(f, "Unexpected character '{found}' at byte {position}")
            }
            ParseError::UnexpectedEnd => {
                write!(f, "Input ended in the middle of a token")
            }
            ParseError::EmptyGroup => {
                write!(f, "A super or circuit must contain at least one exercise")
            }
            ParseError::ExtraVariableReps => {
                write!(f, "More rep entries than sets")
            }
            ParseError::MissingVariableReps => {
                write!(f, "Fewer rep entries than sets")
            }
            ParseError::ModifierOnNoneWork => {
                write!(f, "A modifier requires a work description")
            }
            ParseError::FailureOnNoneWork => {
                write!(f, "'F' requires a work description")
            }
            ParseError::FailureAsMacro => {
                write!(f, "'F' must appear inside the rep list, not after it")
            }
            ParseError::TimeAsMacro => {
                write!(f, "'T' must appear inside the rep list, not after it")
            }
            ParseError::FractionalSets => {
                write!(f, "A sets count cannot be fractional")
            }
            ParseError::FractionalValue => {
                write!(f, "Only weight and RPE values may be fractional")
            }
            ParseError::DuplicateRadix => {
                write!(f, "A number may contain only one '.'")
            }
            ParseError::MissingDigitAfterRadix => {
                write!(f, "Expected a digit after '.'")
            }
            ParseError::TooManyFractionalDigits => {
                write!(f, "At most two fractional digits are allowed")
            }
            ParseError::IntegralOverflow => {
                write!(f, "Integer value exceeds 21474835")
            }
            ParseError::FixedPointOverflow => {
                write!(f, "Fixed-point value exceeds 21474835.00")
            }
            ParseError::EmptyString => {
                write!(f, "Empty strings are not allowed")
            }
            ParseError::StringTooLong => {
                write!(f, "Strings are limited to 128 bytes")
            }
        }
    }
}

impl std::error::Error for ParseError {}
