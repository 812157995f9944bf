//! The rolling accumulator behind every number in a work description.
//!
//! The accumulator does not own the cursor: the single-token parser feeds
//! it one digit or radix point at a time and collects the packed result
//! when a separator forces a flush.

use super::errors::ParseError;
use crate::ast::Number;

/// Builds a packed [`Number`] one character at a time.
///
/// `fraction_digits` tracks the write position: 0 before the radix point,
/// 1 immediately after it, then 2 and 3 once the tenths and hundredths
/// digits have landed.
#[derive(Debug, Default)]
pub(super) struct NumberAccumulator {
    value: u32,
    fraction_digits: u8,
}

impl NumberAccumulator {
    pub(super) fn push_digit(&mut self, digit: u8) -> Result<(), ParseError> {
        let digit = u32::from(digit);
        match self.fraction_digits {
            0 => {
                let next = self.value * 10 + digit;
                if next > Number::MAX_INTEGER {
                    return Err(ParseError::IntegralOverflow);
                }
                self.value = next;
            }
            1 => {
                let next = self.value + digit * 10;
                if next & Number::VALUE_MASK > Number::MAX_HUNDREDTHS {
                    return Err(ParseError::FixedPointOverflow);
                }
                self.value = next;
                self.fraction_digits = 2;
            }
            2 => {
                let next = self.value + digit;
                if next & Number::VALUE_MASK > Number::MAX_HUNDREDTHS {
                    return Err(ParseError::FixedPointOverflow);
                }
                self.value = next;
                self.fraction_digits = 3;
            }
            _ => return Err(ParseError::TooManyFractionalDigits),
        }
        Ok(())
    }

    /// True once a radix point has been consumed.
    pub(super) fn has_radix(&self) -> bool {
        self.fraction_digits > 0
    }

    /// Shifts the integer part to hundredths and marks the value
    /// fractional. The caller has already rejected a second radix point.
    pub(super) fn push_radix(&mut self) {
        self.value = self.value * 100 | Number::FRACTIONAL_BIT;
        self.fraction_digits = 1;
    }

    /// Takes the finished number, rejecting a dangling radix point.
    pub(super) fn take(&mut self) -> Result<Number, ParseError> {
        if self.fraction_digits == 1 {
            return Err(ParseError::MissingDigitAfterRadix);
        }
        Ok(self.take_raw())
    }

    /// Takes whatever has accumulated, without the dangling-radix check.
    pub(super) fn take_raw(&mut self) -> Number {
        let number = Number::from_raw(self.value);
        self.value = 0;
        self.fraction_digits = 0;
        number
    }

    /// Takes the accumulator as a plain sets count; anything touched by a
    /// radix point is rejected.
    pub(super) fn take_sets(&mut self) -> Result<u32, ParseError> {
        if self.fraction_digits > 0 {
            return Err(ParseError::FractionalSets);
        }
        let sets = self.value;
        self.value = 0;
        Ok(sets)
    }
}
