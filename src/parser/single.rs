//! The single-token parser: one exercise name and its work description.
//!
//! This is the heart of the grammar. After the name and its `:` separator,
//! a small state machine consumes the work description one character at a
//! time, upgrading the work kind in place as the shape reveals itself: the
//! accumulated count becomes `Standard` at `x`, `Standard` becomes
//! `StandardVaried` at `(`, and a top-level `:` moves everything built so
//! far to the left side of an asymmetric pair.

use std::mem;

use super::number::NumberAccumulator;
use super::{ParseError, Parser};
use crate::ast::{Modifier, Number, Reps, Side, Single, Standard, StandardVaried, Work};

/// A modifier waiting for its value, set at `@` or `%` and applied at the
/// next flush.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum PendingModifier {
    None,
    Weight,
    Rpe,
}

/// Mutable state for one work description.
#[derive(Debug)]
struct WorkInProgress {
    /// The side being built; the right one once `left` is populated.
    current: Side,
    /// Filled by the asymmetric upgrade, after which `current` restarts
    /// from scratch for the right side.
    left: Option<Side>,
    modifier: PendingModifier,
    number: NumberAccumulator,
    /// Index of the next rep slot in a varied rep list.
    vcount: usize,
}

impl Parser<'_> {
    /// Parses one single token. Enters on the name's `"`, leaves past the
    /// terminating `;`.
    pub(super) fn parse_single(&mut self) -> Result<Single, ParseError> {
        let name = self.read_string()?;

        if self.bump() != Some(b':') {
            return Err(ParseError::MissingNameWorkSeparator);
        }

        let mut work = WorkInProgress::new();

        while let Some(current) = self.peek() {
            match current {
                // Quotes only delimit the name, which is already consumed.
                b'"' => self.advance(),
                b'0'..=b'9' => {
                    work.number.push_digit(current - b'0')?;
                    self.advance();
                }
                b'.' => {
                    work.push_radix()?;
                    self.advance();
                }
                b'x' => {
                    work.upgrade_to_standard()?;
                    self.advance();
                }
                b'(' => {
                    if !matches!(work.current, Side::Standard(_)) {
                        return Err(self.unexpected());
                    }
                    work.upgrade_to_standard_varied();
                    self.advance();
                }
                b',' | b')' => {
                    if !matches!(work.current, Side::StandardVaried(_)) {
                        return Err(self.unexpected());
                    }
                    work.flush_rep()?;
                    if current == b')' {
                        work.close_rep_list()?;
                    }
                    self.advance();
                }
                b'F' => {
                    work.mark_to_failure()?;
                    self.advance();
                }
                b'T' => {
                    work.mark_time()?;
                    self.advance();
                }
                b'@' => {
                    work.begin_modifier(PendingModifier::Weight)?;
                    self.advance();
                }
                b'%' => {
                    work.begin_modifier(PendingModifier::Rpe)?;
                    self.advance();
                }
                b':' => {
                    if work.left.is_some() {
                        return Err(self.unexpected());
                    }
                    work.upgrade_to_asymmetric()?;
                    self.advance();
                }
                b';' => {
                    work.flush(None)?;
                    self.advance();
                    return Ok(Single {
                        name,
                        work: work.finish(),
                    });
                }
                _ => return Err(self.unexpected()),
            }
        }

        Err(ParseError::UnexpectedEnd)
    }
}

impl WorkInProgress {
    fn new() -> Self {
        Self {
            current: Side::None,
            left: None,
            modifier: PendingModifier::None,
            number: NumberAccumulator::default(),
            vcount: 0,
        }
    }

    /// `x`: the accumulated count becomes the sets of a fresh `Standard`,
    /// replacing whatever the side held.
    fn upgrade_to_standard(&mut self) -> Result<(), ParseError> {
        let sets = self.number.take_sets()?;
        self.current = Side::Standard(Standard {
            sets,
            reps: Reps::default(),
        });
        Ok(())
    }

    /// `(`: the standard sets count becomes the length of a varied rep
    /// list, every slot starting from defaults. Only called on `Standard`.
    fn upgrade_to_standard_varied(&mut self) {
        if let Side::Standard(standard) = mem::replace(&mut self.current, Side::None) {
            self.current = Side::StandardVaried(StandardVaried {
                sets: standard.sets,
                reps: vec![Reps::default(); standard.sets as usize],
            });
            self.vcount = 0;
        }
    }

    /// Work-body `:`: flush, then move the finished side to the left slot
    /// and start over for the right side.
    fn upgrade_to_asymmetric(&mut self) -> Result<(), ParseError> {
        self.flush(None)?;
        self.left = Some(mem::replace(&mut self.current, Side::None));
        self.vcount = 0;
        Ok(())
    }

    /// `.`: only legal inside a weight or RPE value, and once per number.
    fn push_radix(&mut self) -> Result<(), ParseError> {
        if matches!(self.current, Side::None) {
            return Err(ParseError::FractionalSets);
        }
        if self.number.has_radix() {
            return Err(ParseError::DuplicateRadix);
        }
        if self.modifier == PendingModifier::None {
            return Err(ParseError::FractionalValue);
        }
        self.number.push_radix();
        Ok(())
    }

    /// `,` and `)`: commit the accumulated value and pending modifier to
    /// the next rep slot. Only called on `StandardVaried`.
    fn flush_rep(&mut self) -> Result<(), ParseError> {
        if let Side::StandardVaried(varied) = &self.current {
            if self.vcount >= varied.sets as usize {
                return Err(ParseError::ExtraVariableReps);
            }
        }
        self.flush(Some(self.vcount))?;
        self.vcount += 1;
        Ok(())
    }

    /// `)`: the rep list must be exactly full.
    fn close_rep_list(&mut self) -> Result<(), ParseError> {
        if let Side::StandardVaried(varied) = &self.current {
            if self.vcount < varied.sets as usize {
                return Err(ParseError::MissingVariableReps);
            }
        }
        Ok(())
    }

    /// `F`: marks the current rep target as taken to failure. Past the end
    /// of a varied rep list there is no current rep.
    fn mark_to_failure(&mut self) -> Result<(), ParseError> {
        match &mut self.current {
            Side::None => Err(ParseError::FailureOnNoneWork),
            Side::Standard(standard) => {
                standard.reps.to_failure = true;
                Ok(())
            }
            Side::StandardVaried(varied) => match varied.reps.get_mut(self.vcount) {
                Some(rep) => {
                    rep.to_failure = true;
                    Ok(())
                }
                None => Err(ParseError::FailureAsMacro),
            },
        }
    }

    /// `T`: marks the current rep target as timed, same scoping as `F`.
    fn mark_time(&mut self) -> Result<(), ParseError> {
        match &mut self.current {
            Side::None => Err(ParseError::ModifierOnNoneWork),
            Side::Standard(standard) => {
                standard.reps.is_time = true;
                Ok(())
            }
            Side::StandardVaried(varied) => match varied.reps.get_mut(self.vcount) {
                Some(rep) => {
                    rep.is_time = true;
                    Ok(())
                }
                None => Err(ParseError::TimeAsMacro),
            },
        }
    }

    /// `@` / `%`: the accumulated value becomes the current rep's value and
    /// the modifier starts waiting for its own value.
    fn begin_modifier(&mut self, modifier: PendingModifier) -> Result<(), ParseError> {
        let value = self.number.take_raw();
        match &mut self.current {
            Side::None => return Err(ParseError::ModifierOnNoneWork),
            Side::Standard(standard) => standard.reps.value = value,
            Side::StandardVaried(varied) => {
                if let Some(rep) = varied.reps.get_mut(self.vcount) {
                    rep.value = value;
                }
            }
        }
        self.modifier = modifier;
        Ok(())
    }

    /// Commits the accumulated value and pending modifier, then clears
    /// both.
    ///
    /// With an index the write lands on that rep of a varied list. Without
    /// one (at `:` and `;`) a varied list receives the modifier as a
    /// macro: it fills every rep whose modifier slot is still empty, and
    /// reps carrying their own modifier keep it.
    fn flush(&mut self, index: Option<usize>) -> Result<(), ParseError> {
        let value = self.number.take()?;
        let modifier = mem::replace(&mut self.modifier, PendingModifier::None);

        match &mut self.current {
            Side::None => match modifier {
                PendingModifier::None => Ok(()),
                _ => Err(ParseError::ModifierOnNoneWork),
            },
            Side::Standard(standard) => {
                apply(&mut standard.reps, modifier, value);
                Ok(())
            }
            Side::StandardVaried(varied) => {
                match index {
                    Some(index) => {
                        if let Some(rep) = varied.reps.get_mut(index) {
                            apply(rep, modifier, value);
                        }
                    }
                    None => {
                        let open_slots = varied
                            .reps
                            .iter_mut()
                            .filter(|rep| rep.modifier == Modifier::None);
                        match modifier {
                            PendingModifier::None => {}
                            PendingModifier::Weight => {
                                for rep in open_slots {
                                    rep.modifier = Modifier::Weight(value);
                                }
                            }
                            PendingModifier::Rpe => {
                                for rep in open_slots {
                                    rep.modifier = Modifier::Rpe(value);
                                }
                            }
                        }
                    }
                }
                Ok(())
            }
        }
    }

    /// `;`: the finished work, asymmetric when a `:` upgrade happened.
    fn finish(self) -> Work {
        match self.left {
            Some(left) => Work::Asymmetric {
                left,
                right: self.current,
            },
            None => self.current.into_work(),
        }
    }
}

fn apply(rep: &mut Reps, modifier: PendingModifier, value: Number) {
    match modifier {
        PendingModifier::None => rep.value = value,
        PendingModifier::Weight => rep.modifier = Modifier::Weight(value),
        PendingModifier::Rpe => rep.modifier = Modifier::Rpe(value),
    }
}
