//! The abstract syntax tree for parsed EML sessions.
//!
//! A [`Session`] owns everything reachable from it: the header pairs and the
//! work tokens, each token carrying exactly one [`Work`] variant. Asymmetric
//! work holds two [`Side`]s, and a side cannot itself be asymmetric, so the
//! no-nesting rule is enforced by the types.
//!
//! Every node implements `Display`, emitting canonical EML. Parsing the
//! output of `Display` reproduces the same tree; macro modifiers are written
//! out per rep, which is their observable effect.

mod number;

pub use number::Number;

use std::fmt;

/// A parsed EML program: the recognized header fields, the raw header
/// pairs, and the work tokens in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Value of the `version` header key, truncated to its stored width.
    pub version: Option<String>,
    /// Value of the `weight` header key, a unit abbreviation such as
    /// `lbs` or `kg`, truncated to its stored width.
    pub weight_unit: Option<String>,
    /// Every header pair, recognized or not, in input order.
    pub headers: Vec<HeaderEntry>,
    pub objects: Vec<Object>,
}

/// One `"parameter":"value"` pair from the header section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub parameter: String,
    pub value: String,
}

/// A top-level work token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Single(Single),
    Group(Group),
}

/// A `super(…)` or `circuit(…)` of single tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub kind: GroupKind,
    pub singles: Vec<Single>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GroupKind {
    Super,
    Circuit,
}

impl GroupKind {
    /// The source keyword introducing this kind of group.
    pub fn keyword(&self) -> &'static str {
        match self {
            GroupKind::Super => "super",
            GroupKind::Circuit => "circuit",
        }
    }
}

/// One named exercise and its work description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Single {
    pub name: String,
    pub work: Work,
}

/// The work attached to a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Work {
    /// No work description at all (`"name":;`).
    None,
    Standard(Standard),
    StandardVaried(StandardVaried),
    /// Independent left and right sides (e.g. single-leg exercises).
    Asymmetric { left: Side, right: Side },
}

/// One side of an asymmetric pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Side {
    None,
    Standard(Standard),
    StandardVaried(StandardVaried),
}

impl Side {
    /// The equivalent non-asymmetric work.
    pub fn into_work(self) -> Work {
        match self {
            Side::None => Work::None,
            Side::Standard(standard) => Work::Standard(standard),
            Side::StandardVaried(varied) => Work::StandardVaried(varied),
        }
    }
}

/// Uniform sets: one rep target shared by every set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Standard {
    pub sets: u32,
    pub reps: Reps,
}

/// Per-set rep targets: `reps` holds exactly `sets` entries, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardVaried {
    pub sets: u32,
    pub reps: Vec<Reps>,
}

/// One set's target.
///
/// `value` counts reps, or seconds when `is_time` is set. When `to_failure`
/// is set the value carries no meaning for consumers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Reps {
    pub value: Number,
    pub is_time: bool,
    pub to_failure: bool,
    pub modifier: Modifier,
}

/// The optional load or intensity attached to one rep target.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Modifier {
    #[default]
    None,
    /// `@`: external load, in the session's weight unit.
    Weight(Number),
    /// `%`: rate of perceived exertion.
    Rpe(Number),
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, entry) in self.headers.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("}")?;
        for object in &self.objects {
            write!(f, "{object}")?;
        }
        Ok(())
    }
}

impl fmt::Display for HeaderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\":\"{}\"", self.parameter, self.value)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Single(single) => write!(f, "{single}"),
            Object::Group(group) => write!(f, "{group}"),
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind.keyword())?;
        for single in &self.singles {
            write!(f, "{single}")?;
        }
        f.write_str(");")
    }
}

impl fmt::Display for Single {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\":{};", self.name, self.work)
    }
}

impl fmt::Display for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Work::None => Ok(()),
            Work::Standard(standard) => write!(f, "{standard}"),
            Work::StandardVaried(varied) => write!(f, "{varied}"),
            Work::Asymmetric { left, right } => write!(f, "{left}:{right}"),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::None => Ok(()),
            Side::Standard(standard) => write!(f, "{standard}"),
            Side::StandardVaried(varied) => write!(f, "{varied}"),
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.sets, self.reps)
    }
}

impl fmt::Display for StandardVaried {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x(", self.sets)?;
        for (i, rep) in self.reps.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{rep}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.to_failure {
            if !self.value.is_zero() {
                write!(f, "{}", self.value)?;
            }
            f.write_str("F")?;
        } else {
            write!(f, "{}", self.value)?;
        }
        if self.is_time {
            f.write_str("T")?;
        }
        match self.modifier {
            Modifier::None => Ok(()),
            Modifier::Weight(value) => write!(f, "@{value}"),
            Modifier::Rpe(value) => write!(f, "%{value}"),
        }
    }
}
