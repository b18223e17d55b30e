//! Puzzle state and the move vocabulary.
//!
//! - `InsideState`: one `Shape2` per side, a permutation of all three symbols when valid.
//! - `OutsideState`: one `Shape3` per side; the only state that changes while solving.
//! - `Dissect`, `Swap`, `Instruction`: one component at a side, an exchange of two
//!   such components, and an exchange paired with the state it produces.
//!
//! All types are small `Copy` values; "mutating" helpers return a new value.

use std::fmt;
use std::str::FromStr;

use crate::shapes::{Shape2, Shape3, Side};

/// Errors from parsing textual states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A state needs exactly one entry per side.
    Arity { found: usize },
    UnknownShape2 { token: String },
    UnknownShape3 { token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Arity { found } => {
                write!(f, "expected 3 entries (one per side), found {found}")
            }
            ParseError::UnknownShape2 { token } => {
                write!(f, "unknown symbol `{token}` (expected one of C, S, T)")
            }
            ParseError::UnknownShape3 { token } => write!(
                f,
                "unknown solid `{token}` (expected one of CC, SS, TT, CS, CT, TS)"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Symbols seen by the inside players, indexed by `Side::index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InsideState([Shape2; 3]);

impl InsideState {
    #[inline]
    pub const fn new(symbols: [Shape2; 3]) -> Self {
        Self(symbols)
    }

    #[inline]
    pub fn get(&self, side: Side) -> Shape2 {
        self.0[side.index()]
    }

    #[inline]
    pub fn symbols(&self) -> [Shape2; 3] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, Shape2)> + '_ {
        Side::ALL.into_iter().zip(self.0)
    }

    /// Put `shape` at `side`. If another side already shows `shape`, that side
    /// takes the old symbol, so a permutation stays a permutation.
    pub fn with_symbol(self, side: Side, shape: Shape2) -> Self {
        let mut symbols = self.0;
        let old = symbols[side.index()];
        if let Some(other) = symbols.iter().position(|&s| s == shape) {
            symbols[other] = old;
        }
        symbols[side.index()] = shape;
        Self(symbols)
    }
}

impl Default for InsideState {
    fn default() -> Self {
        Self([Shape2::Circle, Shape2::Triangle, Shape2::Square])
    }
}

impl fmt::Display for InsideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Accepts `CTS`, `C,T,S` or `C T S`.
impl FromStr for InsideState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<char> = s
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();
        if tokens.len() != 3 {
            return Err(ParseError::Arity {
                found: tokens.len(),
            });
        }
        let mut symbols = [Shape2::Circle; 3];
        for (slot, c) in symbols.iter_mut().zip(tokens) {
            *slot = Shape2::from_code(c).ok_or_else(|| ParseError::UnknownShape2 {
                token: c.to_string(),
            })?;
        }
        Ok(Self(symbols))
    }
}

/// Solids seen by the outside team, indexed by `Side::index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutsideState([Shape3; 3]);

impl OutsideState {
    #[inline]
    pub const fn new(solids: [Shape3; 3]) -> Self {
        Self(solids)
    }

    #[inline]
    pub fn get(&self, side: Side) -> Shape3 {
        self.0[side.index()]
    }

    #[inline]
    pub fn solids(&self) -> [Shape3; 3] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, Shape3)> + '_ {
        Side::ALL.into_iter().zip(self.0)
    }

    /// Copy with `side` replaced by `solid`.
    pub fn with_solid(self, side: Side, solid: Shape3) -> Self {
        let mut solids = self.0;
        solids[side.index()] = solid;
        Self(solids)
    }

    /// All six face components, side by side.
    pub fn components(&self) -> impl Iterator<Item = Shape2> + '_ {
        self.0.iter().flat_map(|s| s.components())
    }
}

impl Default for OutsideState {
    fn default() -> Self {
        Self([Shape3::Cylinder, Shape3::Tetrahedron, Shape3::Cylinder])
    }
}

impl fmt::Display for OutsideState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Accepts `CS,TT,CS` or whitespace separated codes.
impl FromStr for OutsideState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != 3 {
            return Err(ParseError::Arity {
                found: tokens.len(),
            });
        }
        let mut solids = [Shape3::Sphere; 3];
        for (slot, token) in solids.iter_mut().zip(tokens) {
            *slot = Shape3::from_code(token).ok_or_else(|| ParseError::UnknownShape3 {
                token: token.to_string(),
            })?;
        }
        Ok(Self(solids))
    }
}

/// The component `shape` taken out of `side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dissect {
    pub side: Side,
    pub shape: Shape2,
}

impl Dissect {
    #[inline]
    pub const fn new(side: Side, shape: Shape2) -> Self {
        Self { side, shape }
    }
}

impl fmt::Display for Dissect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side, self.shape)
    }
}

/// Exchange of `a.shape` (leaving `a.side`) with `b.shape` (leaving `b.side`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swap {
    pub a: Dissect,
    pub b: Dissect,
}

impl Swap {
    #[inline]
    pub const fn new(a: Dissect, b: Dissect) -> Self {
        Self { a, b }
    }

    /// The swap that undoes `self`: each side hands back what it received.
    pub fn reversed(self) -> Self {
        Self {
            a: Dissect::new(self.a.side, self.b.shape),
            b: Dissect::new(self.b.side, self.a.shape),
        }
    }

    pub fn involves(&self, side: Side) -> bool {
        self.a.side == side || self.b.side == side
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}", self.a, self.b)
    }
}

/// A swap and the outside state right after performing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub swap: Swap,
    pub state: OutsideState,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.swap, self.state)
    }
}
