//! Data types shared by the validator, selector, transformer and driver.

use std::fmt;

use crate::shapes::{Shape2, Shape3, Side};
use crate::state::{Dissect, Instruction, Swap};

/// Driver configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveCfg {
    /// Upper bound on emitted instructions. Every valid puzzle needs at most 3;
    /// hitting the bound means the selector is cycling.
    pub max_steps: usize,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self { max_steps: 50 }
    }
}

/// Why an (inside, outside) pair is not a legal puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidState {
    /// The inside symbols are not a permutation of all three.
    RepeatedInside { shape: Shape2 },
    /// The six outside components do not hold each symbol exactly twice.
    Unbalanced { shape: Shape2, count: usize },
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidState::RepeatedInside { shape } => {
                write!(f, "inside shows {} more than once", shape.name())
            }
            InvalidState::Unbalanced { shape, count } => write!(
                f,
                "outside holds {count} {} component(s), expected 2",
                shape.name()
            ),
        }
    }
}

impl std::error::Error for InvalidState {}

/// Defects surfaced by the driver. Neither occurs for valid input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// A side was asked to give up a component it does not hold.
    UnresolvableShape {
        side: Side,
        solid: Shape3,
        give: Shape2,
        take: Shape2,
    },
    /// Both halves of a swap name the same side.
    DegenerateSwap { swap: Swap },
    /// The selector kept producing swaps past `SolveCfg::max_steps`.
    IterationCap { max_steps: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::UnresolvableShape {
                side,
                solid,
                give,
                take,
            } => write!(
                f,
                "no solid matches {solid} at {} giving up {give} for {take}",
                side.name()
            ),
            SolveError::DegenerateSwap { swap } => {
                write!(f, "swap {swap} exchanges a side with itself")
            }
            SolveError::IterationCap { max_steps } => {
                write!(f, "no solution within {max_steps} steps")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Selection pass that produced a candidate, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pass {
    /// A double whose symbol is also the inside symbol at that side.
    Triple,
    /// Any other double.
    Double,
    /// A solid still holding the inside symbol at that side.
    Misplaced,
}

impl Pass {
    pub const ORDER: [Pass; 3] = [Pass::Triple, Pass::Double, Pass::Misplaced];

    /// Component this pass wants taken out of `solid`, given the inside symbol `wanted`.
    pub(crate) fn emit(self, solid: Shape3, wanted: Shape2) -> Option<Shape2> {
        match self {
            Pass::Triple => {
                (solid.is_double() && solid.contains(wanted)).then(|| solid.components()[0])
            }
            Pass::Double => solid.is_double().then(|| solid.components()[0]),
            Pass::Misplaced => solid.contains(wanted).then_some(wanted),
        }
    }
}

/// One emitted dissect and the pass that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub pass: Pass,
    pub dissect: Dissect,
}

/// Three-way result a caller branches on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Invalid(InvalidState),
    AlreadySolved,
    Steps(Vec<Instruction>),
}

impl Outcome {
    pub fn instructions(&self) -> &[Instruction] {
        match self {
            Outcome::Steps(steps) => steps.as_slice(),
            Outcome::Invalid(_) | Outcome::AlreadySolved => &[],
        }
    }
}
