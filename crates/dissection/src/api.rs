//! Curated entry points for front ends (CLI, benches, examples).
//!
//! Front ends call `is_valid`/`check` first and branch on the result, or call
//! `plan`, which does the branching for them.

// Validation and solving
pub use crate::solver::{
    apply_swap, check, is_solved, is_valid, plan, select_step, solve, solve_with_cfg, target,
    InvalidState, Outcome, SolveCfg, SolveError,
};
// Text
pub use crate::callout::{chat_line, instruction_line, CalloutStyle};
// Input space
pub use crate::draw::{draw_puzzle, PuzzleSample, PuzzleStream, ReplayToken};
pub use crate::enumerate::valid_pairs;
