//! Solve loop: validate once, then select and apply until nothing pairs up.

use tracing::{debug, warn};

use crate::state::{InsideState, Instruction, OutsideState};

use super::select::select_step;
use super::transform::apply_swap;
use super::types::{Outcome, SolveCfg, SolveError};
use super::validate::check;

/// Solve with the default configuration.
///
/// Invalid input yields `Ok(vec![])`, the same as an already solved puzzle;
/// use [`plan`] or [`super::is_valid`] to tell the two apart.
pub fn solve(inside: InsideState, outside: OutsideState) -> Result<Vec<Instruction>, SolveError> {
    solve_with_cfg(inside, outside, SolveCfg::default())
}

/// Replayable log of swaps from `outside` to the solved state.
pub fn solve_with_cfg(
    inside: InsideState,
    outside: OutsideState,
    cfg: SolveCfg,
) -> Result<Vec<Instruction>, SolveError> {
    if let Err(reason) = check(inside, outside) {
        debug!(%inside, %outside, %reason, "invalid state");
        return Ok(Vec::new());
    }

    let mut state = outside;
    let mut steps = Vec::new();
    while let Some(swap) = select_step(inside, state) {
        if steps.len() >= cfg.max_steps {
            warn!(%inside, %outside, max_steps = cfg.max_steps, "step cap reached");
            return Err(SolveError::IterationCap {
                max_steps: cfg.max_steps,
            });
        }
        state = apply_swap(swap, state)?;
        debug!(step = steps.len(), %swap, %state, "swap");
        steps.push(Instruction { swap, state });
    }
    Ok(steps)
}

/// Validate and solve in one call, keeping "invalid" and "already solved" apart.
pub fn plan(inside: InsideState, outside: OutsideState) -> Result<Outcome, SolveError> {
    if let Err(reason) = check(inside, outside) {
        return Ok(Outcome::Invalid(reason));
    }
    let steps = solve(inside, outside)?;
    if steps.is_empty() {
        Ok(Outcome::AlreadySolved)
    } else {
        Ok(Outcome::Steps(steps))
    }
}
