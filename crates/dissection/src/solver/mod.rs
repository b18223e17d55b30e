//! Dissection solver: validator, step selector, state transformer, driver.
//!
//! Purpose
//! - Turn a fixed inside triple and a starting outside triple into the ordered
//!   list of swaps the outside team performs, each paired with the state it
//!   leaves behind.
//!
//! Selection order
//! - Candidates come from three passes (triples, then doubles, then misplaced
//!   symbols), each scanning Left → Mid → Right. The first candidate is paired
//!   with the first later one on another side carrying another symbol. The
//!   order fixes which of several legal swaps is called out, so it must not be
//!   "simplified".
//!
//! Failure model
//! - Invalid input is not an error: `solve` returns an empty list and `check`
//!   says why. `SolveError` covers defects only (unresolvable exchange,
//!   same-side swap, step cap), and those propagate.
//!
//! Layout
//! - `types.rs` (config, errors, candidates), `validate.rs`, `select.rs`,
//!   `transform.rs`, `drive.rs`.

mod drive;
mod select;
mod transform;
mod types;
mod validate;

pub use drive::{plan, solve, solve_with_cfg};
pub use select::{candidates, select_step};
pub use transform::apply_swap;
pub use types::{Candidate, InvalidState, Outcome, Pass, SolveCfg, SolveError};
pub use validate::{check, is_solved, is_valid, target};
