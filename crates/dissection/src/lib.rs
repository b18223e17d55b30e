//! Dissection solver for the Verity encounter.
//!
//! Inside players each see one face symbol; the outside team sees three
//! composite solids. The solver computes the ordered swaps that bring the
//! outside solids to the state the inside symbols call for.
//!
//! Modules
//! - `shapes`: `Shape2`, `Shape3`, `Side` and the solid ↔ component table.
//! - `state`: inside/outside triples, `Dissect`, `Swap`, `Instruction`, parsing.
//! - `solver`: validator, three-pass step selector, transformer, driver.
//! - `enumerate`: the full input space; `draw`: seeded random puzzles.
//! - `callout`: abbreviated and verbose instruction text.
//!
//! The crate is pure and synchronous; every call is independent.

pub mod api;
pub mod callout;
pub mod draw;
pub mod enumerate;
pub mod shapes;
pub mod solver;
pub mod state;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use shapes::{Shape2, Shape3, Side};
pub use solver::{is_valid, solve};
pub use state::{Dissect, InsideState, Instruction, OutsideState, Swap};

/// Common type exports for quick imports in callers.
pub mod prelude {
    pub use crate::callout::CalloutStyle;
    pub use crate::shapes::{Shape2, Shape3, Side};
    pub use crate::solver::{Outcome, SolveCfg, SolveError};
    pub use crate::state::{Dissect, InsideState, Instruction, OutsideState, Swap};
}
