//! Structural checks on a puzzle and its goal state.

use crate::shapes::{Shape2, Shape3};
use crate::state::{InsideState, OutsideState};

use super::types::InvalidState;

/// Check that `inside` is a permutation and `outside` holds each symbol twice.
///
/// The inside check runs first, so a pair failing both reports `RepeatedInside`.
pub fn check(inside: InsideState, outside: OutsideState) -> Result<(), InvalidState> {
    let mut seen = [false; 3];
    for shape in inside.symbols() {
        if std::mem::replace(&mut seen[shape.index()], true) {
            return Err(InvalidState::RepeatedInside { shape });
        }
    }

    let mut counts = [0usize; 3];
    for shape in outside.components() {
        counts[shape.index()] += 1;
    }
    for shape in Shape2::ALL {
        let count = counts[shape.index()];
        if count != 2 {
            return Err(InvalidState::Unbalanced { shape, count });
        }
    }
    Ok(())
}

#[inline]
pub fn is_valid(inside: InsideState, outside: OutsideState) -> bool {
    check(inside, outside).is_ok()
}

/// Goal state: each side shows the mixed solid that avoids its inside symbol.
pub fn target(inside: InsideState) -> OutsideState {
    OutsideState::new(inside.symbols().map(Shape3::without))
}

#[inline]
pub fn is_solved(inside: InsideState, outside: OutsideState) -> bool {
    outside == target(inside)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape2::*;

    #[test]
    fn repeated_inside_is_reported_first() {
        let inside = InsideState::new([Circle, Circle, Square]);
        let outside: OutsideState = "CC,CC,CC".parse().unwrap();
        assert_eq!(
            check(inside, outside),
            Err(InvalidState::RepeatedInside { shape: Circle })
        );
    }

    #[test]
    fn unbalanced_reports_first_short_symbol() {
        let inside = InsideState::default();
        let outside: OutsideState = "CC,CC,CC".parse().unwrap();
        assert_eq!(
            check(inside, outside),
            Err(InvalidState::Unbalanced {
                shape: Circle,
                count: 6
            })
        );
        let outside: OutsideState = "CS,CS,CS".parse().unwrap();
        assert_eq!(
            check(inside, outside),
            Err(InvalidState::Unbalanced {
                shape: Circle,
                count: 3
            })
        );
    }

    #[test]
    fn target_of_default_inside() {
        let t = target(InsideState::default());
        assert_eq!(t.to_string(), "TS,CS,CT");
        assert!(is_valid(InsideState::default(), t));
        assert!(is_solved(InsideState::default(), t));
    }
}
