//! Exhaustive enumeration of the (small) input space.
//!
//! 6 inside permutations × 216 outside triples; 21 triples are balanced, so
//! 126 pairs are valid puzzles.

use crate::shapes::{Shape2, Shape3};
use crate::solver::is_valid;
use crate::state::{InsideState, OutsideState};

/// The six inside permutations, lexicographic in `Shape2::ALL` order.
pub fn insides() -> impl Iterator<Item = InsideState> {
    Shape2::ALL.into_iter().flat_map(|a| {
        Shape2::ALL.into_iter().flat_map(move |b| {
            Shape2::ALL
                .into_iter()
                .filter(move |&c| a != b && a != c && b != c)
                .map(move |c| InsideState::new([a, b, c]))
        })
    })
}

/// Every outside triple (balanced or not), Left varying slowest.
pub fn outsides() -> impl Iterator<Item = OutsideState> {
    Shape3::ALL.into_iter().flat_map(|l| {
        Shape3::ALL.into_iter().flat_map(move |m| {
            Shape3::ALL
                .into_iter()
                .map(move |r| OutsideState::new([l, m, r]))
        })
    })
}

/// All valid (inside, outside) puzzles.
pub fn valid_pairs() -> impl Iterator<Item = (InsideState, OutsideState)> {
    insides()
        .flat_map(|inside| outsides().map(move |outside| (inside, outside)))
        .filter(|&(inside, outside)| is_valid(inside, outside))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(insides().count(), 6);
        assert_eq!(outsides().count(), 216);
        assert_eq!(valid_pairs().count(), 126);
    }

    #[test]
    fn balanced_outsides_are_shared_by_every_inside() {
        let inside = InsideState::default();
        let balanced = outsides().filter(|&o| is_valid(inside, o)).count();
        assert_eq!(balanced, 21);
    }
}
