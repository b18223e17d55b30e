//! Next-swap selection with the triple → double → misplaced priority.

use crate::shapes::Side;
use crate::state::{Dissect, InsideState, OutsideState, Swap};

use super::types::{Candidate, Pass};

/// Dissects in priority order: all sides for `Triple`, then `Double`, then
/// `Misplaced`, each scanning Left → Mid → Right. A side emits at most once.
pub fn candidates(inside: InsideState, outside: OutsideState) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(Side::ALL.len());
    let mut claimed = [false; 3];
    for pass in Pass::ORDER {
        for (side, solid) in outside.iter() {
            if claimed[side.index()] {
                continue;
            }
            if let Some(shape) = pass.emit(solid, inside.get(side)) {
                claimed[side.index()] = true;
                out.push(Candidate {
                    pass,
                    dissect: Dissect::new(side, shape),
                });
            }
        }
    }
    out
}

/// Next swap to perform, or `None` once nothing pairs up.
pub fn select_step(inside: InsideState, outside: OutsideState) -> Option<Swap> {
    pair(&candidates(inside, outside))
}

/// First candidate, matched with the first later one differing in both side and shape.
fn pair(candidates: &[Candidate]) -> Option<Swap> {
    let (first, rest) = candidates.split_first()?;
    let a = first.dissect;
    rest.iter()
        .map(|c| c.dissect)
        .find(|b| b.side != a.side && b.shape != a.shape)
        .map(|b| Swap::new(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape2::{self, *};

    fn cand(pass: Pass, side: Side, shape: Shape2) -> Candidate {
        Candidate {
            pass,
            dissect: Dissect::new(side, shape),
        }
    }

    #[test]
    fn pair_skips_same_shape() {
        let list = [
            cand(Pass::Double, Side::Left, Circle),
            cand(Pass::Double, Side::Mid, Circle),
            cand(Pass::Misplaced, Side::Right, Square),
        ];
        let swap = pair(&list).unwrap();
        assert_eq!(swap.a, Dissect::new(Side::Left, Circle));
        assert_eq!(swap.b, Dissect::new(Side::Right, Square));
    }

    #[test]
    fn pair_needs_two_compatible_candidates() {
        assert_eq!(pair(&[]), None);
        assert_eq!(pair(&[cand(Pass::Triple, Side::Mid, Triangle)]), None);
        let same_shape = [
            cand(Pass::Misplaced, Side::Left, Square),
            cand(Pass::Misplaced, Side::Right, Square),
        ];
        assert_eq!(pair(&same_shape), None);
    }

    #[test]
    fn triple_outranks_earlier_sides() {
        // inside C,T,S: Mid Tetrahedron is a triple, Left Cylinder only misplaced.
        let inside = InsideState::default();
        let outside: OutsideState = "CS,TT,CS".parse().unwrap();
        let list = candidates(inside, outside);
        let passes: Vec<Pass> = list.iter().map(|c| c.pass).collect();
        assert_eq!(passes, [Pass::Triple, Pass::Misplaced, Pass::Misplaced]);
        assert_eq!(list[0].dissect, Dissect::new(Side::Mid, Triangle));
        assert_eq!(list[1].dissect, Dissect::new(Side::Left, Circle));
        assert_eq!(list[2].dissect, Dissect::new(Side::Right, Square));
    }

    #[test]
    fn doubles_follow_triples() {
        let inside = InsideState::default();
        let outside: OutsideState = "CC,SS,TT".parse().unwrap();
        let list = candidates(inside, outside);
        let got: Vec<(Pass, Dissect)> = list.iter().map(|c| (c.pass, c.dissect)).collect();
        assert_eq!(
            got,
            [
                (Pass::Triple, Dissect::new(Side::Left, Circle)),
                (Pass::Double, Dissect::new(Side::Mid, Square)),
                (Pass::Double, Dissect::new(Side::Right, Triangle)),
            ]
        );
    }

    #[test]
    fn solved_state_emits_nothing() {
        let inside = InsideState::default();
        let outside: OutsideState = "TS,CS,CT".parse().unwrap();
        assert!(candidates(inside, outside).is_empty());
        assert_eq!(select_step(inside, outside), None);
    }
}
