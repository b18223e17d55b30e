//! Applying a swap to the outside state.

use crate::shapes::{Shape2, Shape3, Side};
use crate::state::{OutsideState, Swap};

use super::types::SolveError;

/// Perform `swap`: `a.side` gives up `a.shape` for `b.shape`, and `b.side`
/// gives up `b.shape` for `a.shape`. The input state is left untouched.
pub fn apply_swap(swap: Swap, outside: OutsideState) -> Result<OutsideState, SolveError> {
    let Swap { a, b } = swap;
    if a.side == b.side {
        return Err(SolveError::DegenerateSwap { swap });
    }
    let at_a = exchange_at(outside, a.side, a.shape, b.shape)?;
    let at_b = exchange_at(outside, b.side, b.shape, a.shape)?;
    Ok(outside.with_solid(a.side, at_a).with_solid(b.side, at_b))
}

fn exchange_at(
    outside: OutsideState,
    side: Side,
    give: Shape2,
    take: Shape2,
) -> Result<Shape3, SolveError> {
    let solid = outside.get(side);
    solid
        .exchange(give, take)
        .ok_or(SolveError::UnresolvableShape {
            side,
            solid,
            give,
            take,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Shape2::*;
    use crate::state::Dissect;

    #[test]
    fn left_cylinder_trades_square_for_triangle() {
        let outside: OutsideState = "CS,TT,CS".parse().unwrap();
        let swap = Swap::new(
            Dissect::new(Side::Left, Square),
            Dissect::new(Side::Mid, Triangle),
        );
        let next = apply_swap(swap, outside).unwrap();
        assert_eq!(next.get(Side::Left), Shape3::Cone);
        assert_eq!(next.get(Side::Mid), Shape3::TriangularPrism);
        assert_eq!(next.get(Side::Right), Shape3::Cylinder);
        // input unchanged
        assert_eq!(outside.to_string(), "CS,TT,CS");
    }

    #[test]
    fn missing_component_is_unresolvable() {
        let outside: OutsideState = "CS,TT,CS".parse().unwrap();
        let swap = Swap::new(
            Dissect::new(Side::Mid, Circle),
            Dissect::new(Side::Left, Square),
        );
        assert_eq!(
            apply_swap(swap, outside),
            Err(SolveError::UnresolvableShape {
                side: Side::Mid,
                solid: Shape3::Tetrahedron,
                give: Circle,
                take: Square,
            })
        );
    }

    #[test]
    fn same_side_swap_is_rejected() {
        let outside = OutsideState::default();
        let swap = Swap::new(
            Dissect::new(Side::Left, Circle),
            Dissect::new(Side::Left, Square),
        );
        assert!(matches!(
            apply_swap(swap, outside),
            Err(SolveError::DegenerateSwap { .. })
        ));
    }
}
