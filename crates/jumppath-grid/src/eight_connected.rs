//! Distance metrics and neighbourhood enumeration for 8-connected
//! uniform-cost grid maps.

use std::f64::consts::SQRT_2;

use enumset::EnumSet;

use crate::{step, Direction, GridView};

/// Chebyshev distance: the number of moves needed on an empty grid when
/// diagonal and cardinal steps cost the same.
///
/// Never overestimates the true octile cost, so it is an admissible (if
/// loose) estimate for searches whose diagonals cost √2.
pub fn chebyshev_distance(from: (i32, i32), to: (i32, i32)) -> f64 {
    (from.0 - to.0).abs().max((from.1 - to.1).abs()) as f64
}

/// Exact cost of the segment between two cells on a shared row, column, or
/// 45° diagonal.
///
/// Jump points are only ever recorded in collinear pairs, so the Euclidean
/// length of the connecting segment is the true path cost; the axis-aligned
/// branch merely skips the square root.
pub fn euclidean_distance(from: (i32, i32), to: (i32, i32)) -> f64 {
    let dx = (from.0 - to.0).abs();
    let dy = (from.1 - to.1).abs();
    if dx != 0 && dy != 0 {
        ((dx * dx + dy * dy) as f64).sqrt()
    } else {
        (dx + dy) as f64
    }
}

/// Octile distance: the optimal cost on an empty grid with unit cardinal
/// steps and √2 diagonal steps.
pub fn octile_distance(from: (i32, i32), to: (i32, i32)) -> f64 {
    let dx = (from.0 - to.0).abs();
    let dy = (from.1 - to.1).abs();
    let diagonals = dx.min(dy);
    let orthos = dx.max(dy) - diagonals;
    orthos as f64 + diagonals as f64 * SQRT_2
}

/// The set of directions whose unit step from `coord` lands on an
/// enterable cell.
pub fn reachable_directions(map: &GridView, coord: (i32, i32)) -> EnumSet<Direction> {
    let mut directions = EnumSet::empty();
    for dir in EnumSet::<Direction>::all() {
        if map.is_enterable(step(coord, dir)) {
            directions |= dir;
        }
    }
    directions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_takes_the_longer_axis() {
        assert_eq!(chebyshev_distance((0, 0), (3, 7)), 7.0);
        assert_eq!(chebyshev_distance((5, 2), (1, 2)), 4.0);
        assert_eq!(chebyshev_distance((2, 2), (2, 2)), 0.0);
    }

    #[test]
    fn euclidean_matches_segment_geometry() {
        assert_eq!(euclidean_distance((0, 0), (0, 5)), 5.0);
        assert_eq!(euclidean_distance((4, 1), (1, 1)), 3.0);
        assert!((euclidean_distance((0, 0), (3, 3)) - 3.0 * SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn octile_mixes_diagonal_and_straight_runs() {
        assert!((octile_distance((0, 0), (3, 7)) - (4.0 + 3.0 * SQRT_2)).abs() < 1e-12);
        assert_eq!(octile_distance((0, 0), (6, 0)), 6.0);
        assert!((octile_distance((0, 0), (2, 2)) - 2.0 * SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn neighbourhood_excludes_blocked_and_out_of_bounds() {
        // 3x3 with the east column blocked
        let cells = [
            true, true, false, //
            true, true, false, //
            true, true, false,
        ];
        let map = GridView::new(&cells, 3, 3);

        let from_centre = reachable_directions(&map, (1, 1));
        assert_eq!(
            from_centre,
            Direction::North | Direction::South | Direction::West
                | Direction::NorthWest | Direction::SouthWest
        );

        let from_corner = reachable_directions(&map, (0, 0));
        assert_eq!(
            from_corner,
            Direction::East | Direction::SouthEast | Direction::South
        );
    }
}
