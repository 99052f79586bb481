use enumset::EnumSet;
use jumppath_grid::{step, Direction, GridView};

/// Directions worth exploring from a node arrived at via `arrival`.
///
/// Travel from the start node (no arrival direction) may go anywhere.
/// Otherwise symmetry pruning keeps the arrival direction itself and the
/// 45° turns either side of it, plus the 90° turns for diagonal arrivals;
/// every other neighbour is reachable at equal or lower cost by a path
/// that does not pass through this node.
pub(crate) fn permitted_turns(arrival: Option<Direction>) -> EnumSet<Direction> {
    match arrival {
        None => EnumSet::all(),
        Some(dir) if dir.is_diagonal() => {
            dir.rotate(-2) | dir.rotate(-1) | dir | dir.rotate(1) | dir.rotate(2)
        }
        Some(dir) => dir.rotate(-1) | dir | dir.rotate(1),
    }
}

/// Whether obstacles beside `coord` force a turn when passing through it
/// in direction `dir`.
///
/// A flanking neighbour is forced when it is enterable but the cell behind
/// it (relative to the direction of travel) is not: any path reaching it
/// without going through `coord` would have to detour around the obstacle.
/// Cardinal travel checks the neighbours one octant to each side against
/// the cells behind them; diagonal travel checks two octants out.
pub(crate) fn has_forced_neighbours(map: &GridView, coord: (i32, i32), dir: Direction) -> bool {
    let enterable = |turn: i32| map.is_enterable(step(coord, dir.rotate(turn)));
    if dir.is_diagonal() {
        enterable(-2) && !enterable(-3) || enterable(2) && !enterable(3)
    } else {
        enterable(-1) && !enterable(-2) || enterable(1) && !enterable(2)
    }
}

/// Locates the next jump point from `from` in direction `dir`, or `None`
/// if the ray dead-ends first.
///
/// The scan stops at the first cell that is the goal or has forced
/// neighbours. Diagonal travel additionally stops wherever a horizontal or
/// vertical probe from the current cell would find a jump point; the
/// current cell itself is the one reported, so the interior cells of
/// straight runs never enter the open set; they are regenerated during
/// reconstruction.
///
/// Straight rays are scanned iteratively, and the only recursion is the
/// diagonal case probing its two flanking cardinals, so the scan depth
/// stays constant no matter how long the run is.
pub(crate) fn jump(
    map: &GridView,
    goal: (i32, i32),
    dir: Direction,
    from: (i32, i32),
) -> Option<(i32, i32)> {
    let mut cur = from;
    loop {
        let next = step(cur, dir);
        if !map.is_enterable(next) {
            return None;
        }
        if next == goal || has_forced_neighbours(map, next, dir) {
            return Some(next);
        }
        if dir.is_diagonal()
            && (jump(map, goal, dir.rotate(-1), next).is_some()
                || jump(map, goal, dir.rotate(1), next).is_some())
        {
            return Some(next);
        }
        cur = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(rows: &[&str]) -> (Vec<bool>, i32, i32) {
        let height = rows.len() as i32;
        let width = rows[0].len() as i32;
        let cells = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|cell| cell == '.')
            .collect();
        (cells, width, height)
    }

    #[test]
    fn open_grid_has_no_forced_neighbours() {
        let (cells, width, height) = bitmap(&["...", "...", "..."]);
        let map = GridView::new(&cells, width, height);
        for octant in 0..8 {
            assert!(!has_forced_neighbours(&map, (1, 1), Direction::from_octant(octant)));
        }
    }

    #[test]
    fn blocked_cell_behind_a_flank_forces_a_turn() {
        // Passing (1, 0) eastward: the south-east neighbour is open but the
        // cell south of this one is blocked, so the flank is only reachable
        // through here.
        let (cells, width, height) = bitmap(&["...", ".#.", "..."]);
        let map = GridView::new(&cells, width, height);
        assert!(has_forced_neighbours(&map, (1, 0), Direction::East));
        assert!(has_forced_neighbours(&map, (1, 0), Direction::West));
        assert!(has_forced_neighbours(&map, (0, 1), Direction::South));
        assert!(!has_forced_neighbours(&map, (1, 0), Direction::North));
    }

    #[test]
    fn straight_jump_stops_at_goal_or_dead_end() {
        let (cells, width, height) = bitmap(&["....#", ".....", "....."]);
        let map = GridView::new(&cells, width, height);
        // Ray hits the wall before anything interesting.
        assert_eq!(jump(&map, (0, 2), Direction::East, (0, 0)), None);
        // Same ray, but the goal lies on it.
        assert_eq!(jump(&map, (3, 0), Direction::East, (0, 0)), Some((3, 0)));
        // Off the map entirely.
        assert_eq!(jump(&map, (0, 2), Direction::North, (0, 0)), None);
    }

    #[test]
    fn straight_jump_stops_at_forced_neighbours() {
        let (cells, width, height) = bitmap(&[".....", "..#..", "....."]);
        let map = GridView::new(&cells, width, height);
        // Travelling east along the top row: below (2, 0) is blocked while
        // its south-east flank is open, so (3, 1) is reachable only through
        // (2, 0) and the scan must stop there.
        assert_eq!(jump(&map, (4, 2), Direction::East, (0, 0)), Some((2, 0)));
    }

    #[test]
    fn diagonal_jump_reports_the_turning_cell() {
        let (cells, width, height) = bitmap(&[".....", "...#.", ".....", ".....", "....."]);
        let map = GridView::new(&cells, width, height);
        // Jumping south-east from the corner with the goal elsewhere: the
        // eastward probe out of (2, 2) finds a forced stop at (3, 2), so
        // (2, 2) itself is the reported jump point, not the probe's result.
        assert_eq!(
            jump(&map, (0, 4), Direction::SouthEast, (0, 0)),
            Some((2, 2))
        );
    }

    #[test]
    fn diagonal_jump_runs_to_the_goal_on_open_ground() {
        let (cells, width, height) = bitmap(&[".....", ".....", ".....", ".....", "....."]);
        let map = GridView::new(&cells, width, height);
        assert_eq!(
            jump(&map, (4, 4), Direction::SouthEast, (0, 0)),
            Some((4, 4))
        );
    }

    #[test]
    fn start_turns_are_unrestricted_and_pruning_narrows_them() {
        assert_eq!(permitted_turns(None), EnumSet::all());
        assert_eq!(
            permitted_turns(Some(Direction::East)),
            Direction::NorthEast | Direction::East | Direction::SouthEast
        );
        assert_eq!(
            permitted_turns(Some(Direction::SouthEast)),
            Direction::East | Direction::SouthEast | Direction::South
                | Direction::NorthEast | Direction::SouthWest
        );
        assert_eq!(
            permitted_turns(Some(Direction::North)),
            Direction::NorthWest | Direction::North | Direction::NorthEast
        );
    }
}
