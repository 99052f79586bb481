//! Jump point search on uniform-cost 8-connected grid maps.
//!
//! Harabor, D., & Grastien, A. (2011). Online graph pruning for pathfinding
//! on grid maps. In Proceedings of the AAAI Conference on Artificial
//! Intelligence.

mod jump;
mod search;

use std::error::Error;
use std::fmt;

use jumppath_grid::GridView;

use crate::search::Search;

/// Failure modes of [`compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// `start` or `goal` does not name a cell of the grid.
    InvalidArgs,
    /// Every cell reachable from the start was expanded without finding
    /// the goal.
    NoPath,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::InvalidArgs => write!(f, "start or goal is out of bounds"),
            PathError::NoPath => write!(f, "no path exists"),
        }
    }
}

impl Error for PathError {}

/// Computes an optimal path between two cells of a passability bitmap.
///
/// `cells` holds `width * height` cells in row-major order, `true` meaning
/// passable; `start` and `goal` are linear node indices as produced by
/// [`jumppath_grid::to_index`]. Steps cost 1 cardinally and √2 diagonally,
/// and the returned path minimizes total cost over all eight-connected
/// routes.
///
/// On success the tile sequence is ordered goal-first, each consecutive
/// pair (and the start tile together with the last entry) differs by one
/// unit move, and the start tile itself is excluded; `start == goal` yields
/// an empty path. The bitmap is only borrowed for the duration of the call,
/// which keeps no other state, so concurrent searches over the same bitmap
/// are fine.
pub fn compute(
    cells: &[bool],
    width: i32,
    height: i32,
    start: i32,
    goal: i32,
) -> Result<Vec<i32>, PathError> {
    let size = width as i64 * height as i64;
    if start < 0 || goal < 0 || (start as i64) >= size || (goal as i64) >= size {
        return Err(PathError::InvalidArgs);
    }

    let map = GridView::new(cells, width, height);
    let goal_coord = map.coord_of(goal);
    Search::new(&map, start, goal_coord)
        .run()
        .ok_or(PathError::NoPath)
}
