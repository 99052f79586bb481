//! Pathfinding on uniform-cost 8-connected grid maps.

pub use jumppath_core::*;
pub use jumppath_grid as grid;
pub use jumppath_jps as jps;

use jumppath_core::IndexedPriorityQueue;
use jumppath_grid::{
    chebyshev_distance, euclidean_distance, reachable_directions, step, GridView,
};
use jumppath_jps::PathError;

/// Unoptimized eight-neighbour A* over the same inputs as [`jps::compute`].
///
/// Expands every node the textbook algorithm would, one unit move at a
/// time, with the same metrics and movement rules as the jump point
/// searcher. It exists as the reference the optimized searcher is validated
/// against, and shares its whole contract: goal-first path, start tile
/// excluded, `start == goal` yields an empty path.
pub fn astar_compute(
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

    let mut open = IndexedPriorityQueue::new(size as usize);
    let mut g = vec![f64::INFINITY; size as usize].into_boxed_slice();
    let mut came_from = vec![-1i32; size as usize].into_boxed_slice();
    let mut closed = vec![false; size as usize].into_boxed_slice();

    g[start as usize] = 0.0;
    open.insert(start, chebyshev_distance(map.coord_of(start), goal_coord));

    while let Some((node, _)) = open.peek() {
        let coord = map.coord_of(node);
        if coord == goal_coord {
            return Ok(walk_back(&came_from, start, node));
        }
        open.pop_min();
        closed[node as usize] = true;

        for dir in reachable_directions(&map, coord) {
            let next = step(coord, dir);
            let next_node = map.index_of(next);
            if closed[next_node as usize] {
                continue;
            }

            let tentative = g[node as usize] + euclidean_distance(coord, next);
            if !open.contains(next_node) {
                g[next_node as usize] = tentative;
                came_from[next_node as usize] = node;
                open.insert(next_node, tentative + chebyshev_distance(next, goal_coord));
            } else if tentative < g[next_node as usize] {
                let old_priority = open.priority_of(next_node);
                let old_g = g[next_node as usize];
                g[next_node as usize] = tentative;
                came_from[next_node as usize] = node;
                open.reprioritize(next_node, old_priority - old_g + tentative);
            }
        }
    }
    Err(PathError::NoPath)
}

// Every predecessor link is a single unit move, so unlike the jump point
// searcher there is nothing to interpolate.
fn walk_back(came_from: &[i32], start: i32, goal: i32) -> Vec<i32> {
    let mut path = vec![];
    let mut node = goal;
    while node != start {
        path.push(node);
        node = came_from[node as usize];
    }
    path
}
