use jumppath_core::IndexedPriorityQueue;
use jumppath_grid::{chebyshev_distance, euclidean_distance, Direction, GridView};

use crate::jump::{jump, permitted_turns};

/// Search state for a single invocation.
///
/// The node-indexed arrays follow the usual open/closed discipline: `g` is
/// meaningful only for nodes that have entered the open queue, `came_from`
/// is -1 for the start node, and closed nodes are never expanded twice.
/// `g` is kept as f64 end to end; the queued priority of a relaxed node is
/// adjusted by exactly the change in `g`, since the estimate term does not
/// move.
pub(crate) struct Search<'a> {
    map: &'a GridView<'a>,
    start: i32,
    goal: (i32, i32),
    open: IndexedPriorityQueue,
    g: Box<[f64]>,
    came_from: Box<[i32]>,
    closed: Box<[bool]>,
}

impl<'a> Search<'a> {
    pub fn new(map: &'a GridView<'a>, start: i32, goal: (i32, i32)) -> Self {
        let size = map.width() as usize * map.height() as usize;
        let mut open = IndexedPriorityQueue::new(size);
        let mut g = vec![f64::INFINITY; size].into_boxed_slice();

        g[start as usize] = 0.0;
        open.insert(start, chebyshev_distance(map.coord_of(start), goal));

        Search {
            map,
            start,
            goal,
            open,
            g,
            came_from: vec![-1; size].into_boxed_slice(),
            closed: vec![false; size].into_boxed_slice(),
        }
    }

    pub fn run(&mut self) -> Option<Vec<i32>> {
        while let Some((node, _)) = self.open.peek() {
            let coord = self.map.coord_of(node);
            if coord == self.goal {
                return Some(self.reconstruct(node));
            }
            self.open.pop_min();
            self.closed[node as usize] = true;

            let parent = self.came_from[node as usize];
            let arrival = (parent >= 0)
                .then(|| Direction::between(self.map.coord_of(parent), coord))
                .flatten();

            for dir in permitted_turns(arrival) {
                let Some(target) = jump(self.map, self.goal, dir, coord) else {
                    continue;
                };
                let target_node = self.map.index_of(target);
                if self.closed[target_node as usize] {
                    continue;
                }
                self.relax(node, coord, target_node, target);
            }
        }
        None
    }

    fn relax(&mut self, from: i32, from_coord: (i32, i32), node: i32, coord: (i32, i32)) {
        let tentative = self.g[from as usize] + euclidean_distance(from_coord, coord);
        if !self.open.contains(node) {
            self.g[node as usize] = tentative;
            self.came_from[node as usize] = from;
            self.open
                .insert(node, tentative + chebyshev_distance(coord, self.goal));
        } else if tentative < self.g[node as usize] {
            let old_priority = self.open.priority_of(node);
            let old_g = self.g[node as usize];
            self.g[node as usize] = tentative;
            self.came_from[node as usize] = from;
            self.open.reprioritize(node, old_priority - old_g + tentative);
        }
    }

    /// Expands the chain of jump points back into the full tile sequence.
    ///
    /// Interior cells of straight and diagonal runs were never stored, so
    /// the walk regenerates them one unit step at a time, switching to the
    /// next predecessor whenever the current one is reached. The result is
    /// ordered goal-first and excludes the start tile.
    fn reconstruct(&self, goal_node: i32) -> Vec<i32> {
        let mut path = vec![];
        let mut target = goal_node;
        let mut node = goal_node;
        while node != self.start {
            node = self.step_toward(node, target);
            path.push(node);
            if node == target {
                target = self.came_from[target as usize];
            }
        }
        // The walk pushes the start tile last; it is not part of the output.
        path.pop();
        path
    }

    /// One unit step from `node` toward `target` along each differing axis.
    fn step_toward(&self, node: i32, target: i32) -> i32 {
        let (x, y) = self.map.coord_of(node);
        let (tx, ty) = self.map.coord_of(target);
        self.map
            .index_of((x + (tx - x).signum(), y + (ty - y).signum()))
    }
}
