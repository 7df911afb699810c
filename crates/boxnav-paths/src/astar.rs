use boxnav_core::Point;

use crate::search::{BoxPaths, SearchResult};
use crate::traits::{BoxGraph, Locator};

impl<G: BoxGraph, L: Locator> BoxPaths<'_, G, L> {
    /// Compute a path from `from` to `to` using A*.
    ///
    /// Same step costs as [`dijkstra_path`](Self::dijkstra_path); the queue is
    /// ordered by `g + h` where `h` is the straight-line distance from a
    /// waypoint to `to`. Waypoints depend on the route into a box, so a box
    /// can be expanded first at a higher `g` and relabelled later; the second
    /// label replaces the first as in Dijkstra.
    pub fn astar_path(&self, from: Point, to: Point) -> SearchResult {
        self.best_first("astar", from, to, |wp| wp.distance(to))
    }
}
