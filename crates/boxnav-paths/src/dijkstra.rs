use std::collections::HashMap;

use boxnav_core::{NavBox, Point};

use crate::error::PathError;
use crate::search::{BoxPaths, Explored, Frontier, Label, SearchResult, Trail};
use crate::traits::{BoxGraph, Locator};
use crate::waypoint::project;

impl<G: BoxGraph, L: Locator> BoxPaths<'_, G, L> {
    /// Uniform-cost search on accumulated Euclidean path length.
    ///
    /// Entering a neighbor places a waypoint at the projection of the current
    /// waypoint onto that neighbor; the step costs the distance between the
    /// two. Returns as soon as the destination box is popped.
    pub fn dijkstra_path(&self, from: Point, to: Point) -> SearchResult {
        self.best_first("dijkstra", from, to, |_| 0.0)
    }

    /// Best-first search ordered by `g + heuristic(waypoint)`.
    ///
    /// A neighbor is relabelled whenever a strictly lower `g` reaches it,
    /// even if the box was already expanded; queue entries whose `g` is above
    /// the box's current label are stale and skipped. Explored keeps the cost
    /// at which each box was first expanded.
    pub(crate) fn best_first<H>(&self, name: &str, from: Point, to: Point, heuristic: H) -> SearchResult
    where
        H: Fn(Point) -> f64,
    {
        let (src, dst) = match self.endpoints(from, to) {
            Ok(ends) => ends,
            Err(e) => return SearchResult::failed(e, Explored::new()),
        };

        let mut trail = Trail::new();
        let mut labels: HashMap<NavBox, Label> = HashMap::new();
        let mut explored = Explored::new();
        let mut open: Frontier<(NavBox, f64)> = Frontier::new();

        labels.insert(
            src,
            Label {
                cost: 0.0,
                step: trail.push(from, None),
            },
        );
        open.push(heuristic(from), (src, 0.0));

        while let Some((cur, g)) = open.pop() {
            let label = labels[&cur];
            if g > label.cost {
                continue;
            }
            explored.entry(cur).or_insert(g);

            if cur == dst {
                let mut path = trail.chain(label.step);
                path.push(to);
                return SearchResult::found(path, explored);
            }

            let at = trail.waypoint(label.step);
            for &n in self.graph.neighbors(&cur) {
                let wp = project(at, &n);
                let tentative = g + at.distance(wp);
                if labels.get(&n).is_some_and(|l| tentative >= l.cost) {
                    continue;
                }
                log::trace!("{name}: relax {n} at {tentative:.3} via {wp}");
                labels.insert(
                    n,
                    Label {
                        cost: tentative,
                        step: trail.push(wp, Some(label.step)),
                    },
                );
                open.push(tentative + heuristic(wp), (n, tentative));
            }
        }

        SearchResult::failed(PathError::NoPathFound, explored)
    }
}
