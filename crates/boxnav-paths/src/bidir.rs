//! Bidirectional A*.

use std::collections::HashMap;

use boxnav_core::{NavBox, Point};

use crate::error::PathError;
use crate::search::{BoxPaths, Explored, Frontier, Label, SearchResult, Trail};
use crate::traits::{BoxGraph, Locator};
use crate::waypoint::project;

/// Which end a search frontier grows from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    /// From the source box toward the destination point.
    Forward,
    /// From the destination box toward the source point.
    Backward,
}

impl Direction {
    #[inline]
    fn idx(self) -> usize {
        self as usize
    }

    #[inline]
    fn other(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl<G: BoxGraph, L: Locator> BoxPaths<'_, G, L> {
    /// Run A* from both ends at once, sharing one queue.
    ///
    /// Each popped entry advances its own direction by one A* step, aiming at
    /// the opposite endpoint. The search stops at the first box popped by one
    /// direction that the other direction has already labelled, and joins the
    /// forward waypoints up to that box with the backward waypoints from it.
    /// The first meeting is not proven to be the best one, so the path may be
    /// longer than [`astar_path`](Self::astar_path)'s.
    pub fn bidirectional_path(&self, from: Point, to: Point) -> SearchResult {
        let (src, dst) = match self.endpoints(from, to) {
            Ok(ends) => ends,
            Err(e) => return SearchResult::failed(e, Explored::new()),
        };

        let targets = [to, from];
        let mut trail = Trail::new();
        let mut labels: [HashMap<NavBox, Label>; 2] = [HashMap::new(), HashMap::new()];
        let mut explored = Explored::new();
        let mut open: Frontier<(Direction, NavBox, f64)> = Frontier::new();

        for (dir, cell, at) in [(Direction::Forward, src, from), (Direction::Backward, dst, to)] {
            let step = trail.push(at, None);
            labels[dir.idx()].insert(cell, Label { cost: 0.0, step });
            open.push(at.distance(targets[dir.idx()]), (dir, cell, 0.0));
        }

        while let Some((dir, cur, g)) = open.pop() {
            let d = dir.idx();
            let label = labels[d][&cur];
            if g > label.cost {
                continue;
            }
            explored.entry(cur).or_insert(g);

            if let Some(other) = labels[dir.other().idx()].get(&cur) {
                log::trace!("bidirectional: {dir:?} search met the other side at {cur}");
                let (fwd, bwd) = match dir {
                    Direction::Forward => (label.step, other.step),
                    Direction::Backward => (other.step, label.step),
                };
                let mut path = trail.chain(fwd);
                let mut back = trail.chain(bwd);
                back.reverse();
                path.extend(back);
                return SearchResult::found(path, explored);
            }

            let at = trail.waypoint(label.step);
            let target = targets[d];
            for &n in self.graph.neighbors(&cur) {
                let wp = project(at, &n);
                let tentative = g + at.distance(wp);
                if labels[d].get(&n).is_some_and(|l| tentative >= l.cost) {
                    continue;
                }
                labels[d].insert(
                    n,
                    Label {
                        cost: tentative,
                        step: trail.push(wp, Some(label.step)),
                    },
                );
                open.push(tentative + wp.distance(target), (dir, n, tentative));
            }
        }

        SearchResult::failed(PathError::NoPathFound, explored)
    }
}
