use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use boxnav_core::{Mesh, NavBox, Point};

use crate::config::{PathConfig, Strategy};
use crate::error::PathError;
use crate::traits::{BoxGraph, Locator};

/// Boxes settled during a search, with the cost at which each was first
/// settled (hop count for BFS, path length otherwise). Diagnostic only.
pub type Explored = HashMap<NavBox, f64>;

/// Outcome of one path query.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// The path from source to destination (both inclusive), or why there is
    /// none.
    pub path: Result<Vec<Point>, PathError>,
    /// Boxes visited by the search, also filled in on failure.
    pub explored: Explored,
}

impl SearchResult {
    pub(crate) fn found(path: Vec<Point>, explored: Explored) -> Self {
        Self {
            path: Ok(path),
            explored,
        }
    }

    pub(crate) fn failed(err: PathError, explored: Explored) -> Self {
        Self {
            path: Err(err),
            explored,
        }
    }

    /// The path points, or an empty slice on failure.
    pub fn points(&self) -> &[Point] {
        match &self.path {
            Ok(p) => p,
            Err(_) => &[],
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&PathError> {
        self.path.as_ref().err()
    }

    /// Summed Euclidean length of the path, if one was found.
    pub fn length(&self) -> Option<f64> {
        self.path.as_deref().ok().map(crate::waypoint::path_length)
    }

    /// Split into `(path, explored)`, with an empty path on failure.
    pub fn into_parts(self) -> (Vec<Point>, Explored) {
        (self.path.unwrap_or_default(), self.explored)
    }
}

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

/// One waypoint of a search and the step it was reached from.
#[derive(Clone, Copy, Debug)]
struct Step {
    waypoint: Point,
    parent: Option<usize>,
}

/// Append-only store of waypoint steps for one search.
///
/// A box's label points at a step, and steps are never modified, so the
/// waypoint chain recorded for a box stays fixed even when a box earlier on
/// that chain is relabelled.
#[derive(Debug, Default)]
pub(crate) struct Trail {
    steps: Vec<Step>,
}

impl Trail {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record `waypoint`, reached from step `parent`, and return its id.
    pub(crate) fn push(&mut self, waypoint: Point, parent: Option<usize>) -> usize {
        self.steps.push(Step { waypoint, parent });
        self.steps.len() - 1
    }

    #[inline]
    pub(crate) fn waypoint(&self, id: usize) -> Point {
        self.steps[id].waypoint
    }

    /// Waypoints from the start of the search up to step `id`, in travel
    /// order.
    pub(crate) fn chain(&self, id: usize) -> Vec<Point> {
        let mut pts = Vec::new();
        let mut cur = Some(id);
        while let Some(i) = cur {
            let step = self.steps[i];
            pts.push(step.waypoint);
            cur = step.parent;
        }
        pts.reverse();
        pts
    }
}

/// Best-known way of entering a box: accumulated cost and the trail step
/// holding the waypoint placed in the box.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Label {
    pub(crate) cost: f64,
    pub(crate) step: usize,
}

/// Heap entry ordered by `priority`, then insertion order.
struct QueueEntry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first, and
        // among equal priorities the earliest push.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for QueueEntry<T> {}

/// Min-priority queue with lazy deletion: relaxations push duplicates and
/// callers drop stale entries when they pop them.
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<QueueEntry<T>>,
    seq: u64,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, priority: f64, item: T) {
        self.heap.push(QueueEntry {
            priority,
            seq: self.seq,
            item,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }
}

// ---------------------------------------------------------------------------
// BoxPaths
// ---------------------------------------------------------------------------

/// Path queries over a box adjacency graph.
///
/// `BoxPaths` only borrows the graph and locator; every query allocates its
/// own search state, so one instance can serve any number of queries, from
/// several threads if the graph is `Sync`.
pub struct BoxPaths<'a, G = Mesh, L = Mesh> {
    pub(crate) graph: &'a G,
    pub(crate) locator: &'a L,
    pub(crate) config: PathConfig,
}

impl<'a> BoxPaths<'a> {
    /// Query `mesh`, locating points with a linear scan.
    pub fn new(mesh: &'a Mesh) -> Self {
        Self::from_parts(mesh, mesh)
    }
}

impl<'a, G: BoxGraph, L: Locator> BoxPaths<'a, G, L> {
    /// Query `graph`, locating points with `locator`.
    pub fn from_parts(graph: &'a G, locator: &'a L) -> Self {
        Self {
            graph,
            locator,
            config: PathConfig::default(),
        }
    }

    /// Replace the search settings.
    pub fn with_config(mut self, config: PathConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the configured strategy from `from` to `to`.
    pub fn find_path(&self, from: Point, to: Point) -> SearchResult {
        self.search(self.config.strategy, from, to)
    }

    /// Run `strategy` from `from` to `to`, ignoring the configured strategy.
    pub fn search(&self, strategy: Strategy, from: Point, to: Point) -> SearchResult {
        let result = match strategy {
            Strategy::Bfs => self.bfs_path(from, to),
            Strategy::Dijkstra => self.dijkstra_path(from, to),
            Strategy::AStar => self.astar_path(from, to),
            Strategy::Bidirectional => self.bidirectional_path(from, to),
        };
        match &result.path {
            Ok(p) => log::debug!(
                "{strategy}: {from} -> {to}: {} points, {} boxes explored",
                p.len(),
                result.explored.len()
            ),
            Err(e) => log::debug!(
                "{strategy}: {from} -> {to}: {e}, {} boxes explored",
                result.explored.len()
            ),
        }
        result
    }

    /// Locate the source and destination boxes, source first.
    pub(crate) fn endpoints(&self, from: Point, to: Point) -> Result<(NavBox, NavBox), PathError> {
        let src = self
            .locator
            .locate(from)
            .ok_or(PathError::PointNotInMesh { point: from })?;
        let dst = self
            .locator
            .locate(to)
            .ok_or(PathError::PointNotInMesh { point: to })?;
        Ok((src, dst))
    }
}

/// Find a path from `source` to `destination` through `mesh` with `strategy`.
pub fn find_path(source: Point, destination: Point, mesh: &Mesh, strategy: Strategy) -> SearchResult {
    BoxPaths::new(mesh).search(strategy, source, destination)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use boxnav_core::{Mesh, NavBox};

    /// A = (0,10,0,10), B = (10,20,0,10), adjacent.
    pub(crate) fn two_boxes() -> Mesh {
        Mesh::from_edges(
            vec![
                NavBox::new(0.0, 10.0, 0.0, 10.0),
                NavBox::new(10.0, 20.0, 0.0, 10.0),
            ],
            &[(0, 1)],
        )
    }

    /// Two separate pairs of boxes with no edge between the pairs.
    pub(crate) fn disconnected() -> Mesh {
        Mesh::from_edges(
            vec![
                NavBox::new(0.0, 10.0, 0.0, 10.0),
                NavBox::new(10.0, 20.0, 0.0, 10.0),
                NavBox::new(40.0, 50.0, 0.0, 10.0),
                NavBox::new(50.0, 60.0, 0.0, 10.0),
            ],
            &[(0, 1), (2, 3)],
        )
    }

    /// A straight corridor of six narrow boxes from S (0..10) to D (40..50),
    /// plus a three-box loop over the top (L, T, R). The loop takes fewer
    /// boxes but is much longer.
    ///
    /// Box order: S, C1..C6, D, L, T, R.
    pub(crate) fn corridor_with_detour() -> Mesh {
        let mut boxes = vec![NavBox::new(0.0, 10.0, 0.0, 10.0)];
        for i in 0..6 {
            let x = 10.0 + i as f64 * 5.0;
            boxes.push(NavBox::new(x, x + 5.0, 0.0, 10.0));
        }
        boxes.push(NavBox::new(40.0, 50.0, 0.0, 10.0)); // D = 7
        boxes.push(NavBox::new(0.0, 10.0, 10.0, 50.0)); // L = 8
        boxes.push(NavBox::new(0.0, 50.0, 50.0, 60.0)); // T = 9
        boxes.push(NavBox::new(40.0, 50.0, 10.0, 50.0)); // R = 10
        let edges = [
            (0, 1),
            (0, 8),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (8, 9),
            (9, 10),
            (10, 7),
        ];
        Mesh::from_edges(boxes, &edges)
    }
}
