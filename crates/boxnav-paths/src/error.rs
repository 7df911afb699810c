use boxnav_core::Point;
use thiserror::Error;

/// Why a path query failed. Both kinds are terminal for the query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// An endpoint lies outside every box of the mesh.
    #[error("point {point} is not inside any box of the mesh")]
    PointNotInMesh { point: Point },
    /// The destination box cannot be reached from the source box, or the
    /// breadth-first distance table has no predecessor for some box.
    #[error("no path found")]
    NoPathFound,
}

/// An unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy {0:?} (expected bfs, dijkstra, astar or bidirectional)")]
pub struct ParseStrategyError(pub String);
