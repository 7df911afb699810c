use std::fmt;
use std::str::FromStr;

use crate::error::ParseStrategyError;

/// Which traversal [`BoxPaths::find_path`](crate::BoxPaths::find_path) runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Fewest box transitions.
    Bfs,
    /// Uniform-cost search on accumulated Euclidean length.
    Dijkstra,
    /// Dijkstra guided by straight-line distance to the destination.
    #[default]
    AStar,
    /// A* from both ends, stopping at the first box both searches reach.
    Bidirectional,
}

impl Strategy {
    /// All strategies, in a fixed order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dijkstra,
        Strategy::AStar,
        Strategy::Bidirectional,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "astar",
            Strategy::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dijkstra" | "ucs" => Ok(Strategy::Dijkstra),
            "astar" | "a*" => Ok(Strategy::AStar),
            "bidirectional" | "bidir" => Ok(Strategy::Bidirectional),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// How breadth-first reconstruction places a waypoint in each box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WaypointMode {
    /// Closest point of the box to the next waypoint on the path.
    #[default]
    ClosestPoint,
    /// Centre of the box.
    Centroid,
}

/// Search settings. Cheap to copy; holds no per-query state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathConfig {
    pub strategy: Strategy,
    pub waypoints: WaypointMode,
}

impl PathConfig {
    /// Default settings with the given strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_from_partial_json() {
        let cfg: PathConfig = serde_json::from_str(r#"{"strategy": "bidirectional"}"#).unwrap();
        assert_eq!(cfg.strategy, Strategy::Bidirectional);
        assert_eq!(cfg.waypoints, WaypointMode::ClosestPoint);

        let cfg: PathConfig =
            serde_json::from_str(r#"{"strategy": "bfs", "waypoints": "centroid"}"#).unwrap();
        assert_eq!(cfg, PathConfig {
            strategy: Strategy::Bfs,
            waypoints: WaypointMode::Centroid,
        });
    }
}
