//! Shortest paths through a mesh of axis-aligned boxes.
//!
//! A query locates the boxes containing the source and destination points,
//! searches the box adjacency graph, and turns the box sequence into a list
//! of waypoints running from the exact source point to the exact destination
//! point:
//!
//! - **BFS** fewest box transitions ([`BoxPaths::bfs_path`])
//! - **Dijkstra** shortest waypoint path ([`BoxPaths::dijkstra_path`])
//! - **A\*** Dijkstra guided by straight-line distance ([`BoxPaths::astar_path`])
//! - **Bidirectional A\*** searches from both ends, stopping at the first
//!   meeting box ([`BoxPaths::bidirectional_path`])
//!
//! Every query allocates its own search state; [`BoxPaths`] only borrows the
//! mesh, so it can be shared freely.
//!
//! ```
//! use boxnav_core::{Mesh, NavBox, Point};
//! use boxnav_paths::{Strategy, find_path};
//!
//! let mesh = Mesh::from_edges(
//!     vec![NavBox::new(0.0, 10.0, 0.0, 10.0), NavBox::new(10.0, 20.0, 0.0, 10.0)],
//!     &[(0, 1)],
//! );
//! let res = find_path(Point::new(1.0, 1.0), Point::new(19.0, 9.0), &mesh, Strategy::AStar);
//! assert_eq!(res.points()[1], Point::new(10.0, 1.0));
//! ```
//!
//! # Trait seams
//!
//! | Trait | Provides |
//! |---|---|
//! | [`BoxGraph`] | neighbor lists (implemented by [`Mesh`](boxnav_core::Mesh)) |
//! | [`Locator`] | point location ([`Mesh`](boxnav_core::Mesh) scan, [`GridIndex`]) |

mod astar;
mod bfs;
mod bidir;
mod config;
mod dijkstra;
mod error;
mod locate;
mod search;
mod traits;
mod waypoint;

pub use config::{PathConfig, Strategy, WaypointMode};
pub use error::{ParseStrategyError, PathError};
pub use locate::GridIndex;
pub use search::{BoxPaths, Explored, SearchResult, find_path};
pub use traits::{BoxGraph, Locator};
pub use waypoint::{centroid, path_length, project};
