//! **boxnav-core** — geometry and mesh types for box-decomposed navigation.
//!
//! A walkable planar region is described as a set of non-overlapping,
//! axis-aligned rectangles ([`NavBox`]) plus an adjacency relation between
//! them ([`Mesh`]). Search algorithms live in `boxnav-paths`.

pub mod geom;
pub mod mesh;

pub use geom::{NavBox, Point};
pub use mesh::Mesh;
