use boxnav_core::{Mesh, NavBox, Point};

/// Box adjacency graph — provides neighbor enumeration.
pub trait BoxGraph {
    /// Boxes directly bordering `b`, in the order searches should visit them.
    fn neighbors(&self, b: &NavBox) -> &[NavBox];
}

/// Maps a point to the box that contains it.
///
/// Implementations must agree with a first-match scan of the mesh for
/// overlap-free meshes.
pub trait Locator {
    /// The box containing `p` (inclusive bounds), or `None`.
    fn locate(&self, p: Point) -> Option<NavBox>;
}

impl BoxGraph for Mesh {
    #[inline]
    fn neighbors(&self, b: &NavBox) -> &[NavBox] {
        Mesh::neighbors(self, b)
    }
}
