//! The navigation mesh: a set of boxes plus their adjacency relation.

use std::collections::HashMap;

use crate::geom::{NavBox, Point};

/// An immutable navigation mesh.
///
/// `boxes` keeps the order supplied by the loader; point lookups scan it in
/// that order. `adjacency` maps a box to the boxes it directly borders and is
/// assumed (not checked) to be symmetric.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    boxes: Vec<NavBox>,
    adjacency: HashMap<NavBox, Vec<NavBox>>,
}

impl Mesh {
    /// Create a mesh from a box list and an adjacency map.
    pub fn new(boxes: Vec<NavBox>, adjacency: HashMap<NavBox, Vec<NavBox>>) -> Self {
        Self { boxes, adjacency }
    }

    /// Create a mesh from a box list and undirected edges given as index
    /// pairs into `boxes`.
    ///
    /// Each edge is recorded in both directions; neighbor lists follow edge
    /// order. Duplicate edges and out-of-range indices are ignored.
    pub fn from_edges(boxes: Vec<NavBox>, edges: &[(usize, usize)]) -> Self {
        let mut adjacency: HashMap<NavBox, Vec<NavBox>> = HashMap::new();
        for &(a, b) in edges {
            let (Some(&ba), Some(&bb)) = (boxes.get(a), boxes.get(b)) else {
                continue;
            };
            for (from, to) in [(ba, bb), (bb, ba)] {
                let list = adjacency.entry(from).or_default();
                if !list.contains(&to) {
                    list.push(to);
                }
            }
        }
        Self { boxes, adjacency }
    }

    /// All boxes, in mesh order.
    #[inline]
    pub fn boxes(&self) -> &[NavBox] {
        &self.boxes
    }

    /// Boxes adjacent to `b`, in listed order. Empty for unknown boxes.
    #[inline]
    pub fn neighbors(&self, b: &NavBox) -> &[NavBox] {
        self.adjacency.get(b).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of boxes.
    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the mesh has no boxes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The first box (in mesh order) whose inclusive bounds contain `p`.
    pub fn find_containing(&self, p: Point) -> Option<NavBox> {
        self.boxes.iter().copied().find(|b| b.contains(p))
    }

    /// Bounding box of every box in the mesh, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<NavBox> {
        let (first, rest) = self.boxes.split_first()?;
        Some(rest.iter().fold(*first, |acc, b| acc.union(*b)))
    }

    /// Whether every adjacency entry has its mirror entry.
    ///
    /// Search never calls this; it is a loader-side diagnostic.
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .all(|(a, ns)| ns.iter().all(|n| self.neighbors(n).contains(a)))
    }

    /// Dump boxes and adjacency through the `log` facade at debug level.
    pub fn log_contents(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        for b in &self.boxes {
            log::debug!("box {b}");
        }
        for b in &self.boxes {
            let ns = self.neighbors(b);
            if ns.is_empty() {
                continue;
            }
            let list: Vec<String> = ns.iter().map(NavBox::to_string).collect();
            log::debug!("box {b} has neighbors: {}", list.join(", "));
        }
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

/// Wire form: `{ "boxes": [...], "adj": [[box, [neighbor, ...]], ...] }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MeshRepr {
    boxes: Vec<NavBox>,
    #[serde(default)]
    adj: Vec<(NavBox, Vec<NavBox>)>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Mesh {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Entries follow mesh order so the output is stable; adjacency keys
        // that are not listed boxes go last, sorted by bounds.
        let mut adj: Vec<(NavBox, Vec<NavBox>)> = self
            .boxes
            .iter()
            .filter_map(|b| self.adjacency.get(b).map(|ns| (*b, ns.clone())))
            .collect();
        let mut extra: Vec<(NavBox, Vec<NavBox>)> = self
            .adjacency
            .iter()
            .filter(|(b, _)| !self.boxes.contains(*b))
            .map(|(b, ns)| (*b, ns.clone()))
            .collect();
        extra.sort_by(|(a, _), (b, _)| {
            a.xmin
                .total_cmp(&b.xmin)
                .then(a.ymin.total_cmp(&b.ymin))
                .then(a.xmax.total_cmp(&b.xmax))
                .then(a.ymax.total_cmp(&b.ymax))
        });
        adj.extend(extra);
        MeshRepr {
            boxes: self.boxes.clone(),
            adj,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Mesh {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MeshRepr::deserialize(deserializer)?;
        Ok(Mesh::new(repr.boxes, repr.adj.into_iter().collect()))
    }
}
