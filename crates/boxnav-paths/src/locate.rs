//! Point location: linear scan and a uniform-grid index.

use boxnav_core::{Mesh, NavBox, Point};

use crate::traits::Locator;

/// Linear scan in mesh order; first match wins.
impl Locator for Mesh {
    #[inline]
    fn locate(&self, p: Point) -> Option<NavBox> {
        self.find_containing(p)
    }
}

/// Uniform bucket grid over a mesh's bounding box.
///
/// Each box is registered in every bucket its closed extent overlaps, and
/// bucket lists keep mesh order, so [`locate`](Locator::locate) returns the
/// same box a linear scan of the mesh would.
#[derive(Clone, Debug)]
pub struct GridIndex {
    boxes: Vec<NavBox>,
    bounds: NavBox,
    cols: usize,
    rows: usize,
    cell_w: f64,
    cell_h: f64,
    buckets: Vec<Vec<u32>>,
}

impl GridIndex {
    /// Build an index with at most `cols` x `rows` buckets (each clamped to
    /// at least 1).
    pub fn new(mesh: &Mesh, cols: usize, rows: usize) -> Self {
        let boxes = mesh.boxes().to_vec();
        let bounds = mesh.bounds().unwrap_or_default();
        let cols = cols.max(1);
        let rows = rows.max(1);
        // Degenerate extents collapse to a single bucket on that axis.
        let cell_w = if bounds.width() > 0.0 {
            bounds.width() / cols as f64
        } else {
            1.0
        };
        let cell_h = if bounds.height() > 0.0 {
            bounds.height() / rows as f64
        } else {
            1.0
        };

        let mut index = Self {
            boxes,
            bounds,
            cols,
            rows,
            cell_w,
            cell_h,
            buckets: vec![Vec::new(); cols * rows],
        };

        for (i, b) in index.boxes.iter().enumerate() {
            let (c0, r0) = index.bucket_of(Point::new(b.xmin, b.ymin));
            let (c1, r1) = index.bucket_of(Point::new(b.xmax, b.ymax));
            for r in r0..=r1 {
                for c in c0..=c1 {
                    index.buckets[r * cols + c].push(i as u32);
                }
            }
        }

        log::debug!(
            "grid index: {} boxes in {}x{} buckets",
            index.boxes.len(),
            cols,
            rows
        );
        index
    }

    /// Build an index sized so buckets hold roughly one box each.
    pub fn auto(mesh: &Mesh) -> Self {
        let side = (mesh.len() as f64).sqrt().ceil() as usize;
        Self::new(mesh, side, side)
    }

    /// Grid dimensions as `(cols, rows)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Bucket coordinates for a point, clamped to the grid.
    #[inline]
    fn bucket_of(&self, p: Point) -> (usize, usize) {
        let fx = ((p.x - self.bounds.xmin) / self.cell_w).floor();
        let fy = ((p.y - self.bounds.ymin) / self.cell_h).floor();
        let c = (fx.max(0.0) as usize).min(self.cols - 1);
        let r = (fy.max(0.0) as usize).min(self.rows - 1);
        (c, r)
    }
}

impl Locator for GridIndex {
    fn locate(&self, p: Point) -> Option<NavBox> {
        if self.boxes.is_empty() || !self.bounds.contains(p) {
            return None;
        }
        let (c, r) = self.bucket_of(p);
        self.buckets[r * self.cols + c]
            .iter()
            .map(|&i| self.boxes[i as usize])
            .find(|b| b.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_mesh() -> Mesh {
        // Ten 10x10 boxes along x plus a tall one above the last three.
        let mut boxes: Vec<NavBox> = (0..10)
            .map(|i| {
                let x = i as f64 * 10.0;
                NavBox::new(x, x + 10.0, 0.0, 10.0)
            })
            .collect();
        boxes.push(NavBox::new(70.0, 100.0, 10.0, 40.0));
        let edges: Vec<(usize, usize)> = (0..9).map(|i| (i, i + 1)).collect();
        Mesh::from_edges(boxes, &edges)
    }

    #[test]
    fn linear_scan_locates() {
        let mesh = strip_mesh();
        assert_eq!(
            mesh.locate(Point::new(35.0, 5.0)),
            Some(NavBox::new(30.0, 40.0, 0.0, 10.0))
        );
        assert_eq!(mesh.locate(Point::new(35.0, 25.0)), None);
    }

    #[test]
    fn grid_agrees_with_linear_scan() {
        let mesh = strip_mesh();
        for (cols, rows) in [(1, 1), (3, 2), (7, 5), (16, 16)] {
            let grid = GridIndex::new(&mesh, cols, rows);
            for yi in -4..=90 {
                for xi in -4..=210 {
                    let p = Point::new(xi as f64 * 0.5, yi as f64 * 0.5);
                    assert_eq!(grid.locate(p), mesh.locate(p), "at {p} with {cols}x{rows}");
                }
            }
        }
    }

    #[test]
    fn grid_shared_edge_uses_mesh_order() {
        let mesh = strip_mesh();
        let grid = GridIndex::auto(&mesh);
        let p = Point::new(20.0, 5.0);
        assert_eq!(grid.locate(p), Some(NavBox::new(10.0, 20.0, 0.0, 10.0)));
    }

    #[test]
    fn grid_on_empty_mesh() {
        let grid = GridIndex::new(&Mesh::default(), 4, 4);
        assert_eq!(grid.locate(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn grid_dims_clamped() {
        let grid = GridIndex::new(&strip_mesh(), 0, 0);
        assert_eq!(grid.dims(), (1, 1));
    }
}
