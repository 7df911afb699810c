//! Geometry primitives: [`Point`] and [`NavBox`].

use std::fmt;
use std::hash::{Hash, Hasher};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A real-valued 2D point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// NavBox
// ---------------------------------------------------------------------------

/// An axis-aligned rectangular cell with **inclusive** bounds on both axes.
///
/// Identity is structural: two boxes with the same four bounds are the same
/// graph node, so `NavBox` is used directly as a map key. `-0.0` and `0.0`
/// compare and hash equal. Bounds are expected to be finite.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(f64, f64, f64, f64)", into = "(f64, f64, f64, f64)")
)]
pub struct NavBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl NavBox {
    /// Create a box from `(xmin, xmax, ymin, ymax)`, swapping bounds so that
    /// `min <= max` on each axis.
    #[inline]
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        debug_assert!(
            [x0, x1, y0, y1].iter().all(|v| !v.is_nan()),
            "NavBox bounds must not be NaN"
        );
        Self {
            xmin: x0.min(x1),
            xmax: x0.max(x1),
            ymin: y0.min(y1),
            ymax: y0.max(y1),
        }
    }

    /// Width along x.
    #[inline]
    pub fn width(self) -> f64 {
        self.xmax - self.xmin
    }

    /// Height along y.
    #[inline]
    pub fn height(self) -> f64 {
        self.ymax - self.ymin
    }

    /// Whether `p` lies within the inclusive bounds on both axes.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.xmin <= p.x && p.x <= self.xmax && self.ymin <= p.y && p.y <= self.ymax
    }

    /// The point of the box closest to `p`, found by clamping each axis
    /// independently. Returns `p` itself when it is already inside.
    #[inline]
    pub fn closest_point(self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.xmin, self.xmax),
            p.y.clamp(self.ymin, self.ymax),
        )
    }

    /// Centre of the box.
    #[inline]
    pub fn center(self) -> Point {
        Point::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    /// Smallest box containing both boxes.
    #[inline]
    pub fn union(self, other: NavBox) -> Self {
        Self {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
        }
    }

    /// Bit patterns of the four bounds with `-0.0` folded into `0.0`.
    #[inline]
    fn key(self) -> [u64; 4] {
        // Adding 0.0 turns -0.0 into +0.0 and leaves every other value alone.
        [
            (self.xmin + 0.0).to_bits(),
            (self.xmax + 0.0).to_bits(),
            (self.ymin + 0.0).to_bits(),
            (self.ymax + 0.0).to_bits(),
        ]
    }
}

impl PartialEq for NavBox {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for NavBox {}

impl Hash for NavBox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for NavBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}..{} x {}..{}]",
            self.xmin, self.xmax, self.ymin, self.ymax
        )
    }
}

impl From<(f64, f64, f64, f64)> for NavBox {
    #[inline]
    fn from((x0, x1, y0, y1): (f64, f64, f64, f64)) -> Self {
        Self::new(x0, x1, y0, y1)
    }
}

impl From<NavBox> for (f64, f64, f64, f64) {
    #[inline]
    fn from(b: NavBox) -> Self {
        (b.xmin, b.xmax, b.ymin, b.ymax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn point_distance() {
        assert_relative_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
        assert_relative_eq!(Point::new(2.0, 2.0).distance(Point::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn box_auto_canonicalize() {
        let b = NavBox::new(10.0, 0.0, 5.0, -5.0);
        assert_eq!(b, NavBox::new(0.0, 10.0, -5.0, 5.0));
        assert_relative_eq!(b.width(), 10.0);
        assert_relative_eq!(b.height(), 10.0);
    }

    #[test]
    fn contains_is_inclusive() {
        let b = NavBox::new(0.0, 10.0, 0.0, 10.0);
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(10.0, 10.0)));
        assert!(b.contains(Point::new(10.0, 3.0)));
        assert!(b.contains(Point::new(5.0, 5.0)));
        assert!(!b.contains(Point::new(10.000_001, 5.0)));
        assert!(!b.contains(Point::new(5.0, -0.5)));
    }

    #[test]
    fn closest_point_clamps_each_axis() {
        let b = NavBox::new(10.0, 20.0, 0.0, 10.0);
        assert_eq!(b.closest_point(Point::new(1.0, 1.0)), Point::new(10.0, 1.0));
        assert_eq!(b.closest_point(Point::new(25.0, 15.0)), Point::new(20.0, 10.0));
        assert_eq!(b.closest_point(Point::new(12.0, 3.0)), Point::new(12.0, 3.0));
    }

    #[test]
    fn center_and_union() {
        let a = NavBox::new(0.0, 10.0, 0.0, 4.0);
        let b = NavBox::new(10.0, 20.0, -2.0, 2.0);
        assert_eq!(a.center(), Point::new(5.0, 2.0));
        assert_eq!(a.union(b), NavBox::new(0.0, 20.0, -2.0, 4.0));
    }

    #[test]
    fn structural_identity() {
        let mut set = HashSet::new();
        set.insert(NavBox::new(0.0, 1.0, 0.0, 1.0));
        set.insert(NavBox::new(0.0, 1.0, 0.0, 1.0));
        set.insert(NavBox::new(-0.0, 1.0, 0.0, 1.0));
        assert_eq!(set.len(), 1);
        set.insert(NavBox::new(0.0, 2.0, 0.0, 1.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
        assert_eq!(NavBox::new(0.0, 1.0, 2.0, 3.0).to_string(), "[0..1 x 2..3]");
    }
}
