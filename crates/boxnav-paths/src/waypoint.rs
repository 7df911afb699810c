use boxnav_core::{NavBox, Point};

/// Closest point of `b` to `p`: each coordinate clamped to the box bounds.
///
/// Used as the crossing point when a path enters `b`. This approximates the
/// best crossing on the shared border rather than computing it exactly.
#[inline]
pub fn project(p: Point, b: &NavBox) -> Point {
    b.closest_point(p)
}

/// Centre of `b`.
#[inline]
pub fn centroid(b: &NavBox) -> Point {
    b.center()
}

/// Sum of Euclidean segment lengths along `path`.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn project_onto_neighbor() {
        let b = NavBox::new(10.0, 20.0, 0.0, 10.0);
        assert_eq!(project(Point::new(1.0, 1.0), &b), Point::new(10.0, 1.0));
        assert_eq!(project(Point::new(1.0, 15.0), &b), Point::new(10.0, 10.0));
        assert_eq!(project(Point::new(15.0, 5.0), &b), Point::new(15.0, 5.0));
    }

    #[test]
    fn centroid_of_box() {
        assert_eq!(
            centroid(&NavBox::new(0.0, 4.0, 2.0, 6.0)),
            Point::new(2.0, 4.0)
        );
    }

    #[test]
    fn length_of_path() {
        let path = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 10.0),
        ];
        assert_relative_eq!(path_length(&path), 11.0);
        assert_relative_eq!(path_length(&path[..1]), 0.0);
        assert_relative_eq!(path_length(&[]), 0.0);
    }
}
