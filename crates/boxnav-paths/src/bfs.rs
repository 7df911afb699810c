use std::collections::{HashMap, VecDeque};

use boxnav_core::{NavBox, Point};

use crate::config::WaypointMode;
use crate::error::PathError;
use crate::search::{BoxPaths, Explored, SearchResult};
use crate::traits::{BoxGraph, Locator};
use crate::waypoint::{centroid, project};

impl<G: BoxGraph, L: Locator> BoxPaths<'_, G, L> {
    /// Breadth-first search: the path through the fewest boxes.
    ///
    /// Hop counts are assigned outward from the source box until the
    /// destination box is dequeued. The path is then rebuilt backward, each
    /// step moving to the first listed neighbor whose hop count is exactly one
    /// less, and placing a waypoint in that box according to
    /// [`PathConfig::waypoints`](crate::PathConfig::waypoints). Ties are
    /// broken by adjacency order, not by distance.
    ///
    /// The explored map holds every discovered box with its hop count.
    pub fn bfs_path(&self, from: Point, to: Point) -> SearchResult {
        let (src, dst) = match self.endpoints(from, to) {
            Ok(ends) => ends,
            Err(e) => return SearchResult::failed(e, Explored::new()),
        };

        let mut hops: HashMap<NavBox, usize> = HashMap::new();
        let mut queue: VecDeque<NavBox> = VecDeque::new();
        hops.insert(src, 0);
        queue.push_back(src);

        let found = 'search: loop {
            let Some(cur) = queue.pop_front() else {
                break 'search false;
            };
            if cur == dst {
                break 'search true;
            }
            let next = hops[&cur] + 1;
            for &n in self.graph.neighbors(&cur) {
                if hops.contains_key(&n) {
                    continue;
                }
                hops.insert(n, next);
                queue.push_back(n);
            }
        };

        let explored: Explored = hops.iter().map(|(b, &h)| (*b, h as f64)).collect();
        if !found {
            return SearchResult::failed(PathError::NoPathFound, explored);
        }

        match self.bfs_reconstruct(&hops, src, dst, from, to) {
            Ok(path) => SearchResult::found(path, explored),
            Err(e) => SearchResult::failed(e, explored),
        }
    }

    /// Walk from `dst` back to `src` along strictly decreasing hop counts.
    fn bfs_reconstruct(
        &self,
        hops: &HashMap<NavBox, usize>,
        src: NavBox,
        dst: NavBox,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, PathError> {
        let mut path = vec![to];
        let mut cur = dst;
        let mut cur_hops = hops[&dst];

        while cur != src {
            let Some(&prev) = self
                .graph
                .neighbors(&cur)
                .iter()
                .find(|n| cur_hops > 0 && hops.get(*n) == Some(&(cur_hops - 1)))
            else {
                log::trace!("bfs: no predecessor for {cur} at hop {cur_hops}");
                return Err(PathError::NoPathFound);
            };

            let last = path[path.len() - 1];
            path.push(match self.config.waypoints {
                WaypointMode::ClosestPoint => project(last, &prev),
                WaypointMode::Centroid => centroid(&prev),
            });
            cur = prev;
            cur_hops -= 1;
        }

        path.push(from);
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use boxnav_core::{Mesh, NavBox, Point};

    use crate::config::{PathConfig, Strategy, WaypointMode};
    use crate::error::PathError;
    use crate::search::BoxPaths;
    use crate::search::fixtures::{corridor_with_detour, two_boxes};

    #[test]
    fn hop_counts_in_explored() {
        let mesh = corridor_with_detour();
        let res = BoxPaths::new(&mesh).bfs_path(Point::new(5.0, 5.0), Point::new(45.0, 5.0));
        let b = mesh.boxes();
        assert_eq!(res.explored[&b[0]], 0.0);
        assert_eq!(res.explored[&b[1]], 1.0);
        assert_eq!(res.explored[&b[8]], 1.0);
        assert_eq!(res.explored[&b[7]], 4.0);
    }

    #[test]
    fn takes_fewest_boxes() {
        let mesh = corridor_with_detour();
        let res = BoxPaths::new(&mesh).bfs_path(Point::new(5.0, 5.0), Point::new(45.0, 5.0));
        assert_eq!(
            res.path,
            Ok(vec![
                Point::new(5.0, 5.0),
                Point::new(10.0, 10.0),
                Point::new(10.0, 50.0),
                Point::new(45.0, 50.0),
                Point::new(45.0, 10.0),
                Point::new(45.0, 5.0),
            ])
        );
    }

    #[test]
    fn centroid_waypoints() {
        let mesh = two_boxes();
        let res = BoxPaths::new(&mesh)
            .with_config(PathConfig {
                strategy: Strategy::Bfs,
                waypoints: WaypointMode::Centroid,
            })
            .find_path(Point::new(1.0, 1.0), Point::new(19.0, 9.0));
        assert_eq!(
            res.path,
            Ok(vec![
                Point::new(1.0, 1.0),
                Point::new(5.0, 5.0),
                Point::new(19.0, 9.0),
            ])
        );
    }

    #[test]
    fn first_listed_predecessor_wins() {
        // S has two routes of equal hop count to D, via U (listed first on D)
        // and via W.
        let s = NavBox::new(0.0, 10.0, 0.0, 10.0);
        let u = NavBox::new(10.0, 20.0, 0.0, 5.0);
        let w = NavBox::new(10.0, 20.0, 5.0, 10.0);
        let d = NavBox::new(20.0, 30.0, 0.0, 10.0);
        let mesh = Mesh::new(
            vec![s, u, w, d],
            HashMap::from([
                (s, vec![w, u]),
                (u, vec![s, d]),
                (w, vec![s, d]),
                (d, vec![u, w]),
            ]),
        );
        let res = BoxPaths::new(&mesh).bfs_path(Point::new(5.0, 9.0), Point::new(25.0, 9.0));
        let path = res.points();
        // Waypoint inside U, even though W is the straighter route.
        assert_eq!(path[1], Point::new(10.0, 5.0));
        assert_eq!(path[2], Point::new(20.0, 5.0));
    }

    #[test]
    fn missing_predecessor_is_no_path() {
        // A lists B, but B does not list A back.
        let a = NavBox::new(0.0, 10.0, 0.0, 10.0);
        let b = NavBox::new(10.0, 20.0, 0.0, 10.0);
        let mesh = Mesh::new(vec![a, b], HashMap::from([(a, vec![b])]));
        let res = BoxPaths::new(&mesh).bfs_path(Point::new(5.0, 5.0), Point::new(15.0, 5.0));
        assert_eq!(res.path, Err(PathError::NoPathFound));
        assert_eq!(res.explored.len(), 2);
    }
}
