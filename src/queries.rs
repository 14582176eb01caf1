//! Query implementations for [`KdTree`]
//!
//! Range, nearest and k-nearest searches. All three walk the tree with an
//! explicit stack and skip any subtree whose rectangle cannot hold an answer.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::{KdTreeError, Result};
use crate::geometry::{Point, Rect};
use crate::kdtree::{Axis, KdTree, ROOT};
use crate::table::PointTable;

/// Candidate for k-nearest search.
/// Max-heap ordering (largest distance on top) so the worst of the best k is
/// always at hand.
struct Candidate {
    point: Point,
    distance_sq: f64,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance_sq.total_cmp(&other.distance_sq)
    }
}

impl<V> KdTree<V> {
    /// All stored points inside `rect` (boundary inclusive)
    ///
    /// Points are returned in traversal order.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut results = Vec::new();
        if self.nodes.is_empty() || !rect.intersects(&self.nodes[ROOT].rect) {
            return results;
        }

        let mut stack = vec![ROOT];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if rect.contains(&node.point) {
                results.push(node.point);
            }
            // A child's rectangle is a subset of its parent's, so testing the
            // children individually never drops a point the parent test keeps
            for child in [node.high, node.low].into_iter().flatten() {
                if rect.intersects(&self.nodes[child].rect) {
                    stack.push(child);
                }
            }
        }
        results
    }

    /// A closest stored point to `query`; `None` if the tree is empty
    ///
    /// When several points are equally close, the first one reached wins.
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        self.nearest_index(query).map(|index| self.nodes[index].point)
    }

    /// Like [`nearest`](Self::nearest) but also returns the stored value
    pub fn nearest_entry(&self, query: &Point) -> Option<(Point, &V)> {
        self.nearest_index(query).map(|index| {
            let node = &self.nodes[index];
            (node.point, &node.value)
        })
    }

    /// The `min(k, len)` stored points closest to `query`, closest first
    ///
    /// When `k` exceeds the number of stored points, every point is returned.
    ///
    /// # Errors
    ///
    /// [`KdTreeError::InvalidArgument`] when `k == 0`.
    pub fn nearest_k(&self, query: &Point, k: usize) -> Result<Vec<Point>> {
        if k == 0 {
            debug!("rejected nearest_k with k = 0");
            return Err(KdTreeError::InvalidArgument(
                "k must be at least 1".to_string(),
            ));
        }
        if self.nodes.is_empty() {
            return Ok(Vec::new());
        }

        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k.min(self.len()) + 1);
        let mut stack = vec![(ROOT, Axis::X)];
        let mut visited = 0_usize;

        while let Some((index, axis)) = stack.pop() {
            let node = &self.nodes[index];

            // Only a full set has a meaningful worst distance to prune against
            if heap.len() >= k {
                if let Some(worst) = heap.peek() {
                    if node.rect.distance_squared_to(query) > worst.distance_sq {
                        continue;
                    }
                }
            }
            visited += 1;

            let distance_sq = node.point.distance_squared_to(query);
            if heap.len() < k {
                heap.push(Candidate {
                    point: node.point,
                    distance_sq,
                });
            } else if heap.peek().is_some_and(|worst| distance_sq < worst.distance_sq) {
                heap.pop();
                heap.push(Candidate {
                    point: node.point,
                    distance_sq,
                });
            }

            // Far child goes on the stack first so the near side is searched first
            let (near, far) = node.children_toward(axis, query);
            stack.extend(far.map(|child| (child, axis.flip())));
            stack.extend(near.map(|child| (child, axis.flip())));
        }

        // Pushes only happen below capacity or right after a pop
        debug_assert!(heap.len() <= k, "k-nearest heap grew past k");
        trace!(k, found = heap.len(), visited, "nearest_k finished");

        // into_sorted_vec is ascending, i.e. closest first
        Ok(heap.into_sorted_vec().into_iter().map(|c| c.point).collect())
    }

    // --- Private helpers ---

    fn nearest_index(&self, query: &Point) -> Option<usize> {
        let root = self.nodes.first()?;
        let mut best = ROOT;
        let mut best_distance_sq = root.point.distance_squared_to(query);
        let mut stack = vec![(ROOT, Axis::X)];
        let mut visited = 0_usize;

        while let Some((index, axis)) = stack.pop() {
            let node = &self.nodes[index];
            if index != ROOT && node.rect.distance_squared_to(query) >= best_distance_sq {
                continue;
            }
            visited += 1;

            let distance_sq = node.point.distance_squared_to(query);
            if distance_sq < best_distance_sq {
                best = index;
                best_distance_sq = distance_sq;
            }

            let (near, far) = node.children_toward(axis, query);
            stack.extend(far.map(|child| (child, axis.flip())));
            stack.extend(near.map(|child| (child, axis.flip())));
        }

        trace!(visited, best_distance_sq, "nearest finished");
        Some(best)
    }
}

impl<V> PointTable<V> for KdTree<V> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn put(&mut self, point: Point, value: V) -> Result<Option<V>> {
        Self::put(self, point, value)
    }

    fn get(&self, point: &Point) -> Option<&V> {
        Self::get(self, point)
    }

    fn contains(&self, point: &Point) -> bool {
        Self::contains(self, point)
    }

    fn points(&self) -> Vec<Point> {
        Self::points(self)
    }

    fn range(&self, rect: &Rect) -> Vec<Point> {
        Self::range(self, rect)
    }

    fn nearest(&self, point: &Point) -> Option<Point> {
        Self::nearest(self, point)
    }

    fn nearest_k(&self, point: &Point, k: usize) -> Result<Vec<Point>> {
        Self::nearest_k(self, point, k)
    }
}
