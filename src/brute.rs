//! Brute-force point table (reference implementation)
//!
//! Stores entries in an ordered map and answers every query with a linear
//! scan. Used to cross-check [`KdTree`](crate::KdTree).

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{KdTreeError, Result};
use crate::geometry::{Point, Rect};
use crate::table::PointTable;

/// Point table backed by a `BTreeMap`, O(n) queries
///
/// Accepts exactly the points a [`KdTree`](crate::KdTree) over the same domain
/// accepts.
#[derive(Clone, Debug)]
pub struct BruteForce<V> {
    entries: BTreeMap<Point, V>,
    domain: Rect,
}

impl<V> BruteForce<V> {
    /// Creates an empty table over the unit square
    pub fn new() -> Self {
        Self::with_domain(Rect::UNIT)
    }

    /// Creates an empty table accepting only points inside `domain`
    pub fn with_domain(domain: Rect) -> Self {
        Self {
            entries: BTreeMap::new(),
            domain,
        }
    }

    /// The rectangle points must lie in
    pub fn domain(&self) -> Rect {
        self.domain
    }

    /// Entries sorted by point (x, then y)
    pub fn iter(&self) -> impl Iterator<Item = (Point, &V)> {
        self.entries.iter().map(|(p, v)| (*p, v))
    }
}

impl<V> Default for BruteForce<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PointTable<V> for BruteForce<V> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn put(&mut self, point: Point, value: V) -> Result<Option<V>> {
        if !self.domain.contains(&point) {
            debug!(%point, domain = %self.domain, "rejected point outside domain");
            return Err(KdTreeError::OutOfDomain {
                x: point.x(),
                y: point.y(),
            });
        }
        Ok(self.entries.insert(point, value))
    }

    fn get(&self, point: &Point) -> Option<&V> {
        self.entries.get(point)
    }

    fn points(&self) -> Vec<Point> {
        self.entries.keys().copied().collect()
    }

    fn range(&self, rect: &Rect) -> Vec<Point> {
        self.entries.keys().filter(|p| rect.contains(p)).copied().collect()
    }

    fn nearest(&self, point: &Point) -> Option<Point> {
        self.entries
            .keys()
            .min_by(|a, b| {
                a.distance_squared_to(point)
                    .total_cmp(&b.distance_squared_to(point))
            })
            .copied()
    }

    fn nearest_k(&self, point: &Point, k: usize) -> Result<Vec<Point>> {
        if k == 0 {
            debug!("rejected nearest_k with k = 0");
            return Err(KdTreeError::InvalidArgument(
                "k must be at least 1".to_string(),
            ));
        }
        let mut distances: Vec<(f64, Point)> = self
            .entries
            .keys()
            .map(|p| (p.distance_squared_to(point), *p))
            .collect();
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));
        distances.truncate(k);
        Ok(distances.into_iter().map(|(_, p)| p).collect())
    }
}
