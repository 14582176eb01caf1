//! The point symbol-table interface shared by [`KdTree`](crate::KdTree) and
//! [`BruteForce`](crate::BruteForce).

use crate::error::Result;
use crate::geometry::{Point, Rect};

/// A symbol table keyed by planar points
///
/// Absence is reported with `None`, never with an error. Sequences returned by
/// [`points`](PointTable::points), [`range`](PointTable::range) and
/// [`nearest_k`](PointTable::nearest_k) have implementation-defined order.
pub trait PointTable<V> {
    /// Number of distinct points stored
    fn len(&self) -> usize;

    /// Whether the table holds no points
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Associates `value` with `point`
    ///
    /// Re-inserting a stored point replaces its value and returns the previous
    /// one; the table size does not change.
    ///
    /// # Errors
    ///
    /// [`OutOfDomain`](crate::KdTreeError::OutOfDomain) when `point` lies outside
    /// the table's domain rectangle (NaN coordinates included); the table is
    /// left unchanged.
    fn put(&mut self, point: Point, value: V) -> Result<Option<V>>;

    /// Value associated with `point`
    fn get(&self, point: &Point) -> Option<&V>;

    /// Whether `point` is stored
    fn contains(&self, point: &Point) -> bool {
        self.get(point).is_some()
    }

    /// All stored points
    fn points(&self) -> Vec<Point>;

    /// All stored points inside `rect` (boundary inclusive)
    fn range(&self, rect: &Rect) -> Vec<Point>;

    /// A closest stored point to `point`; `None` if the table is empty
    fn nearest(&self, point: &Point) -> Option<Point>;

    /// The `min(k, len)` stored points closest to `point`
    ///
    /// # Errors
    ///
    /// [`InvalidArgument`](crate::KdTreeError::InvalidArgument) when `k == 0`.
    fn nearest_k(&self, point: &Point, k: usize) -> Result<Vec<Point>>;
}
