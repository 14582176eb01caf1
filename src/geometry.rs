//! Planar point and axis-aligned rectangle primitives.
//!
//! Both types are plain `Copy` values. [`Rect`] uses the same axis-distance
//! computation as box-to-point distance in R-tree nearest queries: the
//! distance along each axis is zero inside the interval and the gap to the
//! closer bound outside it.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{KdTreeError, Result};

/// A point in the plane
///
/// Equality and ordering are lexicographic (x first, then y) and total, so
/// points can key ordered maps. `-0.0` is stored as `0.0`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    pub fn new(x: f64, y: f64) -> Self {
        // Adding positive zero turns -0.0 into 0.0 and leaves everything else alone
        Self { x: x + 0.0, y: y + 0.0 }
    }

    /// The x-coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y-coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to `other`
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// True when both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle: `xmin`, `ymin`, `xmax`, `ymax`
///
/// Bounds are inclusive on every side.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// The unit square [0, 1] x [0, 1], the default tree domain
    pub const UNIT: Self = Self {
        xmin: 0.0,
        ymin: 0.0,
        xmax: 1.0,
        ymax: 1.0,
    };

    /// Creates a rectangle from (`min_x`, `min_y`, `max_x`, `max_y`)
    ///
    /// # Errors
    ///
    /// [`KdTreeError::InvalidRect`] if a minimum exceeds its maximum or a bound is NaN.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        // Negated form so NaN bounds are rejected too
        if !(xmin <= xmax && ymin <= ymax) {
            return Err(KdTreeError::InvalidRect { xmin, ymin, xmax, ymax });
        }
        Ok(Self { xmin, ymin, xmax, ymax })
    }

    /// Left bound
    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Bottom bound
    #[inline]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Right bound
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Top bound
    #[inline]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Extent along x
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along y
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Whether `p` lies inside or on the boundary
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Whether the two rectangles overlap; touching boundaries count
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.xmax >= other.xmin
            && self.ymax >= other.ymin
            && other.xmax >= self.xmin
            && other.ymax >= self.ymin
    }

    /// Squared distance from `p` to the closest point of the rectangle (0 inside)
    #[inline]
    pub fn distance_squared_to(&self, p: &Point) -> f64 {
        let dx = axis_distance(p.x, self.xmin, self.xmax);
        let dy = axis_distance(p.y, self.ymin, self.ymax);
        dx * dx + dy * dy
    }

    /// Distance from `p` to the closest point of the rectangle (0 inside)
    #[inline]
    pub fn distance_to(&self, p: &Point) -> f64 {
        self.distance_squared_to(p).sqrt()
    }

    /// Part of the rectangle left of the vertical line `x = at`
    pub(crate) fn left_of(&self, at: f64) -> Self {
        Self { xmax: at, ..*self }
    }

    /// Part of the rectangle right of the vertical line `x = at`
    pub(crate) fn right_of(&self, at: f64) -> Self {
        Self { xmin: at, ..*self }
    }

    /// Part of the rectangle below the horizontal line `y = at`
    pub(crate) fn below(&self, at: f64) -> Self {
        Self { ymax: at, ..*self }
    }

    /// Part of the rectangle above the horizontal line `y = at`
    pub(crate) fn above(&self, at: f64) -> Self {
        Self { ymin: at, ..*self }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}

/// Get distance along an axis
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}
