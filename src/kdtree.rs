//! 2d-tree symbol table.
//!
//! Nodes live in a single arena (`Vec<Node<V>>`) and refer to their children
//! by index; the root is always at index 0. Every node also stores the
//! rectangle of the plane it is responsible for, which the queries in
//! `queries.rs` use for pruning.
//!
//! Splits alternate strictly: the root compares x, its children compare y, and
//! so on. A point whose coordinate on the split axis is strictly less than the
//! node's goes to the low (left/bottom) child; everything else, ties included,
//! goes to the high (right/top) child. There is no rebalancing, so the shape
//! depends only on insertion order. All traversals use an explicit stack or
//! queue because sorted input produces a tree of linear height.

use std::collections::VecDeque;
use std::mem;

use tracing::{debug, trace};

use crate::error::{KdTreeError, Result};
use crate::geometry::{Point, Rect};

pub(crate) const ROOT: usize = 0;

/// Splitting axis of a node, derived from its depth
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Even depth: vertical split line, compares x
    X,
    /// Odd depth: horizontal split line, compares y
    Y,
}

impl Axis {
    #[inline]
    pub(crate) fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    #[inline]
    pub(crate) fn coord(self, p: &Point) -> f64 {
        match self {
            Self::X => p.x(),
            Self::Y => p.y(),
        }
    }

    /// Part of `rect` on the low side of the split line through `at`
    fn low_half(self, rect: &Rect, at: f64) -> Rect {
        match self {
            Self::X => rect.left_of(at),
            Self::Y => rect.below(at),
        }
    }

    /// Part of `rect` on the high side of the split line through `at`
    fn high_half(self, rect: &Rect, at: f64) -> Rect {
        match self {
            Self::X => rect.right_of(at),
            Self::Y => rect.above(at),
        }
    }
}

/// A stored point with its value, its region, and its children
#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    pub(crate) point: Point,
    pub(crate) value: V,
    /// Region of the plane this subtree is responsible for
    pub(crate) rect: Rect,
    /// Left/bottom subtree
    pub(crate) low: Option<usize>,
    /// Right/top subtree
    pub(crate) high: Option<usize>,
}

impl<V> Node<V> {
    /// Children ordered so the one on the query's side of the split comes first
    #[inline]
    pub(crate) fn children_toward(&self, axis: Axis, query: &Point) -> (Option<usize>, Option<usize>) {
        if axis.coord(query) < axis.coord(&self.point) {
            (self.low, self.high)
        } else {
            (self.high, self.low)
        }
    }
}

/// Symbol table from planar points to values, backed by a 2d-tree
///
/// # Example
///
/// ```
/// use kdmap::prelude::*;
///
/// let mut tree = KdTree::new();
/// tree.put(Point::new(0.1, 0.2), 1).unwrap();
/// tree.put(Point::new(0.5, 0.5), 2).unwrap();
///
/// assert_eq!(tree.get(&Point::new(0.5, 0.5)), Some(&2));
/// assert_eq!(tree.nearest(&Point::new(0.0, 0.0)), Some(Point::new(0.1, 0.2)));
/// ```
#[derive(Clone, Debug)]
pub struct KdTree<V> {
    /// Node arena; index 0 is the root
    pub(crate) nodes: Vec<Node<V>>,
    /// Rectangle owned by the root
    pub(crate) domain: Rect,
}

impl<V> KdTree<V> {
    /// Creates an empty tree over the unit square
    pub fn new() -> Self {
        Self::with_domain(Rect::UNIT)
    }

    /// Creates an empty tree whose root owns `domain`
    ///
    /// Points outside `domain` are rejected by [`put`](Self::put).
    pub fn with_domain(domain: Rect) -> Self {
        Self {
            nodes: Vec::new(),
            domain,
        }
    }

    /// Creates an empty tree over the unit square with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            domain: Rect::UNIT,
        }
    }

    /// The rectangle owned by the root
    pub fn domain(&self) -> Rect {
        self.domain
    }

    /// Number of distinct points stored
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Associates `value` with `point`
    ///
    /// Returns the previous value when `point` was already stored; the value is
    /// replaced and the size is unchanged.
    ///
    /// # Errors
    ///
    /// [`KdTreeError::OutOfDomain`] when `point` lies outside the domain or has a
    /// NaN coordinate; the tree is left unchanged.
    pub fn put(&mut self, point: Point, value: V) -> Result<Option<V>> {
        if !self.domain.contains(&point) {
            debug!(%point, domain = %self.domain, "rejected point outside domain");
            return Err(KdTreeError::OutOfDomain {
                x: point.x(),
                y: point.y(),
            });
        }

        if self.nodes.is_empty() {
            self.push_node(point, value, self.domain, 0);
            return Ok(None);
        }

        let mut index = ROOT;
        let mut axis = Axis::X;
        let mut depth = 0_usize;

        loop {
            let node = &self.nodes[index];
            if node.point == point {
                let old = mem::replace(&mut self.nodes[index].value, value);
                return Ok(Some(old));
            }

            let split = axis.coord(&node.point);
            let goes_low = axis.coord(&point) < split;
            let (slot, rect) = if goes_low {
                (node.low, axis.low_half(&node.rect, split))
            } else {
                (node.high, axis.high_half(&node.rect, split))
            };

            depth += 1;
            match slot {
                Some(child) => {
                    index = child;
                    axis = axis.flip();
                }
                None => {
                    let child = self.push_node(point, value, rect, depth);
                    let parent = &mut self.nodes[index];
                    if goes_low {
                        parent.low = Some(child);
                    } else {
                        parent.high = Some(child);
                    }
                    return Ok(None);
                }
            }
        }
    }

    /// Value associated with `point`
    ///
    /// Lookup follows the insertion path: a point tied with a node on that
    /// node's split axis is searched in the high subtree, where `put` placed it.
    pub fn get(&self, point: &Point) -> Option<&V> {
        self.locate(point).map(|index| &self.nodes[index].value)
    }

    /// Mutable access to the value associated with `point`
    pub fn get_mut(&mut self, point: &Point) -> Option<&mut V> {
        let index = self.locate(point)?;
        Some(&mut self.nodes[index].value)
    }

    /// Whether `point` is stored
    pub fn contains(&self, point: &Point) -> bool {
        self.locate(point).is_some()
    }

    /// Iterates over `(point, value)` pairs in level order
    pub fn iter(&self) -> Iter<'_, V> {
        let mut queue = VecDeque::new();
        if !self.nodes.is_empty() {
            queue.push_back(ROOT);
        }
        Iter { tree: self, queue }
    }

    /// All stored points in level order
    pub fn points(&self) -> Vec<Point> {
        self.iter().map(|(p, _)| p).collect()
    }

    /// Number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut height = 0;
        let mut stack = vec![(ROOT, 1_usize)];
        while let Some((index, level)) = stack.pop() {
            height = height.max(level);
            let node = &self.nodes[index];
            stack.extend(node.low.map(|child| (child, level + 1)));
            stack.extend(node.high.map(|child| (child, level + 1)));
        }
        height
    }

    // --- Private helpers ---

    /// Arena index of the node holding `point`, following the insertion path
    fn locate(&self, point: &Point) -> Option<usize> {
        let mut current = if self.nodes.is_empty() { None } else { Some(ROOT) };
        let mut axis = Axis::X;

        while let Some(index) = current {
            let node = &self.nodes[index];
            if node.point == *point {
                return Some(index);
            }
            // Ties on the split axis were inserted high, so they are searched high
            current = if axis.coord(point) < axis.coord(&node.point) {
                node.low
            } else {
                node.high
            };
            axis = axis.flip();
        }
        None
    }

    fn push_node(&mut self, point: Point, value: V, rect: Rect, depth: usize) -> usize {
        let index = self.nodes.len();
        self.nodes.push(Node {
            point,
            value,
            rect,
            low: None,
            high: None,
        });
        trace!(index, depth, %point, "created node");
        index
    }
}

impl<V> Default for KdTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a KdTree<V> {
    type Item = (Point, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Level-order iterator over the entries of a [`KdTree`]
#[derive(Debug)]
pub struct Iter<'a, V> {
    tree: &'a KdTree<V>,
    queue: VecDeque<usize>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Point, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let node = &self.tree.nodes[index];
        self.queue.extend(node.low);
        self.queue.extend(node.high);
        Some((node.point, &node.value))
    }
}
