//! # kdmap - 2d-tree Point Symbol Table
//!
//! A Rust library mapping points in the plane to values, backed by a 2d-tree
//! (a k-d tree with k = 2), with range and nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Symbol table**: `put`, `get`, `contains` keyed by exact point equality
//! - **Range queries**: every point inside an axis-aligned rectangle
//! - **Nearest neighbor**: the single closest point, or the k closest points
//! - **Rectangle pruning**: every node knows the region it owns, so searches skip
//!   subtrees that cannot contribute
//! - **No recursion**: traversals use explicit stacks, so degenerate (sorted)
//!   insertion orders cannot overflow the call stack
//!
//! ## Quick Start
//!
//! ```rust
//! use kdmap::prelude::*;
//!
//! // Create a new table over the unit square
//! let mut tree = KdTree::new();
//!
//! tree.put(Point::new(0.1, 0.2), 1).unwrap();
//! tree.put(Point::new(0.5, 0.5), 2).unwrap();
//! tree.put(Point::new(0.9, 0.1), 3).unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.get(&Point::new(0.5, 0.5)), Some(&2));
//!
//! // Points inside a rectangle (min_x, min_y, max_x, max_y)
//! let rect = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
//! let mut inside = tree.range(&rect);
//! inside.sort();
//! assert_eq!(inside, vec![Point::new(0.1, 0.2), Point::new(0.5, 0.5)]);
//!
//! // Nearest point, and the 2 nearest points
//! assert_eq!(tree.nearest(&Point::new(0.8, 0.2)), Some(Point::new(0.9, 0.1)));
//! let two = tree.nearest_k(&Point::new(0.0, 0.0), 2).unwrap();
//! assert_eq!(two.len(), 2);
//! assert!(!two.contains(&Point::new(0.9, 0.1)));
//! ```
//!
//! ## How It Works
//!
//! The root splits the plane with a vertical line through its point, its
//! children split their halves with horizontal lines, and so on, alternating.
//! Each node records the rectangle it is responsible for. A range query only
//! descends into children whose rectangle meets the query; a nearest query
//! only descends into children whose rectangle is closer than the best
//! candidate found so far, visiting the side containing the query first.
//!
//! The tree is never rebalanced, so its shape depends on insertion order.
//! Re-inserting a stored point replaces its value.

pub mod brute;
pub mod error;
pub mod geometry;
pub mod kdtree;
pub mod prelude;
mod queries;
pub mod table;

pub use brute::BruteForce;
pub use error::{KdTreeError, Result};
pub use geometry::{Point, Rect};
pub use kdtree::{Iter, KdTree};
pub use table::PointTable;

#[cfg(test)]
mod comparison_tests;
