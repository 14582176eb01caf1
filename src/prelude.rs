//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdmap::prelude::*;
//! ```

pub use crate::BruteForce;
pub use crate::KdTree;
pub use crate::KdTreeError;
pub use crate::PointTable;
pub use crate::{Point, Rect};
