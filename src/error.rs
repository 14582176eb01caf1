//! Error types for kdmap

use thiserror::Error;

/// Errors returned by the point tables and geometry constructors
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KdTreeError {
    /// An argument is outside the accepted range (e.g. `k == 0`)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The point lies outside the table's domain rectangle
    #[error("Point ({x}, {y}) lies outside the table domain")]
    OutOfDomain {
        /// x-coordinate of the rejected point
        x: f64,
        /// y-coordinate of the rejected point
        y: f64,
    },

    /// Rectangle bounds are reversed or not comparable
    #[error("Invalid rectangle bounds [{xmin}, {xmax}] x [{ymin}, {ymax}]")]
    InvalidRect {
        /// Requested left bound
        xmin: f64,
        /// Requested bottom bound
        ymin: f64,
        /// Requested right bound
        xmax: f64,
        /// Requested top bound
        ymax: f64,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, KdTreeError>;
