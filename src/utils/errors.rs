use std::fmt;
use std::error::Error;

/// Represents errors that can occur while building or querying a quadtree.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadTreeError {
    /// The position lies outside the region covered by the tree.
    OutOfBounds { x: f64, y: f64 },
    /// Growing the node arena or a result buffer failed.
    AllocationFailure,
    /// Two positions could not be separated before reaching the maximum tree depth.
    DepthLimitExceeded { depth: usize },
    /// The tree region is empty or inverted (northwest corner not above-left of southeast).
    InvalidBounds,
    /// Indicates an invalid mass value (negative, NaN or infinite).
    InvalidMass(f64),
    /// A general error for parameters outside their valid range.
    InvalidParameter(String),
}

impl fmt::Display for QuadTreeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadTreeError::OutOfBounds { x, y } => write!(f, "Position ({}, {}) is outside the tree bounds", x, y),
            QuadTreeError::AllocationFailure => write!(f, "Failed to allocate memory for quadtree nodes"),
            QuadTreeError::DepthLimitExceeded { depth } => write!(f, "Maximum tree depth of {} exceeded", depth),
            QuadTreeError::InvalidBounds => write!(f, "Invalid tree bounds"),
            QuadTreeError::InvalidMass(mass) => write!(f, "Invalid mass value: {}", mass),
            QuadTreeError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}


impl Error for QuadTreeError {}
