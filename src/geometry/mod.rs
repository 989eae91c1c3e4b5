//! Points and axis-aligned rectangles, with the containment, enclosure and
//! overlap predicates used by the quadtree.
mod vector;
mod rect;

pub use vector::*;
pub use rect::*;

#[cfg(test)]
mod geometry_tests;
