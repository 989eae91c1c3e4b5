//! Adaptive point-region quadtree.
//!
//! Each node covers a rectangular region and is either empty, a leaf holding
//! one entity, or internal with exactly four children. Every node carries the
//! total mass and the center of mass of the entities below it, which is what
//! the Barnes–Hut approximation in [`crate::barnes_hut`] feeds on.
mod config;
mod node;
mod tree;
mod collector;
mod traversal;

pub use config::*;
pub use node::*;
pub use tree::*;
pub use collector::*;
pub use traversal::*;

#[cfg(test)]
mod collector_tests;
