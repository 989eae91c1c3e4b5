//! Gravitational pull between point masses, approximated through the
//! quadtree's aggregated masses or summed directly.
mod approximation;
mod direct;

pub use approximation::*;
pub use direct::*;
