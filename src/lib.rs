//! An adaptive point-region quadtree that tracks mass and center of mass per
//! node, with a Barnes–Hut force approximation built on top of it.
pub mod utils;
pub mod geometry;
pub mod quadtree;
pub mod barnes_hut;
#[cfg(feature = "simulation")]
pub mod simulation;

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::assert_float_eq;
///
/// assert_float_eq(0.1 + 0.2, 0.3, 1e-12, Some("sum"));
/// ```
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}
