use crate::barnes_hut::approximation::directed;
use crate::barnes_hut::{gravitational_force, Body};
use crate::geometry::Vec2;
use crate::quadtree::{QuadTree, QueryList};
use crate::utils::QuadTreeError;

/// Sums the pull of every other body exactly, in O(n).
///
/// Uses the same per-axis sign convention as [`BarnesHut`](crate::barnes_hut::BarnesHut),
/// so it agrees with a `theta` of zero.
pub fn direct_displacement<T: PartialEq>(bodies: &[Body<T>], body: &Body<T>, gravitational_constant: f64) -> Vec2 {
    bodies
        .iter()
        .filter(|other| other.id != body.id)
        .fold(Vec2::ZERO, |delta, other| {
            let distance = body.position.distance(other.position);
            let force = gravitational_force(body.mass, other.mass, distance, gravitational_constant);
            delta + directed(force, body.position, other.position)
        })
}

/// Sums the pull of the entities within the square window `body.position ± radius`.
///
/// `list` is reset and then used as scratch space for the radius query, so a
/// caller can reuse one list across many bodies.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::barnes_hut::{nearby_displacement, Body};
/// use rs_barnes_hut::geometry::Vec2;
/// use rs_barnes_hut::quadtree::{QuadTree, QueryList};
///
/// let mut tree = QuadTree::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0)).unwrap();
/// tree.insert(0, Vec2::new(10.0, 10.0), 1.0).unwrap();
/// tree.insert(1, Vec2::new(13.0, 14.0), 2.0).unwrap();
/// tree.insert(2, Vec2::new(90.0, 90.0), 5.0).unwrap();
///
/// let mut list = QueryList::new(8).unwrap();
/// let body = Body::new(0, Vec2::new(10.0, 10.0), 1.0);
/// let delta = nearby_displacement(&tree, &body, 20.0, 1.0, &mut list).unwrap();
/// // only entity 1 is close enough
/// assert!((delta.x - 0.08).abs() < 1e-12);
/// ```
pub fn nearby_displacement<T: PartialEq>(
    tree: &QuadTree<T>,
    body: &Body<T>,
    radius: f64,
    gravitational_constant: f64,
    list: &mut QueryList,
) -> Result<Vec2, QuadTreeError> {
    list.reset();
    tree.find_in_radius(body.position, radius, list)?;

    let mut delta = Vec2::ZERO;
    for node in list.nodes(tree) {
        let (Some(id), Some(position)) = (node.payload(), node.position()) else {
            continue;
        };
        if *id == body.id {
            continue;
        }
        let distance = body.position.distance(position);
        let force = gravitational_force(body.mass, node.mass(), distance, gravitational_constant);
        delta += directed(force, body.position, position);
    }
    Ok(delta)
}
