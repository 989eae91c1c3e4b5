use crate::geometry::Vec2;
use crate::quadtree::{NodeId, QuadTree};

/// A point mass looking up the pull of everything stored in a tree.
///
/// `id` is compared against the payloads of the tree's leaves so a body
/// stored in the tree never attracts itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body<T> {
    pub id: T,
    pub position: Vec2,
    pub mass: f64,
}

impl<T> Body<T> {
    pub fn new(id: T, position: Vec2, mass: f64) -> Self {
        Body { id, position, mass }
    }
}

/// Newton's law of universal gravitation, `G * m1 * m2 / r²`.
///
/// Coincident points (`r == 0`) exert no force.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::barnes_hut::gravitational_force;
///
/// assert_eq!(gravitational_force(1.0, 2.0, 5.0, 1.0), 0.08);
/// assert_eq!(gravitational_force(1.0, 2.0, 0.0, 1.0), 0.0);
/// ```
pub fn gravitational_force(mass1: f64, mass2: f64, distance: f64, gravitational_constant: f64) -> f64 {
    if distance == 0.0 {
        return 0.0;
    }
    gravitational_constant * mass1 * mass2 / (distance * distance)
}

/// Applies `force` on each axis towards `target`.
///
/// The sign is chosen per axis: positive when `from` lies below `target` on
/// that axis, negative otherwise (including when both coordinates are equal).
/// The magnitude is not split between the axes.
pub(crate) fn directed(force: f64, from: Vec2, target: Vec2) -> Vec2 {
    Vec2::new(
        if from.x < target.x { force } else { -force },
        if from.y < target.y { force } else { -force },
    )
}

/// Barnes–Hut approximation of the gravitational pull on a body.
///
/// A subtree whose height `s` seen from distance `r` satisfies `s / r < theta`
/// is treated as a single mass at its center of mass. `theta == 0` never
/// approximates and matches direct summation.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::barnes_hut::{BarnesHut, Body};
/// use rs_barnes_hut::geometry::Vec2;
/// use rs_barnes_hut::quadtree::QuadTree;
///
/// let mut tree = QuadTree::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)).unwrap();
/// tree.insert(0, Vec2::new(1.0, 1.0), 1.0).unwrap();
/// tree.insert(1, Vec2::new(4.0, 5.0), 2.0).unwrap();
///
/// let bh = BarnesHut::new(0.5, 1.0);
/// let delta = bh.displacement(&tree, &Body::new(0, Vec2::new(1.0, 1.0), 1.0));
/// assert!((delta.x - 0.08).abs() < 1e-12);
/// assert!((delta.y - 0.08).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarnesHut {
    /// Opening angle threshold, non-negative.
    pub theta: f64,
    pub gravitational_constant: f64,
}

impl BarnesHut {
    pub fn new(theta: f64, gravitational_constant: f64) -> Self {
        BarnesHut {
            theta,
            gravitational_constant,
        }
    }

    /// Displacement of `body` caused by every entity in `tree`.
    pub fn displacement<T: PartialEq>(&self, tree: &QuadTree<T>, body: &Body<T>) -> Vec2 {
        self.displacement_from(tree, tree.root(), body)
    }

    /// Displacement of `body` caused by the entities below `node`.
    pub fn displacement_from<T: PartialEq>(&self, tree: &QuadTree<T>, node: NodeId, body: &Body<T>) -> Vec2 {
        let current = tree.node(node);
        if current.is_empty() {
            return Vec2::ZERO;
        }
        if current.payload() == Some(&body.id) {
            return Vec2::ZERO;
        }

        let com = current.center_of_mass();
        let distance = body.position.distance(com);

        if current.is_leaf() {
            let force = gravitational_force(body.mass, current.mass(), distance, self.gravitational_constant);
            return directed(force, body.position, com);
        }

        let ratio = if distance == 0.0 {
            0.0
        } else {
            current.bounds().height() / distance
        };
        if ratio < self.theta {
            let force = gravitational_force(body.mass, current.mass(), distance, self.gravitational_constant);
            return directed(force, body.position, com);
        }

        let mut delta = Vec2::ZERO;
        if let Some(children) = current.children() {
            for child in children {
                delta += self.displacement_from(tree, child, body);
            }
        }
        delta
    }
}
