use std::fmt;

use crate::geometry::{Quadrant, Rect, Vec2};

/// Handle of a node inside the arena of its [`QuadTree`](crate::quadtree::QuadTree).
///
/// Handles are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root is always the first node of the arena.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// The structural state of a node, derived from its children and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// No children and no entity.
    Empty,
    /// No children and exactly one entity.
    Leaf,
    /// Exactly four children and no entity.
    Internal,
}

/// A single quadrant of the tree.
///
/// `mass` and `center_of_mass` aggregate every entity below this node; for a
/// leaf they equal the stored entity's mass and position.
#[derive(Debug, Clone)]
pub struct QuadNode<T> {
    pub(crate) bounds: Rect,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Option<[NodeId; 4]>,
    pub(crate) depth: usize,
    pub(crate) position: Vec2,
    pub(crate) payload: Option<T>,
    pub(crate) mass: f64,
    pub(crate) center_of_mass: Vec2,
}

impl<T> QuadNode<T> {
    pub(crate) fn new(bounds: Rect, parent: Option<NodeId>, depth: usize) -> Self {
        QuadNode {
            bounds,
            parent,
            children: None,
            depth,
            position: Vec2::ZERO,
            payload: None,
            mass: 0.0,
            center_of_mass: Vec2::ZERO,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The enclosing node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The nw, ne, sw and se children of an internal node.
    pub fn children(&self) -> Option<[NodeId; 4]> {
        self.children
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeId> {
        self.children.map(|children| children[quadrant.index()])
    }

    /// Distance from the root, which has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Position of the stored entity, only for leaves.
    pub fn position(&self) -> Option<Vec2> {
        self.payload.as_ref().map(|_| self.position)
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn center_of_mass(&self) -> Vec2 {
        self.center_of_mass
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_none() && self.payload.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none() && self.payload.is_some()
    }

    pub fn is_internal(&self) -> bool {
        self.children.is_some() && self.payload.is_none()
    }

    pub fn state(&self) -> NodeState {
        match (&self.children, &self.payload) {
            (None, None) => NodeState::Empty,
            (None, Some(_)) => NodeState::Leaf,
            (Some(_), _) => NodeState::Internal,
        }
    }

    /// Folds `mass` at `position` into the running mass-weighted average.
    ///
    /// A negative `mass` removes a previous contribution. The center of mass
    /// is left untouched when the total drops to zero.
    pub(crate) fn add_mass(&mut self, position: Vec2, mass: f64) {
        let total = self.mass + mass;
        if total != 0.0 {
            self.center_of_mass = (self.center_of_mass * self.mass + position * mass) / total;
        }
        self.mass = total;
    }
}

fn flag(present: bool) -> char {
    if present { 'y' } else { '-' }
}

impl<T: fmt::Debug> fmt::Display for QuadNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}, depth: {}, parent: '{}', ", self.bounds, self.depth, flag(self.parent.is_some()))?;
        for quadrant in Quadrant::ALL {
            write!(f, "{}: '{}', ", quadrant.label(), flag(self.child(quadrant).is_some()))?;
        }
        write!(f, "mass: {:.3}, com: {}, ", self.mass, self.center_of_mass)?;
        match &self.payload {
            Some(payload) => write!(f, "pos: {}, data: {:?}}}", self.position, payload),
            None => write!(f, "data: '-'}}"),
        }
    }
}
