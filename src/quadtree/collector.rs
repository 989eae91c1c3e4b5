use std::slice;

use crate::quadtree::{NodeId, QuadNode, QuadTree};
use crate::utils::QuadTreeError;

/// A reusable, growable list of node handles filled by tree queries.
///
/// The list tracks a logical capacity `max` that grows in steps of `grow`
/// whenever an append would exceed it. [`reset`](Self::reset) empties the
/// list but keeps the capacity, so one list can serve many queries.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::geometry::Vec2;
/// use rs_barnes_hut::quadtree::{QuadTree, QueryList};
///
/// let mut tree = QuadTree::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)).unwrap();
/// tree.insert("a", Vec2::new(1.0, 1.0), 1.0).unwrap();
/// tree.insert("b", Vec2::new(3.0, 3.0), 1.0).unwrap();
///
/// let mut list = QueryList::new(1).unwrap();
/// list.fill(&tree, tree.root()).unwrap();
/// assert_eq!(list.len(), 5);
/// assert_eq!(list.capacity(), 5);
///
/// list.reset();
/// assert!(list.is_empty());
/// assert_eq!(list.capacity(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryList {
    nodes: Vec<NodeId>,
    max: usize,
    grow: usize,
}

impl QueryList {
    /// Creates a list with room for `max` nodes, growing by `max` when full.
    pub fn new(max: usize) -> Result<Self, QuadTreeError> {
        Self::with_growth(max, max)
    }

    /// Creates a list with room for `max` nodes, growing by `grow` when full.
    ///
    /// A growth step of zero is bumped to one.
    pub fn with_growth(max: usize, grow: usize) -> Result<Self, QuadTreeError> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(max)
            .map_err(|_| QuadTreeError::AllocationFailure)?;
        Ok(QueryList {
            nodes,
            max,
            grow: grow.max(1),
        })
    }

    /// Appends a node, growing the capacity by one growth step if needed.
    ///
    /// On [`QuadTreeError::AllocationFailure`] the list is unchanged.
    pub fn push(&mut self, id: NodeId) -> Result<(), QuadTreeError> {
        if self.nodes.len() == self.max {
            let additional = self.max + self.grow - self.nodes.len();
            self.nodes
                .try_reserve_exact(additional)
                .map_err(|_| QuadTreeError::AllocationFailure)?;
            self.max += self.grow;
        }
        self.nodes.push(id);
        Ok(())
    }

    /// Appends `id` followed by its four children, if it has any.
    pub fn fill<T>(&mut self, tree: &QuadTree<T>, id: NodeId) -> Result<(), QuadTreeError> {
        self.push(id)?;
        if let Some(children) = tree.node(id).children() {
            for child in children {
                self.push(child)?;
            }
        }
        Ok(())
    }

    /// Forgets every stored handle, keeping the capacity.
    pub fn reset(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The logical capacity.
    pub fn capacity(&self) -> usize {
        self.max
    }

    pub fn grow(&self) -> usize {
        self.grow
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Resolves every stored handle against `tree`.
    pub fn nodes<'a, T>(&'a self, tree: &'a QuadTree<T>) -> impl Iterator<Item = &'a QuadNode<T>> + 'a {
        self.nodes.iter().map(move |&id| tree.node(id))
    }

    /// The payloads of every stored leaf.
    pub fn payloads<'a, T>(&'a self, tree: &'a QuadTree<T>) -> impl Iterator<Item = &'a T> + 'a {
        self.nodes(tree).filter_map(QuadNode::payload)
    }
}

impl<'a> IntoIterator for &'a QueryList {
    type Item = &'a NodeId;
    type IntoIter = slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
