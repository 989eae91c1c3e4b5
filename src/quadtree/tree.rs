use crate::geometry::{Rect, Vec2};
use crate::quadtree::{NodeId, QuadNode, QuadTreeConfig, QueryList};
use crate::utils::QuadTreeError;

/// Outcome of a successful [`QuadTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The entity was stored in a new leaf.
    Inserted,
    /// A leaf already held an entity at exactly this position; it was replaced.
    Replaced,
}

/// Adaptive point-region quadtree tracking mass and center of mass per node.
///
/// Nodes live in an arena owned by the tree and are addressed by [`NodeId`].
/// The payload `T` is a cheap handle to an entity owned elsewhere (an index,
/// an id); dropping the tree never drops the entities themselves.
///
/// # Examples
///
/// ```
/// use rs_barnes_hut::geometry::{Quadrant, Vec2};
/// use rs_barnes_hut::quadtree::{Insertion, QuadTree};
///
/// let mut tree = QuadTree::new(Vec2::new(1.0, 1.0), Vec2::new(10.0, 10.0)).unwrap();
/// assert_eq!(tree.insert('a', Vec2::new(8.0, 2.0), 1.0), Ok(Insertion::Inserted));
/// assert_eq!(tree.insert('b', Vec2::new(1.0, 1.0), 1.0), Ok(Insertion::Inserted));
///
/// let root = tree.root_node();
/// assert!(root.is_internal());
/// assert_eq!(root.mass(), 2.0);
/// assert_eq!(root.center_of_mass(), Vec2::new(4.5, 1.5));
///
/// let ne = tree.node(root.child(Quadrant::NorthEast).unwrap());
/// assert_eq!(ne.payload(), Some(&'a'));
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    pub(crate) nodes: Vec<QuadNode<T>>,
    length: usize,
    config: QuadTreeConfig,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree covering the region between `nw` and `se`.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBounds`] unless `nw` lies strictly
    /// above and to the left of `se`.
    pub fn new(nw: Vec2, se: Vec2) -> Result<Self, QuadTreeError> {
        Self::with_config(Rect::new(nw, se), QuadTreeConfig::default())
    }

    /// Creates an empty tree covering `bounds` with the given settings.
    ///
    /// # Errors
    ///
    /// * [`QuadTreeError::InvalidBounds`] for empty, inverted or non-finite bounds.
    /// * [`QuadTreeError::InvalidParameter`] for a maximum depth of 0.
    pub fn with_config(bounds: Rect, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        if !bounds.is_valid() || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(QuadTreeError::InvalidBounds);
        }
        if config.max_depth == 0 {
            return Err(QuadTreeError::InvalidParameter("Maximum depth must be at least 1".to_string()));
        }
        let mut nodes = Vec::new();
        nodes
            .try_reserve(1)
            .map_err(|_| QuadTreeError::AllocationFailure)?;
        nodes.push(QuadNode::new(bounds, None, 0));
        Ok(QuadTree {
            nodes,
            length: 0,
            config,
        })
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn bounds(&self) -> Rect {
        self.root_node().bounds
    }

    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn root_node(&self) -> &QuadNode<T> {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Resolves a handle returned by this tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &QuadNode<T> {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&QuadNode<T>> {
        self.nodes.get(id.0)
    }

    /// Total mass of every stored entity.
    pub fn mass(&self) -> f64 {
        self.root_node().mass
    }

    pub fn center_of_mass(&self) -> Vec2 {
        self.root_node().center_of_mass
    }

    /// Inserts an entity at `position` with the given `mass`.
    ///
    /// An empty node takes the entity directly. A leaf holding the exact same
    /// position has its entity replaced; any other leaf is split until the
    /// two positions land in different quadrants. The tree is left unchanged
    /// on error.
    ///
    /// # Errors
    ///
    /// * [`QuadTreeError::OutOfBounds`] if `position` is outside the tree.
    /// * [`QuadTreeError::InvalidMass`] for negative or non-finite masses.
    /// * [`QuadTreeError::DepthLimitExceeded`] if separating the entities
    ///   would need nodes deeper than the configured maximum depth.
    /// * [`QuadTreeError::AllocationFailure`] if the node arena cannot grow.
    pub fn insert(&mut self, payload: T, position: Vec2, mass: f64) -> Result<Insertion, QuadTreeError> {
        let out_of_bounds = QuadTreeError::OutOfBounds { x: position.x, y: position.y };
        if !self.bounds().contains(position) {
            return Err(out_of_bounds);
        }
        if !mass.is_finite() || mass < 0.0 {
            return Err(QuadTreeError::InvalidMass(mass));
        }

        let target = self.descend(position).ok_or(out_of_bounds)?;
        let node = &self.nodes[target.0];
        if node.is_leaf() {
            if node.position == position {
                self.replace(target, payload, mass);
                return Ok(Insertion::Replaced);
            }
            let empty = self.split_until_separated(target, position)?;
            self.place(empty, payload, position, mass);
        } else {
            self.place(target, payload, position, mass);
        }
        self.length += 1;
        Ok(Insertion::Inserted)
    }

    /// Finds the leaf storing an entity at exactly `position`.
    pub fn find_exact(&self, position: Vec2) -> Option<NodeId> {
        if !self.bounds().contains(position) {
            return None;
        }
        let id = self.descend(position)?;
        let node = &self.nodes[id.0];
        (node.is_leaf() && node.position == position).then_some(id)
    }

    /// Finds the smallest node (a leaf or an empty node) whose region contains `position`.
    ///
    /// Unlike [`find_exact`](Self::find_exact) the stored position does not have to match.
    pub fn find_nearest(&self, position: Vec2) -> Option<NodeId> {
        if !self.bounds().contains(position) {
            return None;
        }
        self.descend(position)
    }

    /// Finds the smallest node whose bounds fully enclose `area`.
    ///
    /// Returns `None` for inverted rectangles and for areas reaching outside the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::geometry::{Rect, Vec2};
    /// use rs_barnes_hut::quadtree::QuadTree;
    ///
    /// let mut tree = QuadTree::new(Vec2::new(0.0, 0.0), Vec2::new(8.0, 8.0)).unwrap();
    /// tree.insert(1, Vec2::new(1.0, 1.0), 1.0).unwrap();
    /// tree.insert(2, Vec2::new(7.0, 7.0), 1.0).unwrap();
    ///
    /// let small = Rect::new(Vec2::new(0.5, 0.5), Vec2::new(1.5, 1.5));
    /// let node = tree.find_smallest_enclosing(&small).unwrap();
    /// assert_eq!(tree.node(node).bounds(), Rect::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)));
    ///
    /// // straddles the midpoint, only the root encloses it
    /// let wide = Rect::new(Vec2::new(3.0, 3.0), Vec2::new(5.0, 5.0));
    /// assert_eq!(tree.find_smallest_enclosing(&wide), Some(tree.root()));
    /// ```
    pub fn find_smallest_enclosing(&self, area: &Rect) -> Option<NodeId> {
        if !area.is_valid() || !self.bounds().encloses(area) {
            return None;
        }
        let mut current = NodeId::ROOT;
        'descent: loop {
            if let Some(children) = self.nodes[current.0].children {
                for child in children {
                    if self.nodes[child.0].bounds.encloses(area) {
                        current = child;
                        continue 'descent;
                    }
                }
            }
            return Some(current);
        }
    }

    /// Appends every leaf within the square window `center ± radius` to `list`.
    ///
    /// Leaves exactly on the window's edge are included. A zero, negative or
    /// non-finite radius is treated as an empty query. Returns the number of
    /// appended nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::geometry::Vec2;
    /// use rs_barnes_hut::quadtree::{QuadTree, QueryList};
    ///
    /// let mut tree = QuadTree::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)).unwrap();
    /// tree.insert(1, Vec2::new(4.0, 4.0), 1.0).unwrap();
    /// tree.insert(2, Vec2::new(5.0, 5.0), 1.0).unwrap();
    /// tree.insert(3, Vec2::new(9.0, 9.0), 1.0).unwrap();
    ///
    /// let mut list = QueryList::new(4).unwrap();
    /// let found = tree.find_in_radius(Vec2::new(4.0, 4.0), 1.0, &mut list).unwrap();
    /// assert_eq!(found, 2);
    /// let mut ids: Vec<i32> = list.payloads(&tree).copied().collect();
    /// ids.sort();
    /// assert_eq!(ids, vec![1, 2]);
    /// ```
    pub fn find_in_radius(&self, center: Vec2, radius: f64, list: &mut QueryList) -> Result<usize, QuadTreeError> {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return Ok(0);
        }
        self.find_in_area(&Rect::around(center, radius), list)
    }

    /// Appends every leaf whose position lies inside `area` to `list`.
    ///
    /// Subtrees not touching `area` are skipped. Inverted areas yield no results.
    pub fn find_in_area(&self, area: &Rect, list: &mut QueryList) -> Result<usize, QuadTreeError> {
        if !area.is_valid() {
            return Ok(0);
        }
        let before = list.len();
        self.collect_in_area(NodeId::ROOT, area, list)?;
        Ok(list.len() - before)
    }

    fn collect_in_area(&self, id: NodeId, area: &Rect, list: &mut QueryList) -> Result<(), QuadTreeError> {
        let node = &self.nodes[id.0];
        // closed test: an entity on a shared edge lives in the earlier quadrant
        if !node.bounds.intersects(area) {
            return Ok(());
        }
        if node.is_leaf() {
            if area.contains(node.position) {
                list.push(id)?;
            }
            return Ok(());
        }
        if let Some(children) = node.children {
            for child in children {
                self.collect_in_area(child, area, list)?;
            }
        }
        Ok(())
    }

    /// Follows the quadrants containing `position` down to a leaf or an empty node.
    fn descend(&self, position: Vec2) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        loop {
            let node = &self.nodes[current.0];
            match node.children {
                None => return Some(current),
                Some(children) => {
                    let quadrant = node.bounds.quadrant_of(position)?;
                    current = children[quadrant.index()];
                }
            }
        }
    }

    /// Stores an entity in an empty node and adds its mass to every ancestor.
    fn place(&mut self, id: NodeId, payload: T, position: Vec2, mass: f64) {
        let node = &mut self.nodes[id.0];
        node.payload = Some(payload);
        node.position = position;
        node.mass = mass;
        node.center_of_mass = position;
        let parent = node.parent;
        self.propagate(parent, position, mass);
    }

    /// Swaps the entity of a leaf, applying the mass difference up the tree.
    fn replace(&mut self, id: NodeId, payload: T, mass: f64) {
        let node = &mut self.nodes[id.0];
        let delta = mass - node.mass;
        let position = node.position;
        node.payload = Some(payload);
        node.mass = mass;
        node.center_of_mass = position;
        let parent = node.parent;
        self.propagate(parent, position, delta);
    }

    fn propagate(&mut self, from: Option<NodeId>, position: Vec2, mass: f64) {
        let mut cursor = from;
        while let Some(id) = cursor {
            let node = &mut self.nodes[id.0];
            node.add_mass(position, mass);
            cursor = node.parent;
        }
    }

    /// Splits `leaf` repeatedly until its entity and `position` fall into
    /// different quadrants, returning the empty node that will take `position`.
    ///
    /// The number of splits is worked out before touching the tree so that a
    /// depth or allocation failure leaves it unchanged.
    fn split_until_separated(&mut self, leaf: NodeId, position: Vec2) -> Result<NodeId, QuadTreeError> {
        let out_of_bounds = QuadTreeError::OutOfBounds { x: position.x, y: position.y };
        let node = &self.nodes[leaf.0];
        let existing = node.position;
        let mut bounds = node.bounds;
        let mut depth = node.depth;
        let mut splits = 0;
        loop {
            if depth >= self.config.max_depth {
                return Err(QuadTreeError::DepthLimitExceeded { depth: self.config.max_depth });
            }
            depth += 1;
            splits += 1;
            let a = bounds.quadrant_of(existing).ok_or_else(|| out_of_bounds.clone())?;
            let b = bounds.quadrant_of(position).ok_or_else(|| out_of_bounds.clone())?;
            if a != b {
                break;
            }
            bounds = bounds.quadrant(a);
        }
        self.nodes
            .try_reserve(4 * splits)
            .map_err(|_| QuadTreeError::AllocationFailure)?;

        let mut current = leaf;
        loop {
            let children = self.split(current);
            let quadrant = self.nodes[current.0]
                .bounds
                .quadrant_of(position)
                .ok_or_else(|| out_of_bounds.clone())?;
            let next = children[quadrant.index()];
            if self.nodes[next.0].is_empty() {
                return Ok(next);
            }
            current = next;
        }
    }

    /// Turns a leaf into an internal node with four empty children and moves
    /// its entity into the matching child. Aggregates stay as they are since
    /// the subtree still holds the same entity.
    fn split(&mut self, id: NodeId) -> [NodeId; 4] {
        let bounds = self.nodes[id.0].bounds;
        let depth = self.nodes[id.0].depth + 1;
        let base = self.nodes.len();
        let children = [NodeId(base), NodeId(base + 1), NodeId(base + 2), NodeId(base + 3)];
        for quadrant in bounds.quadrants() {
            self.nodes.push(QuadNode::new(quadrant, Some(id), depth));
        }

        let node = &mut self.nodes[id.0];
        node.children = Some(children);
        let payload = node.payload.take();
        let position = node.position;
        let mass = node.mass;
        node.position = Vec2::ZERO;

        if let (Some(payload), Some(quadrant)) = (payload, bounds.quadrant_of(position)) {
            let child = &mut self.nodes[children[quadrant.index()].0];
            child.payload = Some(payload);
            child.position = position;
            child.mass = mass;
            child.center_of_mass = position;
        }
        children
    }
}
