use std::fmt;

use crate::quadtree::{NodeId, QuadNode, QuadTree};

/// Depth-first iterator visiting each node before its children (nw, ne, sw, se).
pub struct PreOrder<'a, T> {
    tree: &'a QuadTree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = (NodeId, &'a QuadNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        if let Some(children) = node.children() {
            // reversed so nw is popped first
            self.stack.extend(children.iter().rev());
        }
        Some((id, node))
    }
}

/// Depth-first iterator visiting each node after all of its children.
pub struct PostOrder<'a, T> {
    tree: &'a QuadTree<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = (NodeId, &'a QuadNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            let node = self.tree.node(id);
            match node.children() {
                Some(children) if !expanded => {
                    self.stack.push((id, true));
                    self.stack.extend(children.iter().rev().map(|&child| (child, false)));
                }
                _ => return Some((id, node)),
            }
        }
    }
}

impl<T> QuadTree<T> {
    /// Walks the tree from the root, parents first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::geometry::Vec2;
    /// use rs_barnes_hut::quadtree::QuadTree;
    ///
    /// let mut tree = QuadTree::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)).unwrap();
    /// tree.insert(1, Vec2::new(1.0, 1.0), 1.0).unwrap();
    /// tree.insert(2, Vec2::new(3.0, 3.0), 1.0).unwrap();
    ///
    /// let depths: Vec<usize> = tree.pre_order().map(|(_, node)| node.depth()).collect();
    /// assert_eq!(depths, vec![0, 1, 1, 1, 1]);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// Walks the tree from the bottom up, children before their parent.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            tree: self,
            stack: vec![(self.root(), false)],
        }
    }

    /// Every node holding an entity, in pre-order.
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &QuadNode<T>)> + '_ {
        self.pre_order().filter(|(_, node)| node.is_leaf())
    }

    /// Number of nodes in the tree, including empty ones.
    pub fn count_nodes(&self) -> usize {
        self.pre_order().count()
    }

    /// Depth of the deepest node; 0 for a tree that was never split.
    pub fn depth(&self) -> usize {
        self.pre_order().map(|(_, node)| node.depth()).max().unwrap_or(0)
    }
}

impl<T: fmt::Debug> fmt::Display for QuadTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "quadtree: {} entities, {} nodes", self.len(), self.count_nodes())?;
        for (_, node) in self.pre_order() {
            writeln!(f, "{:indent$}{}", "", node, indent = node.depth() * 2)?;
        }
        Ok(())
    }
}
