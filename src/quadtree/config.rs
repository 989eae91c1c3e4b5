use crate::utils::DEFAULT_MAX_DEPTH;

/// Parameters controlling the construction of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// The maximum depth a node may have. Two entities that still share a
    /// quadrant at this depth cannot be separated and the insertion fails
    /// instead of subdividing forever.
    pub max_depth: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
