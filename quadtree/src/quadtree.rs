//! Adaptive quadtree used as the broad phase of the collision pass.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. A node is
//! either a leaf holding object handles or an internal node with exactly four
//! children and no handles of its own. Leaves split lazily: a full leaf is
//! subdivided the next time an insertion reaches it, unless it already sits at
//! the depth limit. An object whose shape straddles a split line is stored in
//! every leaf it touches; queries deduplicate by handle.
//!
//! The tree keeps a handle table with the shape each object had when it was
//! inserted. Erasing walks the tree with that snapshot, so every leaf
//! reference is removed even if the caller's object has moved since.

mod config;
mod core;
mod leaves;
mod object;
mod query;
mod render;

pub use config::Config;
pub use leaves::{Leaves, NodeView};
pub use object::{Entity, SpatialObject};
pub use render::LineRenderer;

use common::shapes::{RectExtent, ShapeEnum};
use fxhash::{FxHashMap, FxHashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline(always)]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) extent: RectExtent,
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeId>,
    // All four quadrants or none.
    pub(crate) children: Option<[NodeId; 4]>,
    pub(crate) objects: FxHashSet<u32>,
}

impl Node {
    fn new(extent: RectExtent, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            extent,
            depth,
            parent,
            children: None,
            objects: FxHashSet::default(),
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct QuadTree<S = ShapeEnum> {
    nodes: Vec<Node>,
    shapes: FxHashMap<u32, S>,
    config: Config,
}

#[cfg(test)]
mod tests;
