use super::*;
use common::shapes::Rectangle;
use smallvec::SmallVec;
use std::fmt;
use std::iter::FusedIterator;

/// Read-only handle to one node of a [`QuadTree`].
pub struct NodeView<'a, S> {
    tree: &'a QuadTree<S>,
    id: NodeId,
}

impl<'a, S> Clone for NodeView<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S> Copy for NodeView<'a, S> {}

impl<'a, S> NodeView<'a, S> {
    fn node(&self) -> &'a Node {
        &self.tree.nodes[self.id.index()]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn rect(&self) -> Rectangle {
        self.node().extent.to_rect()
    }

    pub fn extent(&self) -> RectExtent {
        self.node().extent
    }

    pub fn depth(&self) -> usize {
        self.node().depth
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn parent(&self) -> Option<NodeView<'a, S>> {
        self.node().parent.map(|id| self.tree.node_view(id))
    }

    /// Top-left, top-right, bottom-left, bottom-right; `None` on leaves.
    pub fn children(&self) -> Option<[NodeView<'a, S>; 4]> {
        self.node()
            .children
            .map(|children| children.map(|id| self.tree.node_view(id)))
    }

    /// Handles stored in this node. Always empty for internal nodes.
    pub fn objects(&self) -> impl Iterator<Item = u32> + 'a {
        self.node().objects.iter().copied()
    }

    pub fn object_count(&self) -> usize {
        self.node().objects.len()
    }

    pub fn leaves(&self) -> Leaves<'a, S> {
        Leaves::new(self.tree, self.id)
    }
}

impl<'a, S> fmt::Debug for NodeView<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id)
            .field("extent", &self.extent())
            .field("depth", &self.depth())
            .field("objects", &self.object_count())
            .finish()
    }
}

/// Depth-first walk over the leaves below a node, top-left quadrant first.
///
/// Lazy and finite; [`Leaves::restart`] rewinds it to the starting node.
pub struct Leaves<'a, S> {
    tree: &'a QuadTree<S>,
    start: NodeId,
    stack: SmallVec<[NodeId; 32]>,
}

impl<'a, S> Leaves<'a, S> {
    fn new(tree: &'a QuadTree<S>, start: NodeId) -> Self {
        let mut leaves = Self {
            tree,
            start,
            stack: SmallVec::new(),
        };
        leaves.restart();
        leaves
    }

    pub fn restart(&mut self) {
        self.stack.clear();
        if self.start.index() < self.tree.nodes.len() {
            self.stack.push(self.start);
        }
    }
}

impl<'a, S> Clone for Leaves<'a, S> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            start: self.start,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, S> Iterator for Leaves<'a, S> {
    type Item = NodeView<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            match self.tree.nodes[id.index()].children {
                // Reversed so the top-left quadrant is popped first.
                Some(children) => self.stack.extend(children.into_iter().rev()),
                None => return Some(self.tree.node_view(id)),
            }
        }
        None
    }
}

impl<'a, S> FusedIterator for Leaves<'a, S> {}

impl<S> QuadTree<S> {
    pub fn root(&self) -> NodeView<'_, S> {
        self.node_view(NodeId::ROOT)
    }

    /// `None` if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> Option<NodeView<'_, S>> {
        (id.index() < self.nodes.len()).then(|| self.node_view(id))
    }

    fn node_view(&self, id: NodeId) -> NodeView<'_, S> {
        NodeView { tree: self, id }
    }

    /// Every leaf of the tree, depth first.
    pub fn leaves(&self) -> Leaves<'_, S> {
        Leaves::new(self, NodeId::ROOT)
    }

    /// Rectangles of every leaf, for debug drawing.
    pub fn leaf_rects(&self) -> impl Iterator<Item = Rectangle> + '_ {
        self.leaves().map(|leaf| leaf.rect())
    }
}
