use super::config::validate_bounds;
use super::*;
use crate::error::QuadtreeResult;
use common::shapes::{CollisionPolygon, RectExtent, Rectangle};
use smallvec::SmallVec;
use tracing::{debug, trace};

impl<S: CollisionPolygon + Clone> QuadTree<S> {
    pub fn new(bounding_box: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounding_box, Config::default())
    }

    /// Builds the tree and eagerly subdivides the root, so the tree is never
    /// a single flat bucket.
    pub fn new_with_config(bounding_box: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_bounds(&bounding_box)?;
        config.validate()?;

        let mut tree = Self {
            nodes: vec![Node::new(RectExtent::from_rect(&bounding_box), 0, None)],
            shapes: FxHashMap::default(),
            config,
        };
        tree.subdivide_levels(config.initial_levels());
        debug!(
            node_capacity = config.node_capacity,
            depth_limit = config.depth_limit,
            nodes = tree.nodes.len(),
            "quadtree created"
        );
        Ok(tree)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The region covered by the tree.
    pub fn rect(&self) -> Rectangle {
        self.extent().to_rect()
    }

    /// Exact corners of the covered region, as used by the broad tests.
    pub fn extent(&self) -> RectExtent {
        self.nodes[NodeId::ROOT.index()].extent
    }

    /// Number of objects currently tracked.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn contains(&self, handle: u32) -> bool {
        self.shapes.contains_key(&handle)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest node in the tree.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Broad test of an object against the tree bounds.
    pub fn is_within<O: SpatialObject<Shape = S>>(&self, object: &O) -> bool {
        object.collision_polygon().intersects_extent(&self.extent())
    }

    /// Stores `object` in every leaf its shape touches. Returns `false`, and
    /// leaves the tree untouched, when the shape lies outside the bounds.
    ///
    /// Re-inserting a tracked handle replaces its previous placement.
    pub fn insert<O: SpatialObject<Shape = S>>(&mut self, object: &O) -> bool {
        let handle = object.handle();
        let shape = object.collision_polygon();
        if !shape.intersects_extent(&self.extent()) {
            debug!(handle, "insertion rejected: shape outside quadtree bounds");
            return false;
        }

        self.erase_handle(handle);
        self.shapes.insert(handle, shape.clone());
        self.insert_into(NodeId::ROOT, handle, shape);
        true
    }

    fn insert_into(&mut self, node_id: NodeId, handle: u32, shape: &S) {
        let Some(children) = self.nodes[node_id.index()].children else {
            self.nodes[node_id.index()].objects.insert(handle);
            return;
        };

        for child in children {
            if !shape.intersects_extent(&self.nodes[child.index()].extent) {
                continue;
            }
            if self.should_subdivide(child) {
                self.subdivide(child);
            }
            self.insert_into(child, handle, shape);
        }
    }

    /// Removes `object` from every leaf that references it. A no-op for
    /// objects the tree does not track. Returns whether anything was removed.
    pub fn erase<O: SpatialObject<Shape = S>>(&mut self, object: &O) -> bool {
        self.erase_handle(object.handle())
    }

    /// Like [`QuadTree::erase`], for callers that only kept the handle.
    pub fn erase_handle(&mut self, handle: u32) -> bool {
        let Some(shape) = self.shapes.remove(&handle) else {
            return false;
        };
        self.erase_from(NodeId::ROOT, handle, &shape);
        true
    }

    // Subdivided regions stay subdivided; erasing never merges children.
    fn erase_from(&mut self, node_id: NodeId, handle: u32, shape: &S) {
        let Some(children) = self.nodes[node_id.index()].children else {
            self.nodes[node_id.index()].objects.remove(&handle);
            return;
        };

        for child in children {
            if shape.intersects_extent(&self.nodes[child.index()].extent) {
                self.erase_from(child, handle, shape);
            }
        }
    }

    /// Moves an object to its current shape. Returns `false` if the new
    /// shape is outside the bounds, in which case the object is no longer
    /// tracked.
    pub fn relocate<O: SpatialObject<Shape = S>>(&mut self, object: &O) -> bool {
        self.erase_handle(object.handle());
        self.insert(object)
    }

    /// Subdivides every leaf down to `levels` generations below the root,
    /// stopping at the depth limit.
    pub fn subdivide_levels(&mut self, levels: usize) {
        let mut stack: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        stack.push((NodeId::ROOT, levels));

        while let Some((node_id, levels)) = stack.pop() {
            if levels == 0 || self.nodes[node_id.index()].depth >= self.config.depth_limit {
                continue;
            }
            if self.nodes[node_id.index()].is_leaf() {
                self.subdivide(node_id);
            }
            if let Some(children) = self.nodes[node_id.index()].children {
                stack.extend(children.into_iter().map(|child| (child, levels - 1)));
            }
        }
    }

    #[inline(always)]
    fn is_full(&self, node_id: NodeId) -> bool {
        self.nodes[node_id.index()].objects.len() >= self.config.node_capacity
    }

    fn should_subdivide(&self, node_id: NodeId) -> bool {
        let node = &self.nodes[node_id.index()];
        node.is_leaf() && self.is_full(node_id) && node.depth < self.config.depth_limit
    }

    /// Turns a leaf into an internal node with four quadrant children and
    /// hands its objects down to every child their shape touches.
    fn subdivide(&mut self, node_id: NodeId) {
        debug_assert!(self.nodes[node_id.index()].is_leaf());

        let parent = &self.nodes[node_id.index()];
        let depth = parent.depth + 1;
        let quadrants = parent.extent.quadrants();
        let first = self.nodes.len() as u32;
        let children = [
            NodeId(first),
            NodeId(first + 1),
            NodeId(first + 2),
            NodeId(first + 3),
        ];
        self.nodes.extend(
            quadrants
                .into_iter()
                .map(|extent| Node::new(extent, depth, Some(node_id))),
        );

        let objects = std::mem::take(&mut self.nodes[node_id.index()].objects);
        self.nodes[node_id.index()].children = Some(children);

        for handle in &objects {
            let Some(shape) = self.shapes.get(handle) else {
                continue;
            };
            for child in children {
                let child = &mut self.nodes[child.index()];
                if shape.intersects_extent(&child.extent) {
                    child.objects.insert(*handle);
                }
            }
        }

        trace!(
            node = node_id.0,
            depth,
            redistributed = objects.len(),
            "subdivided leaf"
        );
    }
}
