use super::*;
use common::shapes::CollisionPolygon;
use smallvec::SmallVec;

impl<S: CollisionPolygon> QuadTree<S> {
    /// Objects whose shape touches `object`'s shape, excluding `object`
    /// itself. Each handle appears once; order is unspecified.
    pub fn query_near_objects<O: SpatialObject<Shape = S>>(&self, object: &O) -> Vec<u32> {
        let mut out = Vec::new();
        self.query_into(object.collision_polygon(), Some(object.handle()), &mut out);
        out
    }

    /// Objects whose shape touches `shape`. Each handle appears once; order
    /// is unspecified.
    pub fn query_near_shape(&self, shape: &S) -> Vec<u32> {
        let mut out = Vec::new();
        self.query_into(shape, None, &mut out);
        out
    }

    /// Appends the handles near `shape` to `out`, skipping `exclude`.
    pub fn query_into(&self, shape: &S, exclude: Option<u32>, out: &mut Vec<u32>) {
        self.query_from(NodeId::ROOT, shape, exclude, out);
    }

    /// Same as [`QuadTree::query_into`] restricted to the subtree at
    /// `start`.
    pub fn query_from(&self, start: NodeId, shape: &S, exclude: Option<u32>, out: &mut Vec<u32>) {
        match self.nodes.get(start.index()) {
            Some(node) if shape.intersects_extent(&node.extent) => {}
            _ => return,
        }

        let mut seen: FxHashSet<u32> = FxHashSet::default();
        let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
        stack.push(start);

        // Only nodes whose rectangle touches the query shape are pushed.
        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id.index()];
            if let Some(children) = node.children {
                stack.extend(children.into_iter().filter(|child| {
                    shape.intersects_extent(&self.nodes[child.index()].extent)
                }));
                continue;
            }

            for &handle in &node.objects {
                if exclude == Some(handle) || seen.contains(&handle) {
                    continue;
                }
                let Some(candidate) = self.shapes.get(&handle) else {
                    continue;
                };
                seen.insert(handle);
                if candidate.intersects(shape) {
                    out.push(handle);
                }
            }
        }
    }
}
