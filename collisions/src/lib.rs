use common::collision_detection::rectangle_rectangle;
use common::shapes::{CollisionPolygon, RectExtent, Rectangle};
use nalgebra::{Isometry2, Point2, Vector2};
use parry2d::query;
use parry2d::shape::{Cuboid, SharedShape};
use std::fmt;

/// A parry2d shape placed in the world. Implements [`CollisionPolygon`] so
/// arbitrary convex shapes (rotated boxes, hulls) can be indexed by the
/// quadtree alongside the plain `common` shapes.
#[derive(Clone)]
pub struct ShapeWithPosition {
    pub shape: SharedShape,
    pub position: Isometry2<f32>,
}

impl ShapeWithPosition {
    pub fn ball(x: f32, y: f32, radius: f32) -> Self {
        Self {
            shape: SharedShape::ball(radius),
            position: Isometry2::translation(x, y),
        }
    }

    /// A box centred on `(x, y)` rotated by `angle` radians.
    pub fn cuboid(x: f32, y: f32, half_width: f32, half_height: f32, angle: f32) -> Self {
        Self {
            shape: SharedShape::cuboid(half_width, half_height),
            position: Isometry2::new(Vector2::new(x, y), angle),
        }
    }

    /// Convex hull of world-space points. `None` when the points are degenerate.
    pub fn convex_hull(points: &[(f32, f32)]) -> Option<Self> {
        let points: Vec<Point2<f32>> = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        SharedShape::convex_hull(&points).map(|shape| Self {
            shape,
            position: Isometry2::identity(),
        })
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.translation.vector += Vector2::new(dx, dy);
    }
}

impl fmt::Debug for ShapeWithPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeWithPosition")
            .field("shape", &self.shape.shape_type())
            .field("position", &self.position)
            .finish()
    }
}

impl CollisionPolygon for ShapeWithPosition {
    fn bounding_box(&self) -> Rectangle {
        let aabb = self.shape.compute_aabb(&self.position);
        Rectangle::from_corners(aabb.mins.x, aabb.mins.y, aabb.maxs.x, aabb.maxs.y)
    }

    fn intersects_extent(&self, extent: &RectExtent) -> bool {
        let aabb = self.shape.compute_aabb(&self.position);
        if aabb.mins.x > extent.max_x
            || aabb.maxs.x < extent.min_x
            || aabb.mins.y > extent.max_y
            || aabb.maxs.y < extent.min_y
        {
            return false;
        }
        let (center_x, center_y) = extent.center();
        let cuboid = Cuboid::new(Vector2::new(extent.width() * 0.5, extent.height() * 0.5));
        let extent_position = Isometry2::translation(center_x, center_y);
        // Unsupported shape pairs fall back to the bounding box overlap above.
        query::intersection_test(&self.position, &*self.shape, &extent_position, &cuboid)
            .unwrap_or(true)
    }

    fn intersects(&self, other: &Self) -> bool {
        if !rectangle_rectangle(&self.bounding_box(), &other.bounding_box()) {
            return false;
        }
        query::intersection_test(&self.position, &*self.shape, &other.position, &*other.shape)
            .unwrap_or(true)
    }
}
