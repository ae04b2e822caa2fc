use common::shapes::{Circle, CollisionPolygon, Rectangle, ShapeEnum};

/// Anything the quadtree can index.
///
/// `handle` is the object's identity: two objects with the same handle are
/// the same object as far as the tree is concerned. The tree snapshots the
/// collision polygon on insertion, so the object itself is never borrowed past
/// the call.
pub trait SpatialObject {
    type Shape: CollisionPolygon;

    fn handle(&self) -> u32;
    fn collision_polygon(&self) -> &Self::Shape;
}

/// A bare handle/shape pair for callers without their own object type.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<S = ShapeEnum> {
    pub handle: u32,
    pub shape: S,
}

impl<S> Entity<S> {
    pub fn new(handle: u32, shape: S) -> Self {
        Self { handle, shape }
    }
}

impl Entity<ShapeEnum> {
    pub fn circle(handle: u32, x: f32, y: f32, radius: f32) -> Self {
        Self::new(handle, ShapeEnum::Circle(Circle::new(x, y, radius)))
    }

    pub fn point(handle: u32, x: f32, y: f32) -> Self {
        Self::new(handle, ShapeEnum::Circle(Circle::point(x, y)))
    }

    pub fn rectangle(handle: u32, rectangle: Rectangle) -> Self {
        Self::new(handle, ShapeEnum::Rectangle(rectangle))
    }
}

impl<S: CollisionPolygon> SpatialObject for Entity<S> {
    type Shape = S;

    fn handle(&self) -> u32 {
        self.handle
    }

    fn collision_polygon(&self) -> &S {
        &self.shape
    }
}
