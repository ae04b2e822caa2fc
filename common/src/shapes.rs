use crate::collision_detection;
use rand::Rng;
use std::fmt::Debug;

/// A shape that can be indexed by the quadtree.
///
/// `intersects_extent` is the cheap broad test against node bounds,
/// `intersects` the exact test between two real shapes. Both treat touching
/// edges as overlapping so zero-sized shapes (points) can be indexed.
pub trait CollisionPolygon: Debug {
    fn bounding_box(&self) -> Rectangle;
    fn intersects_extent(&self, extent: &RectExtent) -> bool;
    fn intersects(&self, other: &Self) -> bool;

    fn intersects_rect(&self, rect: &Rectangle) -> bool {
        self.intersects_extent(&RectExtent::from_rect(rect))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub bounding_box: Rectangle,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        let bounding_box = Rectangle {
            x,
            y,
            width: radius * 2.0,
            height: radius * 2.0,
        };
        Self {
            x,
            y,
            radius,
            bounding_box,
        }
    }

    /// A zero-radius circle, used for point-sized objects.
    pub fn point(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn update(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.update_bounding_box();
    }

    pub fn update_with_radius(&mut self, x: f32, y: f32, radius: f32) {
        self.x = x;
        self.y = y;
        self.radius = radius;
        self.update_bounding_box();
    }

    fn update_bounding_box(&mut self) {
        self.bounding_box = Rectangle {
            x: self.x,
            y: self.y,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        };
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl CollisionPolygon for Circle {
    fn bounding_box(&self) -> Rectangle {
        self.bounding_box
    }

    fn intersects_extent(&self, extent: &RectExtent) -> bool {
        collision_detection::circle_extent(self, extent)
    }

    fn intersects(&self, other: &Self) -> bool {
        collision_detection::circle_circle(self, other)
    }
}

/// Axis-aligned rectangle stored by its centre and size.
///
/// The y axis grows downwards: `top()` is `y - height / 2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_corners(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            x: (min_x + max_x) / 2.0,
            y: (min_y + max_y) / 2.0,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn top_left(&self) -> (f32, f32) {
        (self.left(), self.top())
    }

    pub fn top_right(&self) -> (f32, f32) {
        (self.right(), self.top())
    }

    pub fn bottom_left(&self) -> (f32, f32) {
        (self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> (f32, f32) {
        (self.right(), self.bottom())
    }

    pub fn get_random_circle_coords_inside<R: Rng>(&self, radius: f32, rng: &mut R) -> (f32, f32) {
        // Increase radius by 1 in calculations to add a minimal margin.
        let radius = radius + 1.0;
        (
            safe_randf32(rng, self.left() + radius, self.right() - radius),
            safe_randf32(rng, self.top() + radius, self.bottom() - radius),
        )
    }
}

fn safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min > max {
        return min;
    }
    rng.gen_range(min..=max)
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Axis-aligned bounds stored by their corners.
///
/// Quadtree nodes keep their bounds in this form so a split produces children
/// whose shared edges are the exact same value, and whose outer edges are the
/// parent's own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectExtent {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl RectExtent {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline(always)]
    pub fn from_rect(rect: &Rectangle) -> Self {
        Self {
            min_x: rect.left(),
            min_y: rect.top(),
            max_x: rect.right(),
            max_y: rect.bottom(),
        }
    }

    pub fn to_rect(&self) -> Rectangle {
        Rectangle::from_corners(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    pub fn top_left(&self) -> (f32, f32) {
        (self.min_x, self.min_y)
    }

    pub fn top_right(&self) -> (f32, f32) {
        (self.max_x, self.min_y)
    }

    pub fn bottom_left(&self) -> (f32, f32) {
        (self.min_x, self.max_y)
    }

    pub fn bottom_right(&self) -> (f32, f32) {
        (self.max_x, self.max_y)
    }

    /// Splits at the centre into top-left, top-right, bottom-left and
    /// bottom-right quadrants. Siblings share the split value bit for bit.
    pub fn quadrants(&self) -> [RectExtent; 4] {
        let (mid_x, mid_y) = self.center();
        [
            RectExtent::new(self.min_x, self.min_y, mid_x, mid_y),
            RectExtent::new(mid_x, self.min_y, self.max_x, mid_y),
            RectExtent::new(self.min_x, mid_y, mid_x, self.max_y),
            RectExtent::new(mid_x, mid_y, self.max_x, self.max_y),
        ]
    }
}

impl From<Rectangle> for RectExtent {
    fn from(rect: Rectangle) -> Self {
        Self::from_rect(&rect)
    }
}

impl CollisionPolygon for Rectangle {
    fn bounding_box(&self) -> Rectangle {
        *self
    }

    fn intersects_extent(&self, extent: &RectExtent) -> bool {
        collision_detection::rectangle_extent(self, extent)
    }

    fn intersects(&self, other: &Self) -> bool {
        collision_detection::rectangle_rectangle(self, other)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeEnum {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl From<Circle> for ShapeEnum {
    fn from(circle: Circle) -> Self {
        ShapeEnum::Circle(circle)
    }
}

impl From<Rectangle> for ShapeEnum {
    fn from(rectangle: Rectangle) -> Self {
        ShapeEnum::Rectangle(rectangle)
    }
}

impl CollisionPolygon for ShapeEnum {
    fn bounding_box(&self) -> Rectangle {
        match self {
            ShapeEnum::Circle(circle) => circle.bounding_box(),
            ShapeEnum::Rectangle(rectangle) => rectangle.bounding_box(),
        }
    }

    fn intersects_extent(&self, extent: &RectExtent) -> bool {
        match self {
            ShapeEnum::Circle(circle) => circle.intersects_extent(extent),
            ShapeEnum::Rectangle(rectangle) => rectangle.intersects_extent(extent),
        }
    }

    fn intersects(&self, other: &Self) -> bool {
        collision_detection::shape_shape(self, other)
    }
}
