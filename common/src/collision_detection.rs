use crate::shapes::{Circle, RectExtent, Rectangle, ShapeEnum};

// Overlap tests are inclusive: shapes that only touch along an edge or at a
// corner count as intersecting.

pub fn rectangle_extent(rect: &Rectangle, extent: &RectExtent) -> bool {
    rect.left() <= extent.max_x
        && rect.right() >= extent.min_x
        && rect.top() <= extent.max_y
        && rect.bottom() >= extent.min_y
}

pub fn rectangle_rectangle(a: &Rectangle, b: &Rectangle) -> bool {
    rectangle_extent(a, &RectExtent::from_rect(b))
}

pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let distance_sq = dx * dx + dy * dy;
    let collision_distance = a.radius + b.radius;
    let collision_distance_sq = collision_distance * collision_distance;
    distance_sq <= collision_distance_sq
}

pub fn circle_extent(circle: &Circle, extent: &RectExtent) -> bool {
    // Closest point of the extent to the centre.
    let closest_x = f32::max(extent.min_x, f32::min(circle.x, extent.max_x));
    let closest_y = f32::max(extent.min_y, f32::min(circle.y, extent.max_y));
    let dx = circle.x - closest_x;
    let dy = circle.y - closest_y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

pub fn circle_rectangle(circle: &Circle, rectangle: &Rectangle) -> bool {
    circle_extent(circle, &RectExtent::from_rect(rectangle))
}

pub fn shape_shape(a: &ShapeEnum, b: &ShapeEnum) -> bool {
    match (a, b) {
        (ShapeEnum::Circle(circle_a), ShapeEnum::Circle(circle_b)) => {
            circle_circle(circle_a, circle_b)
        }
        (ShapeEnum::Circle(circle), ShapeEnum::Rectangle(rectangle))
        | (ShapeEnum::Rectangle(rectangle), ShapeEnum::Circle(circle)) => {
            circle_rectangle(circle, rectangle)
        }
        (ShapeEnum::Rectangle(rectangle_a), ShapeEnum::Rectangle(rectangle_b)) => {
            rectangle_rectangle(rectangle_a, rectangle_b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_rectangles_intersect() {
        let a = Rectangle::from_corners(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::from_corners(10.0, 0.0, 20.0, 10.0);
        assert!(rectangle_rectangle(&a, &b));
        let c = Rectangle::from_corners(10.5, 0.0, 20.0, 10.0);
        assert!(!rectangle_rectangle(&a, &c));
    }

    #[test]
    fn point_inside_rectangle() {
        let rect = Rectangle::from_corners(0.0, 0.0, 50.0, 50.0);
        assert!(circle_rectangle(&Circle::point(10.0, 10.0), &rect));
        assert!(circle_rectangle(&Circle::point(50.0, 50.0), &rect));
        assert!(!circle_rectangle(&Circle::point(50.1, 50.0), &rect));
    }

    #[test]
    fn circle_misses_rectangle_corner() {
        let rect = Rectangle::from_corners(0.0, 0.0, 10.0, 10.0);
        // Within both axis bands but outside the rounded corner.
        let circle = Circle::new(12.0, 12.0, 2.5);
        assert!(!circle_rectangle(&circle, &rect));
        let circle = Circle::new(12.0, 12.0, 3.0);
        assert!(circle_rectangle(&circle, &rect));
    }

    #[test]
    fn extent_edges_are_compared_exactly() {
        let parent = RectExtent::new(-368.88672, -20.119812, 305.32288, 892.6613);
        let (mid_x, mid_y) = parent.center();
        let [tl, tr, bl, br] = parent.quadrants();
        let on_split = Circle::point(mid_x, mid_y);
        for quadrant in [tl, tr, bl, br] {
            assert!(circle_extent(&on_split, &quadrant));
        }
        let corner = Circle::point(parent.min_x, parent.min_y);
        assert!(circle_extent(&corner, &tl));
        assert!(!circle_extent(&corner, &br));
    }
}
