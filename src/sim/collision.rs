//! Collision detection for rectangles, circles and points
//!
//! Every function here is pure. The boundary conventions differ on purpose:
//! rectangle overlap and circle overlap are strict (touching is a miss),
//! point containment, bounds containment and the circle-rectangle corner test
//! are inclusive (touching is a hit).

use super::geom::{Circle, Point, Rect};

/// Strict AABB overlap. Rectangles sharing only an edge do not collide.
#[inline]
pub fn rectangle_collision(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Circle against an axis-aligned rectangle (closest-point test)
pub fn circle_rectangle_collision(circle: &Circle, rect: &Rect) -> bool {
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    let dist_x = (circle.x - rect.x - half_w).abs();
    let dist_y = (circle.y - rect.y - half_h).abs();

    if dist_x > half_w + circle.radius || dist_y > half_h + circle.radius {
        return false;
    }

    // Centre lies within the rectangle's span on one axis
    if dist_x <= half_w || dist_y <= half_h {
        return true;
    }

    // Corner region
    let dx = dist_x - half_w;
    let dy = dist_y - half_h;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// Point containment, inclusive on every edge
#[inline]
pub fn point_in_rectangle(point: Point, rect: &Rect) -> bool {
    point.x >= rect.x && point.x <= rect.right() && point.y >= rect.y && point.y <= rect.bottom()
}

/// Circle overlap. Exactly tangent circles do not collide.
#[inline]
pub fn circle_collision(a: &Circle, b: &Circle) -> bool {
    get_distance(a.center(), b.center()) < a.radius + b.radius
}

/// True if `rect` lies entirely inside `bounds` (edges may coincide)
#[inline]
pub fn is_in_bounds(rect: &Rect, bounds: &Rect) -> bool {
    rect.x >= bounds.x
        && rect.y >= bounds.y
        && rect.right() <= bounds.right()
        && rect.bottom() <= bounds.bottom()
}

/// Euclidean distance between two points
#[inline]
pub fn get_distance(p1: Point, p2: Point) -> f32 {
    p1.distance(p2)
}

/// First wall (in declaration order) overlapping `moving`
pub fn check_wall_collision<'a>(moving: &Rect, walls: &'a [Rect]) -> Option<&'a Rect> {
    walls.iter().find(|wall| rectangle_collision(moving, wall))
}
