//! Distance, direction and soft-threshold measurements.

use crate::hand::{Finger, Hand};
use crate::point::{Point, Vec2};

/// Vectors shorter than this are treated as having no direction.
pub const DEGENERATE_LENGTH: f64 = 1e-5;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.to(b).length()
}

/// Centroid of the given joints. Returns the origin for an empty index list.
pub fn average_point(hand: &Hand, indices: &[usize]) -> Point {
    if indices.is_empty() {
        return Point::default();
    }
    let (sx, sy) = indices.iter().fold((0.0, 0.0), |(sx, sy), &i| {
        let p = hand.at(i);
        (sx + p.x, sy + p.y)
    });
    let n = indices.len() as f64;
    Point::new(sx / n, sy / n)
}

/// Unit vector along `(dx, dy)`, or `fallback` when the input is degenerate.
pub fn normalize_vector(dx: f64, dy: f64, fallback: Vec2) -> Vec2 {
    let len = dx.hypot(dy);
    if len < DEGENERATE_LENGTH || !len.is_finite() {
        return fallback;
    }
    Vec2::new(dx / len, dy / len)
}

/// Rotate `v` by `radians` (counter-clockwise in a y-up frame).
pub fn rotate_vector(v: Vec2, radians: f64) -> Vec2 {
    let (s, c) = radians.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Linear ramp from 0 at `low` to 1 at `high`, clamped to [0, 1].
pub fn range_score(value: f64, low: f64, high: f64) -> f64 {
    if value <= low {
        return 0.0;
    }
    if value >= high {
        return 1.0;
    }
    (value - low) / (high - low)
}

/// How far the fingertip sits above its knuckle. Positive means extended upward.
pub fn finger_extension(hand: &Hand, finger: Finger) -> f64 {
    hand.at(finger.mcp).y - hand.at(finger.tip).y
}

/// How far the fingertip sits below its knuckle. Positive means folded downward.
pub fn finger_fold(hand: &Hand, finger: Finger) -> f64 {
    hand.at(finger.tip).y - hand.at(finger.mcp).y
}

/// Map a normalized landmark to mirrored screen pixels.
pub fn to_screen_point(point: Point, width: f64, height: f64) -> Point {
    Point::new((1.0 - point.x) * width, point.y * height)
}
