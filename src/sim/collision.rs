//! Collision predicate
//!
//! Two balls collide when the Euclidean distance between their centers is
//! strictly less than the sum of their radii.

use super::state::Ball;

/// True when the two balls overlap
#[inline]
pub fn is_colliding(a: &Ball, b: &Ball) -> bool {
    let sum = a.radius + b.radius;
    a.pos.distance_squared(b.pos) < sum * sum
}
