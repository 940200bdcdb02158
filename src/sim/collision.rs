//! Player-vs-boulder collision
//!
//! Plain AABB overlap on half-open boxes: rectangles that merely share an
//! edge do not collide.

use super::geom::{Entity, Rect};

/// First entity (in slice order) whose box overlaps `target`
pub fn first_hit<'a, E: Entity>(target: &Rect, others: &'a [E]) -> Option<&'a E> {
    others
        .iter()
        .filter(|e| e.is_alive())
        .find(|e| e.bounding_box().intersects(target))
}

/// True when any live entity overlaps `target`
pub fn any_hit<E: Entity>(target: &Rect, others: &[E]) -> bool {
    first_hit(target, others).is_some()
}
