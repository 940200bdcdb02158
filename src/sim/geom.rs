//! Axis-aligned bounding boxes and the shared entity interface
//!
//! Screen coordinates: origin at the top-left, +y points down. A `Rect`
//! covers the half-open area `[min.x, max.x) x [min.y, max.y)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of `size` whose bottom-left corner sits at `pos`
    pub fn from_bottom_left(pos: Vec2, size: Vec2) -> Self {
        Self::new(Vec2::new(pos.x, pos.y - size.y), Vec2::new(pos.x + size.x, pos.y))
    }

    /// Rectangle of `size` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Move by `delta` in place
    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }

    pub fn set_left(&mut self, x: f32) {
        self.translate(Vec2::new(x - self.min.x, 0.0));
    }

    pub fn set_right(&mut self, x: f32) {
        self.translate(Vec2::new(x - self.max.x, 0.0));
    }

    pub fn set_top(&mut self, y: f32) {
        self.translate(Vec2::new(0.0, y - self.min.y));
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.translate(Vec2::new(0.0, y - self.max.y));
    }

    /// Overlap test on half-open bounds: shared edges do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// True when `self` lies fully inside `outer` (edges may touch)
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.min.x >= outer.min.x
            && self.max.x <= outer.max.x
            && self.min.y >= outer.min.y
            && self.max.y <= outer.max.y
    }

    /// Axis-aligned bounds of this rectangle rotated by `degrees` about its center
    pub fn rotated_bounds(&self, degrees: i32) -> Rect {
        if degrees.rem_euclid(180) == 0 {
            return *self;
        }
        let (sin, cos) = (degrees as f32).to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let size = self.size();
        let extent = Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos);
        Rect::from_center(self.center(), extent)
    }
}

/// What a sprite represents; the renderer's handle for choosing artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Boulder,
}

/// Shared read-only view of anything that lives in the world
pub trait Entity {
    fn kind(&self) -> EntityKind;
    /// Current collision/render box
    fn bounding_box(&self) -> Rect;
    fn is_alive(&self) -> bool;
    /// Rotation for rendering, degrees in [0, 360)
    fn rotation(&self) -> i32 {
        0
    }
}
