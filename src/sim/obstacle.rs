//! Boulders rolling in from the right edge

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Entity, EntityKind, Rect};
use crate::wrap_degrees;

/// Spin state of a boulder, degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spin {
    pub angle: i32,
    pub speed: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Unrotated box; its center is the boulder's position
    pub body: Rect,
    /// Leftward speed, pixels per tick
    pub speed: f32,
    pub spin: Option<Spin>,
    pub alive: bool,
}

impl Obstacle {
    /// Boulder of edge `size` with its bottom-left corner at `anchor`
    pub fn new(id: u32, anchor: Vec2, size: f32, speed: f32, rotation_speed: Option<i32>) -> Self {
        Self {
            id,
            body: Rect::from_bottom_left(anchor, Vec2::splat(size)),
            speed,
            spin: rotation_speed.map(|speed| Spin { angle: 0, speed }),
            alive: true,
        }
    }

    /// Roll left one tick and spin. Marks itself dead once fully past the left edge.
    pub fn update(&mut self) {
        if !self.alive {
            return;
        }
        self.body.translate(Vec2::new(-self.speed, 0.0));
        if let Some(spin) = &mut self.spin {
            spin.angle = wrap_degrees(spin.angle + wrap_degrees(spin.speed));
        }
        if self.bounding_box().right() < 0.0 {
            self.alive = false;
        }
    }
}

impl Entity for Obstacle {
    fn kind(&self) -> EntityKind {
        EntityKind::Boulder
    }

    /// Rotated extents around the fixed center
    fn bounding_box(&self) -> Rect {
        match self.spin {
            Some(spin) => self.body.rotated_bounds(spin.angle),
            None => self.body,
        }
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn rotation(&self) -> i32 {
        self.spin.map_or(0, |s| s.angle)
    }
}
