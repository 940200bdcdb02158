//! The keyboard-controlled player
//!
//! Jumping is a two-state machine (grounded / airborne) integrated with
//! discrete Euler steps: move by the current velocity, then apply gravity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Entity, EntityKind, Rect};
use super::tick::KeyState;
use crate::config::GameConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Airborne since the last jump started
    pub is_jumping: bool,
    /// Upward velocity in pixels/tick (positive = rising)
    pub vertical_velocity: f32,
    pub jump_power: f32,
    /// Left/Right/Down speed in pixels/tick
    pub speed: f32,
    pub alive: bool,
}

impl Player {
    /// Player standing on the ground at the configured start x
    pub fn new(config: &GameConfig) -> Self {
        let size = Vec2::new(config.player_width, config.player_height);
        Self {
            rect: Rect::from_bottom_left(Vec2::new(config.player_start_x, config.ground_y()), size),
            is_jumping: false,
            vertical_velocity: 0.0,
            jump_power: config.jump_power,
            speed: config.player_speed,
            alive: true,
        }
    }

    /// Advance one tick under the given keys
    pub fn update(&mut self, keys: &KeyState, config: &GameConfig) {
        let ground = config.ground_y();

        if keys.up && !self.is_jumping {
            self.is_jumping = true;
            self.vertical_velocity = self.jump_power;
        }

        if self.is_jumping {
            self.rect.translate(Vec2::new(0.0, -self.vertical_velocity));
            self.vertical_velocity -= config.gravity;

            if self.rect.bottom() >= ground {
                self.rect.set_bottom(ground);
                self.is_jumping = false;
                self.vertical_velocity = 0.0;
            }
        }

        let mut step = Vec2::ZERO;
        if keys.down && (config.down_while_jumping || !self.is_jumping) {
            step.y += self.speed;
        }
        if keys.left {
            step.x -= self.speed;
        }
        if keys.right {
            step.x += self.speed;
        }
        self.rect.translate(step);

        self.clamp_to_screen(config.screen_width, config.screen_height);
    }

    /// Hold the box inside the screen. Jump state is left alone.
    fn clamp_to_screen(&mut self, width: f32, height: f32) {
        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
        }
        if self.rect.right() > width {
            self.rect.set_right(width);
        }
        if self.rect.top() < 0.0 {
            self.rect.set_top(0.0);
        }
        if self.rect.bottom() > height {
            self.rect.set_bottom(height);
        }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Ticks a jump from the ground stays airborne before landing
    /// (excluding the launch tick), for a given jump power and gravity.
    pub fn airtime_ticks(jump_power: f32, gravity: f32) -> u32 {
        (2.0 * jump_power / gravity).ceil() as u32
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn bounding_box(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.alive
    }
}
