//! Render handoff
//!
//! The simulation never draws. After each tick the session captures a
//! `Frame` (what is visible, where, and the HUD numbers) and hands it to a
//! `RenderSink`.

pub mod terminal;

pub use terminal::TerminalRenderer;

use serde::{Deserialize, Serialize};

use crate::sim::{EntityKind, GamePhase, Rect, World};

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Artwork handle
    pub kind: EntityKind,
    pub bounds: Rect,
    /// Degrees, counter-clockwise
    pub rotation: i32,
}

/// Snapshot of the world for one presented tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub score: u64,
    pub phase: GamePhase,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Back to front
    pub sprites: Vec<Sprite>,
}

impl Frame {
    pub fn capture(world: &World) -> Self {
        let config = world.config();
        Self {
            tick: world.elapsed_ticks,
            score: world.score,
            phase: world.phase,
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            sprites: world
                .visible_entities()
                .map(|e| Sprite {
                    kind: e.kind(),
                    bounds: e.bounding_box(),
                    rotation: e.rotation(),
                })
                .collect(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Terminated
    }
}

/// Consumer of frames (screen, recorder, nothing)
pub trait RenderSink {
    fn present(&mut self, frame: &Frame) -> std::io::Result<()>;
}

/// Discards every frame (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _frame: &Frame) -> std::io::Result<()> {
        Ok(())
    }
}

/// Keeps every presented frame in memory
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    pub frames: Vec<Frame>,
}

impl RenderSink for FrameRecorder {
    fn present(&mut self, frame: &Frame) -> std::io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
