//! Paced game loop
//!
//! One iteration: sample input, stop on Quit/Escape, tick the world, hand
//! the frame to the renderer, stop on collision, wait for the next tick
//! boundary. Quit bypasses the collision bookkeeping entirely.

use serde::{Deserialize, Serialize};

use crate::platform::{Clock, InputSampler};
use crate::renderer::{Frame, RenderSink};
use crate::sim::{GameEvent, GamePhase, World, autopilot, tick};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// Player hit a boulder
    Collided,
    /// Quit/Escape (or window close)
    Quit,
    /// Configured tick limit reached
    TickLimit,
}

/// Final report of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub score: u64,
    pub ticks: u64,
    pub boulders_spawned: u32,
    /// Simulated seconds
    pub seconds: f64,
}

pub struct Session {
    world: World,
    autopilot: bool,
    max_ticks: Option<u64>,
}

impl Session {
    pub fn new(world: World) -> Self {
        Self {
            world,
            autopilot: false,
            max_ticks: None,
        }
    }

    /// Let the autopilot drive movement; the sampler still supplies Quit/Escape
    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    pub fn with_tick_limit(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Run until collision, quit, or the tick limit
    pub fn run(
        &mut self,
        clock: &mut dyn Clock,
        input: &mut dyn InputSampler,
        sink: &mut dyn RenderSink,
    ) -> std::io::Result<SessionEnd> {
        log::info!(
            "Session start: {}x{} @ {} Hz, autopilot {}",
            self.world.config().screen_width,
            self.world.config().screen_height,
            self.world.config().tick_rate,
            if self.autopilot { "on" } else { "off" }
        );

        loop {
            let sampled = input.sample();
            if sampled.wants_exit() {
                log::info!("Quit at tick {} (score {})", self.world.elapsed_ticks, self.world.score);
                return Ok(SessionEnd::Quit);
            }
            let keys = if self.autopilot {
                autopilot::steer(&self.world).with_exit_keys_of(&sampled)
            } else {
                sampled
            };

            let phase = tick(&mut self.world, &keys);
            for event in self.world.drain_events() {
                log_event(self.world.elapsed_ticks, &event);
            }
            sink.present(&Frame::capture(&self.world))?;

            if phase == GamePhase::Terminated {
                return Ok(SessionEnd::Collided);
            }
            if let Some(limit) = self.max_ticks {
                if self.world.elapsed_ticks >= limit {
                    log::info!("Tick limit {} reached (score {})", limit, self.world.score);
                    return Ok(SessionEnd::TickLimit);
                }
            }

            clock.advance();
        }
    }

    pub fn summary(&self, end: SessionEnd) -> SessionSummary {
        SessionSummary {
            end,
            score: self.world.score,
            ticks: self.world.elapsed_ticks,
            boulders_spawned: self.world.spawner.spawned(),
            seconds: self.world.elapsed_time().as_secs_f64(),
        }
    }
}

fn log_event(tick: u64, event: &GameEvent) {
    match event {
        GameEvent::Collision { .. } => log::info!("tick {tick}: {event:?}"),
        GameEvent::Spawned { .. } | GameEvent::ObstacleRemoved { .. } => {
            log::debug!("tick {tick}: {event:?}")
        }
        GameEvent::Jumped | GameEvent::Landed => log::trace!("tick {tick}: {event:?}"),
    }
}
