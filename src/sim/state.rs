//! World state
//!
//! The World exclusively owns the player, the live boulders, the spawner and
//! the random source. It is only ever mutated by `tick`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::geom::Entity;
use super::obstacle::Obstacle;
use super::player::Player;
use super::rng::{self, RandomSource};
use super::spawner::Spawner;
use crate::config::{ConfigError, GameConfig};

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are being simulated
    Running,
    /// The player was hit. Absorbing: no more updates, spawns or scoring.
    Terminated,
}

/// Things that happened during a tick, for logging and presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned {
        id: u32,
        speed: f32,
        rotation_speed: Option<i32>,
    },
    Jumped,
    Landed,
    ObstacleRemoved { id: u32 },
    Collision { obstacle_id: u32, score: u64 },
}

pub struct World {
    pub(crate) config: GameConfig,
    pub player: Player,
    /// Live boulders in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub(crate) rng: Box<dyn RandomSource>,
    /// Ticks simulated so far (including the terminal tick)
    pub elapsed_ticks: u64,
    /// +1 for every tick survived
    pub score: u64,
    pub phase: GamePhase,
    pub(crate) events: Vec<GameEvent>,
}

impl World {
    /// New session with the default seeded generator
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Box::new(rng::seeded(seed)))
    }

    /// New session drawing spawn parameters from `rng`
    pub fn with_rng(config: GameConfig, rng: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected configuration: {err}");
            return Err(err);
        }
        log::debug!(
            "World {}x{} @ {} Hz, spawn every {} ticks (max {})",
            config.screen_width,
            config.screen_height,
            config.tick_rate,
            config.spawn_interval_ticks(),
            config.max_spawns
        );
        Ok(Self {
            player: Player::new(&config),
            obstacles: Vec::new(),
            spawner: Spawner::new(&config),
            rng,
            elapsed_ticks: 0,
            score: 0,
            phase: GamePhase::Running,
            events: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Simulated time, independent of wall-clock pacing
    pub fn elapsed_time(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_ticks as f64 / f64::from(self.config.tick_rate))
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn obstacle(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }

    /// Everything a renderer should draw, back to front
    pub fn visible_entities(&self) -> impl Iterator<Item = &dyn Entity> + '_ {
        let boulders = self.obstacles.iter().map(|o| o as &dyn Entity);
        let player = self
            .player
            .is_alive()
            .then_some(&self.player as &dyn Entity);
        boulders.chain(player)
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("phase", &self.phase)
            .field("elapsed_ticks", &self.elapsed_ticks)
            .field("score", &self.score)
            .field("player", &self.player)
            .field("obstacles", &self.obstacles.len())
            .finish_non_exhaustive()
    }
}
