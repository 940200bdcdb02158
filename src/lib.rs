//! Boulder Run - a jump-the-boulders arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, spawning, collisions)
//! - `config`: Validated, serializable game tuning
//! - `platform`: Clock and input collaborators
//! - `renderer`: Frame handoff and the terminal renderer
//! - `session`: Paced game loop tying the above together

pub mod config;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig, Preset};
pub use session::{Session, SessionEnd, SessionSummary};

/// Game configuration constants (defaults for `GameConfig`)
pub mod consts {
    /// Playfield size in pixels
    pub const SCREEN_WIDTH: f32 = 900.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Player sprite size
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Player spawns with its bottom-left corner at (PLAYER_START_X, ground)
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_JUMP_POWER: f32 = 15.0;
    /// Downward acceleration per tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;

    /// Boulder sprite size (unrotated)
    pub const BOULDER_SIZE: f32 = 60.0;
    /// Boulder speed range, pixels per tick (inclusive)
    pub const BOULDER_SPEED_MIN: i32 = 5;
    pub const BOULDER_SPEED_MAX: i32 = 10;
    /// Boulder spin range, degrees per tick (inclusive)
    pub const ROTATION_SPEED_MIN: i32 = 5;
    pub const ROTATION_SPEED_MAX: i32 = 100;

    /// Simulated milliseconds between boulder spawns
    pub const SPAWN_INTERVAL_MS: u64 = 2000;
    /// Total boulders spawned per session
    pub const MAX_SPAWNS: u32 = 100;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: i32) -> i32 {
    angle.rem_euclid(360)
}
