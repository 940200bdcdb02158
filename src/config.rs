//! Game configuration
//!
//! Every tunable lives in one immutable `GameConfig` that is validated once,
//! when a `World` is built. Presets reproduce the classic game variants.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Built-in tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// First release: jump only (no walking), huge jump, integer gravity,
    /// no spin
    Classic,
    /// Player only, nothing spawns
    Practice,
    /// Spinning boulders (the full game)
    #[default]
    Spinning,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Classic, Preset::Practice, Preset::Spinning];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Practice => "Practice",
            Preset::Spinning => "Spinning",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "practice" | "player" => Some(Preset::Practice),
            "spinning" | "spin" => Some(Preset::Spinning),
            _ => None,
        }
    }

    /// Full configuration for this preset
    pub fn config(&self) -> GameConfig {
        let base = GameConfig::default();
        match self {
            Preset::Classic => GameConfig {
                player_speed: 0.0,
                jump_power: 50.0,
                gravity: 1.0,
                obstacle_speed: IntRange::new(4, 12),
                obstacle_rotation: None,
                ..base
            },
            Preset::Practice => GameConfig {
                jump_power: 20.0,
                max_spawns: 0,
                ..base
            },
            Preset::Spinning => base,
        }
    }
}

/// Inclusive integer range used for randomized spawn parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Range holding a single value
    pub const fn fixed(value: i32) -> Self {
        Self::new(value, value)
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation ticks per second (pacing and spawn timing)
    pub tick_rate: u32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Left edge of the player at game start
    pub player_start_x: f32,
    /// Pixels per tick for Left/Right/Down
    pub player_speed: f32,
    /// Initial upward velocity of a jump (pixels/tick)
    pub jump_power: f32,
    /// Velocity lost per tick while airborne
    pub gravity: f32,
    /// Apply Down movement while a jump is in progress
    pub down_while_jumping: bool,

    // === Boulders ===
    /// Unrotated boulder edge length
    pub obstacle_size: f32,
    /// Leftward speed range, pixels per tick
    pub obstacle_speed: IntRange,
    /// Spin range in degrees per tick; `None` disables rotation
    pub obstacle_rotation: Option<IntRange>,
    /// Simulated milliseconds between spawns
    pub spawn_interval_ms: u64,
    /// Total boulders per session
    pub max_spawns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X,
            player_speed: PLAYER_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            gravity: GRAVITY,
            down_while_jumping: true,

            obstacle_size: BOULDER_SIZE,
            obstacle_speed: IntRange::new(BOULDER_SPEED_MIN, BOULDER_SPEED_MAX),
            obstacle_rotation: Some(IntRange::new(ROTATION_SPEED_MIN, ROTATION_SPEED_MAX)),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            max_spawns: MAX_SPAWNS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Y coordinate of the floor (bottom of the screen)
    pub fn ground_y(&self) -> f32 {
        self.screen_height
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Spawn interval converted to whole ticks (rounded up, at least 1)
    pub fn spawn_interval_ticks(&self) -> u64 {
        self.spawn_interval_ms
            .saturating_mul(u64::from(self.tick_rate))
            .div_ceil(1000)
            .max(1)
    }

    /// Wall-clock duration of one tick
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }

    /// Check every value; the first problem found is reported
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            // Negated comparison also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be > 0, got {value}")));
            }
            Ok(())
        }
        fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if !(value >= 0.0) {
                return Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")));
            }
            Ok(())
        }

        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        if self.tick_rate == 0 {
            return Err(ConfigError::invalid("tick_rate", "must be > 0"));
        }

        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        if self.player_width > self.screen_width || self.player_height > self.screen_height {
            return Err(ConfigError::invalid("player_width", "player does not fit on screen"));
        }
        if !(0.0..=self.screen_width - self.player_width).contains(&self.player_start_x) {
            return Err(ConfigError::invalid(
                "player_start_x",
                format!("{} puts the player off screen", self.player_start_x),
            ));
        }
        non_negative("player_speed", self.player_speed)?;
        non_negative("jump_power", self.jump_power)?;
        positive("gravity", self.gravity)?;

        positive("obstacle_size", self.obstacle_size)?;
        if self.obstacle_size > self.screen_height {
            return Err(ConfigError::invalid("obstacle_size", "boulder taller than screen"));
        }
        let speed = self.obstacle_speed;
        if speed.min > speed.max {
            return Err(ConfigError::invalid(
                "obstacle_speed",
                format!("max {} < min {}", speed.max, speed.min),
            ));
        }
        if speed.min <= 0 {
            return Err(ConfigError::invalid("obstacle_speed", "min must be > 0"));
        }
        if let Some(rot) = self.obstacle_rotation {
            if rot.min > rot.max {
                return Err(ConfigError::invalid(
                    "obstacle_rotation",
                    format!("max {} < min {}", rot.max, rot.min),
                ));
            }
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::invalid("spawn_interval_ms", "must be > 0"));
        }
        if self
            .spawn_interval_ms
            .checked_mul(u64::from(self.tick_rate))
            .is_none()
        {
            return Err(ConfigError::invalid(
                "spawn_interval_ms",
                format!(
                    "{} ms at {} Hz overflows the tick counter",
                    self.spawn_interval_ms, self.tick_rate
                ),
            ));
        }
        Ok(())
    }
}

/// Configuration load/validation failure
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
