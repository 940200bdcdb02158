//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` = one step)
//! - Injected RNG only
//! - Stable iteration order (boulders in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geom;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{any_hit, first_hit};
pub use geom::{Entity, EntityKind, Rect};
pub use obstacle::{Obstacle, Spin};
pub use player::Player;
pub use rng::{RandomSource, ScriptedRandom, seeded};
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, World};
pub use tick::{KeyState, tick};
