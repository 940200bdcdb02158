//! Fixed timestep simulation tick
//!
//! Core game loop step that advances the World deterministically.

use serde::{Deserialize, Serialize};

use super::collision::first_hit;
use super::state::{GameEvent, GamePhase, World};

/// Logical key snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Window close / Ctrl-C
    pub quit: bool,
    pub escape: bool,
}

impl KeyState {
    pub const NONE: KeyState = KeyState {
        up: false,
        down: false,
        left: false,
        right: false,
        quit: false,
        escape: false,
    };

    /// Quit or Escape: halts the loop outside of the tick body
    pub fn wants_exit(&self) -> bool {
        self.quit || self.escape
    }

    /// Movement keys from `self`, exit keys from `other`
    pub fn with_exit_keys_of(self, other: &KeyState) -> KeyState {
        KeyState {
            quit: other.quit,
            escape: other.escape,
            ..self
        }
    }
}

/// Advance the world by one tick.
///
/// Order: player, spawner, boulders (then purge), collision, score.
/// A terminated world is left untouched.
pub fn tick(world: &mut World, keys: &KeyState) -> GamePhase {
    if world.phase == GamePhase::Terminated {
        return GamePhase::Terminated;
    }

    world.elapsed_ticks += 1;
    let now = world.elapsed_ticks;

    // Player
    let was_jumping = world.player.is_jumping;
    world.player.update(keys, &world.config);
    match (was_jumping, world.player.is_jumping) {
        (false, true) => world.events.push(GameEvent::Jumped),
        (true, false) => world.events.push(GameEvent::Landed),
        _ => {}
    }

    // Spawning
    if let Some(boulder) = world.spawner.maybe_spawn(now, world.rng.as_mut()) {
        log::debug!(
            "tick {}: spawned boulder {} (speed {}, spin {:?})",
            now,
            boulder.id,
            boulder.speed,
            boulder.spin.map(|s| s.speed)
        );
        world.events.push(GameEvent::Spawned {
            id: boulder.id,
            speed: boulder.speed,
            rotation_speed: boulder.spin.map(|s| s.speed),
        });
        world.obstacles.push(boulder);
    }

    // Boulders, then purge the ones that left the screen
    for boulder in &mut world.obstacles {
        boulder.update();
    }
    let events = &mut world.events;
    world.obstacles.retain(|b| {
        if !b.alive {
            events.push(GameEvent::ObstacleRemoved { id: b.id });
        }
        b.alive
    });

    // Collision against the post-update set
    let hit = first_hit(&world.player.rect, &world.obstacles).map(|b| b.id);
    if let Some(obstacle_id) = hit {
        world.player.kill();
        world.phase = GamePhase::Terminated;
        world.events.push(GameEvent::Collision {
            obstacle_id,
            score: world.score,
        });
        log::info!(
            "Hit by boulder {} on tick {}; final score {}",
            obstacle_id,
            now,
            world.score
        );
        return GamePhase::Terminated;
    }

    world.score += 1;
    GamePhase::Running
}
