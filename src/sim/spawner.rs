//! Timed boulder factory
//!
//! Fires every `interval_ticks` of simulated time, starting one interval in,
//! until `max_spawns` boulders have been created.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::rng::RandomSource;
use crate::config::{GameConfig, IntRange};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    interval_ticks: u64,
    next_fire_tick: u64,
    max_spawns: u32,
    spawned: u32,
    speed: IntRange,
    rotation: Option<IntRange>,
    size: f32,
    /// Bottom-left corner of every new boulder (right edge, ground line)
    anchor: Vec2,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        let interval_ticks = config.spawn_interval_ticks();
        Self {
            interval_ticks,
            next_fire_tick: interval_ticks,
            max_spawns: config.max_spawns,
            spawned: 0,
            speed: config.obstacle_speed,
            rotation: config.obstacle_rotation,
            size: config.obstacle_size,
            anchor: Vec2::new(config.screen_width, config.ground_y()),
        }
    }

    /// Create a boulder if `tick` has reached the next firing time.
    /// `tick` is the 1-based index of the tick being simulated.
    pub fn maybe_spawn(&mut self, tick: u64, rng: &mut dyn RandomSource) -> Option<Obstacle> {
        if self.is_exhausted() || tick < self.next_fire_tick {
            return None;
        }
        self.next_fire_tick = self.next_fire_tick.saturating_add(self.interval_ticks);
        self.spawned += 1;

        let speed = rng.uniform_int(self.speed.min, self.speed.max);
        let rotation_speed = self.rotation.map(|r| rng.uniform_int(r.min, r.max));
        Some(Obstacle::new(
            self.spawned,
            self.anchor,
            self.size,
            speed as f32,
            rotation_speed,
        ))
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn is_exhausted(&self) -> bool {
        self.spawned >= self.max_spawns
    }

    pub fn next_fire_tick(&self) -> u64 {
        self.next_fire_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geom::Entity;
    use crate::sim::rng::{ScriptedRandom, seeded};

    fn config(max_spawns: u32) -> GameConfig {
        GameConfig {
            max_spawns,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_first_spawn_after_one_interval() {
        let mut spawner = Spawner::new(&config(5));
        let mut rng = seeded(1);
        for tick in 1..120 {
            assert!(spawner.maybe_spawn(tick, &mut rng).is_none(), "tick {tick}");
        }
        let boulder = spawner.maybe_spawn(120, &mut rng).expect("spawn at 2s");
        assert_eq!(boulder.id, 1);
        assert_eq!(spawner.next_fire_tick(), 240);
    }

    #[test]
    fn test_spawn_bounded_by_max() {
        let mut spawner = Spawner::new(&config(3));
        let mut rng = seeded(9);
        let fired = (1..=10_000u64)
            .filter(|&t| spawner.maybe_spawn(t, &mut rng).is_some())
            .count();
        assert_eq!(fired, 3);
        assert!(spawner.is_exhausted());
    }

    #[test]
    fn test_zero_max_never_fires() {
        let mut spawner = Spawner::new(&config(0));
        let mut rng = seeded(9);
        assert!((1..=1000u64).all(|t| spawner.maybe_spawn(t, &mut rng).is_none()));
    }

    #[test]
    fn test_draws_speed_then_rotation() {
        let mut spawner = Spawner::new(&config(2));
        let mut rng = ScriptedRandom::new(vec![7, 33]);
        let boulder = spawner.maybe_spawn(120, &mut rng).expect("spawn");
        assert_eq!(boulder.speed, 7.0);
        assert_eq!(boulder.spin.map(|s| s.speed), Some(33));

        let bb = boulder.bounding_box();
        assert_eq!(bb.left(), 900.0);
        assert_eq!(bb.bottom(), 600.0);
    }

    #[test]
    fn test_no_rotation_draw_when_disabled() {
        let cfg = GameConfig {
            obstacle_rotation: None,
            ..config(2)
        };
        let mut spawner = Spawner::new(&cfg);
        let mut rng = ScriptedRandom::new(vec![6, 8]);
        let a = spawner.maybe_spawn(120, &mut rng).expect("first");
        let b = spawner.maybe_spawn(240, &mut rng).expect("second");
        assert_eq!((a.speed, b.speed), (6.0, 8.0));
        assert!(a.spin.is_none());
    }

    #[test]
    fn test_late_tick_fires_once() {
        let mut spawner = Spawner::new(&config(10));
        let mut rng = seeded(3);
        // A caller that skips ahead still gets one boulder per call
        assert!(spawner.maybe_spawn(500, &mut rng).is_some());
        assert_eq!(spawner.spawned(), 1);
        assert_eq!(spawner.next_fire_tick(), 240);
    }

    #[test]
    fn test_speeds_within_range() {
        let mut spawner = Spawner::new(&config(50));
        let mut rng = seeded(1234);
        for i in 1..=50u64 {
            let b = spawner.maybe_spawn(i * 120, &mut rng).expect("spawn");
            assert!((5.0..=10.0).contains(&b.speed));
            let spin = b.spin.expect("rotation enabled");
            assert!((5..=100).contains(&spin.speed));
        }
    }
}
