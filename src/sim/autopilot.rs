//! Idle/demo mode - the game plays itself
//!
//! Jumps so that the nearest incoming boulder passes under the apex.

use super::geom::Entity;
use super::player::Player;
use super::state::World;
use super::tick::KeyState;

/// Keys the autopilot would press this tick
pub fn steer(world: &World) -> KeyState {
    let player = &world.player;
    if !world.is_running() || player.is_jumping {
        return KeyState::NONE;
    }

    let p = player.rect;
    let airtime = Player::airtime_ticks(player.jump_power, world.config().gravity) as f32;

    // (ticks until the boulder reaches the player, ticks it spends overlapping in x)
    let threat = world
        .obstacles
        .iter()
        .filter(|b| b.alive && b.speed > 0.0)
        .filter_map(|b| {
            let bb = b.bounding_box();
            if bb.right() <= p.left() {
                return None;
            }
            let eta = (bb.left() - p.right()).max(0.0) / b.speed;
            let window = (p.width() + bb.width()) / b.speed;
            Some((eta, window))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0));

    match threat {
        Some((eta, window)) if eta <= (airtime - window) / 2.0 => KeyState {
            up: true,
            ..KeyState::NONE
        },
        _ => KeyState::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, IntRange};
    use crate::sim::obstacle::Obstacle;
    use crate::sim::state::GamePhase;
    use crate::sim::tick::tick;
    use glam::Vec2;

    fn config() -> GameConfig {
        GameConfig {
            obstacle_speed: IntRange::fixed(6),
            obstacle_rotation: None,
            max_spawns: 3,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_idle_without_threats() {
        let world = World::new(config(), 1).expect("config");
        assert_eq!(steer(&world), KeyState::NONE);
    }

    #[test]
    fn test_waits_for_far_boulder_then_jumps() {
        let mut world = World::new(config(), 1).expect("config");
        world
            .obstacles
            .push(Obstacle::new(1, Vec2::new(900.0, 600.0), 60.0, 5.0, None));
        assert!(!steer(&world).up);

        // 100 px away at 5 px/tick: eta 20 <= (60 - 20) / 2
        world.obstacles[0].body.set_left(190.0);
        assert!(steer(&world).up);
    }

    #[test]
    fn test_ignores_boulders_behind() {
        let mut world = World::new(config(), 1).expect("config");
        let mut b = Obstacle::new(1, Vec2::new(0.0, 600.0), 60.0, 5.0, None);
        b.body.set_right(40.0);
        world.obstacles.push(b);
        assert!(!steer(&world).up);
    }

    #[test]
    fn test_autopilot_clears_a_wave() {
        let mut world = World::new(config(), 11).expect("config");
        let total = 3 * 120 + 300;
        for _ in 0..total {
            let keys = steer(&world);
            assert_eq!(tick(&mut world, &keys), GamePhase::Running);
        }
        assert_eq!(world.spawner.spawned(), 3);
        assert_eq!(world.score, total);
        assert!(world.obstacles.is_empty());
    }
}
