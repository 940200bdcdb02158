use std::time::Duration;

use glam::Vec2;

use boulder_run::config::{GameConfig, IntRange, Preset};
use boulder_run::platform::{ManualClock, ScriptedInput};
use boulder_run::renderer::{Frame, FrameRecorder};
use boulder_run::sim::{
    Entity, GameEvent, GamePhase, KeyState, Rect, ScriptedRandom, World, autopilot, tick,
};
use boulder_run::{Session, SessionEnd};

const UP: KeyState = KeyState {
    up: true,
    ..KeyState::NONE
};

fn jump_config() -> GameConfig {
    GameConfig {
        screen_width: 900.0,
        screen_height: 600.0,
        player_start_x: 50.0,
        jump_power: 20.0,
        gravity: 0.5,
        ..GameConfig::default()
    }
}

#[test]
fn jump_round_trip_without_obstacles() {
    let config = GameConfig {
        max_spawns: 0,
        ..jump_config()
    };
    let mut world = World::new(config, 1).expect("config");
    assert_eq!(world.player.rect.left(), 50.0);
    assert_eq!(world.player.rect.bottom(), 600.0);

    tick(&mut world, &UP);
    assert_eq!(world.player.rect.bottom(), 580.0);
    assert_eq!(world.player.vertical_velocity, 19.5);

    // 2 * 20 / 0.5 = 80 ticks after the launch tick
    for n in 1..80 {
        tick(&mut world, &KeyState::NONE);
        assert!(world.player.is_jumping, "landed after {n} ticks");
        assert!(world.player.rect.bottom() < 600.0);
    }
    tick(&mut world, &KeyState::NONE);
    assert!(!world.player.is_jumping);
    assert_eq!(world.player.rect.bottom(), 600.0);
    assert_eq!(world.player.vertical_velocity, 0.0);
    assert_eq!(world.score, 81);
    assert!(world.obstacles.is_empty());
}

#[test]
fn boulder_leaves_after_192_ticks_and_is_purged_on_193rd() {
    let config = GameConfig {
        spawn_interval_ms: 1000,
        max_spawns: 1,
        obstacle_size: 60.0,
        obstacle_speed: IntRange::new(1, 20),
        obstacle_rotation: None,
        ..jump_config()
    };
    let mut world =
        World::with_rng(config, Box::new(ScriptedRandom::new(vec![5]))).expect("config");

    // Spawns on tick 60; its k-th update happens on tick 59 + k
    for _ in 0..60 {
        tick(&mut world, &KeyState::NONE);
    }
    assert_eq!(world.obstacles.len(), 1);
    let id = world.obstacles[0].id;
    assert_eq!(world.obstacles[0].speed, 5.0);
    assert_eq!(world.obstacles[0].bounding_box().left(), 895.0);

    // It crosses the player's column on updates 163..=181; be airborne then
    let mut updates = 1;
    while updates < 192 {
        let keys = if updates == 149 { UP } else { KeyState::NONE };
        assert_eq!(tick(&mut world, &keys), GamePhase::Running);
        updates += 1;
    }
    let boulder = world.obstacle(id).expect("still live after 192 updates");
    assert_eq!(boulder.bounding_box().right(), 0.0);

    world.drain_events();
    tick(&mut world, &KeyState::NONE);
    assert!(world.obstacle(id).is_none());
    assert_eq!(world.drain_events(), vec![GameEvent::ObstacleRemoved { id }]);
}

#[test]
fn collision_geometry_examples() {
    let player = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
    let near = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
    let far = Rect::new(Vec2::new(20.0, 20.0), Vec2::new(30.0, 30.0));
    assert!(player.intersects(&near));
    assert!(near.intersects(&player));
    assert!(!player.intersects(&far));
    assert!(!far.intersects(&player));
}

#[test]
fn score_freezes_at_collision() {
    let mut world = World::new(Preset::Spinning.config(), 2024).expect("config");
    while tick(&mut world, &KeyState::NONE) == GamePhase::Running {
        assert_eq!(world.score, world.elapsed_ticks);
        assert!(world.elapsed_ticks < 10_000, "an idle player should be hit");
    }
    let final_score = world.score;
    let final_ticks = world.elapsed_ticks;
    assert_eq!(final_score, final_ticks - 1);
    assert!(!world.player.is_alive());
    let spawned = world.spawner.spawned();

    for _ in 0..1000 {
        assert_eq!(tick(&mut world, &UP), GamePhase::Terminated);
    }
    assert_eq!(world.score, final_score);
    assert_eq!(world.elapsed_ticks, final_ticks);
    assert_eq!(world.spawner.spawned(), spawned);
}

#[test]
fn practice_preset_never_spawns() {
    let mut world = World::new(Preset::Practice.config(), 1).expect("config");
    for _ in 0..5_000 {
        tick(&mut world, &KeyState::NONE);
    }
    assert_eq!(world.spawner.spawned(), 0);
    assert_eq!(world.score, 5_000);
}

#[test]
fn spawn_count_never_exceeds_max() {
    let config = GameConfig {
        spawn_interval_ms: 100,
        max_spawns: 4,
        ..Preset::Spinning.config()
    };
    let mut world = World::new(config, 77).expect("config");
    let mut spawned_events = 0;
    for _ in 0..2_000 {
        let keys = autopilot::steer(&world);
        tick(&mut world, &keys);
        spawned_events += world
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Spawned { .. }))
            .count();
        if !world.is_running() {
            break;
        }
    }
    assert!(spawned_events <= 4);
    assert_eq!(spawned_events as u32, world.spawner.spawned());
}

#[test]
fn same_seed_same_game() {
    let run = |seed: u64| -> Vec<Frame> {
        let world = World::new(GameConfig::default(), seed).expect("config");
        let mut session = Session::new(world)
            .with_autopilot(true)
            .with_tick_limit(Some(1_500));
        let mut frames = FrameRecorder::default();
        session
            .run(
                &mut ManualClock::new(Duration::from_millis(16)),
                &mut ScriptedInput::default(),
                &mut frames,
            )
            .expect("run");
        frames.frames
    };
    let a = run(99_999);
    let b = run(99_999);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn escape_halts_without_termination() {
    let world = World::new(GameConfig::default(), 5).expect("config");
    let mut session = Session::new(world);
    let end = session
        .run(
            &mut ManualClock::default(),
            &mut ScriptedInput::quit_after(10),
            &mut FrameRecorder::default(),
        )
        .expect("run");
    assert_eq!(end, SessionEnd::Quit);
    assert_eq!(session.world().phase, GamePhase::Running);
    assert_eq!(session.world().score, 10);
}

#[test]
fn player_stays_on_screen_under_random_play() {
    let mut world = World::new(
        GameConfig {
            max_spawns: 0,
            player_speed: 5.0,
            ..Preset::Classic.config()
        },
        3,
    )
    .expect("config");
    let screen = Rect::new(Vec2::ZERO, world.config().screen_size());
    let pattern = [
        UP,
        KeyState {
            left: true,
            down: true,
            ..KeyState::NONE
        },
        KeyState {
            right: true,
            up: true,
            ..KeyState::NONE
        },
        KeyState::NONE,
    ];
    for i in 0..3_000 {
        let keys = pattern[(i / 37) % pattern.len()];
        tick(&mut world, &keys);
        assert!(world.player.bounding_box().is_within(&screen));
    }
}

#[test]
fn extreme_spin_config_runs_without_overflow() {
    let config = GameConfig::from_json_str(
        r#"{ "spawn_interval_ms": 17, "obstacle_rotation": { "min": 2147483647, "max": 2147483647 } }"#,
    )
    .expect("valid config");
    let mut world = World::new(config, 8).expect("config");
    for _ in 0..600 {
        let keys = autopilot::steer(&world);
        if tick(&mut world, &keys) == GamePhase::Terminated {
            break;
        }
        for boulder in &world.obstacles {
            assert!((0..360).contains(&boulder.rotation()));
        }
    }
    assert!(world.spawner.spawned() > 1);
}
