//! Boulder Run entry point
//!
//! Parses the command line, builds the world, and runs it either in the
//! terminal or headless.

use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    ExecutableCommand, cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal,
};

use boulder_run::platform::{FixedRateClock, ManualClock, ScriptedInput, TerminalInput};
use boulder_run::renderer::{NullSink, TerminalRenderer};
use boulder_run::sim::World;
use boulder_run::{GameConfig, Preset, Session, SessionEnd, SessionSummary};

#[derive(Parser)]
#[command(name = "boulder-run")]
#[command(about = "Jump the boulders. Arrow keys / WASD to move, Esc to quit.")]
struct Cli {
    /// Tuning preset: classic, practice, spinning
    #[arg(long, default_value = "spinning")]
    preset: String,

    /// JSON config file (overrides the preset)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for boulder speeds and spins
    #[arg(long)]
    seed: Option<u64>,

    /// Let the game play itself
    #[arg(long)]
    autopilot: bool,

    /// Simulate without a terminal or frame pacing (implies --autopilot)
    #[arg(long)]
    headless: bool,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Boulder Run starting (seed {seed})");

    // Headless runs need an end even if the autopilot never gets hit
    let max_ticks = cli.max_ticks.or_else(|| {
        cli.headless
            .then(|| {
                config
                    .spawn_interval_ticks()
                    .saturating_mul(u64::from(config.max_spawns) + 5)
            })
    });

    let world = World::new(config, seed).context("invalid configuration")?;
    let mut session = Session::new(world)
        .with_autopilot(cli.autopilot || cli.headless)
        .with_tick_limit(max_ticks);

    let end = if cli.headless {
        run_headless(&mut session)?
    } else {
        run_terminal(&mut session)?
    };

    report(&session.summary(end), cli.json)
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    if let Some(path) = &cli.config {
        return GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()));
    }
    match Preset::from_str(&cli.preset) {
        Some(preset) => {
            log::info!("Using {} preset", preset.as_str());
            Ok(preset.config())
        }
        None => bail!(
            "unknown preset `{}` (expected one of: classic, practice, spinning)",
            cli.preset
        ),
    }
}

fn run_headless(session: &mut Session) -> Result<SessionEnd> {
    let mut clock = ManualClock::new(session.world().config().tick_period());
    // Never asks to quit; the tick limit or a collision ends the run
    let mut input = ScriptedInput::default();
    Ok(session.run(&mut clock, &mut input, &mut NullSink)?)
}

fn run_terminal(session: &mut Session) -> Result<SessionEnd> {
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Key-release events where the terminal supports them; others fall back
    // to the hold window in TerminalInput.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads live on their own thread so a tick never waits on I/O
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = play(session, &mut out, rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();

    result
}

fn play<W: Write>(session: &mut Session, out: &mut W, rx: mpsc::Receiver<Event>) -> Result<SessionEnd> {
    let mut clock = FixedRateClock::new(session.world().config().tick_period());
    let mut input = TerminalInput::new(rx);
    let mut renderer = TerminalRenderer::fit_terminal(out).context("querying terminal size")?;

    let end = session.run(&mut clock, &mut input, &mut renderer)?;
    if end == SessionEnd::Collided {
        // Leave the game-over banner up briefly
        thread::sleep(std::time::Duration::from_millis(1500));
    }
    Ok(end)
}

fn report(summary: &SessionSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }
    match summary.end {
        SessionEnd::Collided => println!("You got hit! Score: {}", summary.score),
        SessionEnd::Quit => println!("Quit. Score: {}", summary.score),
        SessionEnd::TickLimit => println!(
            "Survived {} ticks ({:.1}s, {} boulders). Score: {}",
            summary.ticks, summary.seconds, summary.boulders_spawned, summary.score
        ),
    }
    Ok(())
}
