//! Platform abstraction layer
//!
//! Collaborators the game loop consumes but does not own:
//! - Time/ticks (frame pacing)
//! - Input events (key snapshots)

pub mod input;
pub mod time;

pub use input::{InputSampler, ScriptedInput, TerminalInput};
pub use time::{Clock, FixedRateClock, ManualClock};
