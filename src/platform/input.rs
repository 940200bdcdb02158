//! Input sampling
//!
//! A sampler is queried once per tick and returns the held state of the
//! logical keys. Terminals report key presses rather than key state, so the
//! terminal sampler tracks the last tick each key was seen and treats it as
//! held for a short window.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper
//!   `Press` / `Repeat` / `Release` events, keys drop on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`). Keys expire after `HOLD_WINDOW` ticks of silence.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, TryRecvError};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sim::KeyState;

pub trait InputSampler {
    /// Key snapshot for the coming tick
    fn sample(&mut self) -> KeyState;
}

/// Plays back a fixed list of snapshots, then reports no keys
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<KeyState>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(script: Vec<KeyState>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Idle for `ticks` ticks, then press Escape
    pub fn quit_after(ticks: usize) -> Self {
        let mut script = vec![KeyState::NONE; ticks];
        script.push(KeyState {
            escape: true,
            ..KeyState::NONE
        });
        Self::new(script)
    }

    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.cursor)
    }
}

impl InputSampler for ScriptedInput {
    fn sample(&mut self) -> KeyState {
        let keys = self.script.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        keys
    }
}

/// Logical keys a terminal key can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
    Escape,
}

/// Arrow keys, WASD, Esc, and q / Ctrl-C for quit
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Up | KeyCode::Char(' ') => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Key::Up),
            's' => Some(Key::Down),
            'a' => Some(Key::Left),
            'd' => Some(Key::Right),
            'q' => Some(Key::Quit),
            _ => None,
        },
        _ => None,
    }
}

/// Ticks a key stays held after its last press/repeat event.
/// 8 ticks at 60 Hz is ~133 ms, longer than the OS key-repeat interval.
pub const HOLD_WINDOW: u64 = 8;

/// Press/release bookkeeping, independent of the event source
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    last_seen: HashMap<Key, u64>,
}

impl KeyTracker {
    pub fn handle(&mut self, event: &KeyEvent, tick: u64) {
        let Some(key) = map_key(event.code, event.modifiers) else {
            return;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen.insert(key, tick);
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&key);
            }
        }
    }

    pub fn is_held(&self, key: Key, tick: u64) -> bool {
        self.last_seen
            .get(&key)
            .is_some_and(|&last| tick.saturating_sub(last) <= HOLD_WINDOW)
    }

    pub fn snapshot(&self, tick: u64) -> KeyState {
        KeyState {
            up: self.is_held(Key::Up, tick),
            down: self.is_held(Key::Down, tick),
            left: self.is_held(Key::Left, tick),
            right: self.is_held(Key::Right, tick),
            quit: self.is_held(Key::Quit, tick),
            escape: self.is_held(Key::Escape, tick),
        }
    }
}

/// Samples crossterm events delivered over a channel by a reader thread
pub struct TerminalInput {
    events: Receiver<Event>,
    tracker: KeyTracker,
    tick: u64,
}

impl TerminalInput {
    pub fn new(events: Receiver<Event>) -> Self {
        Self {
            events,
            tracker: KeyTracker::default(),
            tick: 0,
        }
    }
}

impl InputSampler for TerminalInput {
    fn sample(&mut self) -> KeyState {
        self.tick += 1;
        let mut disconnected = false;
        loop {
            match self.events.try_recv() {
                Ok(Event::Key(key)) => self.tracker.handle(&key, self.tick),
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        let mut keys = self.tracker.snapshot(self.tick);
        // Reader thread gone: the terminal is closing
        keys.quit |= disconnected;
        keys
    }
}
