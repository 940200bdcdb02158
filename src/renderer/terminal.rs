//! Terminal renderer (crossterm)
//!
//! Scales the playfield onto the character grid. Row 0 is the HUD, the last
//! row is the ground, everything in between is the playfield.

use std::io::Write;

use crossterm::{
    QueueableCommand, cursor,
    style::{self, Color, Print},
    terminal,
};

use super::{Frame, RenderSink, Sprite};
use crate::sim::{EntityKind, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD: Color = Color::Yellow;
const C_GROUND: Color = Color::DarkYellow;
const C_PLAYER: Color = Color::White;
const C_BOULDER: Color = Color::Grey;
const C_GAME_OVER: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

/// Boulder glyphs by quarter turn, so spinning is visible
const BOULDER_GLYPHS: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Inclusive cell rectangle on the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub col0: u16,
    pub row0: u16,
    pub col1: u16,
    pub row1: u16,
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    /// Re-query the terminal size before every frame
    follow_terminal: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Fixed-size grid
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            cols,
            rows,
            follow_terminal: false,
        }
    }

    /// Grid that tracks the real terminal size
    pub fn fit_terminal(out: W) -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            follow_terminal: true,
            ..Self::new(out, cols, rows)
        })
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Rows available to the playfield (between HUD and ground)
    fn field_rows(&self) -> u16 {
        self.rows.saturating_sub(2)
    }

    /// Cells covered by `bounds`, clipped to the playfield.
    /// `None` when nothing of it is on screen.
    pub fn cell_span(&self, bounds: &Rect, screen_width: f32, screen_height: f32) -> Option<CellSpan> {
        let field_rows = self.field_rows();
        if self.cols == 0 || field_rows == 0 {
            return None;
        }
        let cols = f32::from(self.cols);
        let rows = f32::from(field_rows);
        let to_col = |x: f32| x * cols / screen_width;
        let to_row = |y: f32| y * rows / screen_height;

        let x0 = to_col(bounds.left()).floor().max(0.0);
        let x1 = to_col(bounds.right()).ceil().min(cols);
        let y0 = to_row(bounds.top()).floor().max(0.0);
        let y1 = to_row(bounds.bottom()).ceil().min(rows);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(CellSpan {
            col0: x0 as u16,
            row0: 1 + y0 as u16,
            col1: x1 as u16 - 1,
            row1: y1 as u16,
        })
    }

    fn draw_sprite(&mut self, sprite: &Sprite, frame: &Frame) -> std::io::Result<()> {
        let Some(span) = self.cell_span(&sprite.bounds, frame.screen_width, frame.screen_height)
        else {
            return Ok(());
        };
        let (glyph, color) = match sprite.kind {
            EntityKind::Player => ('█', C_PLAYER),
            EntityKind::Boulder => {
                let quarter = (sprite.rotation.rem_euclid(360) / 90) as usize;
                (BOULDER_GLYPHS[quarter], C_BOULDER)
            }
        };
        let line: String = std::iter::repeat_n(glyph, usize::from(span.col1 - span.col0 + 1)).collect();

        self.out.queue(style::SetForegroundColor(color))?;
        for row in span.row0..=span.row1 {
            self.out.queue(cursor::MoveTo(span.col0, row))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    fn draw_hud(&mut self, frame: &Frame) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, 0))?;
        self.out.queue(style::SetForegroundColor(C_HUD))?;
        self.out.queue(Print(format!("Score:{:>7}", frame.score)))?;

        let hint = "↑ jump  ← → ↓ move  Esc quit";
        let hx = self.cols.saturating_sub(hint.chars().count() as u16 + 1);
        self.out.queue(cursor::MoveTo(hx, 0))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(hint))?;
        Ok(())
    }

    fn draw_ground(&mut self) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_GROUND))?;
        self.out.queue(Print("▀".repeat(usize::from(self.cols))))?;
        Ok(())
    }

    fn draw_game_over(&mut self, frame: &Frame) -> std::io::Result<()> {
        let lines = [
            "╔══════════════════════╗".to_string(),
            "║     You got hit!     ║".to_string(),
            format!("║   Score: {:>10}  ║", frame.score),
            "╚══════════════════════╝".to_string(),
        ];
        let cx = (self.cols / 2).saturating_sub(12);
        let cy = (self.rows / 2).saturating_sub(2);
        self.out.queue(style::SetForegroundColor(C_GAME_OVER))?;
        for (i, line) in lines.iter().enumerate() {
            self.out.queue(cursor::MoveTo(cx, cy + i as u16))?;
            self.out.queue(Print(line))?;
        }
        Ok(())
    }
}

impl<W: Write> RenderSink for TerminalRenderer<W> {
    fn present(&mut self, frame: &Frame) -> std::io::Result<()> {
        if self.follow_terminal {
            let (cols, rows) = terminal::size()?;
            self.resize(cols, rows);
        }
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_hud(frame)?;
        for sprite in &frame.sprites {
            self.draw_sprite(sprite, frame)?;
        }
        self.draw_ground()?;
        if frame.is_game_over() {
            self.draw_game_over(frame)?;
        }

        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
