//! Snapshot renderer for a real terminal.
//!
//! Commands are queued into a reusable byte buffer and flushed in one write
//! per frame. Frames are drawn only when the runtime reports a change, and
//! every frame is a full redraw.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use brickfall_core::SessionSnapshot;
use brickfall_store::ScoreRecord;
use brickfall_types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Board cell width in terminal columns (compensates glyph aspect ratio).
const CELL_W: u16 = 2;

/// Top-left corner of the board frame.
const FRAME_X: u16 = 1;
const FRAME_Y: u16 = 0;

const FRAME_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
const FRAME_H: u16 = BOARD_HEIGHT as u16 + 2;

/// Left edge of the info panel.
const PANEL_X: u16 = FRAME_X + FRAME_W + 3;

pub struct TermUi {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TermUi {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Render one frame from a snapshot and the current score table.
    pub fn draw(&mut self, snap: &SessionSnapshot, scores: &[ScoreRecord]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_frame()?;
        self.draw_board(snap)?;
        self.draw_panel(snap, scores)?;
        self.draw_status(snap)?;

        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()
    }

    fn draw_frame(&mut self) -> Result<()> {
        self.buf.queue(SetForegroundColor(Color::Grey))?;
        self.put(FRAME_X, FRAME_Y, "┌")?;
        self.put(FRAME_X + FRAME_W - 1, FRAME_Y, "┐")?;
        self.put(FRAME_X, FRAME_Y + FRAME_H - 1, "└")?;
        self.put(FRAME_X + FRAME_W - 1, FRAME_Y + FRAME_H - 1, "┘")?;
        for dx in 1..FRAME_W - 1 {
            self.put(FRAME_X + dx, FRAME_Y, "─")?;
            self.put(FRAME_X + dx, FRAME_Y + FRAME_H - 1, "─")?;
        }
        for dy in 1..FRAME_H - 1 {
            self.put(FRAME_X, FRAME_Y + dy, "│")?;
            self.put(FRAME_X + FRAME_W - 1, FRAME_Y + dy, "│")?;
        }
        Ok(())
    }

    fn draw_board(&mut self, snap: &SessionSnapshot) -> Result<()> {
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                match PieceKind::from_code(snap.board[y][x]) {
                    Some(kind) => self.draw_cell(x as i8, y as i8, kind)?,
                    None => self.draw_empty_cell(x as i8, y as i8)?,
                }
            }
        }

        if let Some(active) = snap.active {
            for (dx, dy) in active.blocks {
                let x = active.x + dx;
                let y = active.y + dy;
                if y >= 0 {
                    self.draw_cell(x, y, active.kind)?;
                }
            }
        }
        Ok(())
    }

    fn draw_cell(&mut self, x: i8, y: i8, kind: PieceKind) -> Result<()> {
        self.buf.queue(SetForegroundColor(kind_color(kind)))?;
        self.put(cell_col(x), cell_row(y), "██")
    }

    fn draw_empty_cell(&mut self, x: i8, y: i8) -> Result<()> {
        self.buf.queue(SetForegroundColor(Color::Rgb {
            r: 52,
            g: 73,
            b: 94,
        }))?;
        self.put(cell_col(x), cell_row(y), "· ")
    }

    fn draw_panel(&mut self, snap: &SessionSnapshot, scores: &[ScoreRecord]) -> Result<()> {
        let mut y = FRAME_Y + 1;
        self.label_value(PANEL_X, y, "SCORE", snap.score)?;
        y += 1;
        self.label_value(PANEL_X, y, "LEVEL", snap.level)?;
        y += 1;
        self.label_value(PANEL_X, y, "LINES", snap.lines)?;
        y += 2;

        self.buf.queue(SetForegroundColor(Color::White))?;
        self.buf.queue(SetAttribute(Attribute::Bold))?;
        self.put(PANEL_X, y, "NEXT")?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        y += 1;
        self.buf.queue(SetForegroundColor(kind_color(snap.next.kind)))?;
        for (dx, dy) in snap.next.blocks {
            self.put(
                PANEL_X + dx as u16 * CELL_W,
                y + dy as u16,
                "██",
            )?;
        }
        y += snap.next.height as u16 + 1;

        self.buf.queue(SetForegroundColor(Color::White))?;
        self.buf.queue(SetAttribute(Attribute::Bold))?;
        self.put(PANEL_X, y, "HIGH SCORES")?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        y += 1;
        self.buf.queue(SetForegroundColor(Color::Grey))?;
        if scores.is_empty() {
            self.put(PANEL_X, y, "-")?;
        }
        for (rank, record) in scores.iter().enumerate() {
            let line = format!(
                "{:2}. {:>6}  L{} {:>3}",
                rank + 1,
                record.score,
                record.level,
                record.lines
            );
            self.put(PANEL_X, y, &line)?;
            y += 1;
        }
        Ok(())
    }

    fn draw_status(&mut self, snap: &SessionSnapshot) -> Result<()> {
        let status = match snap.phase() {
            Phase::Idle => "SPACE start · arrows move · ↑ rotate · p pause · r reset · q quit",
            Phase::Running => "playing · p pause · q quit",
            Phase::Paused => "PAUSED · p resume",
            Phase::GameOver => "GAME OVER · r reset",
        };
        self.buf.queue(SetForegroundColor(Color::Grey))?;
        self.put(FRAME_X, FRAME_Y + FRAME_H, status)?;

        // Overlay in the middle of the board for the blocking phases.
        let overlay = match snap.phase() {
            Phase::Paused => Some("PAUSED"),
            Phase::GameOver => Some("GAME OVER"),
            _ => None,
        };
        if let Some(text) = overlay {
            let x = FRAME_X + (FRAME_W.saturating_sub(text.len() as u16)) / 2;
            self.buf.queue(SetForegroundColor(Color::White))?;
            self.buf.queue(SetAttribute(Attribute::Bold))?;
            self.put(x, FRAME_Y + FRAME_H / 2, text)?;
            self.buf.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn label_value(&mut self, x: u16, y: u16, label: &str, value: u32) -> Result<()> {
        self.buf.queue(SetForegroundColor(Color::White))?;
        self.buf.queue(SetAttribute(Attribute::Bold))?;
        self.put(x, y, label)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(SetForegroundColor(Color::Grey))?;
        self.put(x + 6, y, &value.to_string())
    }

    fn put(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.buf.queue(cursor::MoveTo(x, y))?;
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TermUi {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_col(x: i8) -> u16 {
    FRAME_X + 1 + x as u16 * CELL_W
}

fn cell_row(y: i8) -> u16 {
    FRAME_Y + 1 + y as u16
}

/// Per-kind block colors.
fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Rgb { r: 0, g: 255, b: 255 },
        PieceKind::O => Color::Rgb { r: 255, g: 255, b: 0 },
        PieceKind::T => Color::Rgb { r: 255, g: 0, b: 255 },
        PieceKind::S => Color::Rgb { r: 0, g: 255, b: 0 },
        PieceKind::Z => Color::Rgb { r: 255, g: 0, b: 0 },
        PieceKind::J => Color::Rgb { r: 0, g: 0, b: 255 },
        PieceKind::L => Color::Rgb { r: 255, g: 165, b: 0 },
    }
}
