use std::io::{self, Write};

use crossterm::cursor::{MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use unicode_width::UnicodeWidthStr;

use crate::grid::{Cell, Pos};
use crate::maze::Maze;

const CELL_W: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Player,
    Wall,
    Passage,
    Start,
    End,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Player => 'P',
            Glyph::Wall => '#',
            Glyph::Passage => '.',
            Glyph::Start => 'S',
            Glyph::End => 'E',
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Player => Color::Yellow,
            Glyph::Wall => Color::Blue,
            Glyph::Passage => Color::DarkGrey,
            Glyph::Start => Color::Green,
            Glyph::End => Color::Red,
        }
    }
}

pub fn glyph_for(maze: &Maze, pos: Pos, player: Option<Pos>) -> Glyph {
    if player == Some(pos) {
        return Glyph::Player;
    }
    match maze.cell_at(pos.x as isize, pos.y as isize) {
        Cell::Wall => Glyph::Wall,
        Cell::Passage => Glyph::Passage,
        Cell::Start => Glyph::Start,
        Cell::End => Glyph::End,
    }
}

/// Plain-text board, one glyph and a space per cell, one line per row.
pub fn render_to_string(maze: &Maze, player: Option<Pos>) -> String {
    let mut out = String::with_capacity((maze.width() * CELL_W + 1) * maze.height());
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            out.push(glyph_for(maze, Pos::new(x, y), player).symbol());
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Top-left corner of a board centred in `term`, or `None` when the board
/// plus its status line does not fit. Every cell offset inside a fitting
/// board is below `u16::MAX`.
pub fn board_origin(width: usize, height: usize, term: (u16, u16)) -> Option<(u16, u16)> {
    let needed_w = width.checked_mul(CELL_W).and_then(|w| u16::try_from(w).ok())?;
    let needed_h = height.checked_add(2).and_then(|h| u16::try_from(h).ok())?;
    let (term_w, term_h) = term;
    if term_w < needed_w || term_h < needed_h {
        return None;
    }
    Some(((term_w - needed_w) / 2, (term_h - needed_h) / 2))
}

/// Draws the board centred in the terminal, repainting only changed cells.
pub struct Renderer {
    last: Vec<Option<Glyph>>,
    last_status: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![None; width * height],
            last_status: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 0,
        }
    }

    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        maze: &Maze,
        player: Pos,
        status: &str,
    ) -> io::Result<()> {
        let term = terminal::size()?;
        self.render_in(out, maze, player, status, term)
    }

    /// Draws into a terminal of `term` columns and rows.
    pub fn render_in<W: Write>(
        &mut self,
        out: &mut W,
        maze: &Maze,
        player: Pos,
        status: &str,
        term: (u16, u16),
    ) -> io::Result<()> {
        let (term_w, term_h) = term;
        let Some((origin_x, origin_y)) = board_origin(maze.width(), maze.height(), term) else {
            out.queue(MoveTo(0, 0))?;
            out.queue(Clear(ClearType::All))?;
            out.queue(Print(format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                maze.width().saturating_mul(CELL_W),
                maze.height().saturating_add(2),
                term_w,
                term_h
            )))?;
            out.flush()?;
            self.needs_full = true;
            return Ok(());
        };

        if self.needs_full || origin_x != self.origin_x || origin_y != self.origin_y {
            out.queue(Clear(ClearType::All))?;
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.last.iter_mut().for_each(|g| *g = None);
            self.last_status.clear();
            self.needs_full = false;
        }

        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let glyph = glyph_for(maze, Pos::new(x, y), Some(player));
                let idx = y * maze.width() + x;
                if self.last[idx] != Some(glyph) {
                    self.last[idx] = Some(glyph);
                    self.draw_cell(out, x, y, glyph)?;
                }
            }
        }

        if status != self.last_status {
            out.queue(MoveTo(self.origin_x, self.origin_y + maze.height() as u16 + 1))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Print(status))?;
            out.queue(ResetColor)?;
            self.last_status = status.to_string();
        }

        out.flush()
    }

    fn draw_cell<W: Write>(&self, out: &mut W, x: usize, y: usize, glyph: Glyph) -> io::Result<()> {
        let mut buf = [0u8; 4];
        let text: &str = glyph.symbol().encode_utf8(&mut buf);
        out.queue(MoveTo(
            self.origin_x + (x * CELL_W) as u16,
            self.origin_y + y as u16,
        ))?;
        out.queue(SetForegroundColor(glyph.color()))?;
        out.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            out.queue(Print(' '))?;
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}

/// Shows the cursor, leaves the alternate screen and drops raw mode. Every
/// step runs even when an earlier one fails; the first error is returned.
pub fn restore_terminal<W, F>(out: &mut W, disable_raw_mode: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let shown = out.execute(Show).map(|_| ());
    let left = out.execute(LeaveAlternateScreen).map(|_| ());
    let raw = disable_raw_mode();
    shown.and(left).and(raw)
}
