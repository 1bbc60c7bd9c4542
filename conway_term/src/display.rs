// display.rs - Terminal rendering of finalized boards

use std::io::{self, Write};

use anyhow::{Context, Result};
use conway::Board;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

/// Each cell is two columns wide so the board looks square.
const CELL_GLYPH: &str = "  ";

/// Something a finalized generation can be drawn on.
pub trait Surface {
    fn draw(&mut self, board: &Board, generation: u64) -> Result<()>;
}

/// Draws boards with crossterm escape sequences into any writer.
pub struct TerminalSurface<W: Write> {
    out: W,
    live_color: Color,
    quit_key: char,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, live_color: Color, quit_key: char) -> Self {
        Self { out, live_color, quit_key }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn draw(&mut self, board: &Board, generation: u64) -> Result<()> {
        for (y, row) in board.rows().enumerate() {
            queue!(self.out, MoveTo(0, y as u16))?;
            for &alive in row {
                if alive {
                    queue!(self.out, SetBackgroundColor(self.live_color), Print(CELL_GLYPH), ResetColor)?;
                } else {
                    queue!(self.out, Print(CELL_GLYPH))?;
                }
            }
        }

        let status = status_line(generation, board.population(), self.quit_key);
        queue!(
            self.out,
            MoveTo(0, board.size() as u16),
            Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        self.out.flush().context("failed to flush frame")?;

        log::trace!("drew generation {generation}");
        Ok(())
    }
}

pub fn status_line(generation: u64, population: usize, quit_key: char) -> String {
    format!("Generation {generation} | Population {population} | Press '{quit_key}' to quit.")
}

/// Puts the terminal in raw mode on an alternate screen with the cursor
/// hidden, and restores it when dropped.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        // Constructed before the screen switch so a failure below still restores raw mode
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))
            .context("failed to set up the terminal")?;
        log::debug!("terminal session started");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen) {
            log::warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("failed to disable raw mode: {err}");
        }
    }
}
