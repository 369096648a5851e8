use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

/// Thin wrapper over the terminal: raw mode and alternate screen lifecycle,
/// queued positioned printing, and per-frame key draining.
pub struct Term {
    stdout: Stdout,
}

impl Term {
    pub fn new() -> Self {
        Term { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)
            .context("entering alternate screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, LeaveAlternateScreen, cursor::Show)
            .context("leaving alternate screen")?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        Ok(())
    }

    /// Drains every key event already pending without blocking the frame.
    pub fn read_key_events(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).context("polling for input")? {
            if let Event::Key(ev) = read().context("reading input")? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Blocks until a key arrives. Used to acknowledge terminal messages.
    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read().context("reading input")? {
                return Ok(ev);
            }
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All)).context("clearing screen")?;
        Ok(())
    }

    pub fn print_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(x, y), style::Print(text))
            .context("queueing output")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("flushing output")?;
        Ok(())
    }

    /// Draws a bordered message box centered on the given area and flushes.
    pub fn show_message(&mut self, area_width: u16, area_height: u16, lines: &[&str]) -> Result<()> {
        let inner = lines.iter().map(|line| line.len()).max().unwrap_or(0) + 2;
        let height = lines.len() as u16 + 2;
        let left = area_width.saturating_sub(inner as u16 + 2) / 2;
        let top = area_height.saturating_sub(height) / 2;

        let edge = format!("+{}+", "-".repeat(inner));
        self.print_at(left, top, &edge)?;
        for (i, line) in lines.iter().enumerate() {
            let padded = format!("|{: ^width$}|", line, width = inner);
            self.print_at(left, top + 1 + i as u16, &padded)?;
        }
        self.print_at(left, top + height - 1, &edge)?;

        self.flush()
    }
}
