use std::thread::sleep;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;

use crate::config::Config;
use crate::game::{Game, Tick};
use crate::player::{Cell, Direction};
use crate::term::Term;

// Frames fire much faster than game steps; the game throttles itself.
const FRAME_INTERVAL_MS: u64 = 5;

const APPLE_GLYPH: &str = "O";

/// Wires the terminal to the game: drains keys into turn input, drives ticks
/// off a wall-clock timestamp and repaints after each step.
pub struct App {
    game: Game,
    term: Term,
}

impl App {
    pub fn new(game: Game) -> Self {
        App { game, term: Term::new() }
    }

    /// Runs the game to completion and restores the terminal before
    /// returning, also on error.
    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;
        let result = self.frame_loop();
        self.term.restore()?;
        result
    }

    fn frame_loop(&mut self) -> Result<()> {
        let started = Instant::now();
        self.game.start();
        self.paint()?;

        loop {
            sleep(Duration::from_millis(FRAME_INTERVAL_MS));

            for key in self.term.read_key_events()? {
                if is_quit(&key) {
                    info!("quit requested after {} moves", self.game.moves());
                    return Ok(());
                }
                if key.kind == KeyEventKind::Press {
                    if let Some(direction) = key_direction(key.code) {
                        self.game.queue_turn(direction);
                    }
                }
            }

            let now = started.elapsed().as_millis() as u64;
            match self.game.tick(now) {
                Tick::Idle => {}
                Tick::Stepped => self.paint()?,
                Tick::Lost => {
                    info!("left the grid after {} moves", self.game.moves());
                    self.present(&["Play within the boundary. GAME OVER."])?;
                    return Ok(());
                }
                Tick::Won => {
                    // Show the cleared board behind the final message.
                    self.paint()?;
                    info!("all apples eaten, final score {}", self.game.moves());
                    let score = format!("Final Score: {}", self.game.moves());
                    self.present(&[&score])?;
                    return Ok(());
                }
            }
        }
    }

    /// Full clear-and-redraw: move counter, field border, apples, head.
    fn paint(&mut self) -> Result<()> {
        let config = self.game.config().clone();

        self.term.clear()?;
        self.term.print_at(0, 0, &format!("Moves: {}", self.game.moves()))?;
        self.draw_border(&config)?;

        for &apple in self.game.grid().cells() {
            let (x, y) = cell_origin(&config, apple);
            self.term.print_at(x, y, APPLE_GLYPH)?;
        }

        let head = self.game.player().head();
        let (x, y) = cell_origin(&config, head);
        self.term.print_at(x, y, head_glyph(self.game.player().direction()))?;

        self.term.flush()
    }

    fn draw_border(&mut self, config: &Config) -> Result<()> {
        let (width, height) = field_size(config);

        for x in 0..width {
            let ch = if x == 0 || x == width - 1 { "+" } else { "-" };
            self.term.print_at(x, 1, ch)?;
            self.term.print_at(x, height - 1, ch)?;
        }

        for y in 2..height - 1 {
            self.term.print_at(0, y, "|")?;
            self.term.print_at(width - 1, y, "|")?;
        }

        Ok(())
    }

    /// Blocking result presentation: the message stays up until any key is
    /// pressed, and no further game steps can run behind it.
    fn present(&mut self, lines: &[&str]) -> Result<()> {
        let (width, height) = field_size(self.game.config());
        self.term.show_message(width, height, lines)?;
        self.term.read_key_blocking()?;
        Ok(())
    }
}

/// Total screen footprint of the bordered field, in terminal cells.
/// Row 0 holds the move counter; the border starts on row 1.
fn field_size(config: &Config) -> (u16, u16) {
    let width = config.nb_cells_x as u16 * config.cell_width + 2;
    let height = config.nb_cells_y as u16 * config.cell_height + 3;
    (width, height)
}

/// Screen position of a game cell's top-left corner.
fn cell_origin(config: &Config, cell: Cell) -> (u16, u16) {
    let x = 1 + cell.x as u16 * config.cell_width;
    let y = 2 + cell.y as u16 * config.cell_height;
    (x, y)
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "^",
        Direction::Down => "v",
        Direction::Left => "<",
        Direction::Right => ">",
    }
}

/// Arrow keys map to turns; every other key is ignored.
fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

fn is_quit(ev: &KeyEvent) -> bool {
    let ctrl_c = ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL);
    ctrl_c || ev.code == KeyCode::Char('q')
}
