mod app;
mod config;
mod game;
mod grid;
mod player;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::grid::Grid;

#[derive(Parser)]
#[command(name = "muncher", version, about = "Eat every apple without leaving the grid")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u16).range(1..=256))]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u16).range(1..=256))]
    height: u16,

    /// Milliseconds between game steps
    #[arg(long, default_value_t = 100)]
    speed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file; stdout belongs to the game once raw mode is on.
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create("muncher.log").context("creating log file")?,
    )
    .context("initializing logger")?;

    let config = Config::new(cli.width.into(), cli.height.into(), cli.speed);
    info!(
        "starting: {}x{} grid, {}ms steps",
        config.nb_cells_x, config.nb_cells_y, config.speed_ms
    );

    let grid = Grid::new(&config, &mut rand::thread_rng());
    let mut app = App::new(Game::new(config, grid));
    app.run()
}
