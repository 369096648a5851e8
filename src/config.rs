/// Layout and timing settings, fixed at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Milliseconds between game steps.
    pub speed_ms: u64,
    /// Grid width in cells.
    pub nb_cells_x: i32,
    /// Grid height in cells.
    pub nb_cells_y: i32,
    /// Terminal columns per game cell.
    pub cell_width: u16,
    /// Terminal rows per game cell.
    pub cell_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            speed_ms: 100,
            nb_cells_x: 16,
            nb_cells_y: 16,
            cell_width: 2,
            cell_height: 1,
        }
    }
}

impl Config {
    pub fn new(nb_cells_x: i32, nb_cells_y: i32, speed_ms: u64) -> Self {
        Config {
            speed_ms,
            nb_cells_x,
            nb_cells_y,
            ..Default::default()
        }
    }
}
