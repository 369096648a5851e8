use rand::Rng;

use crate::config::Config;
use crate::player::Cell;

/// The collectible population. Seeded once at construction, shrinks as the
/// player eats; empty means the level is cleared.
pub struct Grid {
    apples: Vec<Cell>,
}

impl Grid {
    /// Seeds half the grid's width in apples at uniformly random cells.
    /// Coordinates are not deduplicated: two apples may land on the same
    /// cell and count as two entries until that cell is eaten.
    pub fn new(config: &Config, rng: &mut impl Rng) -> Self {
        let count = config.nb_cells_x / 2;
        let apples = (0..count)
            .map(|_| {
                let x = rng.gen_range(0..config.nb_cells_x);
                let y = rng.gen_range(0..config.nb_cells_y);
                Cell::new(x, y)
            })
            .collect();
        Grid { apples }
    }

    /// A grid with a fixed apple layout, for scripted scenarios.
    pub fn from_cells(apples: Vec<Cell>) -> Self {
        Grid { apples }
    }

    pub fn is_apple(&self, cell: Cell) -> bool {
        self.apples.contains(&cell)
    }

    /// Removes every apple at the given cell, coincident duplicates included.
    pub fn eat(&mut self, cell: Cell) {
        self.apples.retain(|apple| *apple != cell);
    }

    pub fn is_done(&self) -> bool {
        self.apples.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.apples
    }
}
