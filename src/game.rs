use crate::config::Config;
use crate::grid::Grid;
use crate::player::{Cell, Direction, Player};

use StepEvent::*;

const START_CELL: Cell = Cell::new(1, 1);
const START_DIRECTION: Direction = Direction::Right;

/// What a call to [`Game::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running, or the step interval has not elapsed yet.
    Idle,
    /// One step was taken and the game continues.
    Stepped,
    /// The player left the grid. The game has stopped.
    Lost,
    /// The last apple was eaten. The game has stopped.
    Won,
}

/// Head-versus-world verdict after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    OutOfBounds,
    AppleEaten,
    Nothing,
}

/// The orchestration core: owns configuration, grid and player, throttles
/// stepping to the configured cadence and judges terminal conditions. Holds
/// no I/O; the caller drives it with millisecond timestamps and acts on the
/// returned [`Tick`].
pub struct Game {
    config: Config,
    grid: Grid,
    player: Player,
    running: bool,
    moves: u64,
    next_move: u64,
}

impl Game {
    pub fn new(config: Config, grid: Grid) -> Self {
        Game {
            config,
            grid,
            player: Player::new(START_CELL, START_DIRECTION),
            running: false,
            moves: 0,
            next_move: 0,
        }
    }

    /// Arms the loop. The first tick afterwards steps immediately.
    pub fn start(&mut self) {
        self.next_move = 0;
        self.running = true;
    }

    /// Terminal: once stopped, every later tick is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the game by one step if the step interval has elapsed at
    /// `now_ms`. Timestamps only need to be monotonic, so tests can drive
    /// this with a synthetic clock instead of real frames.
    pub fn tick(&mut self, now_ms: u64) -> Tick {
        if !self.running || now_ms < self.next_move {
            return Tick::Idle;
        }

        self.next_move = now_ms + self.config.speed_ms;
        self.player.advance();
        self.moves += 1;

        match self.check_state() {
            OutOfBounds => {
                self.stop();
                Tick::Lost
            }
            AppleEaten => {
                self.grid.eat(self.player.head());
                if self.grid.is_done() {
                    self.stop();
                    Tick::Won
                } else {
                    Tick::Stepped
                }
            }
            Nothing => Tick::Stepped,
        }
    }

    /// The boundary check takes precedence over apple membership.
    pub fn check_state(&self) -> StepEvent {
        let head = self.player.head();

        if self.is_outside(head) {
            OutOfBounds
        } else if self.grid.is_apple(head) {
            AppleEaten
        } else {
            Nothing
        }
    }

    pub fn is_outside(&self, cell: Cell) -> bool {
        cell.x < 0
            || cell.x >= self.config.nb_cells_x
            || cell.y < 0
            || cell.y >= self.config.nb_cells_y
    }

    /// Input seam: illegal turns are silently dropped by the player.
    pub fn queue_turn(&mut self, direction: Direction) {
        self.player.queue_turn(direction);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(apples: Vec<Cell>) -> Game {
        Game::new(Config::default(), Grid::from_cells(apples))
    }

    #[test]
    fn outside_matches_grid_bounds() {
        let game = game_with(vec![]);

        assert!(!game.is_outside(Cell::new(0, 0)));
        assert!(!game.is_outside(Cell::new(15, 15)));
        assert!(game.is_outside(Cell::new(-1, 0)));
        assert!(game.is_outside(Cell::new(16, 0)));
        assert!(game.is_outside(Cell::new(0, -1)));
        assert!(game.is_outside(Cell::new(0, 16)));
    }

    #[test]
    fn no_ticks_before_start() {
        let mut game = game_with(vec![]);
        assert_eq!(game.tick(0), Tick::Idle);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn ticks_are_throttled_to_the_step_interval() {
        let mut game = game_with(vec![]);
        game.start();

        assert_eq!(game.tick(0), Tick::Stepped);
        // The next step is due a full interval later.
        assert_eq!(game.tick(50), Tick::Idle);
        assert_eq!(game.tick(99), Tick::Idle);
        assert_eq!(game.tick(100), Tick::Stepped);
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn stop_is_terminal() {
        let mut game = game_with(vec![]);
        game.start();
        assert_eq!(game.tick(0), Tick::Stepped);

        game.stop();
        assert_eq!(game.tick(1_000), Tick::Idle);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn queued_turns_apply_one_per_step() {
        let mut game = game_with(vec![]);
        game.start();
        game.queue_turn(Direction::Down);

        // Queue: [Right, Down]. The standing Right applies first.
        game.tick(0);
        assert_eq!(game.player().head(), Cell::new(2, 1));
        game.tick(100);
        assert_eq!(game.player().head(), Cell::new(2, 2));
    }

    #[test]
    fn walking_off_the_grid_loses() {
        let mut game = game_with(vec![]);
        game.start();

        // 14 steps from (1,1) heading right stay inside, ending at (15,1).
        for step in 0..14 {
            assert_eq!(game.tick(step * 100), Tick::Stepped);
        }
        assert_eq!(game.player().head(), Cell::new(15, 1));

        // The 15th step exits at (16,1).
        assert_eq!(game.tick(1_400), Tick::Lost);
        assert!(!game.is_running());
        assert_eq!(game.tick(1_500), Tick::Idle);
    }

    #[test]
    fn boundary_takes_precedence_over_apples() {
        // An apple sits on the out-of-bounds cell the player exits through.
        let mut game = game_with(vec![Cell::new(16, 1)]);
        game.start();

        let mut last = Tick::Idle;
        for step in 0..15 {
            last = game.tick(step * 100);
        }
        assert_eq!(last, Tick::Lost);
        assert!(!game.grid().is_done());
    }

    #[test]
    fn eating_the_last_apple_wins() {
        let mut game = game_with(vec![Cell::new(3, 1)]);
        game.start();

        assert_eq!(game.tick(0), Tick::Stepped);
        assert_eq!(game.tick(100), Tick::Won);
        assert_eq!(game.player().head(), Cell::new(3, 1));
        assert!(game.grid().is_done());
        assert_eq!(game.moves(), 2);

        // Terminal: the win stops the loop for good.
        assert!(!game.is_running());
        assert_eq!(game.tick(200), Tick::Idle);
    }

    #[test]
    fn eating_with_apples_left_keeps_going() {
        let mut game = game_with(vec![Cell::new(2, 1), Cell::new(9, 9)]);
        game.start();

        assert_eq!(game.tick(0), Tick::Stepped);
        assert!(!game.grid().is_apple(Cell::new(2, 1)));
        assert_eq!(game.grid().cells().len(), 1);
        assert!(game.is_running());
    }

    #[test]
    fn duplicate_apples_clear_in_one_bite() {
        let mut game = game_with(vec![Cell::new(2, 1), Cell::new(2, 1)]);
        game.start();

        // A coincident pair at (2,1) is removed by the single eat, so this
        // step wins outright.
        assert_eq!(game.tick(0), Tick::Won);
    }
}
