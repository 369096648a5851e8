use std::collections::VecDeque;

use Direction::*;

/// A single grid coordinate. Cells are plain values: movement builds a new
/// cell instead of mutating one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Cell::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Right => (1, 0),
            Down => (0, 1),
            Left => (-1, 0),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Up | Down => Axis::Vertical,
            Left | Right => Axis::Horizontal,
        }
    }
}

/// The moving entity: a head cell plus an ordered backlog of accepted turns.
/// The queue front is the direction currently in effect; later entries apply
/// one per step.
pub struct Player {
    head: Cell,
    directions: VecDeque<Direction>,
    moves: u64,
}

impl Player {
    pub fn new(head: Cell, direction: Direction) -> Self {
        let mut directions = VecDeque::new();
        directions.push_back(direction);
        Player { head, directions, moves: 0 }
    }

    /// Queues a turn unless it shares an axis with the most recently queued
    /// direction. This silently drops both repeats and 180° reversals, so a
    /// queued sequence can never double back on itself. There is no depth
    /// limit; rapid input stacks up and applies one turn per step.
    pub fn queue_turn(&mut self, direction: Direction) {
        // Invariant: the queue is never empty.
        let last = *self.directions.back().unwrap();
        if last.axis() != direction.axis() {
            self.directions.push_back(direction);
        }
    }

    /// Moves the head one cell along the next queued direction. The sole
    /// remaining entry is kept as the standing direction once the backlog
    /// drains. This is the only place the head changes.
    pub fn advance(&mut self) {
        let direction = if self.directions.len() > 1 {
            self.directions.pop_front().unwrap()
        } else {
            self.directions[0]
        };

        let (dx, dy) = direction.delta();
        self.head = self.head.offset(dx, dy);
        self.moves += 1;
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    /// The direction at the queue front, used for the head glyph.
    pub fn direction(&self) -> Direction {
        self.directions[0]
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_along_standing_direction() {
        let mut player = Player::new(Cell::new(1, 1), Right);

        for _ in 0..5 {
            player.advance();
        }

        assert_eq!(player.head(), Cell::new(6, 1));
        assert_eq!(player.moves(), 5);
    }

    #[test]
    fn rejects_same_axis_turns() {
        let mut player = Player::new(Cell::new(5, 5), Right);

        // Repeat and reversal are both no-ops on the queue.
        player.queue_turn(Right);
        player.queue_turn(Left);

        player.advance();
        player.advance();
        assert_eq!(player.head(), Cell::new(7, 5));
    }

    #[test]
    fn legality_follows_the_last_queued_turn() {
        let mut player = Player::new(Cell::new(5, 5), Right);

        player.queue_turn(Up);
        // Up is now the most recently queued direction, so vertical input
        // is rejected even though the player is still moving right.
        player.queue_turn(Down);
        player.queue_turn(Up);
        player.queue_turn(Left);

        // Queue: [Right, Up, Left], applied one per step.
        player.advance();
        assert_eq!(player.head(), Cell::new(6, 5));
        player.advance();
        assert_eq!(player.head(), Cell::new(6, 4));
        player.advance();
        assert_eq!(player.head(), Cell::new(5, 4));
        // Backlog drained: Left is retained as the standing direction.
        player.advance();
        assert_eq!(player.head(), Cell::new(4, 4));
    }

    #[test]
    fn each_direction_offsets_one_cell() {
        for (direction, expected) in [
            (Up, Cell::new(3, 2)),
            (Right, Cell::new(4, 3)),
            (Down, Cell::new(3, 4)),
            (Left, Cell::new(2, 3)),
        ] {
            let mut player = Player::new(Cell::new(3, 3), direction);
            player.advance();
            assert_eq!(player.head(), expected);
        }
    }

    #[test]
    fn direction_reports_the_queue_front() {
        let mut player = Player::new(Cell::new(1, 1), Right);
        assert_eq!(player.direction(), Right);

        player.queue_turn(Down);
        player.advance();
        assert_eq!(player.direction(), Down);
    }
}
