use crate::board::Board;
use crate::food::place_food;
use crate::snake::{Direction, Snake};
use crate::Cell;

use log::debug;
use rand::{rngs::ThreadRng, Rng};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate { score: u32 },
    Crashed,
}

/// Everything the movement tick mutates.
pub struct GameState<R = ThreadRng> {
    board: Board,
    snake: Snake,
    food: Cell,
    score: u32,
    status: Status,
    rng: R,
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(board: Board, start: Cell, direction: Direction, food: Cell, rng: R) -> Self {
        GameState {
            board,
            snake: Snake::new(start, direction),
            food,
            score: 0,
            status: Status::Running,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The generator food placement draws from, shared with anything else the
    /// session randomizes so one seed reproduces a whole game.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Heading requests go straight to the snake; reversals are silently dropped.
    pub fn turn(&mut self, direction: Direction) {
        if self.status == Status::Running && self.snake.set_direction(direction) {
            debug!("Heading now {:?}", self.snake.direction());
        }
    }

    /// Advances the game by one movement tick.
    ///
    /// Leaving the board is the only way the session ends. The snake may cross
    /// its own body freely. A terminated game is never mutated again.
    pub fn step(&mut self) -> StepOutcome {
        if self.status == Status::Terminated {
            return StepOutcome::Crashed;
        }

        let new_head = self.snake.next_head();
        if !self.board.contains(new_head) {
            self.status = Status::Terminated;
            return StepOutcome::Crashed;
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if !ate {
            return StepOutcome::Moved;
        }

        self.score += 1;
        self.food = place_food(&self.board, self.snake.body(), &mut self.rng);
        debug_assert!(!self.snake.occupies(self.food));
        debug!("Food eaten at {:?}, score {}, next food at {:?}", new_head, self.score, self.food);

        StepOutcome::Ate { score: self.score }
    }
}
