use crate::error::GameError;
use crate::snake::Direction;
use crate::sprite::{Sprites, CELL_WIDTH};
use crate::state::GameState;
use crate::Cell;

use rand::Rng;

const GRID_DOT: char = '.';
const HUD_ROWS: usize = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    Turn(Direction),
}

/// Whatever the game is shown on and read from.
pub trait Screen {
    /// All input that arrived since the last call, without blocking.
    fn poll_input(&mut self) -> Result<Vec<Input>, GameError>;
    fn draw(&mut self, canvas: &Canvas) -> Result<(), GameError>;
    /// Replaces the screen with centered lines of text.
    fn show_message(&mut self, lines: &[String]) -> Result<(), GameError>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn poll_input(&mut self) -> Result<Vec<Input>, GameError> {
        (**self).poll_input()
    }

    fn draw(&mut self, canvas: &Canvas) -> Result<(), GameError> {
        (**self).draw(canvas)
    }

    fn show_message(&mut self, lines: &[String]) -> Result<(), GameError> {
        (**self).show_message(lines)
    }
}

/// Fixed-size character buffer; writes outside of it are clipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas { width, height, cells: vec![' '; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn put(&mut self, x: usize, y: usize, ch: char) {
        if x < self.width && y < self.height {
            self.cells[self.width * y + x] = ch;
        }
    }

    pub fn put_str(&mut self, x: usize, y: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i, y, ch);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width.max(1)).map(|row| row.iter().collect())
    }
}

pub struct Hud<'a> {
    pub score: u32,
    pub elapsed_secs: u64,
    pub fact: &'a str,
}

/// Canvas position of the top-left glyph of a board cell.
pub fn cell_origin(cell: Cell) -> (usize, usize) {
    (1 + cell.0 as usize * CELL_WIDTH, HUD_ROWS + 1 + cell.1 as usize)
}

pub fn compose_frame<R: Rng>(state: &GameState<R>, hud: &Hud, sprites: &Sprites) -> Canvas {
    let board = state.board();
    let outer_width = board.width() as usize * CELL_WIDTH + 2;
    let outer_height = board.height() as usize + 2;

    let status = format!("Score: {}   Time: {}s", hud.score, hud.elapsed_secs);
    let width = outer_width.max(status.chars().count()).max(hud.fact.chars().count());
    let mut canvas = Canvas::new(width, HUD_ROWS + outer_height);

    canvas.put_str(0, 0, &status);
    canvas.put_str(0, 1, hud.fact);

    draw_borders(&mut canvas, HUD_ROWS, outer_width, outer_height);

    for cell in board.cells() {
        let (x, y) = cell_origin(cell);
        canvas.put(x, y, GRID_DOT);
    }

    draw_sprite(&mut canvas, state.food(), sprites.food.glyphs());
    for segment in state.snake().body() {
        draw_sprite(&mut canvas, *segment, sprites.snake.glyphs());
    }

    canvas
}

fn draw_borders(canvas: &mut Canvas, top: usize, width: usize, height: usize) {
    let end_x = width - 1;
    let end_y = top + height - 1;

    for x in 0..width {
        let ch = if x == 0 || x == end_x {'+'} else {'-'};
        canvas.put(x, top, ch);
        canvas.put(x, end_y, ch);
    }

    for y in top + 1..end_y {
        canvas.put(0, y, '|');
        canvas.put(end_x, y, '|');
    }
}

fn draw_sprite(canvas: &mut Canvas, cell: Cell, glyphs: &[char]) {
    let (x, y) = cell_origin(cell);
    for (i, ch) in glyphs.iter().enumerate() {
        canvas.put(x + i, y, *ch);
    }
}
