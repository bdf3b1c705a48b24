use crate::Cell;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> Cell {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// Ordered body cells, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
}

impl Snake {
    pub fn new(start: Cell, direction: Direction) -> Self {
        Snake { body: vec![start], direction }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Turns the snake, but only onto the axis it is not currently travelling along.
    /// Returns whether the heading changed. Takes effect on the next step.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        let (dx, dy) = self.direction.delta();
        let allowed = match new_direction {
            Up | Down => dy == 0,
            Left | Right => dx == 0,
        };

        if allowed {
            self.direction = new_direction;
        }
        allowed
    }

    pub fn next_head(&self) -> Cell {
        let (x, y) = self.head();
        let (dx, dy) = self.direction.delta();
        (x + dx, y + dy)
    }

    /// Moves every segment into its predecessor's cell and puts the head at `new_head`.
    /// When growing, the tail is duplicated first so the old tail cell survives the shift.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        if grow {
            let tail = self.body[self.body.len() - 1];
            self.body.push(tail);
        }

        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = new_head;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_ignored() {
        for (current, reverse) in [(Right, Left), (Left, Right), (Up, Down), (Down, Up)] {
            let mut snake = Snake::new((5, 5), current);
            assert!(!snake.set_direction(reverse));
            assert_eq!(snake.direction(), current);
        }
    }

    #[test]
    fn orthogonal_turn_is_applied() {
        let mut snake = Snake::new((5, 5), Right);
        assert!(snake.set_direction(Up));
        assert_eq!(snake.direction(), Up);
        assert!(snake.set_direction(Left));
        assert_eq!(snake.direction(), Left);
        assert!(snake.set_direction(Down));
        assert_eq!(snake.direction(), Down);
    }

    #[test]
    fn last_accepted_turn_wins_between_steps() {
        let mut snake = Snake::new((5, 5), Right);
        snake.set_direction(Up);
        snake.set_direction(Down); // same axis as Up, rejected
        assert_eq!(snake.next_head(), (5, 4));
    }

    #[test]
    fn advance_shifts_segments() {
        let mut snake = Snake::new((3, 3), Right);
        snake.advance((4, 3), true);
        snake.advance((5, 3), true);
        assert_eq!(snake.body(), &[(5, 3), (4, 3), (3, 3)]);

        let before = snake.body().to_vec();
        snake.advance((6, 3), false);
        assert_eq!(snake.len(), before.len());
        assert_eq!(snake.head(), (6, 3));
        assert_eq!(&snake.body()[1..], &before[..before.len() - 1]);
    }

    #[test]
    fn growing_keeps_the_old_tail() {
        let mut snake = Snake::new((3, 3), Right);
        snake.advance((4, 3), true);
        snake.advance((5, 3), false);
        let old_tail = *snake.body().last().unwrap();

        snake.advance((6, 3), true);
        assert_eq!(snake.len(), 3);
        assert_eq!(*snake.body().last().unwrap(), old_tail);
    }

    #[test]
    fn occupies_every_body_cell() {
        let mut snake = Snake::new((3, 3), Right);
        snake.advance((4, 3), true);
        assert!(snake.occupies((3, 3)));
        assert!(snake.occupies((4, 3)));
        assert!(!snake.occupies((5, 3)));
    }
}
