use std::{path::PathBuf, time::Duration};

use crate::board::Board;
use crate::scores::{HallOfFame, Player};
use crate::snake::Direction;
use crate::{Cell, GridInt};

const SCREEN_WIDTH: GridInt = 800;
const SCREEN_HEIGHT: GridInt = 600;
const TILE_SIZE: GridInt = 32;
const FPS: u64 = 60;

const BOARD: Board = Board::from_screen(SCREEN_WIDTH, SCREEN_HEIGHT, TILE_SIZE);

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub board: Board,
    pub start: Cell,
    pub start_direction: Direction,
    pub first_food: Cell,
    pub move_interval: Duration,
    pub fact_interval: Duration,
    pub frame_budget: Duration,
    pub game_over_delay: Duration,
    pub hall_of_fame_delay: Duration,
    pub score_path: PathBuf,
    pub log_path: PathBuf,
    pub snake_sprite: PathBuf,
    pub food_sprite: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        let (w, h) = (BOARD.width(), BOARD.height());

        GameConfig {
            board: BOARD,
            start: (w / 4, h / 2),
            start_direction: Direction::Right,
            first_food: (w / 2, h / 2),
            move_interval: Duration::from_millis(300),
            fact_interval: Duration::from_secs(10),
            frame_budget: Duration::from_millis(1000 / FPS),
            game_over_delay: Duration::from_secs(3),
            hall_of_fame_delay: Duration::from_secs(5),
            score_path: PathBuf::from("scores.txt"),
            log_path: PathBuf::from("snake.log"),
            snake_sprite: PathBuf::from("assets/helmet.sprite"),
            food_sprite: PathBuf::from("assets/football.sprite"),
        }
    }
}

/// Read-only text content shown around the game.
#[derive(Clone, Debug)]
pub struct Trivia {
    pub facts: Vec<String>,
    pub hall_of_fame: HallOfFame,
}

impl Default for Trivia {
    fn default() -> Self {
        let facts = [
            "The Washington Redskins were founded in 1932.",
            "Joe Theismann won the NFL MVP in 1983.",
            "The Redskins have 5 Super Bowl appearances.",
            "Art Monk is a Hall of Fame wide receiver for the Redskins.",
            "The Washington Football team changed its name in 2020.",
        ];

        Trivia {
            facts: facts.iter().map(|f| f.to_string()).collect(),
            hall_of_fame: HallOfFame::new(vec![
                Player::new("Joe Theismann", 100),
                Player::new("Darrell Green", 95),
                Player::new("Art Monk", 90),
                Player::new("John Riggins", 85),
                Player::new("Champ Bailey", 80),
            ]),
        }
    }
}
