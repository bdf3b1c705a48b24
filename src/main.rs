mod board;
mod clock;
mod config;
mod error;
mod food;
mod game;
mod render;
mod scores;
mod snake;
mod sprite;
mod state;
mod term;

use std::{fs::File, path::Path, process::exit};

use crate::clock::SystemClock;
use crate::config::{GameConfig, Trivia};
use crate::error::GameError;
use crate::game::{Session, SessionSummary};
use crate::sprite::Sprites;
use crate::term::TermManager;

use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

pub type GridInt = i16;
pub type Cell = (GridInt, GridInt);

fn main() {
    let config = GameConfig::default();

    // The terminal belongs to the game, so logs go to a file
    if let Err(err) = init_logging(&config.log_path) {
        eprintln!("{}", err);
        exit(1);
    }

    info!("Starting snake");

    match play(config) {
        Ok(summary) => info!("Session ended ({:?}) with score {}", summary.ended_by, summary.score),
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            exit(1);
        },
    }
}

fn init_logging(path: &Path) -> Result<(), GameError> {
    let file = File::create(path)
        .map_err(|source| GameError::LogFile { path: path.to_path_buf(), source })?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)?;
    Ok(())
}

fn play(config: GameConfig) -> Result<SessionSummary, GameError> {
    let sprites = Sprites::load(&config.snake_sprite, &config.food_sprite)?;

    let mut term = TermManager::new()?;
    if let Err(err) = term.setup() {
        let _ = term.restore();
        return Err(err);
    }

    let result = Session::new(config, Trivia::default(), sprites, &mut term, SystemClock).run();

    // Leave the alternate screen even when the session failed
    let restored = term.restore();
    let summary = result?;
    restored?;
    Ok(summary)
}
