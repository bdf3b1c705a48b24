use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
    #[error("error loading sprite {path:?}: {source}")]
    Sprite { path: PathBuf, source: io::Error },
    #[error("sprite file {0:?} is empty")]
    EmptySprite(PathBuf),
    #[error("cannot create log file {path:?}: {source}")]
    LogFile { path: PathBuf, source: io::Error },
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
