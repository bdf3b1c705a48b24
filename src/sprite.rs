use std::{fs, path::Path};

use crate::error::GameError;

/// Columns a single grid cell takes on the terminal.
pub const CELL_WIDTH: usize = 2;

/// Glyphs drawn for one grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    glyphs: [char; CELL_WIDTH],
}

impl Sprite {
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path)
            .map_err(|source| GameError::Sprite { path: path.to_path_buf(), source })?;

        Sprite::parse(&text).ok_or_else(|| GameError::EmptySprite(path.to_path_buf()))
    }

    /// First non-blank line, truncated or space-padded to the cell width.
    pub fn parse(text: &str) -> Option<Self> {
        let line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
        let mut chars = line.chars();
        let first = chars.next()?;
        let second = chars.next().unwrap_or(' ');
        Some(Sprite { glyphs: [first, second] })
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

pub struct Sprites {
    pub snake: Sprite,
    pub food: Sprite,
}

impl Sprites {
    pub fn load(snake: &Path, food: &Path) -> Result<Self, GameError> {
        Ok(Sprites { snake: Sprite::load(snake)?, food: Sprite::load(food)? })
    }
}
