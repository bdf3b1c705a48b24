use std::{fs::OpenOptions, io::{self, Write}, path::PathBuf};

/// Append-only record of finished sessions, one decimal score per line.
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreLog { path: path.into() }
    }

    pub fn append(&self, score: u32) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", score)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(name: &str, score: u32) -> Self {
        Player { name: name.to_string(), score }
    }
}

#[derive(Clone, Debug)]
pub struct HallOfFame {
    players: Vec<Player>,
}

impl HallOfFame {
    pub fn new(players: Vec<Player>) -> Self {
        HallOfFame { players }
    }

    /// Highest score first; equal scores keep their listed order.
    pub fn ranked(&self) -> Vec<Player> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| b.score.cmp(&a.score));
        players
    }

    pub fn lines(&self) -> Vec<String> {
        self.ranked().iter().map(|p| format!("{} - {}", p.name, p.score)).collect()
    }
}
