use std::{io::{Stdout, Write, stdout}, time::Duration};

use crate::error::GameError;
use crate::render::{Canvas, Input, Screen};
use crate::snake::Direction;

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};
use log::warn;

pub struct TermManager {
    width: u16,
    height: u16,
    stdout: Stdout,
    last_frame: Vec<String>,
    warned_small: bool,
}

impl TermManager {
    pub fn new() -> Result<Self, GameError> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout(), last_frame: vec![], warned_small: false })
    }

    pub fn setup(&mut self) -> Result<(), GameError> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<(), GameError> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), GameError> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.last_frame.clear();
        Ok(())
    }
}

impl Screen for TermManager {
    fn poll_input(&mut self) -> Result<Vec<Input>, GameError> {
        let mut inputs = vec![];

        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(ev) => inputs.extend(input_for(&ev)),
                Event::Resize(w, h) => {
                    self.width = w;
                    self.height = h;
                    self.clear()?;
                }
                _ => {}
            }
        }

        Ok(inputs)
    }

    /// Repaints only the rows that differ from the previous frame.
    fn draw(&mut self, canvas: &Canvas) -> Result<(), GameError> {
        let too_small = canvas.width() > self.width as usize || canvas.height() > self.height as usize;
        if too_small && !self.warned_small {
            warn!(
                "Terminal is {}x{} but the game needs {}x{}",
                self.width, self.height, canvas.width(), canvas.height()
            );
            self.warned_small = true;
        }

        let rows: Vec<String> = canvas.rows().collect();

        for (y, row) in rows.iter().enumerate() {
            if self.last_frame.get(y) != Some(row) {
                queue!(self.stdout, cursor::MoveTo(0, y as u16), style::Print(row.as_str()))?;
            }
        }

        self.stdout.flush().map_err(crossterm::ErrorKind::IoError)?;
        self.last_frame = rows;
        Ok(())
    }

    fn show_message(&mut self, lines: &[String]) -> Result<(), GameError> {
        self.clear()?;

        let top = (self.height / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let x = (self.width / 2).saturating_sub(line.chars().count() as u16 / 2);
            queue!(self.stdout, cursor::MoveTo(x, top + i as u16), style::Print(line.as_str()))?;
        }

        self.stdout.flush().map_err(crossterm::ErrorKind::IoError)?;
        Ok(())
    }
}

fn input_for(ev: &KeyEvent) -> Option<Input> {
    if is_ctrl_c(ev) {
        return Some(Input::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Input::Turn(Direction::Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Input::Turn(Direction::Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Input::Turn(Direction::Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Input::Turn(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
