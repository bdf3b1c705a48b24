use std::time::{Duration, Instant};

use crate::clock::{Clock, Ticker};
use crate::config::{GameConfig, Trivia};
use crate::error::GameError;
use crate::render::{compose_frame, Hud, Input, Screen};
use crate::scores::ScoreLog;
use crate::sprite::Sprites;
use crate::state::{GameState, Status, StepOutcome};

use log::{info, warn};
use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    Crashed,
    Quit,
}

#[derive(Clone, Debug)]
pub struct SessionSummary {
    pub score: u32,
    pub length: usize,
    pub elapsed: Duration,
    pub ended_by: EndReason,
}

/// One game from the first frame until the hall of fame has been shown.
pub struct Session<S, C, R = ThreadRng> {
    config: GameConfig,
    trivia: Trivia,
    sprites: Sprites,
    screen: S,
    clock: C,
    state: GameState<R>,
    scores: ScoreLog,
}

impl<S: Screen, C: Clock> Session<S, C, ThreadRng> {
    pub fn new(config: GameConfig, trivia: Trivia, sprites: Sprites, screen: S, clock: C) -> Self {
        Session::with_rng(config, trivia, sprites, screen, clock, rand::thread_rng())
    }
}

impl<S: Screen, C: Clock, R: Rng> Session<S, C, R> {
    pub fn with_rng(config: GameConfig, trivia: Trivia, sprites: Sprites, screen: S, clock: C, rng: R) -> Self {
        let state = GameState::with_rng(config.board, config.start, config.start_direction, config.first_food, rng);
        let scores = ScoreLog::new(&config.score_path);
        Session { config, trivia, sprites, screen, clock, state, scores }
    }

    pub fn run(&mut self) -> Result<SessionSummary, GameError> {
        let started = self.clock.now();
        let mut movement = Ticker::new(self.config.move_interval, started);
        let mut facts = Ticker::new(self.config.fact_interval, started);
        let mut fact = self.random_fact();

        info!(
            "Session started on a {}x{} board ({} cells), moving every {:?}",
            self.config.board.width(), self.config.board.height(),
            self.config.board.cell_count(), self.config.move_interval
        );

        loop {
            for input in self.screen.poll_input()? {
                match input {
                    Input::Quit => {
                        info!("Quit requested");
                        return Ok(self.summary(started, EndReason::Quit));
                    },
                    Input::Turn(dir) => self.state.turn(dir),
                }
            }

            let now = self.clock.now();

            if movement.ready(now) {
                if let StepOutcome::Ate { score } = self.state.step() {
                    info!("Score {}", score);
                }
            }

            if self.state.status() == Status::Terminated {
                return self.game_over(started);
            }

            if facts.ready(now) {
                fact = self.random_fact();
            }

            let hud = Hud {
                score: self.state.score(),
                elapsed_secs: now.saturating_duration_since(started).as_secs(),
                fact: &fact,
            };
            let frame = compose_frame(&self.state, &hud, &self.sprites);
            self.screen.draw(&frame)?;

            self.clock.sleep(self.config.frame_budget);
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over(&mut self, started: Instant) -> Result<SessionSummary, GameError> {
        let summary = self.summary(started, EndReason::Crashed);
        info!(
            "Game over: score {}, length {}, {}s",
            summary.score, summary.length, summary.elapsed.as_secs()
        );

        if let Err(err) = self.scores.append(summary.score) {
            warn!("Could not save score to {:?}: {}", self.config.score_path, err);
        }

        self.screen.show_message(&[format!("Game Over! Final Score: {}", summary.score)])?;
        self.clock.sleep(self.config.game_over_delay);

        let mut lines = vec!["Hall of Fame".to_string(), String::new()];
        lines.extend(self.trivia.hall_of_fame.lines());
        self.screen.show_message(&lines)?;
        self.clock.sleep(self.config.hall_of_fame_delay);

        Ok(summary)
    }

    fn summary(&self, started: Instant, ended_by: EndReason) -> SessionSummary {
        SessionSummary {
            score: self.state.score(),
            length: self.state.snake().len(),
            elapsed: self.clock.now().saturating_duration_since(started),
            ended_by,
        }
    }

    fn random_fact(&mut self) -> String {
        self.trivia.facts.choose(self.state.rng_mut()).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::tests::ManualClock;
    use crate::render::{cell_origin, Canvas};
    use crate::snake::Direction;
    use crate::sprite::Sprite;
    use rand::{rngs::StdRng, SeedableRng};
    use std::{collections::VecDeque, fs, path::Path};

    #[derive(Default)]
    struct FakeScreen {
        inputs: VecDeque<Vec<Input>>,
        frames: Vec<Canvas>,
        messages: Vec<Vec<String>>,
    }

    impl Screen for FakeScreen {
        fn poll_input(&mut self) -> Result<Vec<Input>, GameError> {
            Ok(self.inputs.pop_front().unwrap_or_default())
        }

        fn draw(&mut self, canvas: &Canvas) -> Result<(), GameError> {
            self.frames.push(canvas.clone());
            Ok(())
        }

        fn show_message(&mut self, lines: &[String]) -> Result<(), GameError> {
            self.messages.push(lines.to_vec());
            Ok(())
        }
    }

    fn sprites() -> Sprites {
        Sprites { snake: Sprite::parse("[]").unwrap(), food: Sprite::parse("()").unwrap() }
    }

    fn config(score_path: &Path) -> GameConfig {
        GameConfig { score_path: score_path.to_path_buf(), ..GameConfig::default() }
    }

    fn run(config: GameConfig, screen: &mut FakeScreen) -> SessionSummary {
        run_with(config, Trivia::default(), 9, screen)
    }

    fn run_with(config: GameConfig, trivia: Trivia, seed: u64, screen: &mut FakeScreen) -> SessionSummary {
        Session::with_rng(config, trivia, sprites(), screen, ManualClock::new(), StdRng::seed_from_u64(seed))
            .run()
            .unwrap()
    }

    /// The fun fact row of every drawn frame.
    fn shown_facts(screen: &FakeScreen) -> Vec<String> {
        screen.frames.iter()
            .map(|frame| frame.rows().nth(1).unwrap_or_default().trim_end().to_string())
            .collect()
    }

    fn slow_session(path: &Path) -> (GameConfig, Trivia) {
        // One step at 25s leaves the board, so the game spans two fact rotations.
        let config = GameConfig {
            start: (0, 0),
            start_direction: Direction::Up,
            move_interval: Duration::from_secs(25),
            ..config(path)
        };
        let trivia = Trivia { facts: vec!["A".to_string(), "B".to_string()], ..Trivia::default() };
        (config, trivia)
    }

    #[test]
    fn crossing_the_edge_saves_the_score_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        let config = GameConfig { start: (0, 9), start_direction: Direction::Left, ..config(&path) };
        let mut screen = FakeScreen::default();

        let summary = run(config, &mut screen);

        assert_eq!(summary.ended_by, EndReason::Crashed);
        assert_eq!(summary.score, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "0\n");
        assert_eq!(screen.messages.len(), 2);
        assert_eq!(screen.messages[0], ["Game Over! Final Score: 0"]);
        assert_eq!(screen.messages[1][0], "Hall of Fame");
        assert_eq!(screen.messages[1][2], "Joe Theismann - 100");
        assert_eq!(screen.messages[1].len(), 7);
    }

    #[test]
    fn movement_waits_for_the_tick_interval() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig { start: (0, 9), start_direction: Direction::Left, ..config(&dir.path().join("s.txt")) };
        let mut screen = FakeScreen::default();

        let summary = run(config, &mut screen);

        // 16ms frames: the first step fires on the frame at 304ms, before it is drawn.
        assert_eq!(screen.frames.len(), 19);
        assert!(summary.elapsed >= Duration::from_millis(300));
    }

    #[test]
    fn default_session_eats_the_first_food_then_hits_the_wall() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        let mut screen = FakeScreen::default();

        let summary = run(config(&path), &mut screen);

        assert_eq!(summary.ended_by, EndReason::Crashed);
        assert!(summary.score >= 1);
        assert_eq!(summary.length, summary.score as usize + 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\n", summary.score));
        assert_eq!(screen.messages[0], [format!("Game Over! Final Score: {}", summary.score)]);
    }

    #[test]
    fn turning_changes_course() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        let mut screen = FakeScreen::default();
        screen.inputs.push_back(vec![Input::Turn(Direction::Left), Input::Turn(Direction::Up)]);

        let summary = run(config(&path), &mut screen);

        // Heading up from (6, 9) never touches the food at (12, 9).
        assert_eq!(summary.score, 0);
        assert_eq!(summary.length, 1);
        let rows: Vec<String> = screen.frames.last().unwrap().rows().collect();
        let (x, y) = cell_origin((6, 0));
        assert_eq!(&rows[y][x..x + 2], "[]");
    }

    #[test]
    fn quitting_skips_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        let mut screen = FakeScreen::default();
        screen.inputs.push_back(vec![]);
        screen.inputs.push_back(vec![Input::Quit]);

        let summary = run(config(&path), &mut screen);

        assert_eq!(summary.ended_by, EndReason::Quit);
        assert_eq!(screen.frames.len(), 1);
        assert!(screen.messages.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn unwritable_score_file_does_not_stop_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scores.txt");
        let config = GameConfig { start: (24, 0), start_direction: Direction::Up, ..config(&path) };
        let mut screen = FakeScreen::default();

        let summary = run(config, &mut screen);

        assert_eq!(summary.ended_by, EndReason::Crashed);
        assert_eq!(screen.messages.len(), 2);
    }

    #[test]
    fn fun_fact_only_changes_on_the_fact_interval() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");
        let mut rotated = false;

        for seed in 0..20 {
            let (config, trivia) = slow_session(&path);
            let mut screen = FakeScreen::default();
            run_with(config, trivia, seed, &mut screen);

            let facts = shown_facts(&screen);
            // 16ms frames: 25s of play, rotations fire on the frames at 10s and 20s.
            assert_eq!(facts.len(), 1563);
            assert!(facts.iter().all(|f| f == "A" || f == "B"));

            for (i, pair) in facts.windows(2).enumerate() {
                if pair[0] != pair[1] {
                    assert!(i + 1 == 625 || i + 1 == 1250, "seed {} changed fact at frame {}", seed, i + 1);
                    rotated = true;
                }
            }
        }

        assert!(rotated);
    }

    #[test]
    fn same_seed_shows_the_same_facts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.txt");

        let runs: Vec<Vec<String>> = (0..2)
            .map(|_| {
                let (config, trivia) = slow_session(&path);
                let mut screen = FakeScreen::default();
                run_with(config, trivia, 5, &mut screen);
                shown_facts(&screen)
            })
            .collect();

        assert_eq!(runs[0], runs[1]);
    }
}
