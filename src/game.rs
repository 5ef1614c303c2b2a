use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::apples::{self, AppleSet};
use crate::autopilot;
use crate::config::{GameConfig, GridSize};
use crate::error::SpawnError;
use crate::input::{direction_change_is_valid, Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    /// Wall or self collision.
    GameOver,
    /// No free cell was left for an apple.
    Stalled,
}

/// Why the last round ended in a collision.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// What one movement step did to the snake's length.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveOutcome {
    Grew,
    Shifted,
}

/// Read-only view of the board handed to renderers after each tick.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub grid: GridSize,
    pub snake: Vec<Position>,
    pub apples: Vec<Position>,
    pub game_over: bool,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub autopilot: bool,
    pub score: u32,
    pub tick_count: u64,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apples: AppleSet,
    pub direction: Direction,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub autopilot: bool,
    pub score: u32,
    pub tick_count: u64,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from system entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::centered(config.grid, config.initial_length),
            apples: AppleSet::new(),
            direction: Direction::Right,
            status: GameStatus::Playing,
            death_reason: None,
            autopilot: false,
            score: 0,
            tick_count: 0,
            config,
            rng,
        };
        state.reset_round();
        state
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True in either terminal state; no tick has any effect until restart.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.is_game_over() {
            return;
        }

        if self.autopilot {
            // The autopilot steers directly; it is not subject to the reversal guard.
            if let Some(direction) =
                autopilot::choose_direction(&self.snake, &self.apples, self.config.grid)
            {
                self.direction = direction;
            }
        }

        self.tick_count += 1;
        let moved = self.advance();

        if let Some(reason) = self.check_game_over() {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            tracing::info!(
                ?reason,
                score = self.score,
                length = self.snake.len(),
                tick = self.tick_count,
                "game over"
            );
            return;
        }

        match moved {
            Ok(outcome) => {
                tracing::trace!(?outcome, head = ?self.snake.head(), "tick");
            }
            Err(error) => {
                self.status = GameStatus::Stalled;
                tracing::warn!(%error, score = self.score, "apple spawner stalled");
            }
        }
    }

    /// Moves the snake one cell in the current direction, eating and
    /// respawning apples. Performs no bounds or collision checks.
    pub fn advance(&mut self) -> Result<MoveOutcome, SpawnError> {
        let new_head = self.snake.head().step(self.direction);
        self.snake.push_head(new_head);

        if !self.apples.remove(new_head) {
            let _ = self.snake.pop_tail();
            return Ok(MoveOutcome::Shifted);
        }

        self.score += 1;
        tracing::debug!(apple = ?new_head, length = self.snake.len(), "apple eaten");

        apples::fill_to(
            &mut self.rng,
            self.config.grid,
            &self.snake,
            &mut self.apples,
            self.config.apple_count,
            self.config.max_spawn_attempts,
        )?;

        Ok(MoveOutcome::Grew)
    }

    /// Evaluates terminal conditions against the current board.
    ///
    /// Self collision is any repeated cell in the whole body, which also
    /// catches a repeat that does not involve the head.
    #[must_use]
    pub fn check_game_over(&self) -> Option<DeathReason> {
        if !self.snake.head().is_within_bounds(self.config.grid) {
            return Some(DeathReason::WallCollision);
        }

        if self.snake.has_duplicate_segment() {
            return Some(DeathReason::SelfCollision);
        }

        None
    }

    /// Changes heading unless it would reverse the current direction or the
    /// round is over.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.is_game_over() || !direction_change_is_valid(self.direction, direction) {
            return;
        }
        self.direction = direction;
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
        tracing::info!(enabled = self.autopilot, "autopilot toggled");
    }

    /// Starts a fresh round. Ignored while the current round is still running.
    pub fn restart(&mut self) {
        if !self.is_game_over() {
            return;
        }

        self.reset_round();
        tracing::info!(status = ?self.status, "round restarted");
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.set_direction(direction),
            GameInput::ToggleAutopilot => self.toggle_autopilot(),
            GameInput::Restart => self.restart(),
            GameInput::Quit => {}
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.config.grid,
            snake: self.snake.segments().copied().collect(),
            apples: self.apples.iter().copied().collect(),
            game_over: self.is_game_over(),
            status: self.status,
            death_reason: self.death_reason,
            autopilot: self.autopilot,
            score: self.score,
            tick_count: self.tick_count,
        }
    }

    /// Resets snake, heading, apples and counters. The autopilot flag and the
    /// random stream carry over between rounds.
    fn reset_round(&mut self) {
        self.snake = Snake::centered(self.config.grid, self.config.initial_length);
        self.direction = Direction::Right;
        self.apples.clear();
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.score = 0;
        self.tick_count = 0;

        if let Err(error) = apples::fill_to(
            &mut self.rng,
            self.config.grid,
            &self.snake,
            &mut self.apples,
            self.config.apple_count,
            self.config.max_spawn_attempts,
        ) {
            self.status = GameStatus::Stalled;
            tracing::warn!(%error, "board too small for the configured apples");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::apples::AppleSet;
    use crate::config::GameConfig;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus, MoveOutcome};

    fn state(seed: u64) -> GameState {
        GameState::new_with_seed(GameConfig::default(), seed)
    }

    fn only_apple(at: Position) -> AppleSet {
        [at].into_iter().collect()
    }

    #[test]
    fn new_state_matches_start_layout() {
        let state = state(1);

        assert_eq!(state.snake, Snake::centered(state.bounds(), 3));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.apples.len(), 1);
        assert_eq!(state.status, GameStatus::Playing);
        assert!(!state.autopilot);
    }

    #[test]
    fn advance_without_apple_shifts() {
        let mut state = state(2);
        state.apples = only_apple(Position::new(0, 0));

        assert_eq!(state.advance(), Ok(MoveOutcome::Shifted));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position::new(11, 7));
    }

    #[test]
    fn advance_onto_apple_grows_and_refills() {
        let mut state = state(3);
        state.apples = only_apple(Position::new(11, 7));

        assert_eq!(state.advance(), Ok(MoveOutcome::Grew));
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.apples.len(), 1);
        assert!(!state.apples.contains(Position::new(11, 7)));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn advance_allows_head_outside_the_grid() {
        let mut state = state(4);
        state.snake = Snake::from_segments(vec![
            Position::new(19, 3),
            Position::new(18, 3),
            Position::new(17, 3),
        ]);

        assert_eq!(state.advance(), Ok(MoveOutcome::Shifted));
        assert_eq!(state.snake.head(), Position::new(20, 3));
        assert_eq!(state.check_game_over(), Some(DeathReason::WallCollision));
    }

    #[test]
    fn reversal_is_rejected() {
        let mut state = state(5);

        state.set_direction(Direction::Left);
        assert_eq!(state.direction, Direction::Right);

        state.set_direction(Direction::Up);
        assert_eq!(state.direction, Direction::Up);

        state.set_direction(Direction::Down);
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn game_over_freezes_the_board() {
        let mut state = state(6);
        state.snake = Snake::from_segments(vec![
            Position::new(0, 7),
            Position::new(1, 7),
            Position::new(2, 7),
        ]);
        state.direction = Direction::Left;

        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);
        let frozen = state.snake.clone();

        state.set_direction(Direction::Up);
        state.tick();
        assert_eq!(state.snake, frozen);
        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn restart_is_ignored_mid_round() {
        let mut state = state(7);
        state.apples = only_apple(Position::new(0, 0));
        state.tick();

        state.restart();
        assert_eq!(state.snake.head(), Position::new(11, 7));
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn toggle_autopilot_only_flips_the_flag() {
        let mut state = state(8);
        let before = state.snapshot();

        state.apply_input(GameInput::ToggleAutopilot);
        assert!(state.autopilot);

        let mut after = state.snapshot();
        after.autopilot = false;
        assert_eq!(after, before);
    }

    #[test]
    fn autopilot_turns_towards_apple() {
        let mut state = state(9);
        state.apples = only_apple(Position::new(10, 0));
        state.toggle_autopilot();

        state.tick();

        assert_eq!(state.direction, Direction::Up);
        assert_eq!(state.snake.head(), Position::new(10, 6));
    }

    #[test]
    fn autopilot_without_apples_keeps_heading() {
        let mut config = GameConfig::default();
        config.apple_count = 0;
        let mut state = GameState::new_with_seed(config, 10);
        state.toggle_autopilot();

        state.tick();

        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.snake.head(), Position::new(11, 7));
    }

    #[test]
    fn eating_the_last_free_cell_stalls() {
        let mut config = GameConfig::with_grid(2, 2);
        config.initial_length = 2;
        config.apple_count = 1;
        let mut state = GameState::new_with_seed(config, 11);

        // Snake [(1,1),(0,1)] heading up with the apple filling (1,0); after
        // eating, only (0,0) is free and it is taken by the refill.
        state.snake = Snake::from_segments(vec![Position::new(1, 1), Position::new(0, 1)]);
        state.direction = Direction::Up;
        state.apples = only_apple(Position::new(1, 0));
        state.tick();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.apples.iter().copied().collect::<Vec<_>>(), vec![
            Position::new(0, 0)
        ]);

        state.set_direction(Direction::Left);
        state.tick();
        assert_eq!(state.status, GameStatus::Stalled);
        assert!(state.is_game_over());
        assert_eq!(state.snake.len(), 4);

        state.restart();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn seeded_states_are_reproducible() {
        let mut first = state(12);
        let mut second = state(12);
        first.toggle_autopilot();
        second.toggle_autopilot();

        for _ in 0..200 {
            first.tick();
            second.tick();
        }

        assert_eq!(first.snapshot(), second.snapshot());
    }
}
