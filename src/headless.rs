use serde::Serialize;

use crate::config::GameConfig;
use crate::game::{DeathReason, GameState, GameStatus};

/// Default tick budget for a headless run.
pub const DEFAULT_MAX_TICKS: u64 = 10_000;

/// Outcome of one autopilot-driven round without a terminal.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct HeadlessSummary {
    pub seed: u64,
    pub ticks: u64,
    pub score: u32,
    pub length: usize,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

/// Plays one round on autopilot until it ends or `max_ticks` elapse.
#[must_use]
pub fn run(config: GameConfig, seed: u64, max_ticks: u64) -> HeadlessSummary {
    let mut state = GameState::new_with_seed(config, seed);
    state.autopilot = true;

    tracing::info!(seed, max_ticks, "headless run started");

    while !state.is_game_over() && state.tick_count < max_ticks {
        state.tick();
    }

    let summary = HeadlessSummary {
        seed,
        ticks: state.tick_count,
        score: state.score,
        length: state.snake.len(),
        status: state.status,
        death_reason: state.death_reason,
    };

    tracing::info!(
        ticks = summary.ticks,
        score = summary.score,
        status = ?summary.status,
        "headless run finished"
    );

    summary
}
