use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::game::GameState;
use crate::input::GameInput;

/// Fixed-interval tick clock polled by the host loop.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_tick: Instant,
}

impl TickClock {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
        }
    }

    /// Returns true once at least one interval has elapsed since the last mark.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.interval
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_tick = now;
    }
}

/// Serializes input events so they are applied to the game between ticks,
/// in arrival order.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<GameInput>,
}

impl CommandQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: GameInput) {
        self.pending.push_back(input);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Applies every queued command to `state`. Returns true if a `Quit` was
    /// seen; commands queued after it are dropped.
    pub fn drain_into(&mut self, state: &mut GameState) -> bool {
        while let Some(input) = self.pending.pop_front() {
            if input == GameInput::Quit {
                self.pending.clear();
                return true;
            }
            state.apply_input(input);
        }
        false
    }
}
