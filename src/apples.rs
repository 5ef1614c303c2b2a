use rand::Rng;

use crate::config::GridSize;
use crate::error::SpawnError;
use crate::snake::{Position, Snake};

/// Apples currently on the board, kept in placement order.
///
/// Placement order matters: the autopilot breaks distance ties by taking the
/// earliest apple.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct AppleSet {
    positions: Vec<Position>,
}

impl AppleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `position` unless an apple is already there. Returns whether it
    /// was inserted.
    pub fn insert(&mut self, position: Position) -> bool {
        if self.contains(position) {
            return false;
        }
        self.positions.push(position);
        true
    }

    /// Removes the apple at `position`, returning whether one was there.
    pub fn remove(&mut self, position: Position) -> bool {
        match self.positions.iter().position(|apple| *apple == position) {
            Some(index) => {
                self.positions.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }
}

impl FromIterator<Position> for AppleSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}

fn is_free(position: Position, snake: &Snake, apples: &AppleSet) -> bool {
    !snake.occupies(position) && !apples.contains(position)
}

/// Picks a uniformly random cell that holds neither snake nor apple.
///
/// Rejection sampling runs for at most `max_attempts` draws. If every draw hits
/// an occupied cell the remaining free cells are enumerated and one is chosen
/// uniformly, so a crowded board still resolves; a full board is reported as
/// [`SpawnError::BoardFull`].
pub fn spawn_one<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    apples: &AppleSet,
    max_attempts: u32,
) -> Result<Position, SpawnError> {
    let board_full = SpawnError::BoardFull {
        width: bounds.width,
        height: bounds.height,
    };

    if bounds.width == 0 || bounds.height == 0 {
        return Err(board_full);
    }

    for _ in 0..max_attempts {
        let candidate = Position::new(
            rng.gen_range(0..i32::from(bounds.width)),
            rng.gen_range(0..i32::from(bounds.height)),
        );
        if is_free(candidate, snake, apples) {
            return Ok(candidate);
        }
    }

    let mut candidates = Vec::new();
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position::new(x, y);
            if is_free(position, snake, apples) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return Err(board_full);
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

/// Spawns apples until `apples` holds `target` entries. Only ever inserts.
///
/// On [`SpawnError::BoardFull`] the apples placed so far are kept.
pub fn fill_to<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    apples: &mut AppleSet,
    target: usize,
    max_attempts: u32,
) -> Result<(), SpawnError> {
    while apples.len() < target {
        let position = spawn_one(rng, bounds, snake, apples, max_attempts)?;
        apples.insert(position);
    }
    Ok(())
}
