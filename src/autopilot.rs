//! Local steering heuristic used when autopilot is enabled.
//!
//! Each tick the autopilot probes four cells straight up, down, left and right
//! of the head at radii `0..PROBE_LEVELS`, keeps the radius whose probe has the
//! most free cells, and heads for whichever of those cells is closest to the
//! nearest apple. It never searches for a path.

use crate::apples::AppleSet;
use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Number of probe radii scanned, starting at zero.
pub const PROBE_LEVELS: i32 = 10;

/// Free cells exactly `radius` away from `head` along each axis, in
/// up, down, left, right order.
#[must_use]
pub fn probe_level(head: Position, radius: i32, snake: &Snake, bounds: GridSize) -> Vec<Position> {
    [
        head.offset(0, -radius),
        head.offset(0, radius),
        head.offset(-radius, 0),
        head.offset(radius, 0),
    ]
    .into_iter()
    .filter(|cell| cell.is_within_bounds(bounds) && !snake.occupies(*cell))
    .collect()
}

/// The probe level with the most free cells. Ties go to the smaller radius;
/// an empty vector means every probe was blocked.
#[must_use]
pub fn working_candidates(snake: &Snake, bounds: GridSize) -> Vec<Position> {
    let head = snake.head();
    let mut best = Vec::new();

    for radius in 0..PROBE_LEVELS {
        let level = probe_level(head, radius, snake, bounds);
        if level.len() > best.len() {
            best = level;
        }
    }

    best
}

/// Closest apple to `head`, earliest placed on ties.
#[must_use]
pub fn nearest_apple(head: Position, apples: &AppleSet) -> Option<Position> {
    closest_to(apples.iter().copied(), head)
}

/// Converts a target cell into a heading: horizontal difference wins, then
/// vertical, defaulting to `Up` when the cell is level with the head.
#[must_use]
pub fn direction_towards(head: Position, cell: Position) -> Direction {
    if cell.x > head.x {
        Direction::Right
    } else if cell.x < head.x {
        Direction::Left
    } else if cell.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Proposes the next heading, or `None` when there is no apple or no free
/// probe cell.
#[must_use]
pub fn choose_direction(snake: &Snake, apples: &AppleSet, bounds: GridSize) -> Option<Direction> {
    let head = snake.head();
    let candidates = working_candidates(snake, bounds);
    let target = nearest_apple(head, apples)?;
    let best = closest_to(candidates.into_iter(), target)?;

    Some(direction_towards(head, best))
}

fn closest_to(cells: impl Iterator<Item = Position>, target: Position) -> Option<Position> {
    let mut best: Option<(Position, f64)> = None;

    for cell in cells {
        let distance = cell.distance_to(target);
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((cell, distance));
        }
    }

    best.map(|(cell, _)| cell)
}
