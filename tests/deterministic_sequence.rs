use autopilot_snake::apples::AppleSet;
use autopilot_snake::config::GameConfig;
use autopilot_snake::game::{DeathReason, GameState, GameStatus};
use autopilot_snake::input::{Direction, GameInput};
use autopilot_snake::snake::{Position, Snake};

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn body(state: &GameState) -> Vec<Position> {
    state.snake.segments().copied().collect()
}

fn reference_state(seed: u64) -> GameState {
    GameState::new_with_seed(GameConfig::default(), seed)
}

#[test]
fn initial_layout_is_centered() {
    let state = reference_state(1);

    assert_eq!(body(&state), vec![p(10, 7), p(9, 7), p(8, 7)]);
    assert_eq!(state.direction, Direction::Right);
    assert_eq!(state.apples.len(), 1);
    assert!(!state.is_game_over());
}

#[test]
fn plain_tick_shifts_the_snake() {
    let mut state = reference_state(2);
    state.apples = [p(0, 0)].into_iter().collect();

    state.tick();

    assert_eq!(body(&state), vec![p(11, 7), p(10, 7), p(9, 7)]);
    assert_eq!(state.apples.len(), 1);
    assert!(state.apples.contains(p(0, 0)));
}

#[test]
fn eating_grows_and_respawns_off_the_snake() {
    let mut state = reference_state(3);
    state.apples = [p(11, 7)].into_iter().collect();

    state.tick();

    assert_eq!(body(&state), vec![p(11, 7), p(10, 7), p(9, 7), p(8, 7)]);
    assert_eq!(state.apples.len(), 1);
    let apple = *state.apples.iter().next().expect("one apple");
    assert!(!state.snake.occupies(apple));
    assert!(apple.is_within_bounds(state.bounds()));
}

#[test]
fn left_wall_ends_the_round() {
    let mut state = reference_state(4);
    state.snake = Snake::from_segments(vec![p(0, 7), p(1, 7), p(2, 7)]);
    state.direction = Direction::Left;

    state.tick();

    assert!(state.is_game_over());
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
}

#[test]
fn biting_the_body_ends_the_round() {
    let mut state = reference_state(5);
    // Hook shape: moving down from (2,2) lands on (2,3).
    state.snake = Snake::from_segments(vec![p(2, 2), p(1, 2), p(1, 3), p(2, 3), p(3, 3)]);
    state.direction = Direction::Down;
    state.apples = [p(15, 0)].into_iter().collect();

    state.tick();

    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
}

#[test]
fn following_the_tail_is_not_a_collision() {
    let mut state = reference_state(6);
    // A closed 2x2 loop: the head moves into the cell the tail leaves.
    state.snake = Snake::from_segments(vec![p(5, 5), p(5, 6), p(6, 6), p(6, 5)]);
    state.direction = Direction::Right;
    state.apples = [p(15, 0)].into_iter().collect();

    state.tick();

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(body(&state), vec![p(6, 5), p(5, 5), p(5, 6), p(6, 6)]);
}

#[test]
fn duplicate_body_cells_away_from_head_also_end_the_round() {
    // The collision check looks for any repeated cell, not just the head.
    // A body that already overlaps itself behind the head is terminal on the
    // next tick even though the head lands on a free cell.
    let mut state = reference_state(7);
    state.snake = Snake::from_segments(vec![p(5, 5), p(4, 5), p(4, 6), p(4, 5), p(3, 5)]);
    state.direction = Direction::Up;
    state.apples = [p(15, 0)].into_iter().collect();

    state.tick();

    assert_eq!(state.snake.head(), p(5, 4));
    assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
}

#[test]
fn reversal_input_is_ignored() {
    let mut state = reference_state(8);

    state.apply_input(GameInput::Direction(Direction::Left));

    assert_eq!(state.direction, Direction::Right);
}

#[test]
fn restart_restores_the_starting_round() {
    let mut state = reference_state(9);
    state.snake = Snake::from_segments(vec![p(19, 3), p(18, 3), p(17, 3), p(16, 3)]);
    state.direction = Direction::Up;
    state.apples = AppleSet::new();

    state.apply_input(GameInput::Direction(Direction::Right));
    state.tick();
    assert!(state.is_game_over());

    // Directions are ignored once the round is over.
    state.apply_input(GameInput::Direction(Direction::Down));
    assert_eq!(state.direction, Direction::Right);

    state.apply_input(GameInput::Restart);

    assert!(!state.is_game_over());
    assert_eq!(body(&state), vec![p(10, 7), p(9, 7), p(8, 7)]);
    assert_eq!(state.direction, Direction::Right);
    assert_eq!(state.apples.len(), 1);
    assert_eq!(state.death_reason, None);
}

#[test]
fn invariants_hold_across_a_long_autopilot_run() {
    for seed in 0..20 {
        let mut state = reference_state(seed);
        state.autopilot = true;

        for _ in 0..500 {
            let before = state.snake.len();
            let previous_head = state.snake.head();
            state.tick();

            if state.is_game_over() {
                break;
            }

            assert!(state.snake.len() >= 3);
            assert_eq!(state.apples.len(), 1);
            assert!(state.snake.len() == before || state.snake.len() == before + 1);
            assert_ne!(state.snake.head(), previous_head);
            assert!(state.apples.iter().all(|apple| !state.snake.occupies(*apple)));
        }
    }
}

#[test]
fn identical_states_advance_identically() {
    let mut first = reference_state(10);
    first.snake = Snake::from_segments(vec![p(4, 4), p(3, 4), p(2, 4)]);
    first.apples = [p(5, 4)].into_iter().collect();
    let mut second = first.clone();

    for direction in [Direction::Right, Direction::Down, Direction::Left, Direction::Left] {
        first.set_direction(direction);
        second.set_direction(direction);
        first.tick();
        second.tick();
        assert_eq!(first.snapshot(), second.snapshot());
    }
}
