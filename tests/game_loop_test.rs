//! Integration test: game loop mechanics
//!
//! Drives whole runs through the public controller API: movement, eating,
//! both kinds of terminal collision and the reset transition.

use grid_snake::game::{
    Command, CommandOutcome, CollisionKind, Cue, Direction, GameConfig, GameController, Position,
    RunState, Snake,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIZE: i32 = 40;

fn new_game(seed: u64) -> GameController {
    GameController::with_rng(GameConfig::default(), StdRng::seed_from_u64(seed))
}

/// Tick `count` times, collecting every cue
fn simulate_ticks(game: &mut GameController, count: usize) -> Vec<Cue> {
    let mut cues = Vec::new();
    for _ in 0..count {
        cues.extend(game.tick().cues());
    }
    cues
}

fn snake(heading: Direction, positions: &[(i32, i32)]) -> Snake {
    let segments = positions.iter().map(|&(x, y)| Position::new(x, y)).collect();
    Snake::from_segments(segments, heading, SIZE).unwrap()
}

#[test]
fn test_default_run_falls_out_of_the_bottom() {
    let mut game = new_game(1);
    // Starts at y=40 heading down; the apple at (160,160) is not in column 40.
    let mut ticks = 0;
    while game.run_state() == RunState::Running {
        game.tick();
        ticks += 1;
        assert!(ticks < 100, "run never ended");
    }

    // y = 80, 120, ... 480 are in bounds (the partial row included); 520 is not
    assert_eq!(ticks, 12);
    assert_eq!(game.snake().head(), Position::new(40, 520));
    assert_eq!(game.snapshot().last_collision, Some(CollisionKind::Wall));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_eating_on_first_tick() {
    let mut game = new_game(2);
    game.place_snake(snake(Direction::Down, &[(160, 120), (160, 80)]));
    game.place_apple(Position::new(160, 160));

    let result = game.tick();

    assert!(result.info.ate_apple);
    assert_eq!(result.cues(), vec![Cue::Eat]);
    assert_eq!(game.snake().len(), 3);
    assert_eq!(game.score(), 1);

    let apple = game.apple().position;
    assert_eq!(apple.x % SIZE, 0);
    assert_eq!(apple.y % SIZE, 0);
    assert!(apple.x >= 0 && apple.x < 1000);
    assert!(apple.y >= 0 && apple.y < 480);
}

#[test]
fn test_left_wall_from_column_zero() {
    let mut game = new_game(3);
    game.place_snake(snake(Direction::Down, &[(0, 200), (0, 160)]));
    assert_eq!(
        game.handle(Command::Move(Direction::Left)),
        CommandOutcome::Turned(Direction::Left)
    );

    let cues = simulate_ticks(&mut game, 1);

    assert_eq!(cues, vec![Cue::Crash]);
    assert_eq!(game.snake().head(), Position::new(-40, 200));
    assert_eq!(game.run_state(), RunState::PausedGameOver);
}

#[test]
fn test_square_loop_bites_tail() {
    let mut game = new_game(4);
    // Five segments heading right along y=200
    game.place_snake(snake(
        Direction::Right,
        &[(200, 200), (160, 200), (120, 200), (80, 200), (40, 200)],
    ));
    game.place_apple(Position::new(960, 0));

    game.handle(Command::Move(Direction::Down));
    game.tick();
    game.handle(Command::Move(Direction::Left));
    game.tick();
    game.handle(Command::Move(Direction::Up));
    let result = game.tick();

    assert_eq!(result.info.collision, Some(CollisionKind::SelfCollision));
    assert_eq!(game.run_state(), RunState::PausedGameOver);
}

#[test]
fn test_game_over_blocks_input_until_reset() {
    let mut game = new_game(5);
    game.place_snake(snake(Direction::Up, &[(80, 0), (80, 40)]));
    simulate_ticks(&mut game, 1);
    assert_eq!(game.run_state(), RunState::PausedGameOver);

    let frozen = game.snake().clone();
    assert_eq!(game.handle(Command::Move(Direction::Left)), CommandOutcome::Ignored);
    assert!(simulate_ticks(&mut game, 5).is_empty());
    assert_eq!(game.snake(), &frozen);

    assert_eq!(game.handle(Command::Confirm), CommandOutcome::Reset);
    let snapshot = game.snapshot();
    assert_eq!(snapshot.run_state, RunState::Running);
    assert_eq!(snapshot.segments, &[Position::new(40, 40); 2]);
    assert_eq!(snapshot.heading, Direction::Down);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.apple, Position::new(160, 160));
}

#[test]
fn test_apple_can_land_on_body() {
    // A single-cell playfield leaves the apple nowhere to go but under the snake.
    let config = GameConfig {
        apple_start: Position::new(0, 0),
        seed: Some(6),
        ..GameConfig::new(40, 40, SIZE)
    };
    assert!(config.validate().is_ok());
    let mut game = GameController::new(config);
    game.place_snake(snake(Direction::Down, &[(0, -40), (0, -80)]));

    let result = game.tick();

    assert!(result.info.ate_apple);
    assert_eq!(game.apple().position, Position::new(0, 0));
    assert!(game.snake().segments().contains(&game.apple().position));
}
