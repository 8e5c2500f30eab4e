use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::{Command, Direction},
    config::GameConfig,
    grid::Grid,
    state::{
        collides, Apple, CollisionKind, Position, RunState, Snake, Snapshot, INITIAL_LENGTH,
    },
};

/// Segments at the front of the snake that are never checked against the head
const SELF_COLLISION_EXEMPT: usize = 3;

/// Named sound events for an audio adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Crash,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Eat => "eat",
            Cue::Crash => "crash",
        }
    }
}

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate the apple this step
    pub ate_apple: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionKind>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the run is over (now or already before this call)
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            terminated,
            info: StepInfo {
                ate_apple: false,
                collision: None,
            },
        }
    }

    /// Cues raised by this step, in the order they happened
    pub fn cues(&self) -> Vec<Cue> {
        let mut cues = Vec::with_capacity(2);
        if self.info.ate_apple {
            cues.push(Cue::Eat);
        }
        if self.info.collision.is_some() {
            cues.push(Cue::Crash);
        }
        cues
    }
}

/// What a command did to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Turned(Direction),
    Reset,
    Quit,
    Ignored,
}

/// Owns one run of the game: the snake, the apple, the run state and the RNG
/// used for apple placement.
pub struct GameController<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    apple: Apple,
    run_state: RunState,
    last_collision: Option<CollisionKind>,
    ticks: u64,
    rng: R,
}

impl GameController<StdRng> {
    /// Seeds from `config.seed` when set, otherwise from entropy
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameController<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let grid = config.grid();
        Self {
            snake: Snake::new(grid.cell_size),
            apple: Apple::new(config.apple_start, grid.cell_size),
            run_state: RunState::Running,
            last_collision: None,
            ticks: 0,
            grid,
            config,
            rng,
        }
    }

    /// Execute one simulation step
    pub fn tick(&mut self) -> StepResult {
        if self.run_state == RunState::PausedGameOver {
            return StepResult::idle(true);
        }

        self.ticks += 1;
        self.snake.advance();
        let head = self.snake.head();

        let ate_apple = collides(head, self.apple.position);
        if ate_apple {
            self.snake.grow();
            self.apple.relocate(
                self.grid.placement_cols(),
                self.grid.placement_rows(),
                &mut self.rng,
            );
            debug!(
                "apple eaten at ({}, {}), length {}, apple moved to ({}, {})",
                head.x,
                head.y,
                self.snake.len(),
                self.apple.position.x,
                self.apple.position.y
            );
        }

        let collision = self.check_collision();
        if let Some(kind) = collision {
            self.run_state = RunState::PausedGameOver;
            self.last_collision = Some(kind);
            info!(
                "game over: {} at ({}, {}) after {} ticks, score {}",
                kind.describe(),
                head.x,
                head.y,
                self.ticks,
                self.score()
            );
        }

        StepResult {
            terminated: collision.is_some(),
            info: StepInfo {
                ate_apple,
                collision,
            },
        }
    }

    /// Self collision is checked before the wall
    fn check_collision(&self) -> Option<CollisionKind> {
        let head = self.snake.head();

        if self
            .snake
            .segments()
            .iter()
            .skip(SELF_COLLISION_EXEMPT)
            .any(|&segment| collides(head, segment))
        {
            return Some(CollisionKind::SelfCollision);
        }

        if !self.grid.contains(head) {
            return Some(CollisionKind::Wall);
        }

        None
    }

    /// Apply one input command according to the current run state
    pub fn handle(&mut self, command: Command) -> CommandOutcome {
        let outcome = match (command, self.run_state) {
            (Command::Quit, _) => CommandOutcome::Quit,
            (Command::Move(direction), RunState::Running) => {
                if self.snake.set_heading(direction) {
                    CommandOutcome::Turned(direction)
                } else {
                    CommandOutcome::Ignored
                }
            }
            (Command::Confirm, RunState::PausedGameOver) => {
                self.reset();
                CommandOutcome::Reset
            }
            _ => CommandOutcome::Ignored,
        };

        match outcome {
            CommandOutcome::Turned(direction) => trace!("heading now {}", direction.name()),
            CommandOutcome::Ignored => {
                trace!("ignored {:?} while {:?}", command, self.run_state)
            }
            CommandOutcome::Reset | CommandOutcome::Quit => {}
        }
        outcome
    }

    /// Start a fresh run. Only takes effect after a game over.
    pub fn reset(&mut self) -> bool {
        if self.run_state != RunState::PausedGameOver {
            return false;
        }
        self.snake = Snake::new(self.grid.cell_size);
        self.apple = Apple::new(self.config.apple_start, self.grid.cell_size);
        self.run_state = RunState::Running;
        self.last_collision = None;
        self.ticks = 0;
        info!("new run started");
        true
    }

    /// Apples eaten this run
    pub fn score(&self) -> usize {
        self.snake.len() - INITIAL_LENGTH
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            segments: self.snake.segments(),
            heading: self.snake.heading(),
            apple: self.apple.position,
            score: self.score(),
            ticks: self.ticks,
            run_state: self.run_state,
            last_collision: self.last_collision,
        }
    }

    /// Replace the snake mid-run. Test support only; not part of the game API.
    #[doc(hidden)]
    pub fn place_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    /// Move the apple mid-run. Test support only; not part of the game API.
    #[doc(hidden)]
    pub fn place_apple(&mut self, position: Position) {
        self.apple.position = position;
    }
}
