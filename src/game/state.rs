use rand::Rng;
use serde::{Deserialize, Serialize};

use super::action::Direction;

/// Segments a fresh snake starts with
pub const INITIAL_LENGTH: usize = 2;

/// Placeholder for a freshly grown tail segment; overwritten on the next advance
pub const GROWTH_SENTINEL: Position = Position { x: -1, y: -1 };

/// A pixel position on the playfield, normally a multiple of the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move one cell of `cell_size` pixels in a direction
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_size, dy * cell_size)
    }
}

/// Two grid-aligned positions collide exactly when they are equal
pub fn collides(a: Position, b: Position) -> bool {
    a == b
}

/// The player-controlled snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    segments: Vec<Position>,
    /// Current direction of movement
    heading: Direction,
    cell_size: i32,
}

impl Snake {
    /// Fresh snake: two stacked segments one cell in from the origin, heading down
    pub fn new(cell_size: i32) -> Self {
        Self {
            segments: vec![Position::new(cell_size, cell_size); INITIAL_LENGTH],
            heading: Direction::Down,
            cell_size,
        }
    }

    /// Build a snake from explicit segments. Returns None for fewer than two.
    pub fn from_segments(
        segments: Vec<Position>,
        heading: Direction,
        cell_size: i32,
    ) -> Option<Self> {
        if segments.len() < INITIAL_LENGTH {
            return None;
        }
        Some(Self {
            segments,
            heading,
            cell_size,
        })
    }

    /// Change heading unless `intent` reverses it. Returns whether it took.
    pub fn set_heading(&mut self, intent: Direction) -> bool {
        if self.heading.is_opposite(intent) {
            return false;
        }
        self.heading = intent;
        true
    }

    /// Add one tail segment holding [`GROWTH_SENTINEL`]
    pub fn grow(&mut self) {
        self.segments.push(GROWTH_SENTINEL);
    }

    /// Shift every segment into the one ahead of it, then step the head.
    pub fn advance(&mut self) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = self.segments[0].stepped(self.heading, self.cell_size);
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a snake never has fewer than two segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// The apple the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
    cell_size: i32,
}

impl Apple {
    pub fn new(position: Position, cell_size: i32) -> Self {
        Self {
            position,
            cell_size,
        }
    }

    /// Jump to a uniformly random whole cell. The snake's body is not excluded.
    pub fn relocate<R: Rng + ?Sized>(&mut self, cols: i32, rows: i32, rng: &mut R) {
        let col = rng.gen_range(0..cols);
        let row = rng.gen_range(0..rows);
        self.position = Position::new(col * self.cell_size, row * self.cell_size);
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Snake left the playfield
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

impl CollisionKind {
    pub fn describe(&self) -> &'static str {
        match self {
            CollisionKind::Wall => "hit the wall",
            CollisionKind::SelfCollision => "bit its own tail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    PausedGameOver,
}

/// Read-only view of a controller for renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub segments: &'a [Position],
    pub heading: Direction,
    pub apple: Position,
    pub score: usize,
    pub ticks: u64,
    pub run_state: RunState,
    pub last_collision: Option<CollisionKind>,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn is_game_over(&self) -> bool {
        self.run_state == RunState::PausedGameOver
    }
}
