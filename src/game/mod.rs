//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Terminal input, drawing and sound live in sibling modules and only talk to
//! [`GameController`] through commands, snapshots and cues.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::GameConfig;
pub use engine::{CommandOutcome, Cue, GameController, StepInfo, StepResult};
pub use grid::Grid;
pub use state::{
    collides, Apple, CollisionKind, Position, RunState, Snake, Snapshot, GROWTH_SENTINEL,
    INITIAL_LENGTH,
};
