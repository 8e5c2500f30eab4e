//! Grid Snake - a terminal arcade Snake game
//!
//! This library provides:
//! - Core game logic: grid, snake, apple, collisions and the run state machine (game module)
//! - Terminal input mapping (input module) and rendering (render module)
//! - Sound cue adapters (audio module)
//! - Session metrics, file logging and the interactive play mode

pub mod audio;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
