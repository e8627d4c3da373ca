//! Grid Snake - the classic arcade game in the terminal
//!
//! This library provides:
//! - Core game logic: grid, snake, food and the session state machine (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Elapsed time and high score tracking (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod telemetry;
