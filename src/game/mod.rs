//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Terminal input, pacing and drawing live in the `input`, `modes` and `render` modules.

pub mod action;
pub mod config;
pub mod food;
pub mod grid;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::{GameConfig, Palette, Rgb};
pub use food::Food;
pub use grid::{Grid, Position};
pub use session::{Drawable, GameStatus, Session, TickOutcome};
pub use state::{Segment, Snake};
