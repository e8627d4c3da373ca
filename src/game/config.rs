use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// An RGB colour triple
pub type Rgb = (u8, u8, u8);

/// Colours used when drawing a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub score_board: Rgb,
    pub score_text: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: (100, 100, 100),
            score_board: (60, 60, 60),
            score_text: (175, 175, 60),
            food: (210, 90, 90),
            snake: (255, 255, 255),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the play area
    pub screen_width: i32,
    /// Height of the play area (score panel excluded)
    pub screen_height: i32,
    /// Height of the score panel below the play area
    pub score_height: i32,
    /// Side length of one grid cell
    pub cell_size: i32,
    /// Simulation ticks per second
    pub fps: u32,
    /// Points awarded per food eaten
    pub food_value: u32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 600,
            screen_height: 600,
            score_height: 100,
            cell_size: 20,
            fps: 12,
            food_value: 50,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Grid derived from the play area and cell size
    pub fn grid(&self) -> Grid {
        Grid::new(
            self.screen_width / self.cell_size,
            self.screen_height / self.cell_size,
            self.cell_size,
        )
    }
}
