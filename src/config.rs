use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Board width in cells (800 px window at 40 px per cell).
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Board height in cells (600 px window at 40 px per cell).
pub const DEFAULT_GRID_HEIGHT: u16 = 15;

/// Terminal columns used to draw one cell, keeping cells roughly square.
pub const DEFAULT_CELL_COLUMNS: u16 = 2;

pub const DEFAULT_INITIAL_LENGTH: usize = 3;

pub const DEFAULT_APPLE_COUNT: usize = 1;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Random samples tried before the spawner falls back to scanning free cells.
pub const DEFAULT_MAX_SPAWN_ATTEMPTS: u32 = 1024;

/// Tunables for one game session.
///
/// Every field falls back to its default when missing from a config file, so a
/// file containing only `{"apple_count": 3}` is valid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid: GridSize,
    /// Render-only: terminal columns per cell.
    pub cell_columns: u16,
    pub initial_length: usize,
    pub apple_count: usize,
    pub tick_interval_ms: u64,
    pub max_spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            cell_columns: DEFAULT_CELL_COLUMNS,
            initial_length: DEFAULT_INITIAL_LENGTH,
            apple_count: DEFAULT_APPLE_COUNT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            max_spawn_attempts: DEFAULT_MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Default configuration on a custom grid.
    #[must_use]
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid: GridSize { width, height },
            ..Self::default()
        }
    }

    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that the board can hold the starting snake and apples.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }

        if self.initial_length == 0 {
            return Err(ConfigError::Invalid(
                "initial snake length must be at least 1".to_owned(),
            ));
        }

        // The starting snake extends leftward from the centre column.
        let max_length = usize::from(self.grid.width / 2) + 1;
        if self.initial_length > max_length {
            return Err(ConfigError::Invalid(format!(
                "initial length {} does not fit a grid {} cells wide (max {max_length})",
                self.initial_length, self.grid.width
            )));
        }

        if self.initial_length + self.apple_count > self.grid.total_cells() {
            return Err(ConfigError::Invalid(format!(
                "{} apples do not fit next to a snake of length {} on a {}x{} grid",
                self.apple_count, self.initial_length, self.grid.width, self.grid.height
            )));
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick interval must be positive".to_owned(),
            ));
        }

        if self.cell_columns == 0 {
            return Err(ConfigError::Invalid(
                "cell_columns must be at least 1".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Board colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub board_light: Color,
    pub board_dark: Color,
    pub snake: Color,
    pub apple: Color,
    pub message: Color,
    pub hud: Color,
}

pub const PALETTE: Palette = Palette {
    board_light: Color::Rgb(0x90, 0xEE, 0x90),
    board_dark: Color::Rgb(0x76, 0xC7, 0x6A),
    snake: Color::Rgb(0x00, 0x00, 0xFF),
    apple: Color::Rgb(0xFF, 0x00, 0x00),
    message: Color::Rgb(0xFF, 0xFF, 0xFF),
    hud: Color::DarkGray,
};

/// Solid block glyph used for every filled cell column.
pub const GLYPH_CELL: &str = "█";
