//! Game configuration.
//!
//! Defaults match the reference playfield (10x20, one row per second, no wall
//! kicks). `GameConfig::from_env` lets a front end override them without code
//! changes.

use crate::error::{EngineError, Result};
use crate::placement::KickPolicy;
use crate::scoring::tick_interval_ms;
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_TICK_MS};

/// Smallest board side that still fits every shape in the catalog.
pub const MIN_BOARD_SIDE: u16 = 4;

/// Largest supported board side.
pub const MAX_BOARD_SIDE: u16 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// Gravity tick at level 0, in milliseconds.
    pub base_tick_ms: u32,
    pub kicks: KickPolicy,
    /// Seed of the first game's piece randomizer.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            base_tick_ms: DEFAULT_TICK_MS,
            kicks: KickPolicy::None,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Read overrides from the environment.
    ///
    /// - `TETRIS_WIDTH`, `TETRIS_HEIGHT`: board size in cells
    /// - `TETRIS_TICK_MS`: gravity tick at level 0
    /// - `TETRIS_WALL_KICKS`: "1" or "true" enables SRS kicks
    /// - `TETRIS_SEED`: randomizer seed
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let width = env::var("TETRIS_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.width);
        let height = env::var("TETRIS_HEIGHT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.height);
        let base_tick_ms = env::var("TETRIS_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.base_tick_ms);
        let kicks = env::var("TETRIS_WALL_KICKS")
            .map(|v| {
                if v == "1" || v.to_lowercase() == "true" {
                    KickPolicy::Srs
                } else {
                    KickPolicy::None
                }
            })
            .unwrap_or(defaults.kicks);
        let seed = env::var("TETRIS_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        Self {
            width,
            height,
            base_tick_ms,
            kicks,
            seed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let side = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !side.contains(&self.width) {
            return Err(EngineError::InvalidConfig(format!(
                "width {} not in {}..={}",
                self.width, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            )));
        }
        if !side.contains(&self.height) {
            return Err(EngineError::InvalidConfig(format!(
                "height {} not in {}..={}",
                self.height, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            )));
        }
        if self.base_tick_ms == 0 {
            return Err(EngineError::InvalidConfig(
                "base tick must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Gravity tick for a level under this configuration.
    pub fn tick_interval_ms(&self, level: u32) -> u32 {
        tick_interval_ms(level, self.base_tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.kicks, KickPolicy::None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_boards_too_small_for_pieces() {
        let config = GameConfig {
            width: 3,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_tick() {
        let config = GameConfig {
            base_tick_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn level_zero_ticks_at_base_rate() {
        let config = GameConfig {
            base_tick_ms: 500,
            ..GameConfig::default()
        };
        assert_eq!(config.tick_interval_ms(0), 500);
        assert!(config.tick_interval_ms(5) < 500);
    }
}
