//! Game configuration: per-mode presets, an optional TOML file, CLI overrides.
//!
//! Resolution order, lowest to highest: mode preset, config file, command line.
//! The maximum input length is not configurable; it always follows the mode.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::color::DifficultyMode;
use crate::error::ConfigError;

pub const DEFAULT_ROUNDS: usize = 5;
pub const STANDARD_COUNTDOWN: u32 = 3;
pub const CONSTRAINED_COUNTDOWN: u32 = 5;
pub const DEFAULT_TICK_MILLIS: u64 = 1000;

/// Everything that varies between game variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: DifficultyMode,
    /// Countdown units the target stays visible.
    pub countdown_ticks: u32,
    pub total_rounds: usize,
    /// Wall-clock length of one countdown unit.
    pub tick_millis: u64,
}

impl GameConfig {
    pub fn for_mode(mode: DifficultyMode) -> Self {
        let countdown_ticks = match mode {
            DifficultyMode::Standard => STANDARD_COUNTDOWN,
            DifficultyMode::Constrained => CONSTRAINED_COUNTDOWN,
        };
        Self {
            mode,
            countdown_ticks,
            total_rounds: DEFAULT_ROUNDS,
            tick_millis: DEFAULT_TICK_MILLIS,
        }
    }

    /// Longest accepted input, `#` included.
    pub fn max_input_length(&self) -> usize {
        self.mode.max_input_length()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rounds == 0 {
            return Err(ConfigError::Invalid("rounds must be at least 1".into()));
        }
        if self.countdown_ticks == 0 {
            return Err(ConfigError::Invalid("countdown must be at least 1".into()));
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::Invalid("tick_ms must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_mode(DifficultyMode::default())
    }
}

/// One layer of optional settings, from a file or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub mode: Option<DifficultyMode>,
    pub rounds: Option<usize>,
    pub countdown: Option<u32>,
    pub tick_ms: Option<u64>,
}

impl ConfigLayer {
    /// Fill unset fields of `self` from `lower`.
    pub fn over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            mode: self.mode.or(lower.mode),
            rounds: self.rounds.or(lower.rounds),
            countdown: self.countdown.or(lower.countdown),
            tick_ms: self.tick_ms.or(lower.tick_ms),
        }
    }

    /// Apply this layer on top of the preset for its mode and validate.
    pub fn resolve(self) -> Result<GameConfig, ConfigError> {
        let base = GameConfig::for_mode(self.mode.unwrap_or_default());
        let config = GameConfig {
            mode: base.mode,
            countdown_ticks: self.countdown.unwrap_or(base.countdown_ticks),
            total_rounds: self.rounds.unwrap_or(base.total_rounds),
            tick_millis: self.tick_ms.unwrap_or(base.tick_millis),
        };
        config.validate()?;
        Ok(config)
    }
}

pub fn parse_config(text: &str) -> Result<ConfigLayer, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Read a config file; `None` yields an empty layer.
pub fn load_config(path: Option<&Path>) -> Result<ConfigLayer, ConfigError> {
    match path {
        Some(path) => parse_config(&std::fs::read_to_string(path)?),
        None => Ok(ConfigLayer::default()),
    }
}

/// Full pipeline: file layer under CLI layer, resolved against mode presets.
pub fn resolve_config(path: Option<&Path>, cli: ConfigLayer) -> Result<GameConfig, ConfigError> {
    let file = load_config(path)?;
    cli.over(file).resolve()
}
