//! Runtime configuration with compiled-in defaults.
//!
//! Every field has a default so a page can override only what it needs. The
//! browser binding reads overrides from an inline JSON script tag; a missing
//! tag means [`Config::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Storage key holding `"dark"` or `"light"`.
pub const DEFAULT_THEME_KEY: &str = "cinehub-theme";
/// Storage key holding the JSON array of favorited titles.
pub const DEFAULT_WATCHLIST_KEY: &str = "cinehub-watchlist";
/// Wait after boot before scanning cards rendered by other scripts.
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 600;
pub const DEFAULT_COUNTER_TICK_MS: u32 = 20;
pub const DEFAULT_COUNTER_FRAMES: u32 = 60;
/// One day.
pub const DEFAULT_COUNTDOWN_PERIOD_MS: u32 = 86_400_000;

/// Error returned by [`Config::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for one page session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub theme_key: String,
    pub watchlist_key: String,
    pub settle_delay_ms: u32,
    pub counter_tick_ms: u32,
    /// Upper bound on ticks a counter takes to reach its target.
    pub counter_frames: u32,
    pub countdown_period_ms: u32,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            watchlist_key: DEFAULT_WATCHLIST_KEY.to_owned(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
            counter_frames: DEFAULT_COUNTER_FRAMES,
            countdown_period_ms: DEFAULT_COUNTDOWN_PERIOD_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Parse overrides from JSON. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the input is not a JSON object
    /// matching the config shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_json::from_str(raw)?;
        config.counter_frames = config.counter_frames.max(1);
        Ok(config)
    }

    /// Log level for the console logger, `Info` when unrecognized.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
