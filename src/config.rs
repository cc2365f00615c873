//! Editor configuration.
//!
//! Defaults come from [`crate::consts`]. A host can override them through
//! environment variables ([`EditorConfig::from_env`]) or a JSON document it
//! already holds ([`EditorConfig::from_json`]).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{DEFAULT_GRID_PITCH, DEFAULT_INLINE_ASSET_LIMIT};
use crate::error::EditError;
use crate::snap::GridSnap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Snap pitch in logical units.
    pub grid_pitch: f64,
    pub snap_enabled: bool,
    /// Uploads larger than this (and every video) are kept behind an
    /// ephemeral handle instead of being inlined as a data URL.
    pub inline_asset_limit_bytes: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_pitch: DEFAULT_GRID_PITCH,
            snap_enabled: true,
            inline_asset_limit_bytes: DEFAULT_INLINE_ASSET_LIMIT,
        }
    }
}

impl EditorConfig {
    /// Read overrides from `SLIDE_GRID_PITCH`, `SLIDE_SNAP_ENABLED` and
    /// `SLIDE_INLINE_ASSET_LIMIT`. Missing or unparsable values fall back to
    /// the defaults, and so does a pitch that fails [`Self::validate`].
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            grid_pitch: env_parse("SLIDE_GRID_PITCH", defaults.grid_pitch),
            snap_enabled: env_parse("SLIDE_SNAP_ENABLED", defaults.snap_enabled),
            inline_asset_limit_bytes: env_parse("SLIDE_INLINE_ASSET_LIMIT", defaults.inline_asset_limit_bytes),
        }
        .or_default_pitch()
    }

    /// Replace an invalid grid pitch with the default one.
    fn or_default_pitch(mut self) -> Self {
        if let Err(e) = self.validate() {
            warn!(error = %e, fallback = DEFAULT_GRID_PITCH, "ignoring SLIDE_GRID_PITCH");
            self.grid_pitch = DEFAULT_GRID_PITCH;
        }
        self
    }

    /// Parse and validate a JSON config. Absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, EditError> {
        let config: Self = serde_json::from_str(json).map_err(|e| EditError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// `InvalidConfig` when the grid pitch is not a positive finite number.
    pub fn validate(&self) -> Result<(), EditError> {
        if !self.grid_pitch.is_finite() || self.grid_pitch <= 0.0 {
            return Err(EditError::InvalidConfig(format!("grid pitch must be positive, got {}", self.grid_pitch)));
        }
        Ok(())
    }

    /// The snap policy this config describes.
    #[must_use]
    pub fn snap(&self) -> GridSnap {
        GridSnap::new(self.grid_pitch, self.snap_enabled)
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
