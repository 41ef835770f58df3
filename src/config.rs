//! Widget configuration supplied by the host page.
//!
//! The host may pass a JSON object to `mount`; every field is optional and
//! falls back to the built-in defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::error::UiError;
use crate::state::theme::ThemePalette;
use crate::util::schedule::MAX_TIMER_DELAY_MS;

pub const DEFAULT_DISMISS_DELAY_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub dismiss_delay_ms: u32,
    pub light: ThemePalette,
    pub dark: ThemePalette,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self { dismiss_delay_ms: DEFAULT_DISMISS_DELAY_MS, light: ThemePalette::light(), dark: ThemePalette::dark() }
    }
}

impl WidgetConfig {
    /// Parse and validate a JSON config. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), UiError> {
        if self.dismiss_delay_ms == 0 {
            return Err(UiError::Config("dismiss_delay_ms must be positive".into()));
        }
        if self.dismiss_delay_ms > MAX_TIMER_DELAY_MS {
            return Err(UiError::Config(format!("dismiss_delay_ms must be at most {MAX_TIMER_DELAY_MS}")));
        }
        for (name, palette) in [("light", &self.light), ("dark", &self.dark)] {
            if palette.color.trim().is_empty() || palette.background_color.trim().is_empty() {
                return Err(UiError::Config(format!("{name} palette has an empty color")));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.dismiss_delay_ms))
    }
}
