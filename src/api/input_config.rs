use serde::{Deserialize, Serialize};

use crate::error::{ScrollError, ScrollResult};
use crate::interaction::{DEFAULT_DRAG_THRESHOLD_PX, DEFAULT_SCROLL_STEP};
use crate::reveal::RevealConfig;

fn default_scroll_step() -> f64 {
    DEFAULT_SCROLL_STEP
}

fn default_drag_threshold_px() -> f64 {
    DEFAULT_DRAG_THRESHOLD_PX
}

fn default_true() -> bool {
    true
}

/// Public controller bootstrap configuration.
///
/// Serializable so a page can ship its setup as JSON next to the markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputControlsConfig {
    /// Pixels scrolled per arrow key press.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: f64,
    /// Vertical travel a press must exceed to become a drag.
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: f64,
    #[serde(default = "default_true")]
    pub key_navigation: bool,
    #[serde(default = "default_true")]
    pub drag_scroll: bool,
    #[serde(default = "default_true")]
    pub message_bridge: bool,
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl Default for InputControlsConfig {
    fn default() -> Self {
        Self {
            scroll_step: default_scroll_step(),
            drag_threshold_px: default_drag_threshold_px(),
            key_navigation: true,
            drag_scroll: true,
            message_bridge: true,
            reveal: RevealConfig::default(),
        }
    }
}

impl InputControlsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrow key step.
    #[must_use]
    pub fn with_scroll_step(mut self, scroll_step: f64) -> Self {
        self.scroll_step = scroll_step;
        self
    }

    /// Sets the click/drag hysteresis.
    #[must_use]
    pub fn with_drag_threshold_px(mut self, drag_threshold_px: f64) -> Self {
        self.drag_threshold_px = drag_threshold_px;
        self
    }

    #[must_use]
    pub fn with_key_navigation(mut self, enabled: bool) -> Self {
        self.key_navigation = enabled;
        self
    }

    #[must_use]
    pub fn with_drag_scroll(mut self, enabled: bool) -> Self {
        self.drag_scroll = enabled;
        self
    }

    #[must_use]
    pub fn with_message_bridge(mut self, enabled: bool) -> Self {
        self.message_bridge = enabled;
        self
    }

    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }

    pub fn to_json_pretty(&self) -> ScrollResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScrollError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ScrollResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScrollError::InvalidData(format!("failed to parse config json: {e}")))
    }
}
