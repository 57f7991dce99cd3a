use serde::{Deserialize, Serialize};

use super::DEFAULT_REVEAL_THRESHOLD;

pub const DEFAULT_MARKER_CLASS: &str = "animate";
pub const DEFAULT_REVEALED_CLASS: &str = "visible";

fn default_marker_class() -> String {
    DEFAULT_MARKER_CLASS.to_owned()
}

fn default_revealed_class() -> String {
    DEFAULT_REVEALED_CLASS.to_owned()
}

fn default_threshold() -> f64 {
    DEFAULT_REVEAL_THRESHOLD
}

fn default_offset_px() -> f64 {
    30.0
}

fn default_duration_secs() -> f64 {
    1.0
}

fn default_easing() -> String {
    "ease".to_owned()
}

fn default_true() -> bool {
    true
}

/// Reveal selection, threshold and the injected transition stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Class selecting elements to observe.
    #[serde(default = "default_marker_class")]
    pub marker_class: String,
    /// Class added once an element is revealed.
    #[serde(default = "default_revealed_class")]
    pub revealed_class: String,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Initial downward offset of hidden elements.
    #[serde(default = "default_offset_px")]
    pub offset_px: f64,
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    /// CSS timing function.
    #[serde(default = "default_easing")]
    pub easing: String,
    #[serde(default = "default_true")]
    pub inject_stylesheet: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            marker_class: default_marker_class(),
            revealed_class: default_revealed_class(),
            threshold: default_threshold(),
            offset_px: default_offset_px(),
            duration_secs: default_duration_secs(),
            easing: default_easing(),
            inject_stylesheet: true,
        }
    }
}

impl RevealConfig {
    /// CSS selector matching the marked elements.
    #[must_use]
    pub fn marker_selector(&self) -> String {
        format!(".{}", self.marker_class)
    }

    /// Stylesheet hiding marked elements until they carry the revealed class.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let marker = &self.marker_class;
        let revealed = &self.revealed_class;
        format!(
            ".{marker} {{\n    opacity: 0;\n    transform: translateY({offset}px);\n    transition: all {duration}s {easing};\n}}\n\n.{marker}.{revealed} {{\n    opacity: 1;\n    transform: translateY(0);\n}}\n",
            offset = self.offset_px,
            duration = self.duration_secs,
            easing = self.easing,
        )
    }
}
