use serde::{Deserialize, Serialize};

use crate::core::{KeyInput, ScrollBehavior};

/// Pixels scrolled per arrow key press.
pub const DEFAULT_SCROLL_STEP: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
}

impl NavigationKey {
    /// Resolves by logical key name first, then by legacy key code.
    ///
    /// Enter/OK (13) never resolves; it stays with link activation.
    #[must_use]
    pub fn resolve(input: &KeyInput) -> Option<Self> {
        Self::from_key_name(&input.key).or_else(|| Self::from_key_code(input.key_code))
    }

    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            38 => Some(Self::ArrowUp),
            40 => Some(Self::ArrowDown),
            33 => Some(Self::PageUp),
            34 => Some(Self::PageDown),
            _ => None,
        }
    }

    /// Signed vertical offset for this key; negative scrolls up.
    #[must_use]
    pub fn scroll_delta(self, step: f64, viewport_height: f64) -> f64 {
        match self {
            Self::ArrowUp => -step,
            Self::ArrowDown => step,
            Self::PageUp => -viewport_height,
            Self::PageDown => viewport_height,
        }
    }
}

/// Relative scroll requested by a directional key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyScroll {
    pub key: NavigationKey,
    pub delta: f64,
    pub behavior: ScrollBehavior,
}

#[must_use]
pub fn resolve_key_scroll(input: &KeyInput, step: f64, viewport_height: f64) -> Option<KeyScroll> {
    let key = NavigationKey::resolve(input)?;
    Some(KeyScroll {
        key,
        delta: key.scroll_delta(step, viewport_height),
        behavior: ScrollBehavior::Smooth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_codes_resolve_without_key_name() {
        assert_eq!(
            NavigationKey::resolve(&KeyInput::legacy_code(40)),
            Some(NavigationKey::ArrowDown)
        );
        assert_eq!(
            NavigationKey::resolve(&KeyInput::legacy_code(33)),
            Some(NavigationKey::PageUp)
        );
    }

    #[test]
    fn key_name_wins_over_conflicting_code() {
        let input = KeyInput::new("ArrowDown", 38);
        assert_eq!(NavigationKey::resolve(&input), Some(NavigationKey::ArrowDown));
    }

    #[test]
    fn enter_and_horizontal_arrows_are_ignored() {
        for input in [
            KeyInput::new("Enter", 13),
            KeyInput::new("ArrowLeft", 37),
            KeyInput::new("ArrowRight", 39),
            KeyInput::default(),
        ] {
            assert!(resolve_key_scroll(&input, 300.0, 720.0).is_none());
        }
    }

    #[test]
    fn page_keys_use_viewport_height() {
        let scroll = resolve_key_scroll(&KeyInput::named("PageUp"), 300.0, 720.0)
            .expect("page up resolves");
        assert_eq!(scroll.delta, -720.0);
        assert_eq!(scroll.behavior, ScrollBehavior::Smooth);
    }
}
