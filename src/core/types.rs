use serde::{Deserialize, Serialize};

/// How a scroll request is animated by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScrollBehavior {
    /// Eased scrolling, the page default.
    #[default]
    Smooth,
    /// Jump directly to the target offset.
    Instant,
}

/// Handle for one frame-synchronized scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameId(pub u64);

impl FrameId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Identifies the deferred settle step of one release.
///
/// A settle task only completes the release that scheduled it; tokens from
/// earlier interactions are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SettleToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` index.
    #[must_use]
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}

/// One pointer sample in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub button: PointerButton,
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerInput {
    #[must_use]
    pub fn new(button: PointerButton, page_x: f64, page_y: f64) -> Self {
        Self {
            button,
            page_x,
            page_y,
        }
    }

    #[must_use]
    pub fn primary(page_x: f64, page_y: f64) -> Self {
        Self::new(PointerButton::Primary, page_x, page_y)
    }
}

/// Key identity as reported by the input source.
///
/// Remote controls on older TV browsers may only fill the legacy numeric
/// code, so `key` can be empty and `key_code` zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyInput {
    pub key: String,
    pub key_code: u32,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            key_code,
        }
    }

    #[must_use]
    pub fn named(key: impl Into<String>) -> Self {
        Self::new(key, 0)
    }

    #[must_use]
    pub fn legacy_code(key_code: u32) -> Self {
        Self::new(String::new(), key_code)
    }
}

/// What the caller should do with the native event after handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDisposition {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventDisposition {
    #[must_use]
    pub fn pass_through() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: false,
        }
    }

    #[must_use]
    pub fn cancel() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
        }
    }

    #[must_use]
    pub fn is_pass_through(self) -> bool {
        !self.prevent_default && !self.stop_propagation
    }
}
