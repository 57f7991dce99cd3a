use serde::{Deserialize, Serialize};

use crate::core::EventDisposition;

use super::DragScrollState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickDecision {
    PassThrough,
    /// The click concluded a drag and must not activate its target.
    Suppress,
}

impl ClickDecision {
    #[must_use]
    pub fn disposition(self) -> EventDisposition {
        match self {
            Self::PassThrough => EventDisposition::pass_through(),
            Self::Suppress => EventDisposition::cancel(),
        }
    }
}

/// Classifies a capture-phase click against the current gesture.
///
/// Must run before the gesture is settled: the click fired right after a
/// pointer-up is decided while the recognizer is still `Releasing`.
#[must_use]
pub fn resolve_click(gesture: &DragScrollState) -> ClickDecision {
    if gesture.is_dragging() {
        ClickDecision::Suppress
    } else {
        ClickDecision::PassThrough
    }
}
