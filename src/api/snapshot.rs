use serde::{Deserialize, Serialize};

use crate::error::{ScrollError, ScrollResult};
use crate::interaction::{GesturePhase, PendingFrame};

use super::{InputController, ScrollHost};

pub const CONTROLLER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Point-in-time view of controller state for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub schema_version: u32,
    pub phase: GesturePhase,
    pub dragging: bool,
    pub anchor_y: Option<f64>,
    pub anchor_scroll_top: Option<f64>,
    pub pending_frame: Option<PendingFrame>,
    pub observed_elements: usize,
    pub revealed_elements: usize,
}

impl ControllerSnapshot {
    pub fn to_json_pretty(&self) -> ScrollResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScrollError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> ScrollResult<Self> {
        let snapshot: Self = serde_json::from_str(input)
            .map_err(|e| ScrollError::InvalidData(format!("failed to parse snapshot json: {e}")))?;
        if snapshot.schema_version != CONTROLLER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ScrollError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                snapshot.schema_version
            )));
        }
        Ok(snapshot)
    }
}

impl<H: ScrollHost> InputController<H> {
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        let anchor = self.gesture.anchor();
        ControllerSnapshot {
            schema_version: CONTROLLER_SNAPSHOT_JSON_SCHEMA_V1,
            phase: self.gesture.phase(),
            dragging: self.gesture.is_dragging(),
            anchor_y: anchor.map(|(page_y, _)| page_y),
            anchor_scroll_top: anchor.map(|(_, scroll_top)| scroll_top),
            pending_frame: self.gesture.pending_frame(),
            observed_elements: self.reveal.len(),
            revealed_elements: self.reveal.revealed_count(),
        }
    }
}
