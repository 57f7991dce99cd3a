mod config_validation;
mod effect_dispatch;
mod input_config;
mod key_controller;
mod message_controller;
mod pointer_controller;
mod recording_host;
mod reveal_controller;
mod scroll_host;
mod snapshot;

pub use input_config::InputControlsConfig;
pub use recording_host::{HostCall, RecordingHost};
pub use scroll_host::ScrollHost;
pub use snapshot::{CONTROLLER_SNAPSHOT_JSON_SCHEMA_V1, ControllerSnapshot};

use crate::error::ScrollResult;
use crate::interaction::{DragScrollState, GesturePhase};
use crate::reveal::RevealObserver;

use config_validation::validate_input_controls_config;

/// Owned interaction context for one page.
///
/// Holds the gesture recognizer, the reveal set and the configuration, and
/// applies every resulting effect to the host `H`. All entry points are
/// synchronous and expect to be called one event at a time.
pub struct InputController<H: ScrollHost> {
    host: H,
    config: InputControlsConfig,
    gesture: DragScrollState,
    reveal: RevealObserver,
}

impl<H: ScrollHost> InputController<H> {
    pub fn new(host: H, config: InputControlsConfig) -> ScrollResult<Self> {
        validate_input_controls_config(&config)?;
        let gesture = DragScrollState::new(config.drag_threshold_px);
        let reveal = RevealObserver::new(config.reveal.threshold);
        Ok(Self {
            host,
            config,
            gesture,
            reveal,
        })
    }

    #[must_use]
    pub fn config(&self) -> &InputControlsConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Disabling drag scrolling mid-gesture releases the gesture first so the
    /// host overrides are restored.
    pub fn set_config(&mut self, config: InputControlsConfig) -> ScrollResult<()> {
        validate_input_controls_config(&config)?;
        let release = if !config.drag_scroll && self.gesture.is_active() {
            Some(self.gesture.on_leave())
        } else {
            None
        };
        self.gesture.set_threshold_px(config.drag_threshold_px);
        self.reveal.set_threshold(config.reveal.threshold);
        self.config = config;
        match release {
            Some(transition) => self.apply_gesture_effects(&transition.effects),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    #[must_use]
    pub fn gesture(&self) -> &DragScrollState {
        &self.gesture
    }

    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn reveal_observer(&self) -> &RevealObserver {
        &self.reveal
    }
}
