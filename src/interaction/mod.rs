//! Pointer and keyboard interaction state machines.
//!
//! Everything here is platform-free: transitions take an input sample and
//! return the effects a host has to apply, so sequences can be replayed in
//! tests without a document.

mod click_suppression;
mod drag_scroll;
mod key_navigation;

pub use click_suppression::{ClickDecision, resolve_click};
pub use drag_scroll::{
    DEFAULT_DRAG_THRESHOLD_PX, DragScrollState, GestureEffect, GestureEffects, GesturePhase,
    GestureTransition, PendingFrame,
};
pub use key_navigation::{DEFAULT_SCROLL_STEP, KeyScroll, NavigationKey, resolve_key_scroll};
