//! Reveal-on-scroll: marks elements once they first enter the viewport.

mod observer;
mod style;

pub use observer::{
    DEFAULT_REVEAL_THRESHOLD, ElementId, IntersectionEntry, RevealObserver, RevealState,
};
pub use style::{DEFAULT_MARKER_CLASS, DEFAULT_REVEALED_CLASS, RevealConfig};
