//! remote-scroll: TV-remote and pointer friendly page scrolling.
//!
//! The crate splits a page interaction layer into platform-free state
//! machines (`interaction`, `reveal`, `bridge`), an owned controller that
//! applies their effects to a [`api::ScrollHost`], and an optional browser
//! binding behind the `web-adapter` feature.

pub mod api;
pub mod bridge;
pub mod core;
pub mod error;
pub mod interaction;
pub mod reveal;
pub mod telemetry;

#[cfg(feature = "web-adapter")]
pub mod platform_web;

pub use api::{InputController, InputControlsConfig, RecordingHost, ScrollHost};
pub use error::{ScrollError, ScrollResult};
