mod types;

pub use types::{
    EventDisposition, FrameId, KeyInput, PointerButton, PointerInput, ScrollBehavior, SettleToken,
};
