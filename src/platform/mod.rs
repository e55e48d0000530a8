//! Platform abstraction layer
//!
//! Handles the host side of the loop:
//! - Input events and input sources (scripted, autopilot)
//! - Fixed-rate frame pacing

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{InputEvent, InputSource, ScriptedInput, split_input};
pub use time::FramePacer;
