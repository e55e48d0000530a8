//! Host input events

use std::collections::VecDeque;

use glam::Vec2;

use crate::sim::{GameState, PointerEvent, TickInput};
use crate::tuning::Difficulty;

/// Everything a host can feed into one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at a screen position
    Press(Vec2),
    Move(Vec2),
    Release,
    /// Start a new run (only honored on the game over screen)
    Restart,
    /// Stop the loop after the current frame
    Close,
    SetDifficulty(Difficulty),
    ToggleMusic,
    ToggleSfx,
}

/// Source of input events, polled once per frame
pub trait InputSource {
    /// Events since the previous poll, in arrival order
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent>;
}

/// Split a frame's events into simulation input and host-level requests
pub fn split_input(events: &[InputEvent]) -> (TickInput, Vec<InputEvent>) {
    let mut input = TickInput::default();
    let mut host = Vec::new();
    for &event in events {
        match event {
            InputEvent::Press(pos) => input.pointer.push(PointerEvent::Press(pos)),
            InputEvent::Move(pos) => input.pointer.push(PointerEvent::Move(pos)),
            InputEvent::Release => input.pointer.push(PointerEvent::Release),
            InputEvent::Restart => input.restart = true,
            other => host.push(other),
        }
    }
    (input, host)
}

/// Replays a fixed list of frames, then closes
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Close])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_input() {
        let (input, host) = split_input(&[
            InputEvent::Press(Vec2::ONE),
            InputEvent::ToggleSfx,
            InputEvent::Move(Vec2::ZERO),
            InputEvent::Restart,
            InputEvent::Release,
            InputEvent::Close,
        ]);
        assert_eq!(
            input.pointer,
            vec![
                PointerEvent::Press(Vec2::ONE),
                PointerEvent::Move(Vec2::ZERO),
                PointerEvent::Release
            ]
        );
        assert!(input.restart);
        assert_eq!(host, vec![InputEvent::ToggleSfx, InputEvent::Close]);
    }

    #[test]
    fn test_script_closes_when_exhausted() {
        let state = GameState::new(0, Difficulty::Easy, Vec::new());
        let mut script = ScriptedInput::new([vec![InputEvent::Release]]);
        assert_eq!(script.poll(&state), vec![InputEvent::Release]);
        assert_eq!(script.poll(&state), vec![InputEvent::Close]);
    }
}
