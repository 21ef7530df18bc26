//! Abstraction for sourcing per-frame combatant intent.
//!
//! Runtime users plug in [`InputProvider`] implementations so the simulation
//! can run with live input, scripted fixtures, or replays. Providers are
//! polled once per fighting frame and must not block.
use duel_core::{InputSnapshot, RawInput, Side};
use serde::{Deserialize, Serialize};

/// Trait for providing one side's input for a frame.
///
/// `frame` counts fighting frames since the match started; countdown and
/// knockout frames are not polled.
pub trait InputProvider: Send {
    fn poll(&mut self, side: Side, frame: u64) -> InputSnapshot;
}

/// A provider that never presses anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdleInput;

impl InputProvider for IdleInput {
    fn poll(&mut self, _side: Side, _frame: u64) -> InputSnapshot {
        InputSnapshot::NEUTRAL
    }
}

/// Keys held for a run of consecutive frames.
///
/// `combo_press` and `switch_to` are edges: they fire on the span's first
/// frame only, while every other key stays held for the whole span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpan {
    pub frames: u32,
    #[serde(default)]
    pub keys: RawInput,
}

impl InputSpan {
    pub fn new(frames: u32, keys: RawInput) -> Self {
        Self { frames, keys }
    }

    fn keys_at(&self, offset: u64) -> RawInput {
        if offset == 0 {
            return self.keys;
        }
        RawInput {
            combo_press: false,
            switch_to: None,
            ..self.keys
        }
    }
}

/// Replays a fixed list of spans, then stays neutral.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    spans: Vec<InputSpan>,
}

impl ScriptedInput {
    pub fn new(spans: Vec<InputSpan>) -> Self {
        Self { spans }
    }

    /// Total scripted frames.
    pub fn len(&self) -> u64 {
        self.spans.iter().map(|span| u64::from(span.frames)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys held on `frame`, if the script still covers it.
    pub fn keys_at(&self, frame: u64) -> Option<RawInput> {
        let mut start = 0u64;
        for span in &self.spans {
            let end = start + u64::from(span.frames);
            if frame < end {
                return Some(span.keys_at(frame - start));
            }
            start = end;
        }
        None
    }
}

impl InputProvider for ScriptedInput {
    fn poll(&mut self, _side: Side, frame: u64) -> InputSnapshot {
        self.keys_at(frame)
            .map(InputSnapshot::from)
            .unwrap_or(InputSnapshot::NEUTRAL)
    }
}
