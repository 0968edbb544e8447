//! Held movement flags and their key/touch bindings
//!
//! Platform code sets and clears flags on input events; the simulation reads
//! them once per frame.

use serde::{Deserialize, Serialize};

/// One of the four movement controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveControl {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveControl {
    pub const ALL: [MoveControl; 4] = [
        MoveControl::Forward,
        MoveControl::Backward,
        MoveControl::Left,
        MoveControl::Right,
    ];

    /// Map a `KeyboardEvent.code` value (arrows and WASD)
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "KeyW" => Some(MoveControl::Forward),
            "ArrowDown" | "KeyS" => Some(MoveControl::Backward),
            "ArrowLeft" | "KeyA" => Some(MoveControl::Left),
            "ArrowRight" | "KeyD" => Some(MoveControl::Right),
            _ => None,
        }
    }

    /// Map the id of an on-screen touch control
    pub fn from_touch_id(id: &str) -> Option<Self> {
        match id {
            "forward" => Some(MoveControl::Forward),
            "backward" => Some(MoveControl::Backward),
            "left" => Some(MoveControl::Left),
            "right" => Some(MoveControl::Right),
            _ => None,
        }
    }

    /// Element id of the matching touch control
    pub fn touch_id(&self) -> &'static str {
        match self {
            MoveControl::Forward => "forward",
            MoveControl::Backward => "backward",
            MoveControl::Left => "left",
            MoveControl::Right => "right",
        }
    }
}

/// Movement flags for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, control: MoveControl, held: bool) {
        match control {
            MoveControl::Forward => self.forward = held,
            MoveControl::Backward => self.backward = held,
            MoveControl::Left => self.left = held,
            MoveControl::Right => self.right = held,
        }
    }

    pub fn is_held(&self, control: MoveControl) -> bool {
        match control {
            MoveControl::Forward => self.forward,
            MoveControl::Backward => self.backward,
            MoveControl::Left => self.left,
            MoveControl::Right => self.right,
        }
    }

    /// Apply a key event. Returns false for keys that are not bound.
    pub fn apply_key(&mut self, code: &str, pressed: bool) -> bool {
        match MoveControl::from_key_code(code) {
            Some(control) => {
                self.set(control, pressed);
                true
            }
            None => false,
        }
    }

    /// Forward-minus-backward; opposing flags cancel
    pub fn forward_axis(&self) -> f32 {
        f32::from(u8::from(self.forward)) - f32::from(u8::from(self.backward))
    }

    /// Right-minus-left; opposing flags cancel
    pub fn strafe_axis(&self) -> f32 {
        f32::from(u8::from(self.right)) - f32::from(u8::from(self.left))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
