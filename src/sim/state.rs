//! Session state and core simulation types
//!
//! Everything the movement step reads or writes lives in `SessionState`,
//! which is passed in and handed back each frame.

use glam::{IVec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Whether the walker has entered a goal cell yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalState {
    #[default]
    NotReached,
    /// Terminal; never reset during a session
    Reached,
}

impl GoalState {
    pub fn is_reached(&self) -> bool {
        matches!(self, GoalState::Reached)
    }
}

/// One-shot notifications produced by the step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The walker entered a goal cell for the first time
    GoalReached { cell: IVec2, position: Vec3 },
}

/// How input turns into displacement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MovementModel {
    /// Displacement = direction * speed * dt
    #[default]
    Direct,
    /// Velocity decays and accelerates toward the held direction
    Damped { damping: f32, acceleration: f32 },
}

impl MovementModel {
    pub fn damped() -> Self {
        MovementModel::Damped {
            damping: DAMPING,
            acceleration: ACCELERATION,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementModel::Direct => "direct",
            MovementModel::Damped { .. } => "damped",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "direct" => Some(MovementModel::Direct),
            "damped" => Some(MovementModel::damped()),
            _ => None,
        }
    }
}

/// Tunables for the movement step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepParams {
    /// World units per second (direct model)
    pub speed: f32,
    pub model: MovementModel,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            speed: MOVE_SPEED,
            model: MovementModel::Direct,
        }
    }
}

/// Complete per-session walker state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub position: Vec3,
    /// Damped model only; relative to facing (x = right, z = forward)
    pub velocity: Vec3,
    pub goal: GoalState,
    /// Number of steps that advanced time
    pub frames: u64,
}

impl SessionState {
    /// Fresh session at a spawn position
    pub fn new(spawn: Vec3) -> Self {
        Self {
            position: spawn,
            velocity: Vec3::ZERO,
            goal: GoalState::NotReached,
            frames: 0,
        }
    }
}

impl Default for SessionState {
    /// Center of cell (1, 1) at eye height
    fn default() -> Self {
        Self::new(Vec3::new(CELL_SIZE * 1.5, EYE_HEIGHT, CELL_SIZE * 1.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spawn() {
        let state = SessionState::default();
        assert_eq!(state.position, Vec3::new(15.0, 5.0, 15.0));
        assert_eq!(state.goal, GoalState::NotReached);
        assert_eq!(state.frames, 0);
    }

    #[test]
    fn test_movement_model_from_str() {
        assert_eq!(MovementModel::from_str("Direct"), Some(MovementModel::Direct));
        assert_eq!(MovementModel::from_str("damped"), Some(MovementModel::damped()));
        assert_eq!(MovementModel::from_str("teleport"), None);
        assert_eq!(MovementModel::from_str("smooth"), None);
        assert_eq!(MovementModel::damped().as_str(), "damped");
    }

    #[test]
    fn test_movement_model_json() {
        let json = serde_json::to_string(&MovementModel::damped()).unwrap();
        assert_eq!(json, r#"{"kind":"damped","damping":10.0,"acceleration":100.0}"#);
        let back: MovementModel = serde_json::from_str(r#"{"kind":"direct"}"#).unwrap();
        assert_eq!(back, MovementModel::Direct);
    }
}
