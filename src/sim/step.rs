//! Per-frame movement and collision step
//!
//! Moves the walker by one frame of held input, rejecting any move whose
//! destination cell blocks, and flags the first entry into a goal cell.

use glam::Vec3;

use super::input::InputState;
use super::maze::{Cell, Maze};
use super::state::{GameEvent, GoalState, MovementModel, SessionState, StepParams};
use crate::{horizontal_facing, strafe_right};

/// Result of a single step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state: SessionState,
    /// Set on the one frame the goal is first reached
    pub event: Option<GameEvent>,
    /// True if the candidate position was rejected this frame
    pub blocked: bool,
}

impl StepOutcome {
    fn unchanged(state: SessionState) -> Self {
        Self {
            state,
            event: None,
            blocked: false,
        }
    }
}

/// Unit wish direction relative to the walker (x = right, z = forward),
/// zero when no input is held
fn local_wish(input: &InputState) -> Vec3 {
    Vec3::new(input.strafe_axis(), 0.0, input.forward_axis()).normalize_or_zero()
}

/// Rotate a facing-relative vector into world space
fn to_world(local: Vec3, facing: Vec3) -> Vec3 {
    strafe_right(facing) * local.x + facing * local.z
}

/// Advance the walker by `elapsed` seconds.
///
/// `facing` may carry a vertical component; only its horizontal projection
/// is used. Non-finite or non-positive `elapsed` leaves the state untouched.
pub fn step(
    maze: &Maze,
    state: &SessionState,
    input: &InputState,
    facing: Vec3,
    elapsed: f32,
    params: &StepParams,
) -> StepOutcome {
    let mut next = *state;
    if !elapsed.is_finite() || elapsed <= 0.0 {
        return StepOutcome::unchanged(next);
    }
    next.frames += 1;

    let Some(facing) = horizontal_facing(facing) else {
        next.velocity = Vec3::ZERO;
        return StepOutcome::unchanged(next);
    };
    let wish = local_wish(input);

    let displacement = match params.model {
        MovementModel::Direct => to_world(wish, facing) * params.speed * elapsed,
        MovementModel::Damped {
            damping,
            acceleration,
        } => {
            // Exponential-ish decay; clamp so a long frame can't reverse velocity
            let decay = (damping * elapsed).min(1.0);
            next.velocity -= next.velocity * decay;
            next.velocity += wish * acceleration * elapsed;
            next.velocity.y = 0.0;
            // Velocity stays in the walker's frame, so turning steers momentum
            to_world(next.velocity, facing) * elapsed
        }
    };

    let candidate = next.position + displacement;
    let cell = maze.cell_at(candidate);
    let cell = match cell {
        Some(cell) if !cell.is_blocking() => cell,
        _ => {
            next.velocity = Vec3::ZERO;
            return StepOutcome {
                state: next,
                event: None,
                blocked: true,
            };
        }
    };

    next.position = candidate;

    let mut event = None;
    if cell == Cell::Goal && next.goal == GoalState::NotReached {
        next.goal = GoalState::Reached;
        event = Some(GameEvent::GoalReached {
            cell: maze.cell_coords(candidate),
            position: candidate,
        });
    }

    StepOutcome {
        state: next,
        event,
        blocked: false,
    }
}
