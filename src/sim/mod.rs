//! Deterministic simulation module
//!
//! All maze gameplay logic lives here. This module must stay pure:
//! - State goes in and comes back out of `step`
//! - No globals, no clocks, no logging side effects
//! - No rendering or platform dependencies

pub mod input;
pub mod maze;
pub mod state;
pub mod step;

pub use input::{InputState, MoveControl};
pub use maze::{Cell, DEFAULT_LAYOUT, Maze, MazeError};
pub use state::{GameEvent, GoalState, MovementModel, SessionState, StepParams};
pub use step::{StepOutcome, step};
