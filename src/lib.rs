//! Maze Walk - first-person maze walker and hangman game logic
//!
//! Core modules:
//! - `sim`: Deterministic maze simulation (grid, input, movement step)
//! - `session`: Frame-loop driver and presentation hooks
//! - `settings`: Serializable configuration
//! - `hangman`: Word-guessing game state
//! - `platform`: Browser bindings (wasm32 only)

pub mod hangman;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use hangman::{GuessOutcome, Hangman, HangmanStatus};
pub use session::{GoalBanner, MazeSession, Presenter, SessionError};
pub use settings::Settings;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Edge length of one grid cell in world units
    pub const CELL_SIZE: f32 = 10.0;
    /// Walking speed in world units per second
    pub const MOVE_SPEED: f32 = 10.0;
    /// Camera height above the floor (not used for collision)
    pub const EYE_HEIGHT: f32 = 5.0;

    /// Largest frame delta fed to the step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Nominal frame delta used when no timestamp is available yet
    pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;

    /// Facing projections shorter than this produce no movement
    pub const MIN_FACING_LENGTH: f32 = 1e-6;

    /// Damped movement: velocity decay per second
    pub const DAMPING: f32 = 10.0;
    /// Damped movement: acceleration toward the wish direction
    pub const ACCELERATION: f32 = 100.0;

    /// Message shown once the goal cell is entered
    pub const GOAL_TEXT: &str = "You made it!";
    /// Offset of the goal banner from the walker in x and z
    pub const BANNER_OFFSET: f32 = 5.0;
}

/// Project a direction onto the horizontal plane and normalize it.
///
/// Returns `None` when the projection is too short to normalize, e.g. when
/// looking straight up or down.
#[inline]
pub fn horizontal_facing(facing: Vec3) -> Option<Vec3> {
    let flat = Vec3::new(facing.x, 0.0, facing.z);
    if !flat.is_finite() || flat.length() < consts::MIN_FACING_LENGTH {
        return None;
    }
    Some(flat.normalize())
}

/// Right-hand perpendicular of a horizontal facing vector
#[inline]
pub fn strafe_right(facing: Vec3) -> Vec3 {
    Vec3::new(-facing.z, 0.0, facing.x)
}
