//! Frame-loop driver
//!
//! Owns the maze, walker state and held input for one session. Platform code
//! feeds it input events and frame ticks; goal events are handed to a
//! `Presenter`.

use glam::{IVec2, Vec3};
use thiserror::Error;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GoalState, InputState, Maze, MazeError, MoveControl, SessionState, StepParams, step,
};

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("spawn point ({x}, {z}) is not on a walkable cell")]
    BlockedSpawn { x: f32, z: f32 },
}

/// Message shown once the goal is reached, anchored near the walker
#[derive(Debug, Clone, PartialEq)]
pub struct GoalBanner {
    pub text: String,
    pub anchor: Vec3,
    pub cell: IVec2,
}

/// Presentation collaborator (renders the goal banner)
pub trait Presenter {
    fn goal_reached(&mut self, banner: &GoalBanner);
}

/// Presenter that ignores everything
impl Presenter for () {
    fn goal_reached(&mut self, _banner: &GoalBanner) {}
}

/// One walker in one maze
#[derive(Debug, Clone)]
pub struct MazeSession {
    maze: Maze,
    state: SessionState,
    input: InputState,
    params: StepParams,
    spawn: Vec3,
    goal_text: String,
}

impl MazeSession {
    pub fn new(maze: Maze, settings: &Settings) -> Result<Self, SessionError> {
        let spawn = settings.spawn_position();
        if !maze.is_walkable(spawn) {
            return Err(SessionError::BlockedSpawn {
                x: spawn.x,
                z: spawn.z,
            });
        }
        log::info!(
            "Session started: {}x{} maze, spawn ({}, {}), {} movement",
            maze.cols(),
            maze.rows(),
            spawn.x,
            spawn.z,
            settings.movement.as_str()
        );
        Ok(Self {
            maze,
            state: SessionState::new(spawn),
            input: InputState::default(),
            params: settings.step_params(),
            spawn,
            goal_text: settings.goal_text.clone(),
        })
    }

    /// Reference maze built from settings
    pub fn from_settings(settings: &Settings) -> Result<Self, SessionError> {
        let maze = Maze::from_codes(&crate::sim::DEFAULT_LAYOUT, settings.cell_size)?;
        Self::new(maze, settings)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn goal(&self) -> GoalState {
        self.state.goal
    }

    pub fn press(&mut self, control: MoveControl) {
        self.input.set(control, true);
    }

    pub fn release(&mut self, control: MoveControl) {
        self.input.set(control, false);
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        self.input.apply_key(code, true)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.input.apply_key(code, false)
    }

    pub fn touch_start(&mut self, id: &str) {
        if let Some(control) = MoveControl::from_touch_id(id) {
            self.press(control);
        }
    }

    pub fn touch_end(&mut self, id: &str) {
        if let Some(control) = MoveControl::from_touch_id(id) {
            self.release(control);
        }
    }

    /// Release all held controls (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    /// Run one frame. Returns the banner on the frame the goal is reached.
    pub fn frame(
        &mut self,
        facing: Vec3,
        dt: f32,
        presenter: &mut impl Presenter,
    ) -> Option<GoalBanner> {
        // Not `f32::min`: a NaN delta must reach `step` and be rejected there
        let dt = if dt > MAX_FRAME_DT { MAX_FRAME_DT } else { dt };
        let outcome = step(&self.maze, &self.state, &self.input, facing, dt, &self.params);
        self.state = outcome.state;

        if outcome.blocked {
            log::debug!(
                "Move blocked at ({:.2}, {:.2})",
                self.state.position.x,
                self.state.position.z
            );
        }

        let GameEvent::GoalReached { cell, position } = outcome.event?;
        log::info!(
            "Goal reached at cell ({}, {}) after {} frames",
            cell.x,
            cell.y,
            self.state.frames
        );
        let banner = GoalBanner {
            text: self.goal_text.clone(),
            anchor: Vec3::new(
                position.x - BANNER_OFFSET,
                position.y,
                position.z - BANNER_OFFSET,
            ),
            cell,
        };
        presenter.goal_reached(&banner);
        Some(banner)
    }

    /// Put the walker back at spawn; the goal state is kept
    pub fn reset(&mut self) {
        self.state.position = self.spawn;
        self.state.velocity = Vec3::ZERO;
        self.input.clear();
    }
}
