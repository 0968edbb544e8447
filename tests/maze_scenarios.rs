use glam::{IVec2, Vec3};
use maze_walk::consts::{EYE_HEIGHT, MOVE_SPEED};
use maze_walk::sim::{
    Cell, GameEvent, GoalState, InputState, Maze, MoveControl, MovementModel, SessionState,
    StepParams, step,
};
use maze_walk::{MazeSession, Settings};
use proptest::prelude::*;

const FACING: Vec3 = Vec3::NEG_Z;

fn reference_maze() -> Maze {
    let layout: [[u8; 5]; 5] = [
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 0, 1, 0, 1],
        [1, 0, 1, 0, 1],
        [1, 1, 1, 2, 1],
    ];
    Maze::from_codes(&layout, 10.0).unwrap()
}

fn holding(control: MoveControl) -> InputState {
    let mut input = InputState::default();
    input.set(control, true);
    input
}

#[test]
fn forward_into_wall_holds_spawn() {
    let maze = reference_maze();
    let spawn = SessionState::new(Vec3::new(15.0, EYE_HEIGHT, 15.0));
    let input = holding(MoveControl::Forward);

    let out = step(&maze, &spawn, &input, FACING, 0.6, &StepParams::default());
    assert_eq!(maze.cell_at(Vec3::new(15.0, 0.0, 9.0)), Some(Cell::Wall));
    assert!(out.blocked);
    assert_eq!(out.state.position, spawn.position);
}

#[test]
fn walk_corridor_to_goal_signals_once() {
    let maze = reference_maze();
    let params = StepParams::default();
    let dt = 0.05;
    let mut state = SessionState::new(Vec3::new(15.0, EYE_HEIGHT, 15.0));
    let mut events = Vec::new();

    // East to x = 35 through cells (1,1) -> (2,1) -> (3,1)
    let right = holding(MoveControl::Right);
    for _ in 0..40 {
        let out = step(&maze, &state, &right, FACING, dt, &params);
        assert!(!out.blocked);
        state = out.state;
    }
    assert!((state.position.x - 35.0).abs() < 1e-3);
    assert_eq!(maze.cell_coords(state.position), IVec2::new(3, 1));

    // South through (3,2), (3,3) into the goal at (3,4), then against the border
    let back = holding(MoveControl::Backward);
    for frame in 0..80 {
        let out = step(&maze, &state, &back, FACING, dt, &params);
        if let Some(event) = out.event {
            events.push((frame, event));
        }
        state = out.state;
    }

    assert_eq!(events.len(), 1);
    let (_, GameEvent::GoalReached { cell, position }) = events[0];
    assert_eq!(cell, IVec2::new(3, 4));
    assert!(position.z >= 40.0);
    assert_eq!(state.goal, GoalState::Reached);
    // Stopped inside the grid, short of the south edge
    assert!(state.position.z < 50.0);
}

#[test]
fn session_runs_reference_route() {
    let mut session = MazeSession::from_settings(&Settings::default()).unwrap();
    let mut banners = 0;

    struct Count<'a>(&'a mut u32);
    impl maze_walk::Presenter for Count<'_> {
        fn goal_reached(&mut self, _banner: &maze_walk::GoalBanner) {
            *self.0 += 1;
        }
    }

    session.key_down("KeyD");
    for _ in 0..30 {
        session.frame(FACING, 1.0 / 15.0, &mut Count(&mut banners));
    }
    session.key_up("KeyD");
    session.key_down("KeyS");
    for _ in 0..60 {
        session.frame(FACING, 1.0 / 15.0, &mut Count(&mut banners));
    }

    assert_eq!(banners, 1);
    assert!(session.goal().is_reached());
}

fn open_positions() -> impl Strategy<Value = Vec3> {
    // Anywhere in the top corridor, clear of its walls by more than one step
    (12.0f32..38.0, 12.0f32..18.0).prop_map(|(x, z)| Vec3::new(x, EYE_HEIGHT, z))
}

fn any_input() -> impl Strategy<Value = InputState> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(forward, backward, left, right)| InputState {
            forward,
            backward,
            left,
            right,
        },
    )
}

proptest! {
    #[test]
    fn never_lands_in_wall(
        x in -5.0f32..55.0,
        z in -5.0f32..55.0,
        input in any_input(),
        yaw in 0.0f32..std::f32::consts::TAU,
        dt in 0.0f32..2.0,
        damped in any::<bool>(),
    ) {
        let maze = reference_maze();
        let start = SessionState::new(Vec3::new(x, EYE_HEIGHT, z));
        let facing = Vec3::new(yaw.sin(), 0.0, -yaw.cos());
        let params = StepParams {
            model: if damped { MovementModel::damped() } else { MovementModel::Direct },
            ..Default::default()
        };
        let out = step(&maze, &start, &input, facing, dt, &params);
        if out.state.position != start.position {
            prop_assert!(maze.is_walkable(out.state.position));
        }
    }

    #[test]
    fn single_flag_moves_speed_times_dt(
        pos in open_positions(),
        dt in 0.0f32..0.15,
        which in 0usize..4,
    ) {
        let maze = reference_maze();
        let start = SessionState::new(pos);
        let control = MoveControl::ALL[which];
        let out = step(&maze, &start, &holding(control), FACING, dt, &StepParams::default());
        let expected = match control {
            MoveControl::Forward => Vec3::new(0.0, 0.0, -1.0),
            MoveControl::Backward => Vec3::new(0.0, 0.0, 1.0),
            MoveControl::Left => Vec3::new(-1.0, 0.0, 0.0),
            MoveControl::Right => Vec3::new(1.0, 0.0, 0.0),
        } * MOVE_SPEED * dt;
        prop_assert!(!out.blocked);
        prop_assert!((out.state.position - (start.position + expected)).length() < 1e-3);
    }

    #[test]
    fn opposing_flags_cancel(pos in open_positions(), dt in 0.0f32..1.0, strafe in any::<bool>()) {
        let maze = reference_maze();
        let start = SessionState::new(pos);
        let input = if strafe {
            InputState { left: true, right: true, ..Default::default() }
        } else {
            InputState { forward: true, backward: true, ..Default::default() }
        };
        let out = step(&maze, &start, &input, FACING, dt, &StepParams::default());
        prop_assert_eq!(out.state.position, start.position);
    }

    #[test]
    fn zero_elapsed_is_identity(pos in open_positions(), input in any_input()) {
        let maze = reference_maze();
        let start = SessionState::new(pos);
        let out = step(&maze, &start, &input, FACING, 0.0, &StepParams::default());
        prop_assert_eq!(out.state, start);
        prop_assert!(out.event.is_none());
    }
}
