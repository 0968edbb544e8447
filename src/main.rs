//! Maze Walk entry point
//!
//! The browser build is driven from JavaScript through `platform::web`. The
//! native binary walks the reference maze along a scripted route and logs
//! what happens, which is handy for tuning settings.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use maze_walk::consts::DEFAULT_FRAME_DT;
    use maze_walk::{GoalBanner, MazeSession, Presenter, Settings};

    env_logger::init();
    log::info!("Maze Walk (native) starting...");

    struct Console;

    impl Presenter for Console {
        fn goal_reached(&mut self, banner: &GoalBanner) {
            println!(
                "{} (banner at {:.1}, {:.1}, {:.1})",
                banner.text, banner.anchor.x, banner.anchor.y, banner.anchor.z
            );
        }
    }

    let settings = Settings::load();
    let mut session = match MazeSession::from_settings(&settings) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start session: {e}");
            std::process::exit(1);
        }
    };

    // East along the top corridor, then south down the right-hand one
    let route = [("KeyD", 2.0_f32), ("KeyS", 3.0_f32)];
    let facing = glam::Vec3::NEG_Z;
    let mut console = Console;

    for (key, seconds) in route {
        session.key_down(key);
        let frames = (seconds / DEFAULT_FRAME_DT).round() as u32;
        for _ in 0..frames {
            session.frame(facing, DEFAULT_FRAME_DT, &mut console);
        }
        session.key_up(key);
        let pos = session.position();
        println!("after {key} for {seconds}s: ({:.2}, {:.2})", pos.x, pos.z);
    }

    if !session.goal().is_reached() {
        log::warn!("Route ended without reaching the goal");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start
}
