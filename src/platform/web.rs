//! Browser bindings (wasm32)

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, TouchEvent};

use crate::hangman::{GuessOutcome, Hangman, HangmanStatus};
use crate::session::{GoalBanner, MazeSession, Presenter};
use crate::settings::Settings;
use crate::sim::MoveControl;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Maze Walk starting...");
}

/// Holds the banner until the renderer picks it up
#[derive(Default)]
struct BannerSlot(Option<GoalBanner>);

impl Presenter for BannerSlot {
    fn goal_reached(&mut self, banner: &GoalBanner) {
        self.0 = Some(banner.clone());
    }
}

/// Session handle driven from the JavaScript render loop
#[wasm_bindgen]
pub struct WebMaze {
    session: Rc<RefCell<MazeSession>>,
    banner: BannerSlot,
}

#[wasm_bindgen]
impl WebMaze {
    /// Build the session from stored settings and attach input listeners
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebMaze, JsValue> {
        let settings = Settings::load();
        let session = MazeSession::from_settings(&settings)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let session = Rc::new(RefCell::new(session));
        bind_controls(&session)?;
        Ok(WebMaze {
            session,
            banner: BannerSlot::default(),
        })
    }

    /// Advance one frame with the camera's look direction. Returns true on
    /// the frame the goal is reached.
    pub fn frame(&mut self, fx: f32, fy: f32, fz: f32, dt: f32) -> bool {
        let facing = glam::Vec3::new(fx, fy, fz);
        self.session
            .borrow_mut()
            .frame(facing, dt, &mut self.banner)
            .is_some()
    }

    /// Committed position as `[x, y, z]`
    pub fn position(&self) -> Vec<f32> {
        self.session.borrow().position().to_array().to_vec()
    }

    pub fn goal_reached(&self) -> bool {
        self.session.borrow().goal().is_reached()
    }

    /// Text of the pending goal banner, if any
    pub fn banner_text(&self) -> Option<String> {
        self.banner.0.as_ref().map(|b| b.text.clone())
    }

    /// Banner anchor `[x, y, z]`; clears the pending banner
    pub fn take_banner_anchor(&mut self) -> Option<Vec<f32>> {
        self.banner.0.take().map(|b| b.anchor.to_array().to_vec())
    }

    pub fn reset(&mut self) {
        self.session.borrow_mut().reset();
    }
}

/// Keyboard on the window, touch on the four on-screen controls
fn bind_controls(session: &Rc<RefCell<MazeSession>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Key down / up
    for (kind, pressed) in [("keydown", true), ("keyup", false)] {
        let session = session.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut s = session.borrow_mut();
            if pressed {
                s.key_down(&event.code());
            } else {
                s.key_up(&event.code());
            }
        });
        window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Window blur releases everything
    {
        let session = session.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            session.borrow_mut().release_all();
        });
        window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch controls (only present on mobile layouts)
    for control in MoveControl::ALL {
        let Some(el) = document.get_element_by_id(control.touch_id()) else {
            continue;
        };
        for (kind, pressed) in [("touchstart", true), ("touchend", false)] {
            let session = session.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut s = session.borrow_mut();
                if pressed {
                    s.press(control);
                } else {
                    s.release(control);
                }
            });
            el.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }

    log::info!("Input listeners attached");
    Ok(())
}

/// Hangman game handle for the word-guessing page
#[wasm_bindgen]
pub struct WebHangman {
    game: Hangman,
}

#[wasm_bindgen]
impl WebHangman {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebHangman {
        WebHangman {
            game: Hangman::default(),
        }
    }

    /// Guess the first character of `input`. Returns "correct",
    /// "incorrect" or "ignored".
    pub fn guess(&mut self, input: &str) -> String {
        let outcome = match input.chars().next() {
            Some(c) => self.game.guess(c),
            None => GuessOutcome::Ignored,
        };
        match outcome {
            GuessOutcome::Correct => "correct",
            GuessOutcome::Incorrect => "incorrect",
            GuessOutcome::Ignored => "ignored",
        }
        .to_string()
    }

    /// "playing", "won" or "lost"
    pub fn status(&self) -> String {
        match self.game.status() {
            HangmanStatus::Playing => "playing",
            HangmanStatus::Won => "won",
            HangmanStatus::Lost => "lost",
        }
        .to_string()
    }

    pub fn masked_word(&self) -> String {
        self.game.masked_word()
    }

    /// Number of figure parts to draw
    pub fn misses(&self) -> u32 {
        self.game.misses()
    }

    pub fn guessed_letters(&self) -> String {
        self.game.guessed_letters().iter().collect()
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }
}
