//! Platform abstraction layer
//!
//! Browser glue: keyboard and touch listeners feeding `MazeSession`, and a
//! JavaScript-facing handle the renderer drives once per animation frame, plus
//! a handle for the hangman page.

#[cfg(target_arch = "wasm32")]
pub mod web;
