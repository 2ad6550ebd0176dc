pub mod animation;
pub mod app;
pub mod bitmaps;
pub mod config;
pub mod entity;
pub mod game;
pub mod input;
pub mod render;
pub mod sprite;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use app::InvadersApp;
pub use config::GameConfig;
pub use game::{Game, StepReport};
pub use input::{FrameInput, InputState};

/// Logical canvas width in pixels.
pub const SCREEN_WIDTH: usize = 224;
/// Logical canvas height in pixels.
pub const SCREEN_HEIGHT: usize = 256;
/// Default integer scaling factor for the window.
pub const SCREEN_SCALE: u32 = 2;
