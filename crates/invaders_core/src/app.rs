use invaders_common::app::App;
use invaders_common::color::Color;
use invaders_common::key::Key;

use crate::config::GameConfig;
use crate::game::Game;
use crate::input::InputState;
use crate::render::paint;
use crate::SCREEN_SCALE;

/// Frontend-facing wrapper around a [`Game`].
///
/// Implements the shared `App` trait so any frontend can host it: one
/// `update` call is one simulation step followed by a repaint.
pub struct InvadersApp {
    should_exit: bool,
    paused: bool,
    cleared_reported: bool,
    scale: u32,
    input: InputState,
    pub game: Game,
}

impl InvadersApp {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            should_exit: false,
            paused: false,
            cleared_reported: false,
            scale: SCREEN_SCALE,
            input: InputState::new(),
            game: Game::new(config),
        }
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for InvadersApp {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl App for InvadersApp {
    fn init(&mut self) {
        log::info!(
            "Invaders init: {} aliens, {} lives",
            self.game.alive_aliens(),
            self.game.player().lives()
        );
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        if !self.paused {
            let frame = self.input.take_frame();
            let report = self.game.step(frame);
            if !report.killed.is_empty() {
                log::trace!(
                    "Frame {}: {} kills, score {}",
                    self.game.frame(),
                    report.killed.len(),
                    self.game.score()
                );
            }
            if !self.cleared_reported && self.game.fleet_cleared() {
                self.cleared_reported = true;
                log::info!(
                    "Fleet cleared after {} frames, score {}",
                    self.game.frame(),
                    self.game.score()
                );
            }
        }

        paint(&self.game, screen_state);

        if self.paused {
            let width = self.game.config().canvas_width;
            overlay_pause_banner(screen_state, width);
        }
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        match key {
            Key::Escape if is_pressed => self.should_exit = true,
            Key::P if is_pressed => {
                self.paused = !self.paused;
                log::debug!("Paused: {}", self.paused);
            }
            Key::None => {}
            _ => self.input.handle_key(key, is_pressed),
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!(
            "Invaders exit after {} frames, score {}",
            self.game.frame(),
            self.game.score()
        );
    }

    fn width(&self) -> u32 {
        self.game.config().canvas_width as u32
    }

    fn height(&self) -> u32 {
        self.game.config().canvas_height as u32
    }

    fn scale(&self) -> u32 {
        self.scale
    }

    fn title(&self) -> String {
        "Invaders".to_string()
    }
}

/// Striped band across the top of the screen while paused.
fn overlay_pause_banner(screen_state: &mut [u8], width: usize) {
    let height = screen_state.len() / (width * 3);
    let banner_height = 12usize.min(height);

    for y in 0..banner_height {
        let color = if y % 2 == 0 { Color::WHITE } else { Color::BLACK };
        for x in 0..width {
            let idx = (y * width + x) * 3;
            screen_state[idx..idx + 3].copy_from_slice(&[color.r, color.g, color.b]);
        }
    }
}
