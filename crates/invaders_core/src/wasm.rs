use invaders_common::key::Key;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use crate::config::GameConfig;
use crate::game::Game;
use crate::input::InputState;
use crate::render::{screen_cells, CLEAR_COLOR};

/// Browser host: the page drives `tick` and `draw_screen` from
/// `requestAnimationFrame` and forwards keyboard events to `set_key`.
#[wasm_bindgen]
pub struct InvadersWasm {
    game: Game,
    input: InputState,
    ctx: CanvasRenderingContext2d,
}

#[wasm_bindgen]
impl InvadersWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<InvadersWasm, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no #canvas element"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("#canvas is not a canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let game = Game::new(&GameConfig::default());
        Ok(InvadersWasm {
            game,
            input: InputState::new(),
            ctx,
        })
    }

    #[wasm_bindgen]
    pub fn tick(&mut self) {
        let frame = self.input.take_frame();
        self.game.step(frame);
    }

    #[wasm_bindgen]
    pub fn set_key(&mut self, evt: KeyboardEvent, pressed: bool) {
        let key = key2btn(&evt.code());
        if key != Key::None {
            self.input.handle_key(key, pressed);
        }
    }

    #[wasm_bindgen]
    pub fn score(&self) -> u32 {
        self.game.score()
    }

    #[wasm_bindgen]
    pub fn draw_screen(&mut self, scale: usize) {
        let config = self.game.config();
        let (width, height) = (config.canvas_width, config.canvas_height);
        let scale = scale.max(1) as f64;

        self.ctx.set_fill_style(&JsValue::from_str(&CLEAR_COLOR.to_hex()));
        self.ctx.fill_rect(0.0, 0.0, width as f64 * scale, height as f64 * scale);

        let sprites = self.game.sprites();
        for call in self.game.draw_calls() {
            let sprite = &sprites[call.sprite];
            self.ctx.set_fill_style(&JsValue::from_str(&call.color.to_hex()));
            for (col, row) in screen_cells(sprite, call.x, call.y, width, height) {
                self.ctx.fill_rect(col as f64 * scale, row as f64 * scale, scale, scale);
            }
        }
    }
}

/// Maps a physical key code, so Shift and Caps Lock do not change the match.
fn key2btn(code: &str) -> Key {
    match code {
        "ArrowLeft" => Key::Left,
        "ArrowRight" => Key::Right,
        "KeyA" => Key::A,
        "KeyD" => Key::D,
        "Space" => Key::Space,
        _ => Key::None,
    }
}
