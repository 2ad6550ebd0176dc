use invaders_common::color::Color;

use crate::game::Game;
use crate::sprite::{Sprite, SpriteId, SpriteTable};

pub const CLEAR_COLOR: Color = Color::FOREST;
pub const SPRITE_COLOR: Color = Color::MAROON;

/// One sprite the simulation wants on screen, placed by its bottom-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub sprite: SpriteId,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl DrawCall {
    pub fn new(sprite: SpriteId, x: i32, y: i32, color: Color) -> Self {
        Self {
            sprite,
            x,
            y,
            color,
        }
    }
}

/// RGB24 view over a host-owned pixel buffer.
///
/// Buffer row 0 is the top of the screen while game coordinates grow upward
/// from the bottom, so every write flips the row.
pub struct Frame<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 3);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.pixels.chunks_exact_mut(3) {
            pixel.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Paint the on cells of `sprite` with its bottom-left corner at `(x, y)`.
    pub fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, color: Color) {
        for (col, row) in screen_cells(sprite, x, y, self.width, self.height) {
            let idx = (row * self.width + col) * 3;
            self.pixels[idx..idx + 3].copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    pub fn draw(&mut self, sprites: &SpriteTable, call: &DrawCall) {
        self.draw_sprite(&sprites[call.sprite], call.x, call.y, call.color);
    }

    /// Color at game coordinates `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let idx = ((self.height - 1 - y) * self.width + x) * 3;
        Color::new_rgb(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }
}

/// Screen cells `(column, row)` covered by the on cells of `sprite` placed
/// with its bottom-left corner at game `(x, y)` on a `width` x `height`
/// canvas. Screen row 0 is the top; cells outside the canvas are skipped.
pub fn screen_cells(
    sprite: &Sprite,
    x: i32,
    y: i32,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    let sprite_height = sprite.height();
    (0..sprite_height).flat_map(move |row| {
        // Mask row 0 is the top of the glyph.
        let gy = y + (sprite_height - 1 - row) as i32;
        (0..sprite.width()).filter_map(move |col| {
            let gx = x + col as i32;
            if gx < 0 || gy < 0 || gx >= width as i32 || gy >= height as i32 {
                return None;
            }
            if !sprite.is_set(col, row) {
                return None;
            }
            Some((gx as usize, height - 1 - gy as usize))
        })
    })
}

/// Clear `screen` and replay the game's draw list onto it.
pub fn paint(game: &Game, screen: &mut [u8]) {
    let config = game.config();
    let mut frame = Frame::new(screen, config.canvas_width, config.canvas_height);
    frame.clear(CLEAR_COLOR);
    for call in game.draw_calls() {
        frame.draw(game.sprites(), &call);
    }
}
