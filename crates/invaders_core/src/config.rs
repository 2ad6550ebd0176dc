use anyhow::{ensure, Result};
use typed_builder::TypedBuilder;

use crate::bitmaps::Glyphs;
use crate::sprite::SpriteTable;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Everything fixed at startup. Nothing here changes once a game is running.
///
/// Defaults reproduce the arcade layout: a 224x256 canvas, a 5x11 fleet whose
/// bottom-left slot sits at (20, 128), and a 128-round magazine.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct GameConfig {
    #[builder(default = SCREEN_WIDTH)]
    pub canvas_width: usize,
    #[builder(default = SCREEN_HEIGHT)]
    pub canvas_height: usize,

    #[builder(default = 5)]
    pub fleet_rows: usize,
    #[builder(default = 11)]
    pub fleet_columns: usize,
    #[builder(default = 20)]
    pub fleet_origin_x: usize,
    #[builder(default = 128)]
    pub fleet_origin_y: usize,
    #[builder(default = 16)]
    pub fleet_column_spacing: usize,
    #[builder(default = 17)]
    pub fleet_row_spacing: usize,

    #[builder(default = 128)]
    pub bullet_capacity: usize,
    /// Vertical distance a bullet travels per frame.
    #[builder(default = 2)]
    pub bullet_speed: usize,

    /// Frames a death glyph stays on screen.
    #[builder(default = 10)]
    pub decay_frames: u8,
    /// Frames each alien animation frame is held.
    #[builder(default = 10)]
    pub animation_frame_duration: usize,

    /// Horizontal pixels per frame while a direction is held.
    #[builder(default = 2)]
    pub player_speed: usize,
    #[builder(default = 32)]
    pub player_y: usize,
    #[builder(default = 3)]
    pub player_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GameConfig {
    /// Reject layouts the simulation cannot represent.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.canvas_width > 0 && self.canvas_height > 0,
            "canvas must not be empty, got {}x{}",
            self.canvas_width,
            self.canvas_height
        );
        ensure!(self.bullet_capacity > 0, "bullet capacity must be non-zero");
        ensure!(self.bullet_speed > 0, "bullet speed must be non-zero");
        ensure!(
            self.animation_frame_duration > 0,
            "animation frame duration must be non-zero"
        );
        ensure!(
            self.fleet_rows > 0 && self.fleet_columns > 0,
            "fleet must have at least one row and one column"
        );
        ensure!(self.player_lives > 0, "player must start with a life");

        let mut table = SpriteTable::new();
        let glyphs = Glyphs::register(&mut table);
        let player = &table[glyphs.player];
        let bullet = &table[glyphs.bullet];
        let cell_width = glyphs
            .alien_frames
            .iter()
            .flatten()
            .chain(std::iter::once(&glyphs.alien_death))
            .map(|&id| table[id].width())
            .max()
            .unwrap_or(0);
        let cell_height = glyphs
            .alien_frames
            .iter()
            .flatten()
            .map(|&id| table[id].height())
            .max()
            .unwrap_or(0);

        ensure!(
            player.width() <= self.canvas_width,
            "player ({} px) is wider than the canvas ({} px)",
            player.width(),
            self.canvas_width
        );
        ensure!(
            self.player_y + player.height() + bullet.height() <= self.canvas_height,
            "player at y = {} leaves no room to fire on a {} px tall canvas",
            self.player_y,
            self.canvas_height
        );

        let fleet_right =
            self.fleet_origin_x + (self.fleet_columns - 1) * self.fleet_column_spacing + cell_width;
        let fleet_top =
            self.fleet_origin_y + (self.fleet_rows - 1) * self.fleet_row_spacing + cell_height;
        ensure!(
            fleet_right <= self.canvas_width && fleet_top <= self.canvas_height,
            "fleet of {}x{} spans to ({}, {}), outside the {}x{} canvas",
            self.fleet_rows,
            self.fleet_columns,
            fleet_right,
            fleet_top,
            self.canvas_width,
            self.canvas_height
        );
        Ok(())
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet_rows * self.fleet_columns
    }
}
