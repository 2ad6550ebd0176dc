use crate::sprite::{Sprite, SpriteId, SpriteTable};

const ALIEN_A_0: [&str; 8] = [
    "...@@...",
    "..@@@@..",
    ".@@@@@@.",
    "@@.@@.@@",
    "@@@@@@@@",
    ".@.@@.@.",
    "@......@",
    ".@....@.",
];

const ALIEN_A_1: [&str; 8] = [
    "...@@...",
    "..@@@@..",
    ".@@@@@@.",
    "@@.@@.@@",
    "@@@@@@@@",
    "..@..@..",
    ".@.@@.@.",
    "@.@..@.@",
];

const ALIEN_B_0: [&str; 8] = [
    "..@.....@..",
    "...@...@...",
    "..@@@@@@@..",
    ".@@.@@@.@@.",
    "@@@@@@@@@@@",
    "@.@@@@@@@.@",
    "@.@.....@.@",
    "...@@.@@...",
];

const ALIEN_B_1: [&str; 8] = [
    "..@.....@..",
    "@..@...@..@",
    "@.@@@@@@@.@",
    "@@@.@@@.@@@",
    "@@@@@@@@@@@",
    ".@@@@@@@@@.",
    "..@.....@..",
    ".@.......@.",
];

const ALIEN_C_0: [&str; 8] = [
    "....@@@@....",
    ".@@@@@@@@@@.",
    "@@@@@@@@@@@@",
    "@@@..@@..@@@",
    "@@@@@@@@@@@@",
    "...@@..@@...",
    "..@@.@@.@@..",
    "@@........@@",
];

const ALIEN_C_1: [&str; 8] = [
    "....@@@@....",
    ".@@@@@@@@@@.",
    "@@@@@@@@@@@@",
    "@@@..@@..@@@",
    "@@@@@@@@@@@@",
    "..@@@..@@@..",
    ".@@..@@..@@.",
    "..@@....@@..",
];

const ALIEN_DEATH: [&str; 7] = [
    ".@..@...@..@.",
    "..@..@.@..@..",
    "...@.....@...",
    "@@.........@@",
    "...@.....@...",
    "..@..@.@..@..",
    ".@..@...@..@.",
];

const PLAYER: [&str; 7] = [
    ".....@.....",
    "....@@@....",
    "....@@@....",
    ".@@@@@@@@@.",
    "@@@@@@@@@@@",
    "@@@@@@@@@@@",
    "@@@@@@@@@@@",
];

const BULLET: [&str; 3] = ["@", "@", "@"];

/// Handles to the built-in glyph set.
#[derive(Clone, Debug)]
pub struct Glyphs {
    /// Two frames per alien class, ordered A, B, C.
    pub alien_frames: [[SpriteId; 2]; 3],
    pub alien_death: SpriteId,
    pub player: SpriteId,
    pub bullet: SpriteId,
}

impl Glyphs {
    /// Register every glyph in `table`, once each.
    pub fn register(table: &mut SpriteTable) -> Self {
        let alien_frames = [
            frame_pair(table, &ALIEN_A_0, &ALIEN_A_1),
            frame_pair(table, &ALIEN_B_0, &ALIEN_B_1),
            frame_pair(table, &ALIEN_C_0, &ALIEN_C_1),
        ];
        Self {
            alien_frames,
            alien_death: table.insert(Sprite::from_art(&ALIEN_DEATH)),
            player: table.insert(Sprite::from_art(&PLAYER)),
            bullet: table.insert(Sprite::from_art(&BULLET)),
        }
    }
}

fn frame_pair(table: &mut SpriteTable, first: &[&str], second: &[&str]) -> [SpriteId; 2] {
    [
        table.insert(Sprite::from_art(first)),
        table.insert(Sprite::from_art(second)),
    ]
}
