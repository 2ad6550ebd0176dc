use std::ops::Index;

/// An immutable 1-bit bitmap, one byte per pixel (0 = off, 1 = on).
///
/// The mask is row-major with row 0 being the *top* row of the glyph. An
/// entity placed at `(x, y)` has the sprite's bottom-left corner at that
/// coordinate; the glyph extends upward and rightward from there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    width: usize,
    height: usize,
    mask: Vec<u8>,
}

impl Sprite {
    pub fn new(width: usize, height: usize, mask: Vec<u8>) -> Self {
        assert_eq!(
            mask.len(),
            width * height,
            "sprite mask must hold width * height = {} cells",
            width * height
        );
        Self {
            width,
            height,
            mask,
        }
    }

    /// Build a sprite from rows of `@` (on) and `.` (off), top row first.
    pub fn from_art(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut mask = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "ragged sprite art row: {row:?}");
            mask.extend(row.bytes().map(|b| u8::from(b == b'@')));
        }
        Self::new(width, height, mask)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// Whether the cell at `col`, `row` (row 0 = top) is on.
    #[inline]
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        self.mask[row * self.width + col] == 1
    }
}

/// Stable handle to a sprite owned by a [`SpriteTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpriteId(usize);

impl SpriteId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every distinct bitmap exactly once; entities and animations refer to
/// them through [`SpriteId`].
#[derive(Clone, Debug, Default)]
pub struct SpriteTable {
    sprites: Vec<Sprite>,
}

impl SpriteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sprite: Sprite) -> SpriteId {
        self.sprites.push(sprite);
        SpriteId(self.sprites.len() - 1)
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Index<SpriteId> for SpriteTable {
    type Output = Sprite;

    fn index(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.0]
    }
}

/// Axis-aligned bounding-box test between two placed sprites.
///
/// Mask contents are ignored: boxes that intersect over transparent cells
/// still count. Boxes that only share an edge do not.
pub fn overlaps(a: &Sprite, (ax, ay): (i32, i32), b: &Sprite, (bx, by): (i32, i32)) -> bool {
    let (aw, ah) = (a.width as i32, a.height as i32);
    let (bw, bh) = (b.width as i32, b.height as i32);
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}
