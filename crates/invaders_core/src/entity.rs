/// Combat state of an alien slot. `Dead` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlienKind {
    Dead,
    TypeA,
    TypeB,
    TypeC,
}

/// Per-kind lookup: which animation clock drives the kind and what it is worth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlienClass {
    pub animation: usize,
    pub points: u32,
}

impl AlienKind {
    /// `None` for `Dead`.
    pub const fn class(self) -> Option<AlienClass> {
        match self {
            AlienKind::Dead => None,
            AlienKind::TypeA => Some(AlienClass {
                animation: 0,
                points: 30,
            }),
            AlienKind::TypeB => Some(AlienClass {
                animation: 1,
                points: 20,
            }),
            AlienKind::TypeC => Some(AlienClass {
                animation: 2,
                points: 10,
            }),
        }
    }

    /// Kind for fleet row `row` (0 = bottom) of a fleet `rows` tall: the two
    /// lowest rows are `TypeC`, the next two `TypeB`, the top row `TypeA`.
    pub fn for_row(row: usize, rows: usize) -> Self {
        match rows.saturating_sub(row) / 2 {
            0 => AlienKind::TypeA,
            1 => AlienKind::TypeB,
            _ => AlienKind::TypeC,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    kind: AlienKind,
    decay: u8,
}

impl Alien {
    pub fn new(x: i32, y: i32, kind: AlienKind, decay: u8) -> Self {
        Self { x, y, kind, decay }
    }

    #[inline]
    pub fn kind(&self) -> AlienKind {
        self.kind
    }

    /// Frames left before a corpse stops being drawn.
    #[inline]
    pub fn decay(&self) -> u8 {
        self.decay
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.kind != AlienKind::Dead
    }

    /// Live aliens and corpses whose decay counter has not run out.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_alive() || self.decay > 0
    }

    /// Mark the alien dead and shift it so the death glyph is centered on
    /// where the live glyph was. Returns the points the kill is worth, or
    /// `None` if the alien was already dead.
    pub fn kill(&mut self, death_width: usize, live_width: usize) -> Option<u32> {
        let class = self.kind.class()?;
        self.kind = AlienKind::Dead;
        self.x -= (death_width as i32 - live_width as i32) / 2;
        Some(class.points)
    }

    /// One frame of corpse aging. Live aliens and spent corpses are left alone.
    pub fn tick_decay(&mut self) {
        if self.kind == AlienKind::Dead {
            self.decay = self.decay.saturating_sub(1);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    lives: u32,
}

impl Player {
    pub fn new(x: i32, y: i32, lives: u32) -> Self {
        Self { x, y, lives }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Returns the lives left. Never goes below zero.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }
}

/// A projectile. `dir` is the vertical step per frame; positive moves up,
/// toward the fleet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub dir: i32,
}

/// Fixed-capacity, unordered bullet storage.
///
/// Removal is swap-with-last, so the order of live bullets changes after
/// every removal. Callers must not rely on it.
#[derive(Clone, Debug)]
pub struct BulletPool {
    bullets: Vec<Bullet>,
    capacity: usize,
}

impl BulletPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bullets: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bullets.len() >= self.capacity
    }

    /// Add a bullet unless the pool is full. The bullet is dropped, not
    /// queued, when there is no room.
    pub fn try_spawn(&mut self, bullet: Bullet) -> bool {
        if self.is_full() {
            return false;
        }
        self.bullets.push(bullet);
        true
    }

    /// Remove the bullet at `index`, moving the last bullet into its slot.
    pub fn swap_remove(&mut self, index: usize) -> Bullet {
        self.bullets.swap_remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Bullet> {
        self.bullets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bullet> {
        self.bullets.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bullet> {
        self.bullets.iter()
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }
}

impl<'a> IntoIterator for &'a BulletPool {
    type Item = &'a Bullet;
    type IntoIter = std::slice::Iter<'a, Bullet>;

    fn into_iter(self) -> Self::IntoIter {
        self.bullets.iter()
    }
}
