use bitflags::bitflags;
use invaders_common::key::Key;

bitflags! {
    /// Directional keys currently held down.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    struct Held: u8 {
        const LEFT = 1 << 0;
        const LEFT_ALT = 1 << 1;
        const RIGHT = 1 << 2;
        const RIGHT_ALT = 1 << 3;
    }
}

/// The input a single simulation step consumes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// -1 moves left, 1 moves right, 0 stands still.
    pub direction: i32,
    /// A fire press was latched since the previous step.
    pub fire: bool,
}

impl FrameInput {
    pub const IDLE: FrameInput = FrameInput {
        direction: 0,
        fire: false,
    };

    pub fn new(direction: i32, fire: bool) -> Self {
        Self {
            direction: direction.signum(),
            fire,
        }
    }
}

/// Collects key edges between steps.
///
/// Each directional key contributes at most once however many press events
/// arrive for it, and its release takes back exactly that contribution, so
/// holding left and right together nets to zero. Fire is edge-triggered on
/// release and stays latched until [`InputState::take_frame`] consumes it.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    held: Held,
    fire_latched: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: Key, is_down: bool) {
        let flag = match key {
            Key::Left => Held::LEFT,
            Key::A => Held::LEFT_ALT,
            Key::Right => Held::RIGHT,
            Key::D => Held::RIGHT_ALT,
            Key::Space => {
                if !is_down {
                    self.fire_latched = true;
                }
                return;
            }
            _ => return,
        };
        self.held.set(flag, is_down);
    }

    /// Net horizontal direction in `{-1, 0, 1}`.
    pub fn direction(&self) -> i32 {
        let left = self.held.intersects(Held::LEFT | Held::LEFT_ALT);
        let right = self.held.intersects(Held::RIGHT | Held::RIGHT_ALT);
        i32::from(right) - i32::from(left)
    }

    pub fn fire_latched(&self) -> bool {
        self.fire_latched
    }

    /// Snapshot the input for one step and clear the fire latch.
    pub fn take_frame(&mut self) -> FrameInput {
        let fire = std::mem::take(&mut self.fire_latched);
        FrameInput {
            direction: self.direction(),
            fire,
        }
    }

    /// Forget every held key and any latched fire.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
