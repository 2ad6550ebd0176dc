use crate::sprite::SpriteId;

/// Frame cycler shared by every entity of one class.
///
/// `time` counts elapsed simulation frames; each entry of `frames` is held for
/// `frame_duration` of them. Frames are handles, so two slots may show the
/// same sprite.
#[derive(Clone, Debug)]
pub struct SpriteAnimation {
    frames: Vec<SpriteId>,
    frame_duration: usize,
    time: usize,
    looping: bool,
}

impl SpriteAnimation {
    pub fn looping(frames: Vec<SpriteId>, frame_duration: usize) -> Self {
        Self::new(frames, frame_duration, true)
    }

    pub fn new(frames: Vec<SpriteId>, frame_duration: usize, looping: bool) -> Self {
        assert!(!frames.is_empty(), "animation needs at least one frame");
        assert!(frame_duration > 0, "frame duration must be non-zero");
        Self {
            frames,
            frame_duration,
            time: 0,
            looping,
        }
    }

    /// Advance by one simulation frame.
    ///
    /// A looping clock wraps to 0 once it reaches `num_frames * frame_duration`;
    /// a one-shot clock holds on the last frame instead.
    pub fn advance(&mut self) {
        let period = self.period();
        if self.looping {
            self.time += 1;
            if self.time == period {
                self.time = 0;
            }
        } else if self.time + 1 < period {
            self.time += 1;
        }
    }

    /// Always in `[0, num_frames)`.
    #[inline]
    pub fn current_frame(&self) -> usize {
        self.time / self.frame_duration
    }

    #[inline]
    pub fn current_sprite(&self) -> SpriteId {
        self.frames[self.current_frame()]
    }

    pub fn frames(&self) -> &[SpriteId] {
        &self.frames
    }

    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_duration(&self) -> usize {
        self.frame_duration
    }

    pub fn time(&self) -> usize {
        self.time
    }

    fn period(&self) -> usize {
        self.frames.len() * self.frame_duration
    }
}
