use log::{debug, info};

use crate::animation::SpriteAnimation;
use crate::bitmaps::Glyphs;
use crate::config::GameConfig;
use crate::entity::{Alien, AlienKind, Bullet, BulletPool, Player};
use crate::input::FrameInput;
use crate::render::{DrawCall, SPRITE_COLOR};
use crate::sprite::{overlaps, SpriteId, SpriteTable};

#[cfg(test)]
mod tests;

/// What happened during one [`Game::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Roster slots of the aliens destroyed this frame.
    pub killed: Vec<usize>,
    pub points: u32,
    /// Bullets that left the canvas.
    pub expired: u32,
    pub fired: bool,
    /// A fire press arrived while the magazine was full.
    pub fire_dropped: bool,
}

/// The whole simulation: sprite table, animation clocks, alien roster,
/// player, bullets and score.
///
/// The roster never shrinks, so an alien's slot index identifies it for the
/// whole run. Bullet order is not stable; see [`BulletPool`].
pub struct Game {
    config: GameConfig,
    sprites: SpriteTable,
    glyphs: Glyphs,
    animations: [SpriteAnimation; 3],
    aliens: Vec<Alien>,
    player: Player,
    bullets: BulletPool,
    score: u32,
    frame: u64,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let mut sprites = SpriteTable::new();
        let glyphs = Glyphs::register(&mut sprites);
        let animations = glyphs.alien_frames.map(|frames| {
            SpriteAnimation::looping(frames.to_vec(), config.animation_frame_duration)
        });

        let death_width = sprites[glyphs.alien_death].width() as i32;
        let mut aliens = Vec::with_capacity(config.fleet_size());
        for row in 0..config.fleet_rows {
            let kind = AlienKind::for_row(row, config.fleet_rows);
            let live_width = kind.class().map_or(death_width, |class| {
                sprites[animations[class.animation].frames()[0]].width() as i32
            });
            let y = (config.fleet_origin_y + row * config.fleet_row_spacing) as i32;
            for col in 0..config.fleet_columns {
                let x = (config.fleet_origin_x + col * config.fleet_column_spacing) as i32
                    + (death_width - live_width) / 2;
                aliens.push(Alien::new(x, y, kind, config.decay_frames));
            }
        }

        let player_width = sprites[glyphs.player].width();
        let player = Player::new(
            (config.canvas_width / 2) as i32 - (player_width / 2) as i32,
            config.player_y as i32,
            config.player_lives,
        );

        info!(
            "New game: {}x{} canvas, {} aliens, {} bullet slots",
            config.canvas_width,
            config.canvas_height,
            aliens.len(),
            config.bullet_capacity
        );

        Self {
            config: config.clone(),
            sprites,
            glyphs,
            animations,
            aliens,
            player,
            bullets: BulletPool::with_capacity(config.bullet_capacity),
            score: 0,
            frame: 0,
        }
    }

    /// Run one simulation frame.
    ///
    /// Phases run in a fixed order and later phases see the effects of
    /// earlier ones: animation clocks, player movement, corpse decay,
    /// bullets (move, expire, collide), then fire intake. Once the player is
    /// out of lives the whole state is frozen and this does nothing: the
    /// animation clocks and corpse decay stop along with everything else.
    pub fn step(&mut self, input: FrameInput) -> StepReport {
        let mut report = StepReport::default();
        if self.is_over() {
            return report;
        }
        self.frame += 1;

        for animation in &mut self.animations {
            animation.advance();
        }

        self.move_player(input.direction);

        for alien in &mut self.aliens {
            alien.tick_decay();
        }

        self.advance_bullets(&mut report);

        if input.fire {
            if self.spawn_bullet() {
                report.fired = true;
            } else {
                report.fire_dropped = true;
                debug!("Fire dropped with {} bullets in flight", self.bullets.len());
            }
        }

        report
    }

    fn move_player(&mut self, direction: i32) {
        let delta = self.config.player_speed as i32 * direction.signum();
        if delta == 0 {
            return;
        }
        let max_x = self.player_max_x();
        self.player.x = (self.player.x + delta).clamp(0, max_x);
    }

    fn advance_bullets(&mut self, report: &mut StepReport) {
        let bullet_sprite = &self.sprites[self.glyphs.bullet];
        let death_width = self.sprites[self.glyphs.alien_death].width();
        let floor = bullet_sprite.height() as i32;
        let ceiling = self.config.canvas_height as i32;

        let mut bi = 0;
        while bi < self.bullets.len() {
            let Some(bullet) = self.bullets.get_mut(bi) else {
                break;
            };
            bullet.y += bullet.dir;
            let Bullet { x, y, .. } = *bullet;

            if y >= ceiling || y < floor {
                self.bullets.swap_remove(bi);
                report.expired += 1;
                // The last bullet now sits at `bi`; look at it before moving on.
                continue;
            }

            let hit = self.aliens.iter().enumerate().find_map(|(slot, alien)| {
                let id = live_sprite(&self.animations, alien.kind())?;
                let sprite = &self.sprites[id];
                overlaps(bullet_sprite, (x, y), sprite, (alien.x, alien.y))
                    .then_some((slot, sprite.width()))
            });

            match hit {
                Some((slot, live_width)) => {
                    if let Some(points) = self.aliens[slot].kill(death_width, live_width) {
                        self.score += points;
                        report.points += points;
                        report.killed.push(slot);
                        debug!(
                            "Alien {} destroyed for {} points, score {}",
                            slot, points, self.score
                        );
                    }
                    self.bullets.swap_remove(bi);
                }
                None => bi += 1,
            }
        }
    }

    fn spawn_bullet(&mut self) -> bool {
        let player = &self.sprites[self.glyphs.player];
        let bullet = Bullet {
            x: self.player.x + (player.width() / 2) as i32,
            y: self.player.y + player.height() as i32,
            dir: self.config.bullet_speed as i32,
        };
        self.bullets.try_spawn(bullet)
    }

    fn player_max_x(&self) -> i32 {
        (self.config.canvas_width - self.sprites[self.glyphs.player].width()) as i32
    }

    /// Sprite an alien is currently drawn and hit-tested with: the current
    /// animation frame while alive, the death glyph afterwards.
    pub fn alien_sprite(&self, alien: &Alien) -> SpriteId {
        live_sprite(&self.animations, alien.kind()).unwrap_or(self.glyphs.alien_death)
    }

    /// Everything to draw this frame, in painting order: visible aliens by
    /// slot, the player, then the bullets.
    pub fn draw_calls(&self) -> Vec<DrawCall> {
        let mut calls = Vec::with_capacity(self.aliens.len() + 1 + self.bullets.len());
        for alien in self.aliens.iter().filter(|alien| alien.is_visible()) {
            let sprite = self.alien_sprite(alien);
            calls.push(DrawCall::new(sprite, alien.x, alien.y, SPRITE_COLOR));
        }
        calls.push(DrawCall::new(
            self.glyphs.player,
            self.player.x,
            self.player.y,
            SPRITE_COLOR,
        ));
        for bullet in &self.bullets {
            calls.push(DrawCall::new(
                self.glyphs.bullet,
                bullet.x,
                bullet.y,
                SPRITE_COLOR,
            ));
        }
        calls
    }

    /// Take one life from the player. Nothing in [`Game::step`] calls this;
    /// the host decides what costs a life.
    pub fn lose_life(&mut self) -> u32 {
        let lives = self.player.lose_life();
        if lives == 0 {
            info!("Game over, final score {}", self.score);
        }
        lives
    }

    pub fn is_over(&self) -> bool {
        self.player.lives() == 0
    }

    pub fn fleet_cleared(&self) -> bool {
        self.aliens.iter().all(|alien| !alien.is_alive())
    }

    pub fn alive_aliens(&self) -> usize {
        self.aliens.iter().filter(|alien| alien.is_alive()).count()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Steps run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sprites(&self) -> &SpriteTable {
        &self.sprites
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    pub fn animations(&self) -> &[SpriteAnimation] {
        &self.animations
    }

    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &BulletPool {
        &self.bullets
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

fn live_sprite(animations: &[SpriteAnimation; 3], kind: AlienKind) -> Option<SpriteId> {
    kind.class().map(|class| animations[class.animation].current_sprite())
}
