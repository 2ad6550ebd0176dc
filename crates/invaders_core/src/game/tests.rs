use super::{Game, StepReport};
use crate::config::GameConfig;
use crate::entity::{Alien, AlienKind, Bullet};
use crate::input::{FrameInput, InputState};
use invaders_common::key::Key;

const FIRE: FrameInput = FrameInput {
    direction: 0,
    fire: true,
};

/// A default game with the fleet replaced by `aliens` and no bullets.
fn game_with(aliens: Vec<Alien>) -> Game {
    let mut game = Game::default();
    game.aliens = aliens;
    game
}

fn bullet(x: i32, y: i32, dir: i32) -> Bullet {
    Bullet { x, y, dir }
}

#[test]
fn fleet_layout() {
    let game = Game::default();
    let aliens = game.aliens();
    assert_eq!(aliens.len(), 55);

    // Bottom-left slot: TypeC, 12 px wide, nudged (13 - 12) / 2 = 0.
    assert_eq!(aliens[0].kind(), AlienKind::TypeC);
    assert_eq!((aliens[0].x, aliens[0].y), (20, 128));
    // Last column of the bottom row.
    assert_eq!((aliens[10].x, aliens[10].y), (180, 128));
    // Middle rows are TypeB, 11 px wide, nudged by 1.
    assert_eq!(aliens[22].kind(), AlienKind::TypeB);
    assert_eq!((aliens[22].x, aliens[22].y), (21, 162));
    // Top row is TypeA, 8 px wide, nudged by 2.
    assert_eq!(aliens[44].kind(), AlienKind::TypeA);
    assert_eq!((aliens[44].x, aliens[44].y), (22, 196));

    assert!(aliens.iter().all(|a| a.decay() == 10));
}

#[test]
fn player_starts_centered_with_three_lives() {
    let game = Game::default();
    assert_eq!((game.player().x, game.player().y), (107, 32));
    assert_eq!(game.player().lives(), 3);
    assert!(game.bullets().is_empty());
    assert_eq!(game.score(), 0);
}

#[test]
fn clean_kill() {
    let mut game = game_with(vec![Alien::new(20, 128, AlienKind::TypeA, 10)]);
    game.bullets.try_spawn(bullet(20, 130, 2));

    let report = game.step(FrameInput::IDLE);

    assert_eq!(report.killed, vec![0]);
    assert_eq!(report.points, 30);
    assert_eq!(game.score(), 30);
    assert_eq!(game.aliens()[0].kind(), AlienKind::Dead);
    // (13 - 8) / 2 = 2 px shift to center the death glyph.
    assert_eq!(game.aliens()[0].x, 18);
    assert!(game.bullets().is_empty());
}

#[test]
fn kill_scores_by_kind() {
    for (kind, points) in [
        (AlienKind::TypeA, 30),
        (AlienKind::TypeB, 20),
        (AlienKind::TypeC, 10),
    ] {
        let mut game = game_with(vec![Alien::new(20, 128, kind, 10)]);
        game.bullets.try_spawn(bullet(22, 130, 2));
        game.step(FrameInput::IDLE);
        assert_eq!(game.score(), points, "{kind:?}");
    }
}

#[test]
fn one_kill_per_bullet_per_frame() {
    let mut game = game_with(vec![
        Alien::new(20, 128, AlienKind::TypeA, 10),
        Alien::new(20, 128, AlienKind::TypeA, 10),
    ]);
    game.bullets.try_spawn(bullet(20, 130, 2));

    let report = game.step(FrameInput::IDLE);

    assert_eq!(report.killed, vec![0]);
    assert_eq!(game.score(), 30);
    assert_eq!(game.aliens()[1].kind(), AlienKind::TypeA);
    assert!(game.bullets().is_empty());
}

#[test]
fn bullet_moved_into_vacated_slot_is_still_processed() {
    let mut game = game_with(vec![
        Alien::new(20, 128, AlienKind::TypeA, 10),
        Alien::new(60, 128, AlienKind::TypeB, 10),
    ]);
    game.bullets.try_spawn(bullet(20, 130, 2));
    game.bullets.try_spawn(bullet(62, 130, 2));

    let report = game.step(FrameInput::IDLE);

    assert_eq!(report.killed.len(), 2);
    assert_eq!(game.score(), 50);
    assert!(game.bullets().is_empty());
}

#[test]
fn expired_bullet_does_not_let_the_last_one_skip() {
    let mut game = game_with(vec![Alien::new(60, 128, AlienKind::TypeC, 10)]);
    game.bullets.try_spawn(bullet(0, 255, 2));
    game.bullets.try_spawn(bullet(62, 130, 2));

    let report = game.step(FrameInput::IDLE);

    assert_eq!(report.expired, 1);
    assert_eq!(report.killed, vec![0]);
    assert!(game.bullets().is_empty());
}

#[test]
fn bullet_below_floor_expires_without_scoring() {
    // Alien overlapping the bullet's path near the bottom edge.
    let mut game = game_with(vec![Alien::new(0, 0, AlienKind::TypeA, 10)]);
    game.bullets.try_spawn(bullet(2, 4, -2));

    let report = game.step(FrameInput::IDLE);

    assert_eq!(report.expired, 1);
    assert!(report.killed.is_empty());
    assert_eq!(game.score(), 0);
    assert!(game.aliens()[0].is_alive());
    assert!(game.bullets().is_empty());
}

#[test]
fn bullet_leaving_the_top_expires() {
    let mut game = game_with(Vec::new());
    game.bullets.try_spawn(bullet(50, 253, 2));

    let report = game.step(FrameInput::IDLE);
    assert_eq!(report.expired, 0);
    assert_eq!(game.bullets().get(0).map(|b| b.y), Some(255));

    let report = game.step(FrameInput::IDLE);
    assert_eq!(report.expired, 1);
    assert!(game.bullets().is_empty());
}

#[test]
fn dead_aliens_are_not_hit_again() {
    let mut game = game_with(vec![Alien::new(20, 128, AlienKind::TypeA, 10)]);
    game.aliens[0].kill(13, 8);
    game.bullets.try_spawn(bullet(20, 130, 2));

    let report = game.step(FrameInput::IDLE);

    assert!(report.killed.is_empty());
    assert_eq!(game.score(), 0);
    assert_eq!(game.bullets().len(), 1);
}

#[test]
fn edge_clamp_left() {
    let mut game = Game::default();
    game.player.x = 0;
    game.step(FrameInput::new(-1, false));
    assert_eq!(game.player().x, 0);
}

#[test]
fn edge_clamp_right_snaps_to_edge() {
    let mut game = Game::default();
    let max_x = 224 - 11;
    game.player.x = max_x - 1;
    game.step(FrameInput::new(1, false));
    assert_eq!(game.player().x, max_x);
    game.step(FrameInput::new(1, false));
    assert_eq!(game.player().x, max_x);
}

#[test]
fn player_stays_in_bounds() {
    let mut game = Game::default();
    let max_x = 224 - 11;
    for frame in 0..400 {
        let direction = if (frame / 150) % 2 == 0 { 1 } else { -1 };
        game.step(FrameInput::new(direction, false));
        assert!((0..=max_x).contains(&game.player().x));
    }
}

#[test]
fn fire_spawns_above_player_center() {
    let mut game = Game::default();
    let report = game.step(FIRE);
    assert!(report.fired);
    let spawned = *game.bullets().get(0).expect("bullet spawned");
    assert_eq!(spawned, bullet(107 + 5, 32 + 7, 2));
}

#[test]
fn full_magazine_drops_fire_and_clears_latch() {
    let config = GameConfig::builder().bullet_capacity(4).build();
    let mut game = Game::new(&config);
    for i in 0..4 {
        game.bullets.try_spawn(bullet(i, 10, 2));
    }

    let mut input = InputState::new();
    input.handle_key(Key::Space, true);
    input.handle_key(Key::Space, false);
    let report = game.step(input.take_frame());

    assert!(report.fire_dropped);
    assert!(!report.fired);
    assert_eq!(game.bullets().len(), 4);
    assert!(!input.fire_latched());

    // The dropped press is not replayed on the next frame.
    let report = game.step(input.take_frame());
    assert!(!report.fire_dropped && !report.fired);
    assert_eq!(game.bullets().len(), 4);
}

#[test]
fn bullet_count_never_exceeds_capacity() {
    let config = GameConfig::builder().bullet_capacity(3).build();
    let mut game = Game::new(&config);
    for _ in 0..50 {
        game.step(FIRE);
        assert!(game.bullets().len() <= 3);
    }
}

#[test]
fn shot_from_below_hits_lowest_alien_in_column() {
    let mut game = Game::default();
    // Bullet x = player.x + 5 = 25, inside column 0 (x 20..32).
    game.player.x = 20;
    game.step(FIRE);

    let mut total = StepReport::default();
    for _ in 0..100 {
        let report = game.step(FrameInput::IDLE);
        total.killed.extend(report.killed);
        if game.bullets().is_empty() {
            break;
        }
    }

    assert_eq!(total.killed, vec![0]);
    assert_eq!(game.score(), 10);
    assert!(game.aliens()[11].is_alive());
}

#[test]
fn death_is_monotonic_and_decay_saturates() {
    let mut game = game_with(vec![Alien::new(20, 128, AlienKind::TypeB, 10)]);
    game.bullets.try_spawn(bullet(22, 130, 2));
    game.step(FrameInput::IDLE);
    assert!(!game.aliens()[0].is_alive());

    let mut last_decay = game.aliens()[0].decay();
    for _ in 0..30 {
        game.step(FrameInput::IDLE);
        let alien = &game.aliens()[0];
        assert_eq!(alien.kind(), AlienKind::Dead);
        assert!(alien.decay() <= last_decay);
        last_decay = alien.decay();
    }
    assert_eq!(last_decay, 0);
    assert!(!game.aliens()[0].is_visible());
}

#[test]
fn corpse_fades_after_decay_frames() {
    let mut game = game_with(vec![Alien::new(20, 128, AlienKind::TypeA, 10)]);
    game.bullets.try_spawn(bullet(20, 130, 2));
    game.step(FrameInput::IDLE);
    assert_eq!(game.aliens()[0].decay(), 10);

    let death = game.glyphs().alien_death;
    for _ in 0..9 {
        game.step(FrameInput::IDLE);
        let calls = game.draw_calls();
        assert_eq!(calls[0].sprite, death);
    }
    game.step(FrameInput::IDLE);
    // Only the player remains.
    assert_eq!(game.draw_calls().len(), 1);
}

#[test]
fn zero_decay_frames_still_draws_the_fleet() {
    let config = GameConfig::builder().decay_frames(0).build();
    assert!(config.validate().is_ok());
    let mut game = Game::new(&config);
    assert_eq!(game.draw_calls().len(), 55 + 1);

    // A kill removes the alien from the draw list at once.
    game.bullets.try_spawn(bullet(20, 126, 2));
    let report = game.step(FrameInput::IDLE);
    assert_eq!(report.killed, vec![0]);
    let calls = game.draw_calls();
    assert_eq!(calls.len(), 54 + 1);
    assert_eq!(calls[0].x, game.aliens()[1].x);
}

#[test]
fn animation_clocks_tick_without_live_aliens() {
    let mut game = game_with(Vec::new());
    for _ in 0..15 {
        game.step(FrameInput::IDLE);
    }
    for animation in game.animations() {
        assert_eq!(animation.time(), 15);
        assert_eq!(animation.current_frame(), 1);
    }
}

#[test]
fn draw_calls_follow_entity_order() {
    let mut game = Game::default();
    game.step(FIRE);
    let calls = game.draw_calls();
    assert_eq!(calls.len(), 55 + 1 + 1);
    assert_eq!(calls[55].sprite, game.glyphs().player);
    assert_eq!(calls[56].sprite, game.glyphs().bullet);
    assert_eq!((calls[55].x, calls[55].y), (107, 32));
}

#[test]
fn live_alien_draws_current_animation_frame() {
    let mut game = Game::default();
    let frames = game.glyphs().alien_frames[2];
    assert_eq!(game.draw_calls()[0].sprite, frames[0]);
    for _ in 0..10 {
        game.step(FrameInput::IDLE);
    }
    assert_eq!(game.draw_calls()[0].sprite, frames[1]);
}

#[test]
fn out_of_lives_freezes_the_game() {
    let mut game = Game::default();
    assert_eq!(game.lose_life(), 2);
    assert_eq!(game.lose_life(), 1);
    assert!(!game.is_over());
    assert_eq!(game.lose_life(), 0);
    assert!(game.is_over());

    let x = game.player().x;
    let report = game.step(FrameInput::new(1, true));
    assert_eq!(report, StepReport::default());
    assert_eq!(game.frame(), 0);
    assert_eq!(game.player().x, x);
    assert!(game.bullets().is_empty());
    assert!(game.animations().iter().all(|a| a.time() == 0));
}

#[test]
fn clearing_the_fleet() {
    let mut game = game_with(vec![
        Alien::new(20, 128, AlienKind::TypeA, 10),
        Alien::new(60, 128, AlienKind::TypeC, 10),
    ]);
    assert_eq!(game.alive_aliens(), 2);
    game.bullets.try_spawn(bullet(20, 130, 2));
    game.bullets.try_spawn(bullet(62, 130, 2));
    game.step(FrameInput::IDLE);
    assert_eq!(game.alive_aliens(), 0);
    assert!(game.fleet_cleared());
}
