//! Player movement, collision and animation behaviour.

use tui_tilequest::core::{MoveOutcome, Player, TileMap};
use tui_tilequest::types::{Direction, KeySet, MoveKey};

const TILE: i32 = 16;

fn field() -> TileMap {
    TileMap::filled(40, 40, 2)
}

fn hold(keys: &[MoveKey]) -> KeySet {
    KeySet::from_keys(keys)
}

#[test]
fn test_up_beats_down_when_both_held() {
    let map = field();
    let mut player = Player::with_sprite(64, 64, None);

    let outcome = player.tick(&hold(&[MoveKey::Down, MoveKey::Up]), &map, TILE);

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(player.direction(), Direction::Up);
    assert_eq!(player.position(), (64, 62));
}

#[test]
fn test_full_priority_order() {
    let map = field();
    let cases = [
        (vec![MoveKey::Right, MoveKey::Left], Direction::Left),
        (vec![MoveKey::Right, MoveKey::Down], Direction::Down),
        (vec![MoveKey::Left, MoveKey::Down, MoveKey::Up], Direction::Up),
        (vec![MoveKey::Right], Direction::Right),
    ];

    for (keys, expected) in cases {
        let mut player = Player::with_sprite(64, 64, None);
        player.tick(&hold(&keys), &map, TILE);
        assert_eq!(player.direction(), expected, "keys {:?}", keys);
    }
}

#[test]
fn test_mixed_walkable_corners_are_accepted() {
    // Target (24, 24) puts the hitbox corners on tiles (1,1), (2,1), (1,2), (2,2).
    let mut map = TileMap::filled(4, 4, 2);
    map.set(2, 1, 3);
    map.set(1, 2, 3);

    assert!(!Player::check_collision(24, 24, &map, TILE));
}

#[test]
fn test_any_blocking_corner_rejects_the_target() {
    let corner_tiles = [(1, 1), (2, 1), (1, 2), (2, 2)];

    for blocking in [0u8, 1, 7] {
        for &(col, row) in &corner_tiles {
            let mut map = TileMap::filled(4, 4, 2);
            map.set(col, row, blocking);
            assert!(
                Player::check_collision(24, 24, &map, TILE),
                "tile {} at ({}, {}) should block",
                blocking,
                col,
                row
            );
        }
    }
}

#[test]
fn test_blocked_move_keeps_position() {
    let mut map = field();
    map.set(2, 1, 0);
    // At x=20 the far hitbox edge is x=31. One more step reaches column 2.
    let mut player = Player::with_sprite(20, 16, None);

    let outcome = player.tick(&hold(&[MoveKey::Right]), &map, TILE);

    assert_eq!(outcome, MoveOutcome::Blocked);
    assert_eq!(player.position(), (20, 16));
    assert_eq!(player.direction(), Direction::Right);
    assert!(player.is_moving());
}

#[test]
fn test_out_of_bounds_is_blocking() {
    let map = TileMap::filled(3, 3, 2);
    // The top-left corner would land at pixel (-17, -17), tile (-1, -1).
    assert!(Player::check_collision(-21, -21, &map, TILE));
}

#[test]
fn test_small_negative_pixels_truncate_to_tile_zero() {
    assert_eq!(TileMap::tile_coord(-1, -15, TILE), (0, 0));
    assert_eq!(TileMap::tile_coord(-16, 15, TILE), (-1, 0));
}

#[test]
fn test_walk_cycle_advances_every_eleven_ticks() {
    let map = field();
    let mut player = Player::with_sprite(16, 16, None);
    let right = hold(&[MoveKey::Right]);

    let mut frames = Vec::new();
    for _ in 0..4 {
        for _ in 0..10 {
            player.tick(&right, &map, TILE);
        }
        frames.push(player.frame());
        player.tick(&right, &map, TILE);
        frames.push(player.frame());
    }

    assert_eq!(frames, vec![0, 1, 1, 2, 2, 3, 3, 0]);
    assert_eq!(player.position(), (16 + 44 * 2, 16));
}

#[test]
fn test_idle_shows_standing_frame() {
    let map = field();
    let mut player = Player::with_sprite(16, 16, None);
    let right = hold(&[MoveKey::Right]);

    for _ in 0..11 {
        player.tick(&right, &map, TILE);
    }
    assert_eq!(player.frame(), 1);

    let outcome = player.tick(&KeySet::empty(), &map, TILE);
    assert_eq!(outcome, MoveOutcome::Idle);
    assert_eq!(player.frame(), 0);
    assert!(!player.is_moving());
    // Facing is kept while standing.
    assert_eq!(player.direction(), Direction::Right);
}

#[test]
fn test_animation_runs_while_blocked() {
    let mut map = field();
    map.set(2, 1, 0);
    let mut player = Player::with_sprite(20, 16, None);
    let right = hold(&[MoveKey::Right]);

    for _ in 0..11 {
        assert_eq!(player.tick(&right, &map, TILE), MoveOutcome::Blocked);
    }

    assert_eq!(player.position(), (20, 16));
    assert_eq!(player.frame(), 1);
}

#[test]
fn test_demo_map_walk_around_the_pond() {
    let map = TileMap::demo();
    let mut player = Player::with_sprite(16, 16, None);

    // Walk right along the top corridor until the outer wall stops us.
    let right = hold(&[MoveKey::Right]);
    let mut last = MoveOutcome::Moved;
    for _ in 0..200 {
        last = player.tick(&right, &map, TILE);
        if last == MoveOutcome::Blocked {
            break;
        }
    }

    assert_eq!(last, MoveOutcome::Blocked);
    let (x, y) = player.position();
    assert_eq!(y, 16);
    // Far hitbox edge must stay inside column 18.
    assert!(x + TILE - 1 - 4 < 19 * TILE);
    assert!(!Player::check_collision(x, y, &map, TILE));
}
