use tui_tilequest::core::{MoveOutcome, Player, SpriteSheet, TileMap};
use tui_tilequest::term::{
    changed_runs, tile_color, FrameBuffer, GameView, Scene, Viewport, UPPER_HALF_BLOCK,
};
use tui_tilequest::types::{KeySet, MoveKey, Rgb, PLACEHOLDER_COLOR};

const TILE: i32 = 16;

fn scene<'a>(map: &'a TileMap, player: &'a Player, last_move: MoveOutcome) -> Scene<'a> {
    Scene {
        map,
        player,
        tile_size: TILE,
        last_move,
    }
}

fn all_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let map = TileMap::demo();
    let player = Player::with_sprite(16, 16, None);
    let scene = scene(&map, &player, MoveOutcome::Idle);

    // 320x192 world pixels at 4 px per column: 80x24 cells plus border.
    let mut view = GameView::default();
    let fb = view.render(&scene, Viewport::new(82, 26));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(81, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 25).unwrap().ch, '└');
    assert_eq!(fb.get(81, 25).unwrap().ch, '┘');
}

#[test]
fn term_view_paints_placeholder_player() {
    let map = TileMap::demo();
    let player = Player::with_sprite(16, 16, None);
    let scene = scene(&map, &player, MoveOutcome::Idle);

    let mut view = GameView::default();
    let fb = view.render(&scene, Viewport::new(82, 26));

    let canvas = view.canvas();
    assert_eq!(canvas.get(0, 0), Some(tile_color(1)));
    assert_eq!(canvas.get(16, 16), Some(PLACEHOLDER_COLOR));
    assert_eq!(canvas.get(31, 31), Some(PLACEHOLDER_COLOR));
    assert_eq!(canvas.get(32, 16), Some(tile_color(2)));

    // Cell (4, 2) inside the border samples pixels (18, 18) and (18, 22).
    let cell = fb.get(1 + 4, 1 + 2).unwrap();
    assert_eq!(cell.ch, UPPER_HALF_BLOCK);
    assert_eq!(cell.style.fg, PLACEHOLDER_COLOR);
    assert_eq!(cell.style.bg, PLACEHOLDER_COLOR);
}

#[test]
fn term_view_draws_sprite_frame() {
    // Solid red sheet, 4x4 frames of 2x2 pixels.
    let sheet = SpriteSheet::from_rgba(8, 8, [255, 0, 0, 255].repeat(64)).unwrap();
    let map = TileMap::filled(4, 4, 2);
    let player = Player::with_sprite(16, 16, Some(sheet));
    let scene = scene(&map, &player, MoveOutcome::Idle);

    let mut view = GameView::new(1);
    view.render(&scene, Viewport::new(80, 40));

    let red = Rgb::new(255, 0, 0);
    let canvas = view.canvas();
    // 24px sprite centred on the tile: spans 12..36.
    assert_eq!(canvas.get(12, 12), Some(red));
    assert_eq!(canvas.get(35, 35), Some(red));
    assert_eq!(canvas.get(11, 11), Some(tile_color(2)));
    assert_eq!(canvas.get(36, 36), Some(tile_color(2)));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let map = TileMap::demo();
    let player = Player::with_sprite(16, 16, None);
    let scene = scene(&map, &player, MoveOutcome::Blocked);

    let mut view = GameView::default();
    let fb = view.render(&scene, Viewport::new(120, 26));
    let text = all_text(&fb);

    assert!(text.contains("POS"));
    assert!(text.contains("FACING"));
    assert!(text.contains("down"));
    assert!(text.contains("blocked"));
    assert!(text.contains("placeholder"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let map = TileMap::demo();
    let player = Player::with_sprite(16, 16, None);
    let scene = scene(&map, &player, MoveOutcome::Idle);

    let mut view = GameView::default();
    let fb = view.render(&scene, Viewport::new(82, 26));

    assert!(!all_text(&fb).contains("POS"));
}

#[test]
fn term_view_movement_changes_only_the_player_cells() {
    let map = TileMap::demo();
    let before = Player::with_sprite(16, 16, None);
    let mut after = before.clone();
    let right = KeySet::from_keys(&[MoveKey::Right]);
    for _ in 0..4 {
        after.tick(&right, &map, TILE);
    }
    assert_eq!(after.position(), (24, 16));

    let mut view = GameView::default();
    let prev = view.render(&scene(&map, &before, MoveOutcome::Idle), Viewport::new(82, 26));
    let next = view.render(&scene(&map, &after, MoveOutcome::Idle), Viewport::new(82, 26));

    // Columns 4-5 uncover grass and columns 8-9 gain the player, on two rows.
    let runs = changed_runs(&prev, &next);
    assert_eq!(runs, vec![(5, 3, 2), (9, 3, 2), (5, 4, 2), (9, 4, 2)]);
}
