//! Loading maps, sprite sheets and config files from disk.

use std::io::Write;

use image::{Rgba, RgbaImage};
use tempfile::{tempdir, NamedTempFile};

use tui_tilequest::core::{DrawCall, DrawLog, MapError, Player, SpriteError, SpriteSheet, TileMap};
use tui_tilequest::types::{Direction, KeySet, MoveKey, Rect, PLACEHOLDER_COLOR};
use tui_tilequest::{Cli, GameConfig};

const TILE: i32 = 16;

fn write_sheet(dir: &std::path::Path, size: u32) -> std::path::PathBuf {
    let frame = size / 4;
    let sheet = RgbaImage::from_fn(size, size, |x, y| {
        // Encode frame column/row into the pixel so sampling can be checked.
        Rgba([(x / frame) as u8 * 50, (y / frame) as u8 * 50, 200, 255])
    });
    let path = dir.join("hero.png");
    sheet.save(&path).unwrap();
    path
}

#[test]
fn test_map_loads_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "tiles": [[1, 1, 1], [1, 2, 1], [1, 3, 1]] }}"#).unwrap();

    let map = TileMap::load(file.path()).unwrap();

    assert_eq!((map.cols(), map.rows()), (3, 3));
    assert_eq!(map.get(1, 2), Some(3));
    assert!(map.is_walkable(1, 1));
    assert!(!map.is_walkable(0, 0));
}

#[test]
fn test_ragged_map_is_rejected() {
    let result = TileMap::from_json(r#"{ "tiles": [[2, 2, 2], [2, 2]] }"#);
    assert!(matches!(
        result,
        Err(MapError::Ragged {
            row: 1,
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn test_missing_map_file_reports_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere.json");
    let err = TileMap::load(&missing).unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
    assert!(err.to_string().contains("nowhere.json"));
}

#[test]
fn test_sprite_sheet_loads_png() {
    let dir = tempdir().unwrap();
    let path = write_sheet(dir.path(), 64);

    let sheet = SpriteSheet::load(&path).unwrap();

    assert_eq!((sheet.width(), sheet.height()), (64, 64));
    assert_eq!(sheet.frame_rect(2, 3), Rect::new(32, 48, 16, 16));
    assert_eq!(sheet.pixel(33, 49), Some([100, 150, 200, 255]));
}

#[test]
fn test_missing_sprite_falls_back_to_placeholder() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("Char.png");

    assert!(matches!(
        SpriteSheet::load(&missing),
        Err(SpriteError::Open { .. })
    ));

    let player = Player::new(16, 16, &missing);
    assert!(!player.has_sprite());

    let mut log = DrawLog::new();
    player.render(&mut log, TILE);
    assert_eq!(
        log.calls(),
        &[DrawCall::Fill {
            rect: Rect::new(16, 16, TILE, TILE),
            color: PLACEHOLDER_COLOR,
        }]
    );
}

#[test]
fn test_garbage_sprite_file_falls_back_to_placeholder() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"definitely not a png").unwrap();

    assert!(SpriteSheet::load(file.path()).is_err());
    assert!(!Player::new(0, 0, file.path()).has_sprite());
}

#[test]
fn test_loaded_sprite_draws_the_facing_row() {
    let dir = tempdir().unwrap();
    let path = write_sheet(dir.path(), 64);
    let map = TileMap::filled(10, 10, 2);
    let mut player = Player::new(32, 32, &path);
    assert!(player.has_sprite());

    player.tick(&KeySet::from_keys(&[MoveKey::Up]), &map, TILE);
    assert_eq!(player.direction(), Direction::Up);

    let mut log = DrawLog::new();
    player.render(&mut log, TILE);
    assert_eq!(
        log.calls(),
        &[DrawCall::Image {
            src: Rect::new(0, 48, 16, 16),
            dst: Rect::new(28, 26, 24, 24),
        }]
    );
}

#[test]
fn test_config_file_and_flags() {
    let dir = tempdir().unwrap();
    let map_path = dir.path().join("room.json");
    std::fs::write(&map_path, r#"{ "tiles": [[1, 1, 1, 1], [1, 2, 3, 1], [1, 1, 1, 1]] }"#).unwrap();

    let config_path = dir.path().join("game.json");
    std::fs::write(
        &config_path,
        format!(
            r#"{{ "tile_size": 20, "start_tile": [2, 1], "map_path": {:?} }}"#,
            map_path.to_str().unwrap()
        ),
    )
    .unwrap();

    let cli = Cli {
        config: Some(config_path),
        sprite: Some(dir.path().join("custom.png")),
        ..Cli::default()
    };
    let config = cli.resolve().unwrap();

    assert_eq!(config.tile_size, 20);
    assert_eq!(config.start_position(), (40, 20));
    assert_eq!(config.sprite_path, dir.path().join("custom.png"));
    let map = config.tile_map().unwrap();
    assert_eq!((map.cols(), map.rows()), (4, 3));
}

#[test]
fn test_config_rejects_two_map_sources() {
    let result = GameConfig::from_json(r#"{ "map_path": "a.json", "map": [[2]] }"#);
    assert!(result.is_err());
}
