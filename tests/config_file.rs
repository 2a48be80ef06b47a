// tests/config_file.rs

use maze_raycaster::{Config, Error, Game};

const SAMPLE: &str = include_str!("../raycaster.toml");

#[test]
fn sample_config_builds_a_game() {
    let config = Config::from_toml_str(SAMPLE).expect("sample config should parse");
    assert_eq!(config.maps.len(), 2);
    let mut game = Game::new(&config).unwrap();
    assert_eq!(game.world.map_count(), 2);
    game.world.next_map();
    assert_eq!(game.world.maze().name(), "Mapa 2");
    assert_eq!(game.world.enemies.len(), 2);
}

#[test]
fn missing_config_file_is_reported() {
    let err = Config::load(std::path::Path::new("does/not/exist.toml")).unwrap_err();
    assert!(matches!(err, Error::ConfigIo { .. }));
}

#[test]
fn ragged_map_fails_at_load() {
    let config = Config::from_toml_str(
        r#"
        [[maps]]
        name = "broken"
        layout = [[1,1,1],[1,0],[1,1,1]]
        "#,
    )
    .unwrap();
    assert!(matches!(
        Game::new(&config),
        Err(Error::NonRectangularGrid { row: 1, expected: 3, found: 2, .. })
    ));
}
