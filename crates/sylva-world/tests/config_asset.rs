use std::path::PathBuf;

use sylva_world::{StepMode, WorldGenParams, load_params_from_path};

fn asset() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join("../../assets/worldgen/worldgen.toml")
}

#[test]
fn shipped_config_loads_and_validates() {
    let params = load_params_from_path(&asset()).unwrap();
    assert_eq!(params.tile_size, 30);
    assert_eq!(params.terrain_depth, 20);
    assert_eq!((params.trunk_min, params.trunk_max), (4, 7));
    assert_eq!(params.step_mode, StepMode::Tile);
}

#[test]
fn shipped_config_matches_builtin_defaults_where_exact() {
    let shipped = load_params_from_path(&asset()).unwrap();
    let defaults = WorldGenParams::default();
    assert_eq!(shipped.tree_probability, defaults.tree_probability);
    assert_eq!(shipped.leaf_probability, defaults.leaf_probability);
    assert_eq!(shipped.fruit_probability, defaults.fruit_probability);
    assert_eq!(shipped.avatar_clearance, defaults.avatar_clearance);
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_params_from_path(&asset().with_file_name("absent.toml")).is_err());
}
