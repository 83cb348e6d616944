use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default)]
    pub world: WorldSection,
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub terrain: TerrainSection,
    #[serde(default)]
    pub trees: Trees,
    #[serde(default)]
    pub window: Window,
    #[serde(default)]
    pub avatar: Avatar,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorldSection {
    #[serde(default = "default_tile_size")]
    pub tile_size: i32,
}
fn default_tile_size() -> i32 {
    30
}
impl Default for WorldSection {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    /// Noise frequency per tile column.
    #[serde(default = "default_height_freq")]
    pub frequency: f32,
    #[serde(default = "default_octaves")]
    pub octaves: i32,
    #[serde(default = "default_gain")]
    pub gain: f32,
    #[serde(default = "default_lacunarity")]
    pub lacunarity: f32,
    #[serde(default = "default_baseline_ratio")]
    pub baseline_ratio: f32,
    #[serde(default = "default_amplitude_tiles")]
    pub amplitude_tiles: f32,
    #[serde(default = "default_min_y_ratio")]
    pub min_y_ratio: f32,
    #[serde(default = "default_max_y_ratio")]
    pub max_y_ratio: f32,
}
fn default_height_freq() -> f32 {
    0.08
}
fn default_octaves() -> i32 {
    2
}
fn default_gain() -> f32 {
    0.5
}
fn default_lacunarity() -> f32 {
    2.0
}
fn default_baseline_ratio() -> f32 {
    2.0 / 3.0
}
fn default_amplitude_tiles() -> f32 {
    7.0
}
fn default_min_y_ratio() -> f32 {
    0.25
}
fn default_max_y_ratio() -> f32 {
    0.90
}
impl Default for Height {
    fn default() -> Self {
        Self {
            frequency: default_height_freq(),
            octaves: default_octaves(),
            gain: default_gain(),
            lacunarity: default_lacunarity(),
            baseline_ratio: default_baseline_ratio(),
            amplitude_tiles: default_amplitude_tiles(),
            min_y_ratio: default_min_y_ratio(),
            max_y_ratio: default_max_y_ratio(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TerrainSection {
    /// Blocks stacked under each column's surface.
    #[serde(default = "default_depth")]
    pub depth: i32,
}
fn default_depth() -> i32 {
    20
}
impl Default for TerrainSection {
    fn default() -> Self {
        Self {
            depth: default_depth(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    #[serde(default = "default_tree_prob")]
    pub probability: f32,
    #[serde(default = "default_trunk_min")]
    pub trunk_min: i32,
    #[serde(default = "default_trunk_max")]
    pub trunk_max: i32,
    #[serde(default = "default_leaf_radius")]
    pub leaf_radius: i32,
    #[serde(default = "default_leaf_prob")]
    pub leaf_probability: f32,
    #[serde(default = "default_fruit_prob")]
    pub fruit_probability: f32,
    #[serde(default = "default_fruit_scale")]
    pub fruit_scale: f32,
}
fn default_tree_prob() -> f32 {
    0.1
}
fn default_trunk_min() -> i32 {
    4
}
fn default_trunk_max() -> i32 {
    7
}
fn default_leaf_radius() -> i32 {
    2
}
fn default_leaf_prob() -> f32 {
    0.8
}
fn default_fruit_prob() -> f32 {
    0.1
}
fn default_fruit_scale() -> f32 {
    0.5
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            probability: default_tree_prob(),
            trunk_min: default_trunk_min(),
            trunk_max: default_trunk_max(),
            leaf_radius: default_leaf_radius(),
            leaf_probability: default_leaf_prob(),
            fruit_probability: default_fruit_prob(),
            fruit_scale: default_fruit_scale(),
        }
    }
}

/// How the world window edges move when the camera scrolls.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// The leading edge advances one tile per moving tick, whatever the displacement.
    #[default]
    Tile,
    /// Both edges follow the visible extent, snapped to the tile grid.
    Track,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Window {
    #[serde(default)]
    pub step: StepMode,
    /// Extra tiles kept generated past each visible edge (track mode only).
    #[serde(default = "default_margin_tiles")]
    pub margin_tiles: i32,
}
fn default_margin_tiles() -> i32 {
    1
}
impl Default for Window {
    fn default() -> Self {
        Self {
            step: StepMode::default(),
            margin_tiles: default_margin_tiles(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Avatar {
    /// Pixels between the ground and the spawn point.
    #[serde(default = "default_clearance")]
    pub clearance: f32,
}
fn default_clearance() -> f32 {
    100.0
}
impl Default for Avatar {
    fn default() -> Self {
        Self {
            clearance: default_clearance(),
        }
    }
}

// Flattened params used by the generators (snapshot of config)
#[derive(Clone, Debug, PartialEq)]
pub struct WorldGenParams {
    pub tile_size: i32,
    pub height_frequency: f32,
    pub height_octaves: i32,
    pub height_gain: f32,
    pub height_lacunarity: f32,
    pub baseline_ratio: f32,
    pub amplitude_tiles: f32,
    pub min_y_ratio: f32,
    pub max_y_ratio: f32,
    pub terrain_depth: i32,
    pub tree_probability: f32,
    pub trunk_min: i32,
    pub trunk_max: i32,
    pub leaf_radius: i32,
    pub leaf_probability: f32,
    pub fruit_probability: f32,
    pub fruit_scale: f32,
    pub step_mode: StepMode,
    pub margin_tiles: i32,
    pub avatar_clearance: f32,
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }
}

impl WorldGenParams {
    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        Self {
            tile_size: cfg.world.tile_size,
            height_frequency: cfg.height.frequency,
            height_octaves: cfg.height.octaves,
            height_gain: cfg.height.gain,
            height_lacunarity: cfg.height.lacunarity,
            baseline_ratio: cfg.height.baseline_ratio,
            amplitude_tiles: cfg.height.amplitude_tiles,
            min_y_ratio: cfg.height.min_y_ratio,
            max_y_ratio: cfg.height.max_y_ratio,
            terrain_depth: cfg.terrain.depth,
            tree_probability: cfg.trees.probability,
            trunk_min: cfg.trees.trunk_min,
            trunk_max: cfg.trees.trunk_max,
            leaf_radius: cfg.trees.leaf_radius,
            leaf_probability: cfg.trees.leaf_probability,
            fruit_probability: cfg.trees.fruit_probability,
            fruit_scale: cfg.trees.fruit_scale,
            step_mode: cfg.window.step,
            margin_tiles: cfg.window.margin_tiles,
            avatar_clearance: cfg.avatar.clearance,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size <= 0 {
            return Err(ConfigError::NonPositive("world.tile_size"));
        }
        if self.terrain_depth <= 0 {
            return Err(ConfigError::NonPositive("terrain.depth"));
        }
        if self.height_octaves <= 0 {
            return Err(ConfigError::NonPositive("height.octaves"));
        }
        if !(self.height_frequency.is_finite() && self.height_frequency > 0.0) {
            return Err(ConfigError::NonPositive("height.frequency"));
        }
        if self.trunk_min <= 0 {
            return Err(ConfigError::NonPositive("trees.trunk_min"));
        }
        if self.trunk_max < self.trunk_min {
            return Err(ConfigError::InvertedRange {
                field: "trees.trunk_min..trees.trunk_max",
                min: self.trunk_min as f32,
                max: self.trunk_max as f32,
            });
        }
        if self.leaf_radius < 0 {
            return Err(ConfigError::Negative("trees.leaf_radius"));
        }
        if self.margin_tiles < 0 {
            return Err(ConfigError::Negative("window.margin_tiles"));
        }
        for (field, p) in [
            ("trees.probability", self.tree_probability),
            ("trees.leaf_probability", self.leaf_probability),
            ("trees.fruit_probability", self.fruit_probability),
            ("trees.fruit_scale", self.fruit_scale),
            ("height.min_y_ratio", self.min_y_ratio),
            ("height.max_y_ratio", self.max_y_ratio),
            ("height.baseline_ratio", self.baseline_ratio),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::OutOfUnitRange { field, value: p });
            }
        }
        if self.max_y_ratio < self.min_y_ratio {
            return Err(ConfigError::InvertedRange {
                field: "height.min_y_ratio..height.max_y_ratio",
                min: self.min_y_ratio,
                max: self.max_y_ratio,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NonPositive(&'static str),
    Negative(&'static str),
    OutOfUnitRange { field: &'static str, value: f32 },
    InvertedRange { field: &'static str, min: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(field) => write!(f, "{field} must be positive"),
            ConfigError::Negative(field) => write!(f, "{field} must not be negative"),
            ConfigError::OutOfUnitRange { field, value } => {
                write!(f, "{field} = {value} is outside [0, 1]")
            }
            ConfigError::InvertedRange { field, min, max } => {
                write!(f, "{field}: min {min} exceeds max {max}")
            }
        }
    }
}

impl Error for ConfigError {}

pub fn parse_params(s: &str) -> Result<WorldGenParams, Box<dyn Error>> {
    let cfg: WorldGenConfig = toml::from_str(s)?;
    let params = WorldGenParams::from_config(&cfg);
    params.validate()?;
    Ok(params)
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    parse_params(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let params = parse_params("").unwrap();
        assert_eq!(params, WorldGenParams::default());
        assert_eq!(params.tile_size, 30);
        assert_eq!(params.terrain_depth, 20);
        assert_eq!(params.step_mode, StepMode::Tile);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let params = parse_params(
            r#"
            [world]
            tile_size = 50

            [trees]
            probability = 0.25

            [window]
            step = "track"
            "#,
        )
        .unwrap();
        assert_eq!(params.tile_size, 50);
        assert_eq!(params.tree_probability, 0.25);
        assert_eq!(params.trunk_min, 4);
        assert_eq!(params.step_mode, StepMode::Track);
        assert_eq!(params.margin_tiles, 1);
    }

    #[test]
    fn rejects_non_positive_tile() {
        let err = parse_params("[world]\ntile_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("world.tile_size"));
    }

    #[test]
    fn rejects_inverted_trunk_range() {
        let mut params = WorldGenParams::default();
        params.trunk_min = 8;
        params.trunk_max = 3;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn rejects_probability_outside_unit_range() {
        let mut params = WorldGenParams::default();
        params.fruit_probability = 1.5;
        assert_eq!(
            params.validate(),
            Err(ConfigError::OutOfUnitRange {
                field: "trees.fruit_probability",
                value: 1.5
            })
        );
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_params("[world\ntile_size = 3").is_err());
    }
}
