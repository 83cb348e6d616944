//! Deterministic 2D side-scroller world generation: height field, tile grid,
//! ground columns and trees, all pure functions of a seed and a column.
#![forbid(unsafe_code)]

pub mod entity;
pub mod flora;
pub mod grid;
pub mod height;
pub mod seed;
pub mod terrain;
pub mod world;
pub mod worldgen;

pub use entity::{EntityKind, Layer, TreeSlot, WorldEntity};
pub use flora::{Flora, TreeInfo};
pub use grid::{Columns, TileGrid};
pub use height::HeightField;
pub use seed::WorldSeed;
pub use terrain::{GroundColumn, Terrain};
pub use world::WorldGen;
pub use worldgen::{
    ConfigError, StepMode, WorldGenConfig, WorldGenParams, load_params_from_path, parse_params,
};
