//! Per-tick world streaming: the window controller and the entity registry it feeds.
#![forbid(unsafe_code)]

pub mod scene;
pub mod window;

pub use scene::{EntityId, EntitySink, LayerCounts, Scene, SceneEntry, SceneStats};
pub use window::{Side, Strip, TickReport, WindowController, WorldWindow};
