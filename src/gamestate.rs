use sylva_runtime::{Scene, WindowController};
use sylva_world::WorldGen;

#[derive(Clone, Copy, Debug, Default)]
pub struct StreamTotals {
    pub strips: u64,
    pub columns: u64,
    pub trees: u64,
    pub created: u64,
    pub removed: u64,
}

pub struct GameState {
    pub tick: u64,
    pub world: WorldGen,
    pub scene: Scene,
    pub window: WindowController,
    pub totals: StreamTotals,
}

impl GameState {
    pub fn new(world: WorldGen, camera_x: f32) -> Self {
        let window = WindowController::new(&world, camera_x);
        Self {
            tick: 0,
            world,
            scene: Scene::new(),
            window,
            totals: StreamTotals::default(),
        }
    }
}
