use std::sync::Arc;

use sylva_geom::{Vec2, Viewport};

use crate::flora::Flora;
use crate::height::HeightField;
use crate::seed::WorldSeed;
use crate::terrain::Terrain;
use crate::worldgen::WorldGenParams;

/// The generators of one world, sharing a single height field.
#[derive(Clone, Debug)]
pub struct WorldGen {
    pub seed: WorldSeed,
    pub params: Arc<WorldGenParams>,
    pub viewport: Viewport,
    pub heights: Arc<HeightField>,
    pub terrain: Terrain,
    pub flora: Flora,
}

impl WorldGen {
    pub fn new(seed: WorldSeed, params: WorldGenParams, viewport: Viewport) -> Self {
        let heights = Arc::new(HeightField::new(seed, &params, viewport.height));
        let terrain = Terrain::new(Arc::clone(&heights), &params);
        let flora = Flora::new(seed, &params, Arc::clone(&heights));
        log::debug!(
            "worldgen seed={} tile={} bounds={:?} max_step={:.1}",
            seed.0,
            params.tile_size,
            heights.bounds(),
            heights.max_step()
        );
        Self {
            seed,
            params: Arc::new(params),
            viewport,
            heights,
            terrain,
            flora,
        }
    }

    #[inline]
    pub fn spawn_point(&self, x: f32) -> Vec2 {
        self.heights.spawn_point(x)
    }
}
