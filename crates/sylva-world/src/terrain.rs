use std::sync::Arc;

use sylva_geom::{Rect, Vec2};

use crate::entity::{EntityKind, WorldEntity};
use crate::grid::TileGrid;
use crate::height::HeightField;
use crate::worldgen::WorldGenParams;

/// One quantized column of ground: its surface height and the blocks stacked below it.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundColumn {
    pub x: i32,
    pub height: f32,
    pub blocks: Vec<WorldEntity>,
}

/// Produces ground blocks for horizontal ranges. Holds no per-call state.
#[derive(Clone, Debug)]
pub struct Terrain {
    heights: Arc<HeightField>,
    grid: TileGrid,
    depth: i32,
}

impl Terrain {
    pub fn new(heights: Arc<HeightField>, params: &WorldGenParams) -> Self {
        Self {
            grid: heights.grid(),
            heights,
            depth: params.terrain_depth.max(1),
        }
    }

    #[inline]
    pub fn grid(&self) -> TileGrid {
        self.grid
    }

    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    #[inline]
    pub fn ground_height_at(&self, x: f32) -> f32 {
        self.heights.height_at(x)
    }

    pub fn column_at(&self, x: i32) -> GroundColumn {
        let x = self.grid.align_down(x);
        let tile = self.grid.tile() as f32;
        let height = self.heights.height_at(x as f32);
        let blocks = (0..self.depth)
            .map(|i| {
                let pos = Vec2::new(x as f32, height + i as f32 * tile);
                WorldEntity::new(EntityKind::Ground, Rect::new(pos, Vec2::splat(tile)))
            })
            .collect();
        GroundColumn { x, height, blocks }
    }

    pub fn columns_in_range(&self, min: i32, max: i32) -> impl Iterator<Item = GroundColumn> + '_ {
        self.grid.columns(min, max).map(move |c| self.column_at(c))
    }

    /// Ground blocks for every column intersecting `[min, max)`, column by column, top down.
    pub fn create_in_range(&self, min: i32, max: i32) -> Vec<WorldEntity> {
        let n = self.grid.columns(min, max).len();
        let mut out = Vec::with_capacity(n * self.depth as usize);
        for col in self.columns_in_range(min, max) {
            out.extend(col.blocks);
        }
        out
    }
}
