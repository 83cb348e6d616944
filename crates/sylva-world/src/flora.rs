use std::sync::Arc;

use sylva_geom::{Rect, Vec2};

use crate::entity::{EntityKind, WorldEntity};
use crate::grid::TileGrid;
use crate::height::HeightField;
use crate::seed::{SALT_FRUIT, SALT_LEAF, SALT_TREE, SALT_TRUNK, WorldSeed, rand_range, rand01};
use crate::worldgen::WorldGenParams;

/// A tree rooted on one column: trunk, canopy leaves and the fruit hanging among them.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeInfo {
    pub x: i32,
    pub base_y: f32,
    pub trunk: WorldEntity,
    pub leaves: Vec<WorldEntity>,
    pub fruits: Vec<WorldEntity>,
}

impl TreeInfo {
    #[inline]
    pub fn top_y(&self) -> f32 {
        self.trunk.rect.pos.y
    }

    pub fn entities(&self) -> impl Iterator<Item = &WorldEntity> {
        std::iter::once(&self.trunk)
            .chain(self.leaves.iter())
            .chain(self.fruits.iter())
    }

    pub fn entity_count(&self) -> usize {
        1 + self.leaves.len() + self.fruits.len()
    }
}

#[derive(Clone, Debug)]
pub struct Flora {
    seed: WorldSeed,
    heights: Arc<HeightField>,
    grid: TileGrid,
    probability: f32,
    trunk_min: i32,
    trunk_max: i32,
    leaf_radius: i32,
    leaf_probability: f32,
    fruit_probability: f32,
    fruit_scale: f32,
}

impl Flora {
    pub fn new(seed: WorldSeed, params: &WorldGenParams, heights: Arc<HeightField>) -> Self {
        Self {
            seed,
            grid: heights.grid(),
            heights,
            probability: params.tree_probability,
            trunk_min: params.trunk_min.max(1),
            trunk_max: params.trunk_max.max(params.trunk_min.max(1)),
            leaf_radius: params.leaf_radius.max(0),
            leaf_probability: params.leaf_probability,
            fruit_probability: params.fruit_probability,
            fruit_scale: params.fruit_scale,
        }
    }

    #[inline]
    pub fn has_tree(&self, x: i32) -> bool {
        rand01(self.seed, self.grid.align_down(x), 0, SALT_TREE) < self.probability
    }

    /// Trunk height in tiles for the column at `x`, whether or not a tree grows there.
    #[inline]
    pub fn trunk_tiles(&self, x: i32) -> i32 {
        let c = self.grid.align_down(x);
        rand_range(self.seed, c, 0, SALT_TRUNK, self.trunk_min, self.trunk_max)
    }

    /// The tree rooted on the column containing `x`, if any.
    pub fn tree_at(&self, x: i32) -> Option<TreeInfo> {
        let c = self.grid.align_down(x);
        if !self.has_tree(c) {
            return None;
        }
        let tile = self.grid.tile() as f32;
        let base_y = self.heights.height_at(c as f32);
        let trunk_h = self.trunk_tiles(c) as f32 * tile;
        let top_y = base_y - trunk_h;
        if top_y < 0.0 {
            return None;
        }
        let trunk = WorldEntity::new(
            EntityKind::Trunk,
            Rect::new(Vec2::new(c as f32, top_y), Vec2::new(tile, trunk_h)),
        )
        .in_tree(c, 0);

        let r = self.leaf_radius;
        let side = 2 * r + 1;
        let anchor = Vec2::new(c as f32 + tile * 0.5, top_y);
        let mut leaves = Vec::new();
        let mut fruits = Vec::new();
        for j in -r..=r {
            for i in -r..=r {
                let slot = (j + r) * side + (i + r);
                if rand01(self.seed, c, slot, SALT_LEAF) >= self.leaf_probability {
                    continue;
                }
                let center = anchor + Vec2::new(i as f32 * tile, j as f32 * tile);
                leaves.push(WorldEntity::new(
                    EntityKind::Leaf,
                    Rect::from_center(center, Vec2::splat(tile)),
                )
                .in_tree(c, slot));
                if rand01(self.seed, c, slot, SALT_FRUIT) < self.fruit_probability {
                    fruits.push(WorldEntity::new(
                        EntityKind::Fruit,
                        Rect::from_center(center, Vec2::splat(tile * self.fruit_scale)),
                    )
                    .in_tree(c, slot));
                }
            }
        }

        Some(TreeInfo {
            x: c,
            base_y,
            trunk,
            leaves,
            fruits,
        })
    }

    /// Trees rooted on the columns intersecting `[min, max)`, left to right.
    pub fn create_in_range(&self, min: i32, max: i32) -> Vec<TreeInfo> {
        self.grid
            .columns(min, max)
            .filter_map(|c| self.tree_at(c))
            .collect()
    }
}
