use hashbrown::HashMap;
use sylva_world::{EntityKind, Layer, WorldEntity};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneEntry {
    pub entity: WorldEntity,
    pub layer: Layer,
}

/// Where the window controller hands generated entities and asks for removals.
pub trait EntitySink {
    fn register(&mut self, entity: WorldEntity, layer: Layer) -> EntityId;
    /// Drops every entity for which `keep` returns false; returns how many were dropped.
    fn sweep(&mut self, keep: &mut dyn FnMut(&WorldEntity) -> bool) -> usize;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayerCounts {
    pub background: usize,
    pub static_objects: usize,
}

impl LayerCounts {
    #[inline]
    pub fn add(&mut self, layer: Layer, n: usize) {
        match layer {
            Layer::Background => self.background += n,
            Layer::StaticObjects => self.static_objects += n,
        }
    }

    #[inline]
    pub fn get(&self, layer: Layer) -> usize {
        match layer {
            Layer::Background => self.background,
            Layer::StaticObjects => self.static_objects,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.background + self.static_objects
    }

    pub fn merge(&mut self, other: LayerCounts) {
        self.background += other.background;
        self.static_objects += other.static_objects;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub registered_total: u64,
    pub removed_total: u64,
    pub live: usize,
}

/// In-memory registry of live entities keyed by id.
#[derive(Debug, Default)]
pub struct Scene {
    entries: HashMap<EntityId, SceneEntry>,
    next_id: u64,
    registered_total: u64,
    removed_total: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&SceneEntry> {
        self.entries.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &SceneEntry)> {
        self.entries.iter().map(|(id, e)| (*id, e))
    }

    pub fn layer_counts(&self) -> LayerCounts {
        let mut out = LayerCounts::default();
        for e in self.entries.values() {
            out.add(e.layer, 1);
        }
        out
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.entries
            .values()
            .filter(|e| e.entity.kind == kind)
            .count()
    }

    /// Left edges of the columns whose top ground block is live, ascending.
    /// A column appears once per registered top block, so duplicates show up as repeats.
    pub fn ground_columns(&self) -> Vec<i32> {
        let mut tops: HashMap<i32, (f32, usize)> = HashMap::new();
        for e in self.entries.values() {
            if e.entity.kind != EntityKind::Ground {
                continue;
            }
            let x = e.entity.rect.pos.x as i32;
            let y = e.entity.rect.pos.y;
            let slot = tops.entry(x).or_insert((y, 0));
            if y < slot.0 {
                *slot = (y, 1);
            } else if y == slot.0 {
                slot.1 += 1;
            }
        }
        let mut cols: Vec<i32> = tops
            .into_iter()
            .flat_map(|(x, (_, n))| std::iter::repeat_n(x, n))
            .collect();
        cols.sort_unstable();
        cols
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            registered_total: self.registered_total,
            removed_total: self.removed_total,
            live: self.entries.len(),
        }
    }
}

impl EntitySink for Scene {
    fn register(&mut self, entity: WorldEntity, layer: Layer) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.registered_total += 1;
        self.entries.insert(id, SceneEntry { entity, layer });
        id
    }

    fn sweep(&mut self, keep: &mut dyn FnMut(&WorldEntity) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| keep(&e.entity));
        let removed = before - self.entries.len();
        self.removed_total += removed as u64;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_geom::{Rect, Vec2};

    fn block(kind: EntityKind, x: f32, y: f32) -> WorldEntity {
        WorldEntity::new(kind, Rect::new(Vec2::new(x, y), Vec2::splat(30.0)))
    }

    #[test]
    fn register_assigns_monotonic_ids() {
        let mut scene = Scene::new();
        let a = scene.register(block(EntityKind::Ground, 0.0, 300.0), Layer::StaticObjects);
        let b = scene.register(block(EntityKind::Leaf, 0.0, 100.0), Layer::Background);
        assert!(b > a);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.get(b).map(|e| e.layer), Some(Layer::Background));
        assert_eq!(
            scene.layer_counts(),
            LayerCounts {
                background: 1,
                static_objects: 1
            }
        );
    }

    #[test]
    fn sweep_drops_rejected_and_counts() {
        let mut scene = Scene::new();
        for i in 0..10 {
            scene.register(block(EntityKind::Ground, i as f32 * 30.0, 300.0), Layer::StaticObjects);
        }
        let removed = scene.sweep(&mut |e| e.rect.pos.x < 150.0);
        assert_eq!(removed, 5);
        assert_eq!(scene.len(), 5);
        let stats = scene.stats();
        assert_eq!(stats.registered_total, 10);
        assert_eq!(stats.removed_total, 5);
    }

    #[test]
    fn ground_columns_report_top_blocks() {
        let mut scene = Scene::new();
        for x in [0.0, 30.0] {
            for d in 0..3 {
                scene.register(
                    block(EntityKind::Ground, x, 300.0 + d as f32 * 30.0),
                    Layer::StaticObjects,
                );
            }
        }
        scene.register(block(EntityKind::Trunk, 60.0, 200.0), Layer::StaticObjects);
        assert_eq!(scene.ground_columns(), vec![0, 30]);
        assert_eq!(scene.count_kind(EntityKind::Trunk), 1);
    }
}
