use std::fmt;

use hashbrown::HashMap;
use sylva_geom::Vec2;
use sylva_runtime::{LayerCounts, WorldWindow};
use sylva_world::WorldGen;

use crate::camera::{ScrollCamera, ScrollPattern};
use crate::event::EventQueue;
use crate::gamestate::GameState;

pub struct App {
    pub gs: GameState,
    pub queue: EventQueue,
    pub camera: ScrollCamera,
    pub(crate) clearance: f32,
    pub(crate) evt_processed_total: usize,
    pub(crate) evt_processed_by: HashMap<&'static str, usize>,
}

impl App {
    pub fn new(world: WorldGen, pattern: ScrollPattern, speed: f32) -> Self {
        let spawn = world.spawn_point(world.viewport.width * 0.5);
        let clearance = world.params.avatar_clearance;
        // Pingpong legs span two screens so both edges of the window get exercised.
        let leg = world.viewport.width * 2.0;
        let camera = ScrollCamera::new(spawn, speed, pattern, leg);
        log::info!(
            "avatar spawned at ({:.0}, {:.0}), camera following {:?} at {} px/s",
            spawn.x,
            spawn.y,
            pattern,
            speed
        );
        Self {
            gs: GameState::new(world, spawn.x),
            queue: EventQueue::new(),
            camera,
            clearance,
            evt_processed_total: 0,
            evt_processed_by: HashMap::new(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.gs.world.seed.0,
            ticks: self.gs.tick,
            window: self.gs.window.window(),
            avatar: self.camera.avatar,
            live: self.gs.scene.len(),
            layers: self.gs.scene.layer_counts(),
            strips: self.gs.totals.strips,
            columns: self.gs.totals.columns,
            trees: self.gs.totals.trees,
            created: self.gs.totals.created,
            removed: self.gs.totals.removed,
            events: self.evt_processed_total,
            events_by: {
                let mut v: Vec<_> = self.evt_processed_by.iter().map(|(k, n)| (*k, *n)).collect();
                v.sort_unstable();
                v
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunSummary {
    pub seed: i32,
    pub ticks: u64,
    pub window: WorldWindow,
    pub avatar: Vec2,
    pub live: usize,
    pub layers: LayerCounts,
    pub strips: u64,
    pub columns: u64,
    pub trees: u64,
    pub created: u64,
    pub removed: u64,
    pub events: usize,
    pub events_by: Vec<(&'static str, usize)>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "seed:     {}", self.seed)?;
        writeln!(f, "ticks:    {}", self.ticks)?;
        writeln!(
            f,
            "window:   [{}, {}) ({} px)",
            self.window.min_x,
            self.window.max_x,
            self.window.width()
        )?;
        writeln!(f, "avatar:   ({:.1}, {:.1})", self.avatar.x, self.avatar.y)?;
        writeln!(
            f,
            "live:     {} (background {}, static_objects {})",
            self.live, self.layers.background, self.layers.static_objects
        )?;
        writeln!(
            f,
            "strips:   {} ({} columns, {} trees)",
            self.strips, self.columns, self.trees
        )?;
        writeln!(f, "created:  {}", self.created)?;
        writeln!(f, "removed:  {}", self.removed)?;
        write!(f, "events:   {}", self.events)?;
        for (name, n) in &self.events_by {
            write!(f, "\n  {name}: {n}")?;
        }
        Ok(())
    }
}
