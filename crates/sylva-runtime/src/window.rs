use hashbrown::HashSet;
use sylva_geom::Viewport;
use sylva_world::{EntityKind, Flora, StepMode, Terrain, TileGrid, TreeSlot, WorldEntity, WorldGen};

use crate::scene::{EntitySink, LayerCounts};

/// Horizontal extent for which generation has been issued, `[min_x, max_x)`.
/// Both edges sit on the tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldWindow {
    pub min_x: i32,
    pub max_x: i32,
}

impl WorldWindow {
    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn retains_x(&self, x: f32) -> bool {
        x >= self.min_x as f32 && x <= self.max_x as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Initial,
    Right,
    Left,
}

/// One generation request issued by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strip {
    pub side: Side,
    pub min_x: i32,
    pub max_x: i32,
    pub columns: usize,
    pub trees: usize,
    pub registered: LayerCounts,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub displacement: f32,
    pub strips: Vec<Strip>,
    pub registered: LayerCounts,
    pub removed: usize,
    pub window: WorldWindow,
}

/// Keeps the generated world in step with a horizontally scrolling camera.
pub struct WindowController {
    terrain: Terrain,
    flora: Flora,
    grid: TileGrid,
    viewport: Viewport,
    mode: StepMode,
    margin: i32,
    // Widest tile-mode strip; anything generated past it is swept in the same tick.
    max_span: i32,
    window: WorldWindow,
    last_camera_x: f32,
    tick: u64,
    // Tree parts currently registered; a tree rebuilt on re-entry skips these.
    live_parts: HashSet<(EntityKind, TreeSlot)>,
}

impl WindowController {
    pub fn new(world: &WorldGen, camera_center_x: f32) -> Self {
        let grid = world.terrain.grid();
        let mode = world.params.step_mode;
        let margin = match mode {
            StepMode::Tile => 0,
            StepMode::Track => world.params.margin_tiles.max(0) * grid.tile(),
        };
        let reach = (world.params.leaf_radius.max(0) + 1) * grid.tile();
        let max_span = grid.align_up(world.viewport.width.ceil() as i32) + reach;
        let mut ctl = Self {
            terrain: world.terrain.clone(),
            flora: world.flora.clone(),
            grid,
            viewport: world.viewport,
            mode,
            margin,
            max_span,
            window: WorldWindow { min_x: 0, max_x: 0 },
            last_camera_x: camera_center_x,
            tick: 0,
            live_parts: HashSet::new(),
        };
        ctl.window = ctl.target_window(camera_center_x);
        ctl
    }

    #[inline]
    pub fn window(&self) -> WorldWindow {
        self.window
    }

    // Visible extent snapped outward to the grid, plus the track margin.
    fn target_window(&self, camera_x: f32) -> WorldWindow {
        let (left, right) = self.viewport.visible_x(camera_x);
        WorldWindow {
            min_x: self.grid.align_down(left.floor() as i32) - self.margin,
            max_x: self.grid.align_up(right.ceil() as i32) + self.margin,
        }
    }

    /// Populates the initial window. Call once before the first tick.
    pub fn bootstrap(&mut self, sink: &mut dyn EntitySink) -> Strip {
        let w = self.window;
        let strip = self.generate(Side::Initial, w.min_x, w.max_x, sink);
        log::info!(
            "world window bootstrapped [{}, {}) columns={} trees={}",
            w.min_x,
            w.max_x,
            strip.columns,
            strip.trees
        );
        strip
    }

    pub fn tick(&mut self, camera_center_x: f32, sink: &mut dyn EntitySink) -> TickReport {
        self.tick += 1;
        let d = camera_center_x - self.last_camera_x;
        self.last_camera_x = camera_center_x;

        let mut strips = Vec::new();
        if d != 0.0 {
            match self.mode {
                StepMode::Tile => self.step_tile(d, sink, &mut strips),
                StepMode::Track => self.step_track(camera_center_x, sink, &mut strips),
            }
        }

        let mut registered = LayerCounts::default();
        for s in &strips {
            registered.merge(s.registered);
        }
        let removed = self.sweep(sink);
        if removed > 0 {
            log::trace!(
                "[tick {}] swept {} entities outside [{}, {})",
                self.tick,
                removed,
                self.window.min_x,
                self.window.max_x
            );
        }

        TickReport {
            tick: self.tick,
            displacement: d,
            strips,
            registered,
            removed,
            window: self.window,
        }
    }

    fn step_tile(&mut self, d: f32, sink: &mut dyn EntitySink, strips: &mut Vec<Strip>) {
        let span = d.abs().ceil().min(self.max_span as f32) as i32;
        let tile = self.grid.tile();
        if d > 0.0 {
            let old = self.window.max_x;
            let strip = self.generate(Side::Right, old, old.saturating_add(span), sink);
            strips.push(strip);
            self.window.max_x = old.saturating_add(tile);
        } else {
            let old = self.window.min_x;
            let strip = self.generate(Side::Left, old.saturating_sub(span), old, sink);
            strips.push(strip);
            self.window.min_x = old.saturating_sub(tile);
        }
    }

    fn step_track(&mut self, camera_x: f32, sink: &mut dyn EntitySink, strips: &mut Vec<Strip>) {
        let old = self.window;
        let target = self.target_window(camera_x);
        if target.max_x > old.max_x {
            let from = old.max_x.max(target.min_x);
            strips.push(self.generate(Side::Right, from, target.max_x, sink));
        }
        if target.min_x < old.min_x {
            let to = old.min_x.min(target.max_x);
            strips.push(self.generate(Side::Left, target.min_x, to, sink));
        }
        self.window = target;
    }

    fn generate(&mut self, side: Side, min: i32, max: i32, sink: &mut dyn EntitySink) -> Strip {
        let mut registered = LayerCounts::default();
        let ground = self.terrain.create_in_range(min, max);
        register_all(sink, ground, &mut registered);
        let trees = self.flora.create_in_range(min, max);
        let tree_count = trees.len();
        let live = &mut self.live_parts;
        for t in &trees {
            let fresh = t
                .entities()
                .copied()
                .filter(|e| e.part_key().is_none_or(|k| live.insert(k)));
            register_all(sink, fresh, &mut registered);
        }

        let strip = Strip {
            side,
            min_x: min,
            max_x: max,
            columns: self.grid.columns(min, max).len(),
            trees: tree_count,
            registered,
        };
        log::trace!(
            "[tick {}] strip {:?} [{}, {}) columns={} trees={} entities={}",
            self.tick,
            side,
            min,
            max,
            strip.columns,
            strip.trees,
            registered.total()
        );
        strip
    }

    fn sweep(&mut self, sink: &mut dyn EntitySink) -> usize {
        let window = self.window;
        let bottom = self.viewport.height;
        let live = &mut self.live_parts;
        sink.sweep(&mut |e| {
            let c = e.center();
            let keep = window.retains_x(c.x)
                && c.y <= bottom
                && (c.y >= 0.0 || e.kind.exempt_from_top_sweep());
            if !keep {
                if let Some(k) = e.part_key() {
                    live.remove(&k);
                }
            }
            keep
        })
    }
}

fn register_all(
    sink: &mut dyn EntitySink,
    entities: impl IntoIterator<Item = WorldEntity>,
    counts: &mut LayerCounts,
) {
    for e in entities {
        let layer = e.layer();
        sink.register(e, layer);
        counts.add(layer, 1);
    }
}

impl std::fmt::Debug for WindowController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowController")
            .field("mode", &self.mode)
            .field("window", &self.window)
            .field("last_camera_x", &self.last_camera_x)
            .field("tick", &self.tick)
            .field("live_parts", &self.live_parts.len())
            .finish()
    }
}
