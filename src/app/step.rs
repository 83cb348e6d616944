use super::App;
use crate::event::Event;

impl App {
    /// Populates the starting window before the first step.
    pub fn bootstrap(&mut self) {
        let strip = self.gs.window.bootstrap(&mut self.gs.scene);
        self.queue.emit_now(Event::StripGenerated {
            side: strip.side,
            min_x: strip.min_x,
            max_x: strip.max_x,
            columns: strip.columns,
            trees: strip.trees,
            entities: strip.registered.total(),
        });
        self.process_events();
    }

    pub fn step(&mut self, dt: f32) {
        self.queue.emit_now(Event::Tick);
        let heights = &self.gs.world.heights;
        let dx = self
            .camera
            .update(dt, |x| heights.height_at(x), self.clearance);
        self.queue.emit_now(Event::CameraMoved {
            x: self.camera.center_x(),
            dx,
        });
        self.process_events();
        self.queue.advance_tick();
    }

    fn process_events(&mut self) {
        while let Some(env) = self.queue.pop_ready() {
            Self::log_event(env.tick, &env.kind);
            self.evt_processed_total += 1;
            *self.evt_processed_by.entry(env.kind.name()).or_insert(0) += 1;
            self.handle_event(env.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use sylva_geom::Viewport;
    use sylva_world::{WorldGen, WorldGenParams, WorldSeed};

    use super::*;
    use crate::camera::ScrollPattern;

    fn app(pattern: ScrollPattern) -> App {
        let wg = WorldGen::new(
            WorldSeed(42),
            WorldGenParams::default(),
            Viewport::new(1024.0, 600.0),
        );
        let mut app = App::new(wg, pattern, 250.0);
        app.bootstrap();
        app
    }

    #[test]
    fn bookkeeping_balances_after_a_run() {
        let mut app = app(ScrollPattern::Right);
        for _ in 0..200 {
            app.step(1.0 / 50.0);
        }
        let s = app.summary();
        assert_eq!(s.ticks, 200);
        assert_eq!(s.created, app.gs.scene.stats().registered_total);
        assert_eq!(s.created - s.removed, s.live as u64);
        assert!(s.window.max_x > 1024);
        assert!(app.queue.pending() == 0);
    }

    #[test]
    fn camera_tracks_avatar_over_ground() {
        let mut app = app(ScrollPattern::Left);
        for _ in 0..20 {
            app.step(1.0 / 50.0);
        }
        let x = app.camera.center_x();
        assert!(x < 512.0);
        let ground = app.gs.world.heights.height_at(x);
        assert_eq!(app.camera.avatar.y, ground - 100.0);
        let w = app.gs.window.window();
        assert!((w.min_x as f32) <= x - 512.0);
    }

    #[test]
    fn every_event_kind_is_processed() {
        let mut app = app(ScrollPattern::Pingpong);
        app.step(1.0 / 50.0);
        let names: Vec<_> = app.summary().events_by.into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["CameraMoved", "StripGenerated", "SweepCompleted", "Tick"]
        );
    }
}
