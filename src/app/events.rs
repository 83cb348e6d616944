use super::App;
use crate::event::Event;

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Tick => "Tick",
            Event::CameraMoved { .. } => "CameraMoved",
            Event::StripGenerated { .. } => "StripGenerated",
            Event::SweepCompleted { .. } => "SweepCompleted",
        }
    }
}

impl App {
    pub(super) fn handle_event(&mut self, ev: Event) {
        match ev {
            Event::Tick => {
                self.gs.tick += 1;
            }
            Event::CameraMoved { x, .. } => self.handle_camera_moved(x),
            Event::StripGenerated {
                columns,
                trees,
                entities,
                ..
            } => {
                let t = &mut self.gs.totals;
                t.strips += 1;
                t.columns += columns as u64;
                t.trees += trees as u64;
                t.created += entities as u64;
            }
            Event::SweepCompleted { removed, .. } => {
                self.gs.totals.removed += removed as u64;
            }
        }
    }

    fn handle_camera_moved(&mut self, x: f32) {
        let report = self.gs.window.tick(x, &mut self.gs.scene);
        for s in &report.strips {
            self.queue.emit_now(Event::StripGenerated {
                side: s.side,
                min_x: s.min_x,
                max_x: s.max_x,
                columns: s.columns,
                trees: s.trees,
                entities: s.registered.total(),
            });
        }
        self.queue.emit_now(Event::SweepCompleted {
            removed: report.removed,
            live: self.gs.scene.len(),
            min_x: report.window.min_x,
            max_x: report.window.max_x,
        });
    }
}
