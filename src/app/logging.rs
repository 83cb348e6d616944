use super::App;
use crate::event::Event;

impl App {
    pub(super) fn log_event(tick: u64, ev: &Event) {
        use crate::event::Event as E;
        match ev {
            E::Tick => {
                log::trace!(target: "events", "[tick {}] Tick", tick);
            }
            E::CameraMoved { x, dx } => {
                log::trace!(target: "events", "[tick {}] CameraMoved x={:.1} dx={:.2}", tick, x, dx);
            }
            E::StripGenerated {
                side,
                min_x,
                max_x,
                columns,
                trees,
                entities,
            } => {
                log::debug!(
                    target: "events",
                    "[tick {}] StripGenerated {:?} [{}, {}) columns={} trees={} entities={}",
                    tick,
                    side,
                    min_x,
                    max_x,
                    columns,
                    trees,
                    entities
                );
            }
            E::SweepCompleted {
                removed,
                live,
                min_x,
                max_x,
            } => {
                if *removed > 0 {
                    log::debug!(
                        target: "events",
                        "[tick {}] SweepCompleted removed={} live={} window=[{}, {})",
                        tick,
                        removed,
                        live,
                        min_x,
                        max_x
                    );
                } else {
                    log::trace!(target: "events", "[tick {}] SweepCompleted live={}", tick, live);
                }
            }
        }
    }
}
