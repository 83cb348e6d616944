use std::collections::{BTreeMap, VecDeque};

use sylva_runtime::Side;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Time housekeeping
    Tick,

    // Camera sample for this tick; emitted every tick so the sweep always runs
    CameraMoved { x: f32, dx: f32 },

    // Streaming
    StripGenerated {
        side: Side,
        min_x: i32,
        max_x: i32,
        columns: usize,
        trees: usize,
        entities: usize,
    },
    SweepCompleted {
        removed: usize,
        live: usize,
        min_x: i32,
        max_x: i32,
    },
}

pub struct EventEnvelope {
    #[allow(dead_code)]
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        self.emit_at(self.now, kind)
    }

    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let id = self.alloc_id();
        let tick = tick.max(self.now);
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.by_tick.get_mut(&self.now)?.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.by_tick.values().map(VecDeque::len).sum()
    }

    pub fn advance_tick(&mut self) {
        if self.by_tick.get(&self.now).is_some_and(VecDeque::is_empty) {
            self.by_tick.remove(&self.now);
        }
        self.now = self.now.wrapping_add(1);
    }
}
