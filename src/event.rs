use std::collections::{BTreeMap, VecDeque};

/// Movement keys. Keyboard input always belongs to player one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    KeyPressed(Key),
    KeyReleased(Key),
    /// Gamepad stick position in `[-100, 100]`.
    AxisMoved { pad: usize, axis: Axis, position: f32 },
}

pub struct EventEnvelope {
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
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    /// Next event scheduled for the current tick, in emission order.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_wait_for_their_tick() {
        let mut q = EventQueue::new();
        q.emit_at(1, Event::KeyPressed(Key::D));
        q.emit_now(Event::KeyPressed(Key::W));
        q.emit_now(Event::KeyReleased(Key::W));
        assert_eq!(q.pending(), 3);

        let first = q.pop_ready().unwrap();
        assert_eq!(first.kind, Event::KeyPressed(Key::W));
        assert_eq!(q.pop_ready().unwrap().kind, Event::KeyReleased(Key::W));
        assert!(q.pop_ready().is_none());

        q.advance_tick();
        let later = q.pop_ready().unwrap();
        assert_eq!(later.tick, 1);
        assert_eq!(later.kind, Event::KeyPressed(Key::D));
        assert!(later.id > first.id);
        q.advance_tick();
        assert_eq!(q.pending(), 0);
    }
}
