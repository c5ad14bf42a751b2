use crate::host::{HostTree, RebuildEntry};

pub type PreRenderFn = Box<dyn FnMut(&[RebuildEntry], &mut dyn HostTree, f32)>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Where a new handler lands in the invocation order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Position {
    /// Runs before every handler already subscribed. A front handler observes
    /// the rebuild queue before the engine's own processing clears it.
    Front,
    Back,
}

/// The host's "about to render" signal: an ordered subscriber list with
/// explicit position control.
#[derive(Default)]
pub struct PreRenderSignal {
    handlers: Vec<(SubscriberId, PreRenderFn)>,
    next_id: u64,
}

impl PreRenderSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, position: Position, handler: PreRenderFn) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        match position {
            Position::Front => self.handlers.insert(0, (id, handler)),
            Position::Back => self.handlers.push((id, handler)),
        }
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
    }

    pub fn emit(&mut self, queue: &[RebuildEntry], host: &mut dyn HostTree, now: f32) {
        for (_, handler) in &mut self.handlers {
            handler(queue, host, now);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
