//! The dirty-time tracking core: who rebuilt this frame, and how recently.

pub mod resolve;
pub mod visibility;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::host::signal::{Position, PreRenderSignal, SubscriberId};
use crate::host::{ContainerId, ElementId, HostTree, RebuildEntry};
use resolve::GroupResolver;

pub use visibility::{DIMMED_ALPHA, FULL_ALPHA, TIME_EPSILON, Visibility};

pub struct RebuildTracker {
    resolver: GroupResolver,
    group_last_dirty: HashMap<ContainerId, f32>,
    element_last_dirty: HashMap<ElementId, f32>,
    prev_tick: f32,
    subscription: Option<SubscriberId>,
}

impl RebuildTracker {
    fn new() -> Self {
        Self {
            resolver: GroupResolver::new(),
            group_last_dirty: HashMap::new(),
            element_last_dirty: HashMap::new(),
            prev_tick: 0.0,
            subscription: None,
        }
    }

    /// Runs on the frame boundary, before the engine flushes its rebuild
    /// queue. Stamps `now` on every queued element and on its group.
    fn on_pre_render(&mut self, queue: &[RebuildEntry], host: &mut dyn HostTree, now: f32) {
        for entry in queue {
            let element = match *entry {
                RebuildEntry::Element(element) => element,
                RebuildEntry::Foreign { kind } => {
                    log::error!("don't know how to handle rebuild-queue entry kind {kind:?}");
                    continue;
                }
            };

            if !host.element_alive(element) {
                // Elements can be destroyed while still queued; routine during
                // teardown and scene transitions.
                continue;
            }
            let Some(group) = self.resolver.resolve(element, host) else {
                continue;
            };

            self.group_last_dirty.insert(group.container, now);
            self.element_last_dirty.insert(element, now);
        }
    }

    /// Regular evaluation step: dims groups dirtied since the previous tick,
    /// restores the rest, then advances the tick reference.
    fn on_tick(&mut self, now: f32, host: &mut dyn HostTree) {
        for (&container, &last_dirty) in &self.group_last_dirty {
            if !host.container_alive(container) {
                continue;
            }
            let Some(group) = self.resolver.cached(container) else {
                continue;
            };
            host.set_fade_alpha(group.fade, visibility::evaluate(last_dirty, self.prev_tick).alpha());
        }

        self.prev_tick = now;
    }

    fn restore_all(&mut self, host: &mut dyn HostTree) {
        for &container in self.group_last_dirty.keys() {
            if !host.container_alive(container) {
                continue;
            }
            if let Some(group) = self.resolver.cached(container) {
                host.set_fade_alpha(group.fade, FULL_ALPHA);
            }
        }
        self.group_last_dirty.clear();
    }
}

/// Shared, explicitly owned handle to a [`RebuildTracker`]. Collaborators
/// (toggle key, bound checkbox, hierarchy highlighter) all hold clones of
/// this instead of reaching for a global.
#[derive(Clone)]
pub struct TrackerHandle {
    inner: Rc<RefCell<RebuildTracker>>,
}

impl Default for TrackerHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackerHandle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RebuildTracker::new())),
        }
    }

    pub fn enabled(&self) -> bool {
        self.inner.borrow().subscription.is_some()
    }

    /// Flips tracking on or off. Setting the current value is a no-op, so the
    /// enable/disable side effects run exactly once per actual change.
    pub fn set_enabled(&self, value: bool, signal: &mut PreRenderSignal, host: &mut dyn HostTree) {
        if value == self.enabled() {
            return;
        }
        if value {
            self.enable(signal);
        } else {
            self.disable(signal, host);
        }
    }

    fn enable(&self, signal: &mut PreRenderSignal) {
        let mut tracker = self.inner.borrow_mut();
        if tracker.subscription.is_some() {
            return;
        }

        // Front of the chain: the queue must be read before the engine's own
        // rebuild processing clears it.
        let weak = Rc::downgrade(&self.inner);
        let id = signal.subscribe(
            Position::Front,
            Box::new(move |queue, host, now| {
                if let Some(tracker) = weak.upgrade() {
                    tracker.borrow_mut().on_pre_render(queue, host, now);
                }
            }),
        );
        tracker.subscription = Some(id);
    }

    fn disable(&self, signal: &mut PreRenderSignal, host: &mut dyn HostTree) {
        let mut tracker = self.inner.borrow_mut();
        let Some(id) = tracker.subscription.take() else {
            return;
        };
        signal.unsubscribe(id);
        // Per-group state resets; per-element dirty times are kept so the
        // hierarchy highlighter can still show what happened.
        tracker.restore_all(host);
    }

    /// Per-tick evaluation; does nothing while disabled.
    pub fn tick(&self, now: f32, host: &mut dyn HostTree) {
        let mut tracker = self.inner.borrow_mut();
        if tracker.subscription.is_none() {
            return;
        }
        tracker.on_tick(now, host);
    }

    pub fn last_dirty(&self, element: ElementId) -> Option<f32> {
        self.inner.borrow().element_last_dirty.get(&element).copied()
    }

    pub fn prev_tick(&self) -> f32 {
        self.inner.borrow().prev_tick
    }

    pub fn tracked_groups(&self) -> usize {
        self.inner.borrow().group_last_dirty.len()
    }
}
