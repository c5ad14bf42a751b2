use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::host::HostTree;
use crate::host::signal::PreRenderSignal;
use crate::tracker::TrackerHandle;

/// Keyboard toggle for the overlay. Defaults to `V`.
pub struct ToggleKey {
    pub key: KeyCode,
}

impl Default for ToggleKey {
    fn default() -> Self {
        Self { key: KeyCode::KeyV }
    }
}

impl ToggleKey {
    pub fn new(key: KeyCode) -> Self {
        Self { key }
    }

    /// Flips the tracker on a press of the configured key. Returns whether
    /// the event was consumed.
    pub fn on_key(
        &self,
        key: PhysicalKey,
        state: ElementState,
        tracker: &TrackerHandle,
        signal: &mut PreRenderSignal,
        host: &mut dyn HostTree,
    ) -> bool {
        if state != ElementState::Pressed || key != PhysicalKey::Code(self.key) {
            return false;
        }
        tracker.set_enabled(!tracker.enabled(), signal, host);
        true
    }

    pub fn on_window_event(
        &self,
        event: &WindowEvent,
        tracker: &TrackerHandle,
        signal: &mut PreRenderSignal,
        host: &mut dyn HostTree,
    ) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                self.on_key(event.physical_key, event.state, tracker, signal, host)
            }
            _ => false,
        }
    }
}

/// Checkbox-style two-way binding over the tracker's enabled state: the
/// widget reads `is_on` to draw itself and calls `set_on` when clicked.
pub struct ToggleBinding {
    tracker: TrackerHandle,
}

impl ToggleBinding {
    /// Attaches to a tracker if one exists. Without one the control disables
    /// itself rather than fail.
    pub fn attach(tracker: Option<&TrackerHandle>) -> Option<Self> {
        let Some(tracker) = tracker else {
            log::warn!("cannot bind rebuild-overlay toggle: no tracker instance available");
            return None;
        };
        Some(Self {
            tracker: tracker.clone(),
        })
    }

    pub fn is_on(&self) -> bool {
        self.tracker.enabled()
    }

    pub fn set_on(&self, on: bool, signal: &mut PreRenderSignal, host: &mut dyn HostTree) {
        self.tracker.set_enabled(on, signal, host);
    }
}
