//! Editor-side hierarchy highlight: paints a translucent cyan box behind
//! tree rows whose element rebuilt recently.

use glam::{Vec4, vec4};

use crate::host::{ElementId, HostTree};
use crate::tracker::{TIME_EPSILON, TrackerHandle};

/// How long a row keeps its highlight after the element went dirty. Wider
/// than the opacity decay window on purpose so the highlight stays readable.
pub const HIGHLIGHT_WINDOW: f32 = 0.5;

pub const HIGHLIGHT_COLOR: Vec4 = vec4(0.0, 1.0, 1.0, 0.3);

pub struct HierarchyHighlighter {
    tracker: TrackerHandle,
    attached: bool,
}

impl HierarchyHighlighter {
    pub fn new(tracker: TrackerHandle) -> Self {
        Self {
            tracker,
            attached: true,
        }
    }

    /// Called per visible tree row. Detaches for good once the host leaves
    /// its running state; [`attach`](Self::attach) re-arms it.
    pub fn highlight(&mut self, element: ElementId, host: &dyn HostTree) -> Option<Vec4> {
        if !host.is_running() {
            self.attached = false;
            return None;
        }
        if !self.attached {
            return None;
        }

        let last_dirty = self.tracker.last_dirty(element)?;
        let cutoff = self.tracker.prev_tick() - TIME_EPSILON - HIGHLIGHT_WINDOW;
        (last_dirty >= cutoff).then_some(HIGHLIGHT_COLOR)
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}
