use std::collections::HashMap;

use crate::host::{ContainerId, ElementId, FadeId, HostTree};

/// A grouping container together with its opacity control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Group {
    pub container: ContainerId,
    pub fade: FadeId,
}

/// Cached element-to-group resolution. A container is assumed stable for the
/// session, so entries are never invalidated; use sites re-check liveness
/// through the host instead.
#[derive(Default)]
pub struct GroupResolver {
    groups: HashMap<ContainerId, Group>,
}

impl GroupResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `element` to its group, attaching the container's opacity
    /// control on first sight. `None` when the element has no live container
    /// above it — root-level strays are skipped, not an error.
    pub fn resolve(&mut self, element: ElementId, host: &mut dyn HostTree) -> Option<Group> {
        let container = host.container_of(element)?;
        if let Some(group) = self.groups.get(&container) {
            return Some(*group);
        }

        let fade = host.ensure_fade(container)?;
        let group = Group { container, fade };
        self.groups.insert(container, group);
        Some(group)
    }

    pub fn cached(&self, container: ContainerId) -> Option<Group> {
        self.groups.get(&container).copied()
    }
}
