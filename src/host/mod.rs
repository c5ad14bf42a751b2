pub mod scene;
pub mod signal;

use std::fmt;

/// Handle to a leaf element in the host tree. Carries a slot index and a
/// generation counter so stale handles are detected after the slot is reused.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

/// Handle to a grouping container (the nearest ancestor that owns a shared
/// opacity control).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

/// Handle to an opacity control attached to a container.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FadeId {
    pub(crate) idx: u32,
    pub(crate) generation: u32,
}

macro_rules! handle_impls {
    ($name:ident) => {
        impl $name {
            pub fn new(index: u32, generation: u32) -> Self {
                Self {
                    idx: index,
                    generation,
                }
            }

            pub fn index(self) -> u32 {
                self.idx
            }

            pub fn generation(self) -> u32 {
                self.generation
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}@gen{})", stringify!($name), self.idx, self.generation)
            }
        }
    };
}

handle_impls!(ElementId);
handle_impls!(ContainerId);
handle_impls!(FadeId);

/// One entry of the host's pending-rebuild queue, as observed just before the
/// engine processes and clears it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RebuildEntry {
    Element(ElementId),
    /// Something the host enqueued that is not a plain visual element.
    Foreign { kind: &'static str },
}

/// The host-engine surface the overlay needs. All calls happen on the main
/// sequence; implementations must tolerate stale handles on every method.
pub trait HostTree {
    fn element_alive(&self, element: ElementId) -> bool;

    /// Nearest ancestor container of `element`, walking the ownership chain.
    /// `None` if the element is gone, an ancestor is gone, or the element is
    /// not parented under any container.
    fn container_of(&self, element: ElementId) -> Option<ContainerId>;

    fn container_alive(&self, container: ContainerId) -> bool;

    /// Get-or-create the opacity control on `container`. Reuses an existing
    /// attachment. `None` if the container has been destroyed.
    fn ensure_fade(&mut self, container: ContainerId) -> Option<FadeId>;

    /// Applies an opacity value. Stale handles are a no-op.
    fn set_fade_alpha(&mut self, fade: FadeId, alpha: f32);

    /// Whether the host is in an active/running state (as opposed to being
    /// torn down or edited while stopped).
    fn is_running(&self) -> bool;
}
