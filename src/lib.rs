pub mod clock;
pub mod host;
pub mod inspect;
pub mod tracker;
pub mod view;

pub use clock::FrameClock;
pub use host::scene::SceneTree;
pub use host::signal::{Position, PreRenderSignal, SubscriberId};
pub use host::{ContainerId, ElementId, FadeId, HostTree, RebuildEntry};
pub use inspect::HierarchyHighlighter;
pub use tracker::{DIMMED_ALPHA, FULL_ALPHA, RebuildTracker, TrackerHandle};
pub use view::{ToggleBinding, ToggleKey};

pub use glam::Vec4;
pub use winit::event::ElementState;
pub use winit::keyboard::{KeyCode, PhysicalKey};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub fn init_logging() {
    env_logger::init();
}
