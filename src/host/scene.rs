//! An in-memory reference host: enough of a retained scene tree to drive the
//! overlay in demos and tests without a real engine behind it.

use crate::host::signal::PreRenderSignal;
use crate::host::{ContainerId, ElementId, FadeId, HostTree, RebuildEntry};

struct Node {
    parent: Option<(u32, u32)>, // (idx, generation) of the owning node
    is_container: bool,
    fade: Option<FadeId>,
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

struct FadeSlot {
    generation: u32,
    alpha: Option<f32>, // None once the owning container is destroyed
}

#[derive(Default)]
pub struct SceneTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    fades: Vec<FadeSlot>,
    pending: Vec<RebuildEntry>,
    running: bool,
}

impl SceneTree {
    pub fn new() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    fn alloc(&mut self, node: Node) -> (u32, u32) {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.node = Some(node);
            (idx, slot.generation)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            (idx, 0)
        }
    }

    fn node(&self, idx: u32, generation: u32) -> Option<&Node> {
        let slot = self.slots.get(idx as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.node.as_ref()
    }

    pub fn add_group(&mut self, parent: Option<ContainerId>) -> ContainerId {
        let parent = parent.map(|c| (c.idx, c.generation));
        let (idx, generation) = self.alloc(Node {
            parent,
            is_container: true,
            fade: None,
        });
        ContainerId { idx, generation }
    }

    pub fn add_element(&mut self, parent: ContainerId) -> ElementId {
        let (idx, generation) = self.alloc(Node {
            parent: Some((parent.idx, parent.generation)),
            is_container: false,
            fade: None,
        });
        ElementId { idx, generation }
    }

    /// An element nested under another element rather than directly under a
    /// container.
    pub fn add_child_element(&mut self, parent: ElementId) -> ElementId {
        let (idx, generation) = self.alloc(Node {
            parent: Some((parent.idx, parent.generation)),
            is_container: false,
            fade: None,
        });
        ElementId { idx, generation }
    }

    /// An element with no container anywhere above it.
    pub fn add_orphan_element(&mut self) -> ElementId {
        let (idx, generation) = self.alloc(Node {
            parent: None,
            is_container: false,
            fade: None,
        });
        ElementId { idx, generation }
    }

    fn remove(&mut self, idx: u32, generation: u32) {
        let Some(slot) = self.slots.get_mut(idx as usize) else {
            return;
        };
        if slot.generation != generation {
            return;
        }
        let node = slot.node.take();
        slot.generation = slot.generation.wrapping_add(1);
        if let Some(fade) = node.and_then(|node| node.fade) {
            // The attachment dies with its container.
            if let Some(fade_slot) = self.fades.get_mut(fade.idx as usize) {
                fade_slot.generation = fade_slot.generation.wrapping_add(1);
                fade_slot.alpha = None;
            }
        }
        self.free.push(idx);
    }

    pub fn remove_group(&mut self, container: ContainerId) {
        self.remove(container.idx, container.generation);
    }

    pub fn remove_element(&mut self, element: ElementId) {
        self.remove(element.idx, element.generation);
    }

    /// Queues `element` for rebuild this frame, as the engine would when the
    /// element's layout or visual state is invalidated.
    pub fn mark_needs_rebuild(&mut self, element: ElementId) {
        let entry = RebuildEntry::Element(element);
        if !self.pending.contains(&entry) {
            self.pending.push(entry);
        }
    }

    /// Queues something the overlay has no handler for.
    pub fn enqueue_foreign(&mut self, kind: &'static str) {
        self.pending.push(RebuildEntry::Foreign { kind });
    }

    pub fn pending_rebuilds(&self) -> usize {
        self.pending.len()
    }

    /// One frame boundary: fires the pre-render signal with the queue still
    /// populated, then processes it (here: just clears it, as the real engine
    /// does once rebuilds are flushed).
    pub fn render_frame(&mut self, signal: &mut PreRenderSignal, now: f32) {
        let queue = std::mem::take(&mut self.pending);
        signal.emit(&queue, self, now);
    }

    /// Current alpha of the container's opacity control, if one was attached.
    pub fn group_alpha(&self, container: ContainerId) -> Option<f32> {
        let node = self.node(container.idx, container.generation)?;
        let fade = node.fade?;
        self.fades.get(fade.idx as usize)?.alpha
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }
}

impl HostTree for SceneTree {
    fn element_alive(&self, element: ElementId) -> bool {
        self.node(element.idx, element.generation)
            .is_some_and(|node| !node.is_container)
    }

    fn container_of(&self, element: ElementId) -> Option<ContainerId> {
        let node = self.node(element.idx, element.generation)?;
        let mut parent = node.parent;
        while let Some((idx, generation)) = parent {
            let node = self.node(idx, generation)?;
            if node.is_container {
                return Some(ContainerId { idx, generation });
            }
            parent = node.parent;
        }
        None
    }

    fn container_alive(&self, container: ContainerId) -> bool {
        self.node(container.idx, container.generation)
            .is_some_and(|node| node.is_container)
    }

    fn ensure_fade(&mut self, container: ContainerId) -> Option<FadeId> {
        let slot = self.slots.get(container.idx as usize)?;
        if slot.generation != container.generation {
            return None;
        }
        let node = slot.node.as_ref()?;
        if !node.is_container {
            return None;
        }
        if let Some(fade) = node.fade {
            return Some(fade);
        }

        let idx = self.fades.len() as u32;
        self.fades.push(FadeSlot {
            generation: 0,
            alpha: Some(1.0),
        });
        let fade = FadeId { idx, generation: 0 };
        if let Some(node) = self.slots[container.idx as usize].node.as_mut() {
            node.fade = Some(fade);
        }
        Some(fade)
    }

    fn set_fade_alpha(&mut self, fade: FadeId, alpha: f32) {
        if let Some(slot) = self.fades.get_mut(fade.idx as usize) {
            if slot.generation == fade.generation && slot.alpha.is_some() {
                slot.alpha = Some(alpha);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_a_node_invalidates_its_handle() {
        let mut scene = SceneTree::new();
        let group = scene.add_group(None);
        let element = scene.add_element(group);

        assert!(scene.element_alive(element));
        scene.remove_element(element);
        assert!(!scene.element_alive(element));

        // The slot is reused with a new generation; the old handle stays dead.
        let replacement = scene.add_element(group);
        assert_eq!(replacement.idx, element.idx);
        assert!(!scene.element_alive(element));
        assert!(scene.element_alive(replacement));
    }

    #[test]
    fn container_of_finds_nearest_ancestor_container() {
        let mut scene = SceneTree::new();
        let outer = scene.add_group(None);
        let inner = scene.add_group(Some(outer));
        let element = scene.add_element(inner);
        let nested = scene.add_child_element(element);

        assert_eq!(scene.container_of(element), Some(inner));
        assert_eq!(scene.container_of(nested), Some(inner));
    }

    #[test]
    fn container_of_is_none_for_orphans_and_broken_chains() {
        let mut scene = SceneTree::new();
        let orphan = scene.add_orphan_element();
        assert_eq!(scene.container_of(orphan), None);

        let group = scene.add_group(None);
        let element = scene.add_element(group);
        scene.remove_group(group);
        assert_eq!(scene.container_of(element), None);
    }

    #[test]
    fn ensure_fade_reuses_the_existing_attachment() {
        let mut scene = SceneTree::new();
        let group = scene.add_group(None);

        let first = scene.ensure_fade(group).unwrap();
        let second = scene.ensure_fade(group).unwrap();
        assert_eq!(first, second);
        assert_eq!(scene.group_alpha(group), Some(1.0));
    }

    #[test]
    fn stale_fade_writes_are_ignored() {
        let mut scene = SceneTree::new();
        let group = scene.add_group(None);
        let fade = scene.ensure_fade(group).unwrap();

        scene.remove_group(group);
        scene.set_fade_alpha(fade, 0.5);
        assert_eq!(scene.group_alpha(group), None);
    }

    #[test]
    fn mark_needs_rebuild_dedupes_within_a_frame() {
        let mut scene = SceneTree::new();
        let group = scene.add_group(None);
        let element = scene.add_element(group);

        scene.mark_needs_rebuild(element);
        scene.mark_needs_rebuild(element);
        assert_eq!(scene.pending_rebuilds(), 1);
    }
}
