use churnview::{
    ElementState, KeyCode, PhysicalKey, PreRenderSignal, Result, SceneTree, ToggleBinding,
    ToggleKey, TrackerHandle,
};

// Walks through the two ways of flipping the overlay: the keyboard toggle a
// host would feed window events into, and a checkbox-style binding.
fn main() -> Result<()> {
    churnview::init_logging();

    let mut scene = SceneTree::new();
    let mut signal = PreRenderSignal::new();
    let tracker = TrackerHandle::new();

    let toggle = ToggleKey::new(KeyCode::KeyV);
    let press = |toggle: &ToggleKey,
                 tracker: &TrackerHandle,
                 signal: &mut PreRenderSignal,
                 scene: &mut SceneTree| {
        toggle.on_key(
            PhysicalKey::Code(KeyCode::KeyV),
            ElementState::Pressed,
            tracker,
            signal,
            scene,
        );
    };

    press(&toggle, &tracker, &mut signal, &mut scene);
    println!("after first V press: enabled = {}", tracker.enabled());

    press(&toggle, &tracker, &mut signal, &mut scene);
    println!("after second V press: enabled = {}", tracker.enabled());

    let binding = ToggleBinding::attach(Some(&tracker)).expect("tracker exists");
    binding.set_on(true, &mut signal, &mut scene);
    println!("after checking the box: enabled = {}", binding.is_on());

    // A binding attached with no tracker around just warns and disables
    // itself; nothing to call afterwards.
    assert!(ToggleBinding::attach(None).is_none());

    Ok(())
}
