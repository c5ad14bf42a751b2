use churnview::{
    DIMMED_ALPHA, FULL_ALPHA, PreRenderSignal, SceneTree, ToggleBinding, TrackerHandle,
};

#[test]
fn shared_group_dims_then_recovers() {
    let mut scene = SceneTree::new();
    let mut signal = PreRenderSignal::new();
    let tracker = TrackerHandle::new();
    tracker.set_enabled(true, &mut signal, &mut scene);

    let group = scene.add_group(None);
    let a = scene.add_element(group);
    let b = scene.add_element(group);

    // One frame dirties both elements of the same group.
    scene.mark_needs_rebuild(a);
    scene.mark_needs_rebuild(b);
    scene.render_frame(&mut signal, 1.0);

    tracker.tick(1.0, &mut scene);
    assert_eq!(scene.group_alpha(group), Some(DIMMED_ALPHA));

    // A full quiet interval passes; the following tick restores the group.
    tracker.tick(1.1, &mut scene);
    tracker.tick(1.2, &mut scene);
    assert_eq!(scene.group_alpha(group), Some(FULL_ALPHA));

    assert_eq!(tracker.last_dirty(a), Some(1.0));
    assert_eq!(tracker.last_dirty(b), Some(1.0));
}

#[test]
fn quiet_frames_never_dim_anything() {
    let mut scene = SceneTree::new();
    let mut signal = PreRenderSignal::new();
    let tracker = TrackerHandle::new();
    tracker.set_enabled(true, &mut signal, &mut scene);

    let group = scene.add_group(None);
    let _element = scene.add_element(group);

    for frame in 0..5 {
        let now = frame as f32 * 0.1;
        scene.render_frame(&mut signal, now);
        tracker.tick(now, &mut scene);
    }

    // Nothing was ever dirtied, so no fade was ever attached.
    assert_eq!(scene.group_alpha(group), None);
}

#[test]
fn checkbox_binding_drives_the_whole_overlay() {
    let mut scene = SceneTree::new();
    let mut signal = PreRenderSignal::new();
    let tracker = TrackerHandle::new();

    let binding = ToggleBinding::attach(Some(&tracker)).expect("tracker exists");
    binding.set_on(true, &mut signal, &mut scene);

    let group = scene.add_group(None);
    let element = scene.add_element(group);
    scene.mark_needs_rebuild(element);
    scene.render_frame(&mut signal, 1.0);
    tracker.tick(1.0, &mut scene);
    assert_eq!(scene.group_alpha(group), Some(DIMMED_ALPHA));

    // Unchecking restores opacity immediately and stops observation.
    binding.set_on(false, &mut signal, &mut scene);
    assert_eq!(scene.group_alpha(group), Some(FULL_ALPHA));

    scene.mark_needs_rebuild(element);
    scene.render_frame(&mut signal, 2.0);
    assert_eq!(tracker.last_dirty(element), Some(1.0));
}
