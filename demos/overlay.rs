use churnview::{FrameClock, PreRenderSignal, Result, SceneTree, TrackerHandle};

fn main() -> Result<()> {
    churnview::init_logging();

    let mut scene = SceneTree::new();
    let mut signal = PreRenderSignal::new();
    let tracker = TrackerHandle::new();
    tracker.set_enabled(true, &mut signal, &mut scene);

    let header = scene.add_group(None);
    let body = scene.add_group(None);
    let title = scene.add_element(header);
    let counter = scene.add_element(body);

    let clock = FrameClock::new();
    log::info!("rebuild overlay enabled, watching two groups");

    // The counter churns every frame for a while; the header stays quiet
    // after its first paint.
    scene.mark_needs_rebuild(title);
    for frame in 0..60 {
        scene.mark_needs_rebuild(counter);

        let now = clock.now();
        scene.render_frame(&mut signal, now);
        tracker.tick(now, &mut scene);

        if frame % 15 == 0 {
            println!(
                "frame {frame:2}: header alpha {:?}, body alpha {:?}",
                scene.group_alpha(header),
                scene.group_alpha(body),
            );
        }
        std::thread::sleep(std::time::Duration::from_millis(4));
    }

    // Let the churn die down and watch the body group recover.
    for _ in 0..3 {
        let now = clock.now();
        scene.render_frame(&mut signal, now);
        tracker.tick(now, &mut scene);
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
    println!(
        "settled: header alpha {:?}, body alpha {:?}",
        scene.group_alpha(header),
        scene.group_alpha(body),
    );

    Ok(())
}
