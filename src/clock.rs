use std::time::Instant;

/// Monotonic seconds since startup, the time base every dirty timestamp and
/// tick reference is expressed in.
pub struct FrameClock {
    start: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}
