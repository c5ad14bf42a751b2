//! Decay evaluation: a group is either at full opacity or dimmed, nothing in
//! between.

pub const FULL_ALPHA: f32 = 1.0;
pub const DIMMED_ALPHA: f32 = 0.5;

/// Jitter tolerance for the "dirtied since the previous tick" comparison.
pub const TIME_EPSILON: f32 = f32::EPSILON;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Visibility {
    Full,
    Dimmed,
}

impl Visibility {
    pub fn alpha(self) -> f32 {
        match self {
            Self::Full => FULL_ALPHA,
            Self::Dimmed => DIMMED_ALPHA,
        }
    }
}

/// A group dirtied at or after the start of the previous tick stays dimmed,
/// so a single burst of rebuilds remains visible for roughly one full tick
/// interval instead of flickering for one frame.
pub fn evaluate(last_dirty: f32, prev_tick: f32) -> Visibility {
    if last_dirty >= prev_tick - TIME_EPSILON {
        Visibility::Dimmed
    } else {
        Visibility::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirty_at_or_after_the_previous_tick_dims() {
        assert_eq!(evaluate(1.0, 1.0), Visibility::Dimmed);
        assert_eq!(evaluate(1.5, 1.0), Visibility::Dimmed);
    }

    #[test]
    fn dirty_before_the_previous_tick_restores() {
        assert_eq!(evaluate(0.5, 1.0), Visibility::Full);
    }

    #[test]
    fn epsilon_absorbs_float_jitter() {
        assert_eq!(evaluate(1.0 - f32::EPSILON, 1.0), Visibility::Dimmed);
    }

    #[test]
    fn only_two_alphas_exist() {
        assert_eq!(Visibility::Full.alpha(), FULL_ALPHA);
        assert_eq!(Visibility::Dimmed.alpha(), DIMMED_ALPHA);
    }
}
