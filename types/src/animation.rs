//! Frame-rate independent effect timing.
//!
//! Timers never read the clock. Callers advance them with the delta since the
//! previous frame, which keeps every animation deterministic under test.

use std::time::Duration;

#[must_use]
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f64();
    let total = duration.as_secs_f64();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f64 },
    Completed,
}

/// Timing curve applied on top of linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Smoothstep: `3t^2 - 2t^3`.
    EaseInOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
            easing: Easing::Linear,
        }
    }

    /// A timer that is already finished.
    #[must_use]
    pub fn settled() -> Self {
        Self::new(Duration::ZERO)
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        normalized_progress(self.elapsed, self.duration)
    }

    /// Progress with the timer's easing curve applied.
    #[must_use]
    pub fn eased(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, Easing, EffectTimer, normalized_progress};
    use std::time::Duration;

    #[test]
    fn zero_duration_is_complete() {
        assert!((normalized_progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < f64::EPSILON);
        let timer = EffectTimer::settled();
        assert!(timer.is_finished());
        assert_eq!(timer.phase(), AnimPhase::Completed);
    }

    #[test]
    fn advance_keeps_running_until_duration() {
        let mut timer = EffectTimer::new(Duration::from_millis(200));
        timer.advance(Duration::from_millis(50));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if (progress - 0.25).abs() < 1e-9));
        timer.advance(Duration::from_millis(150));
        assert_eq!(timer.phase(), AnimPhase::Completed);
    }

    #[test]
    fn progress_clamped_at_one() {
        let mut timer = EffectTimer::new(Duration::from_millis(10));
        timer.advance(Duration::from_secs(5));
        assert!((timer.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let curve = Easing::EaseInOut;
        assert!(curve.apply(0.0).abs() < f64::EPSILON);
        assert!((curve.apply(0.5) - 0.5).abs() < 1e-9);
        assert!((curve.apply(1.0) - 1.0).abs() < f64::EPSILON);
        assert!(curve.apply(0.25) < 0.25);
        assert!(curve.apply(0.75) > 0.75);
    }

    #[test]
    fn eased_uses_timer_curve() {
        let mut timer = EffectTimer::new(Duration::from_millis(100)).with_easing(Easing::EaseInOut);
        timer.advance(Duration::from_millis(25));
        assert!(timer.eased() < timer.progress());
    }
}
