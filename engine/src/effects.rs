//! Animation records scheduled by the reveal surface.
//!
//! Each record owns its own timer and interpolates between fixed endpoints.
//! Nothing here knows about layers; the surface decides what a finished
//! record means.

use std::time::Duration;

use reveal_types::{AnimPhase, Easing, EffectTimer, RoundedRect};

/// Which mask transition a record belongs to. Lifecycle side effects key off
/// this, not off whatever state the surface is in when the record finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Full coverage down to the indicator badge.
    Collapse,
    /// Indicator badge up to full coverage.
    Expand,
    /// Full coverage down to the release rectangle; ends the reveal cycle.
    Trigger,
}

/// Circular-mask tween between two rounded rectangles.
#[derive(Debug, Clone)]
pub struct MaskTransition {
    kind: TransitionKind,
    from: RoundedRect,
    to: RoundedRect,
    timer: EffectTimer,
    finish_reported: bool,
}

impl MaskTransition {
    #[must_use]
    pub fn new(kind: TransitionKind, from: RoundedRect, to: RoundedRect, duration: Duration) -> Self {
        Self {
            kind,
            from,
            to,
            timer: EffectTimer::new(duration),
            finish_reported: false,
        }
    }

    /// Advance the tween. Returns the kind exactly once, on the first call
    /// that observes the timer finished.
    pub fn advance(&mut self, delta: Duration) -> Option<TransitionKind> {
        self.timer.advance(delta);
        if self.timer.is_finished() && !self.finish_reported {
            self.finish_reported = true;
            return Some(self.kind);
        }
        None
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn from(&self) -> RoundedRect {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> RoundedRect {
        self.to
    }

    /// Mask shape at the current progress. Once finished the mask holds `to`.
    #[must_use]
    pub fn shape(&self) -> RoundedRect {
        RoundedRect::lerp(&self.from, &self.to, self.timer.eased())
    }

    /// True while the finished notification has not been delivered yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.finish_reported
    }

    pub(crate) fn retarget(&mut self, from: RoundedRect, to: RoundedRect) {
        self.from = from;
        self.to = to;
    }
}

/// Eased tween of a glyph rotation, in degrees.
#[derive(Debug, Clone)]
pub struct RotationTween {
    from: f64,
    to: f64,
    timer: EffectTimer,
}

impl RotationTween {
    #[must_use]
    pub fn settled(angle: f64) -> Self {
        Self {
            from: angle,
            to: angle,
            timer: EffectTimer::settled(),
        }
    }

    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            timer: EffectTimer::new(duration).with_easing(Easing::EaseInOut),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.from + (self.to - self.from) * self.timer.eased()
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

/// Horizontal label slide, expressed as offsets from the label's resting
/// center so a relayout mid-slide keeps the motion anchored.
#[derive(Debug, Clone)]
pub struct LabelSlide {
    from_offset: f64,
    to_offset: f64,
    timer: EffectTimer,
}

impl LabelSlide {
    #[must_use]
    pub fn at_rest() -> Self {
        Self {
            from_offset: 0.0,
            to_offset: 0.0,
            timer: EffectTimer::settled(),
        }
    }

    #[must_use]
    pub fn new(from_offset: f64, to_offset: f64, duration: Duration) -> Self {
        Self {
            from_offset,
            to_offset,
            timer: EffectTimer::new(duration).with_easing(Easing::EaseInOut),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.from_offset + (self.to_offset - self.from_offset) * self.timer.eased()
    }

    #[must_use]
    pub fn from_offset(&self) -> f64 {
        self.from_offset
    }

    #[must_use]
    pub fn to_offset(&self) -> f64 {
        self.to_offset
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
