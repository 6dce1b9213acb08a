//! Circular-mask geometry.
//!
//! The covering shape is a circle (a square with half-side corners) whose
//! side is twice the diagonal of the layer bounds, centered on the trigger.
//! Any trigger inside the bounds therefore covers every point of the layer.

use std::time::Duration;

use reveal_types::{Rect, RoundedRect, Size};

use crate::effects::{MaskTransition, TransitionKind};

/// Side of the full-coverage square for a layer of `bounds`.
#[must_use]
pub fn full_cover_side(bounds: Rect) -> f64 {
    bounds.diagonal() * 2.0
}

/// The trigger rectangle itself, rounded to a pill by half its width.
#[must_use]
pub fn pinched_shape(trigger: Rect) -> RoundedRect {
    RoundedRect::new(trigger, trigger.width / 2.0)
}

#[must_use]
pub fn covering_shape(bounds: Rect, trigger: Rect) -> RoundedRect {
    let side = full_cover_side(bounds);
    RoundedRect::new(
        Rect::centered_on(trigger.center(), Size::square(side)),
        side / 2.0,
    )
}

/// Endpoints for a transition of `kind`: expand grows pinched to covering,
/// collapse and trigger shrink covering to pinched.
#[must_use]
pub fn endpoints(kind: TransitionKind, bounds: Rect, trigger: Rect) -> (RoundedRect, RoundedRect) {
    let pinched = pinched_shape(trigger);
    let covering = covering_shape(bounds, trigger);
    match kind {
        TransitionKind::Expand => (pinched, covering),
        TransitionKind::Collapse | TransitionKind::Trigger => (covering, pinched),
    }
}

#[must_use]
pub fn mask_transition(
    kind: TransitionKind,
    bounds: Rect,
    trigger: Rect,
    duration: Duration,
) -> MaskTransition {
    let (from, to) = endpoints(kind, bounds, trigger);
    MaskTransition::new(kind, from, to, duration)
}
