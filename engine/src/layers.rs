//! Retained layer tree owned by the reveal surface.

use std::time::Duration;

use reveal_types::{GradientStops, Point, Rect, Rgb, RoundedRect};

use crate::effects::{LabelSlide, MaskTransition, TransitionKind};
use crate::indicator::Indicator;

pub const LABEL_HEIGHT: f64 = 16.0;
/// Distance from the surface's bottom edge to the label's top edge.
pub const LABEL_BOTTOM_OFFSET: f64 = 26.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// Blue gradient revealed by the mask while pulling.
    Primary,
    /// Gray gradient shown at rest.
    Secondary,
}

/// Full-bounds horizontal gradient carrying one indicator and an optional
/// circular mask.
#[derive(Debug, Clone)]
pub struct GradientLayer {
    role: LayerRole,
    frame: Rect,
    stops: GradientStops,
    z_index: i32,
    attached: bool,
    indicator: Indicator,
    mask: Option<MaskTransition>,
}

impl GradientLayer {
    #[must_use]
    pub fn new(role: LayerRole, stops: GradientStops, indicator: Indicator, z_index: i32) -> Self {
        Self {
            role,
            frame: Rect::default(),
            stops,
            z_index,
            attached: true,
            indicator,
            mask: None,
        }
    }

    #[must_use]
    pub fn role(&self) -> LayerRole {
        self.role
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[must_use]
    pub fn stops(&self) -> GradientStops {
        self.stops
    }

    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut Indicator {
        &mut self.indicator
    }

    #[must_use]
    pub fn mask(&self) -> Option<&MaskTransition> {
        self.mask.as_ref()
    }

    /// Current clipping shape; `None` means unmasked.
    #[must_use]
    pub fn mask_shape(&self) -> Option<RoundedRect> {
        self.mask.as_ref().map(MaskTransition::shape)
    }

    /// Whether the layer paints at `point`: attached, inside its frame and
    /// inside the mask if there is one.
    #[must_use]
    pub fn covers(&self, point: Point) -> bool {
        self.attached
            && self.frame.contains(point)
            && self.mask_shape().is_none_or(|shape| shape.contains(point))
    }

    /// Gradient color at the horizontal position `x`.
    #[must_use]
    pub fn color_at(&self, x: f64) -> Rgb {
        if self.frame.width <= 0.0 {
            return self.stops.start;
        }
        self.stops.color_at((x - self.frame.x) / self.frame.width)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.indicator.is_rotating() || self.mask.as_ref().is_some_and(MaskTransition::is_pending)
    }

    pub(crate) fn set_frame(&mut self, frame: Rect, indicator_frame: Rect) {
        self.frame = frame;
        self.indicator.set_frame(indicator_frame);
    }

    pub(crate) fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    pub(crate) fn attach(&mut self) {
        self.attached = true;
    }

    pub(crate) fn detach(&mut self) {
        self.attached = false;
    }

    /// Install a new mask transition, returning the one it replaces.
    pub(crate) fn replace_mask(&mut self, mask: MaskTransition) -> Option<MaskTransition> {
        self.mask.replace(mask)
    }

    pub(crate) fn clear_mask(&mut self) {
        self.mask = None;
    }

    pub(crate) fn mask_mut(&mut self) -> Option<&mut MaskTransition> {
        self.mask.as_mut()
    }

    /// Advance indicator and mask; yields the mask's kind when it finishes.
    pub(crate) fn advance(&mut self, delta: Duration) -> Option<TransitionKind> {
        self.indicator.advance(delta);
        self.mask.as_mut().and_then(|mask| mask.advance(delta))
    }
}

/// Overlay text drawn above both gradients.
#[derive(Debug, Clone)]
pub struct Label {
    frame: Rect,
    text: String,
    color: Rgb,
    slide: LabelSlide,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            frame: Rect::default(),
            text: text.into(),
            color,
            slide: LabelSlide::at_rest(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Resting frame.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Horizontal displacement from the resting position.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.slide.offset()
    }

    /// Center currently on screen.
    #[must_use]
    pub fn center(&self) -> Point {
        let rest = self.frame.center();
        Point::new(rest.x + self.offset(), rest.y)
    }

    #[must_use]
    pub fn slide(&self) -> &LabelSlide {
        &self.slide
    }

    #[must_use]
    pub fn is_sliding(&self) -> bool {
        !self.slide.is_finished()
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Enter from the right: the center starts at `x = width`.
    pub(crate) fn slide_in_from_right(&mut self, duration: Duration) {
        let from = self.frame.width - self.frame.width / 2.0;
        self.slide = LabelSlide::new(from, 0.0, duration);
    }

    /// Enter from the left: the center starts at `x = -width`.
    pub(crate) fn slide_in_from_left(&mut self, duration: Duration) {
        self.slide = LabelSlide::new(self.off_left_offset(), 0.0, duration);
    }

    /// Leave to the left and stay there.
    pub(crate) fn slide_out_left(&mut self, duration: Duration) {
        self.slide = LabelSlide::new(self.offset(), self.off_left_offset(), duration);
    }

    pub(crate) fn rest(&mut self) {
        self.slide = LabelSlide::at_rest();
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.slide.advance(delta);
    }

    fn off_left_offset(&self) -> f64 {
        -self.frame.width - self.frame.width / 2.0
    }
}
