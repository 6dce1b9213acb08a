//! Pull indicator: a pill track with a circular badge at its bottom holding a
//! directional arrow glyph.

use std::time::Duration;

use reveal_types::{COLLAPSED_GLYPH_ANGLE, Point, Rect, Rgb, RoundedRect};

use crate::effects::RotationTween;

/// Glyph side as a fraction of the badge side.
pub const GLYPH_SCALE: f64 = 0.65;

#[derive(Debug, Clone)]
pub struct Indicator {
    /// Frame in the owning layer's coordinate space.
    frame: Rect,
    track_color: Rgb,
    badge_color: Rgb,
    tint: Rgb,
    rotation: RotationTween,
}

impl Indicator {
    #[must_use]
    pub fn new(track_color: Rgb, badge_color: Rgb, tint: Rgb) -> Self {
        Self {
            frame: Rect::default(),
            track_color,
            badge_color,
            tint,
            rotation: RotationTween::settled(COLLAPSED_GLYPH_ANGLE),
        }
    }

    /// Recolor the glyph. Badge and track keep their colors.
    pub fn set_tint(&mut self, tint: Rgb) {
        self.tint = tint;
    }

    #[must_use]
    pub fn tint(&self) -> Rgb {
        self.tint
    }

    #[must_use]
    pub fn track_color(&self) -> Rgb {
        self.track_color
    }

    #[must_use]
    pub fn badge_color(&self) -> Rgb {
        self.badge_color
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Track pill in parent coordinates.
    #[must_use]
    pub fn track(&self) -> RoundedRect {
        RoundedRect::new(self.frame, self.frame.width / 2.0)
    }

    /// Badge square in the indicator's own coordinates: as wide as the view
    /// and flush with its bottom edge.
    #[must_use]
    pub fn badge_rect(&self) -> Rect {
        let side = self.frame.width;
        Rect::new(0.0, self.frame.height - side, side, side)
    }

    /// Badge square in parent coordinates.
    #[must_use]
    pub fn badge_rect_in_parent(&self) -> Rect {
        self.badge_rect().offset(self.frame.x, self.frame.y)
    }

    #[must_use]
    pub fn badge_corner_radius(&self) -> f64 {
        self.badge_rect().width / 2.0
    }

    /// Badge circle in parent coordinates.
    #[must_use]
    pub fn badge(&self) -> RoundedRect {
        RoundedRect::new(self.badge_rect_in_parent(), self.badge_corner_radius())
    }

    /// Glyph square in badge coordinates.
    #[must_use]
    pub fn glyph_rect(&self) -> Rect {
        let badge = self.badge_rect().width;
        let side = badge * GLYPH_SCALE;
        let inset = (badge - side) / 2.0;
        Rect::new(inset, inset, side, side)
    }

    /// Glyph center in parent coordinates.
    #[must_use]
    pub fn glyph_center(&self) -> Point {
        let badge = self.badge_rect_in_parent();
        self.glyph_rect().offset(badge.x, badge.y).center()
    }

    /// Rotate the glyph to an absolute angle, starting from where it is now.
    pub fn set_rotation(&mut self, degrees: f64, duration: Duration) {
        self.rotation = RotationTween::new(self.rotation.angle(), degrees, duration);
    }

    pub(crate) fn settle_rotation(&mut self, degrees: f64) {
        self.rotation = RotationTween::settled(degrees);
    }

    /// Glyph angle currently on screen.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation.angle()
    }

    #[must_use]
    pub fn rotation_target(&self) -> f64 {
        self.rotation.target()
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        !self.rotation.is_finished()
    }

    pub fn advance(&mut self, delta: Duration) {
        self.rotation.advance(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::Indicator;
    use reveal_types::{Point, Rect, Rgb};
    use std::time::Duration;

    fn indicator() -> Indicator {
        let mut indicator = Indicator::new(Rgb::new(73, 176, 251), Rgb::WHITE, Rgb::new(0, 135, 249));
        indicator.set_frame(Rect::new(7.0, 6.0, 6.0, 88.0));
        indicator
    }

    #[test]
    fn badge_is_flush_with_bottom() {
        let indicator = indicator();
        assert_eq!(indicator.badge_rect(), Rect::new(0.0, 82.0, 6.0, 6.0));
        assert_eq!(indicator.badge_rect_in_parent(), Rect::new(7.0, 88.0, 6.0, 6.0));
        assert!((indicator.badge_corner_radius() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn glyph_is_centered_at_sixty_five_percent() {
        let indicator = indicator();
        let glyph = indicator.glyph_rect();
        assert!((glyph.width - 3.9).abs() < 1e-9);
        assert!((glyph.x - 1.05).abs() < 1e-9);
        let center = indicator.glyph_center();
        let expected = Point::new(10.0, 91.0);
        assert!((center.x - expected.x).abs() < 1e-9);
        assert!((center.y - expected.y).abs() < 1e-9);
    }

    #[test]
    fn tint_leaves_badge_untouched() {
        let mut indicator = indicator();
        indicator.set_tint(Rgb::new(1, 2, 3));
        assert_eq!(indicator.tint(), Rgb::new(1, 2, 3));
        assert_eq!(indicator.badge_color(), Rgb::WHITE);
        assert_eq!(indicator.track_color(), Rgb::new(73, 176, 251));
    }

    #[test]
    fn starts_settled_upside_down() {
        let indicator = indicator();
        assert!(!indicator.is_rotating());
        assert!((indicator.rotation() - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rotation_animates_from_current_angle() {
        let mut indicator = indicator();
        indicator.set_rotation(-360.0, Duration::from_millis(100));
        assert!(indicator.is_rotating());
        indicator.advance(Duration::from_millis(50));
        let midway = indicator.rotation();
        assert!(midway < 180.0 && midway > -360.0);

        indicator.set_rotation(180.0, Duration::from_millis(100));
        assert!((indicator.rotation() - midway).abs() < f64::EPSILON);
        indicator.advance(Duration::from_millis(100));
        assert!((indicator.rotation() - 180.0).abs() < f64::EPSILON);
    }
}
