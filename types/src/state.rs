use crate::geometry::Rect;

/// Glyph angle, in degrees, while the overlay rests collapsed.
pub const COLLAPSED_GLYPH_ANGLE: f64 = 180.0;

/// Glyph angle, in degrees, while the user pulls past the threshold.
///
/// A full reverse turn rather than 0 so repeated expand calls keep spinning.
pub const EXPANDED_GLYPH_ANGLE: f64 = -360.0;

/// Interaction phase reported by the host scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RevealState {
    /// Resting or pulling below the threshold.
    #[default]
    Collapsed,
    /// Pulling past the threshold, not yet released.
    Expanding,
    /// Released past the threshold. `trigger` is the indicator badge rectangle
    /// at release time, in surface coordinates.
    Triggered { trigger: Rect },
}

impl RevealState {
    #[must_use]
    pub fn triggered(trigger: Rect) -> Self {
        Self::Triggered { trigger }
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        matches!(self, Self::Triggered { .. })
    }

    /// Absolute glyph rotation this state asks for; `None` keeps the current one.
    #[must_use]
    pub fn glyph_angle(&self) -> Option<f64> {
        match self {
            Self::Collapsed => Some(COLLAPSED_GLYPH_ANGLE),
            Self::Expanding => Some(EXPANDED_GLYPH_ANGLE),
            Self::Triggered { .. } => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Collapsed => "collapsed",
            Self::Expanding => "expanding",
            Self::Triggered { .. } => "triggered",
        }
    }
}
