//! Colors, strings and timing supplied when a surface is built.

use std::time::Duration;

use crate::color::Rgb;

/// Duration shared by every reveal transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(175);

mod colors {
    use super::Rgb;

    pub const PRIMARY_START: Rgb = Rgb::new(0, 135, 249);
    pub const PRIMARY_END: Rgb = Rgb::new(86, 198, 255);
    pub const SECONDARY_START: Rgb = Rgb::new(173, 181, 190);
    pub const SECONDARY_END: Rgb = Rgb::new(217, 216, 223);
    pub const PRIMARY_TRACK: Rgb = Rgb::new(73, 176, 251);
    pub const SECONDARY_TRACK: Rgb = Rgb::new(202, 206, 211);
}

pub const SWIPE_DOWN_FOR_ARCHIVE: &str = "Swipe down for archive";
pub const RELEASE_FOR_ARCHIVE: &str = "Release for archive";

/// Two-stop horizontal gradient: `start` at the left edge, `end` at the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStops {
    pub start: Rgb,
    pub end: Rgb,
}

impl GradientStops {
    #[must_use]
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Color at `fraction` of the way from the left edge.
    #[must_use]
    pub fn color_at(&self, fraction: f64) -> Rgb {
        self.start.lerp(self.end, fraction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPalette {
    pub primary_gradient: GradientStops,
    pub secondary_gradient: GradientStops,
    /// Pill behind the primary indicator badge.
    pub primary_track: Rgb,
    pub secondary_track: Rgb,
    pub badge: Rgb,
    pub label: Rgb,
}

impl Default for RevealPalette {
    fn default() -> Self {
        Self {
            primary_gradient: GradientStops::new(colors::PRIMARY_START, colors::PRIMARY_END),
            secondary_gradient: GradientStops::new(colors::SECONDARY_START, colors::SECONDARY_END),
            primary_track: colors::PRIMARY_TRACK,
            secondary_track: colors::SECONDARY_TRACK,
            badge: Rgb::WHITE,
            label: Rgb::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStrings {
    /// Shown while collapsed.
    pub swipe: String,
    /// Shown while expanding.
    pub release: String,
}

impl Default for RevealStrings {
    fn default() -> Self {
        Self {
            swipe: SWIPE_DOWN_FOR_ARCHIVE.to_string(),
            release: RELEASE_FOR_ARCHIVE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTheme {
    pub palette: RevealPalette,
    pub strings: RevealStrings,
    pub transition: Duration,
}

impl Default for RevealTheme {
    fn default() -> Self {
        Self {
            palette: RevealPalette::default(),
            strings: RevealStrings::default(),
            transition: DEFAULT_TRANSITION,
        }
    }
}
