//! Core domain types for the archive reveal overlay.
//!
//! This crate contains pure data with no IO, no async, and minimal dependencies:
//! geometry, colors, reveal states, theme configuration and effect timers.

mod animation;
mod color;
mod geometry;
mod state;
mod theme;

pub use animation::{AnimPhase, Easing, EffectTimer, normalized_progress};
pub use color::{ColorParseError, Rgb};
pub use geometry::{Point, Rect, RoundedRect, Size};
pub use state::{COLLAPSED_GLYPH_ANGLE, EXPANDED_GLYPH_ANGLE, RevealState};
pub use theme::{
    DEFAULT_TRANSITION, GradientStops, RELEASE_FOR_ARCHIVE, RevealPalette, RevealStrings,
    RevealTheme, SWIPE_DOWN_FOR_ARCHIVE,
};
