//! Headless engine for the archive reveal overlay.
//!
//! A [`RevealSurface`] owns a small retained layer tree (two gradient layers,
//! each with an indicator, plus a label) and drives it through the
//! collapsed/expanding/triggered lifecycle. Hosts report interaction phases
//! with [`RevealSurface::apply`] and move time forward with
//! [`RevealSurface::advance`]; renderers read the tree back through the
//! accessors.

mod effects;
mod indicator;
mod layers;
pub mod mask;
mod surface;

pub use effects::{LabelSlide, MaskTransition, RotationTween, TransitionKind};
pub use indicator::{GLYPH_SCALE, Indicator};
pub use layers::{GradientLayer, LABEL_BOTTOM_OFFSET, LABEL_HEIGHT, Label, LayerRole};
pub use surface::{ArchivedView, Construction, RevealSurface, SurfaceError};

pub use reveal_types::{
    AnimPhase, COLLAPSED_GLYPH_ANGLE, DEFAULT_TRANSITION, EXPANDED_GLYPH_ANGLE, Easing,
    EffectTimer, GradientStops, Point, Rect, RevealPalette, RevealState, RevealStrings,
    RevealTheme, Rgb, RoundedRect, Size,
};
