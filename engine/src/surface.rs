//! The reveal overlay surface and its three-state machine.
//!
//! # Lifecycle
//!
//! ```text
//! Collapsed --apply(Expanding)--> Expanding --apply(Collapsed)--> Collapsed
//!     \                               /
//!      +--apply(Triggered(rect))-----+--> Triggered (terminal for the cycle)
//! ```
//!
//! `apply` updates bookkeeping synchronously and schedules animations. Time
//! only moves in [`RevealSurface::advance`], which delivers finished
//! transitions back to the surface so it can apply their z-order side effects
//! and, for a trigger, detach the layers and fire the completion.

use std::fmt;
use std::mem;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, trace};

use reveal_types::{COLLAPSED_GLYPH_ANGLE, Rect, RevealState, RevealTheme};

use crate::effects::TransitionKind;
use crate::indicator::Indicator;
use crate::layers::{GradientLayer, LABEL_BOTTOM_OFFSET, LABEL_HEIGHT, Label, LayerRole};
use crate::mask;

/// Indicator band as fractions of the surface bounds: x, y, width, height.
const INDICATOR_BAND: (f64, f64, f64, f64) = (0.07, 0.06, 0.06, 0.88);

const LOWER_Z: i32 = 0;
const UPPER_Z: i32 = 1;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("a completion handler is already registered for this reveal cycle")]
    CompletionPending,
}

/// Serialized view state a platform might try to restore a surface from.
#[derive(Debug, Clone, Default)]
pub struct ArchivedView {
    pub bytes: Vec<u8>,
}

/// Ways to build a [`RevealSurface`].
#[derive(Debug)]
pub enum Construction {
    Programmatic { bounds: Rect, theme: RevealTheme },
    /// Restoring from archived UI state is not supported. Passing this to
    /// [`RevealSurface::construct`] panics.
    Restored(ArchivedView),
}

type CompletionHandler = Box<dyn FnOnce(&mut RevealSurface)>;

pub struct RevealSurface {
    bounds: Rect,
    theme: RevealTheme,
    state: RevealState,
    primary: GradientLayer,
    secondary: GradientLayer,
    label: Label,
    reduced_motion: bool,
    transitions_started: u64,
    completion: Option<CompletionHandler>,
    signal: Option<oneshot::Sender<()>>,
}

impl fmt::Debug for RevealSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealSurface")
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("primary", &self.primary)
            .field("secondary", &self.secondary)
            .field("label", &self.label)
            .field("reduced_motion", &self.reduced_motion)
            .field("transitions_started", &self.transitions_started)
            .field("completion", &self.completion.as_ref().map(|_| "<handler>"))
            .field("signal", &self.signal.is_some())
            .finish_non_exhaustive()
    }
}

impl RevealSurface {
    #[must_use]
    pub fn new(bounds: Rect, theme: RevealTheme) -> Self {
        let palette = &theme.palette;
        let primary = GradientLayer::new(
            LayerRole::Primary,
            palette.primary_gradient,
            Indicator::new(
                palette.primary_track,
                palette.badge,
                palette.primary_gradient.start,
            ),
            LOWER_Z,
        );
        let secondary = GradientLayer::new(
            LayerRole::Secondary,
            palette.secondary_gradient,
            Indicator::new(
                palette.secondary_track,
                palette.badge,
                palette.secondary_gradient.start,
            ),
            UPPER_Z,
        );
        let label = Label::new(theme.strings.swipe.as_str(), palette.label);

        let mut surface = Self {
            bounds,
            theme,
            state: RevealState::Collapsed,
            primary,
            secondary,
            label,
            reduced_motion: false,
            transitions_started: 0,
            completion: None,
            signal: None,
        };
        surface.layout();
        surface
    }

    /// Build a surface from a [`Construction`].
    ///
    /// # Panics
    ///
    /// Panics on [`Construction::Restored`]: this view is never restored from
    /// serialized UI state.
    #[must_use]
    pub fn construct(construction: Construction) -> Self {
        match construction {
            Construction::Programmatic { bounds, theme } => Self::new(bounds, theme),
            Construction::Restored(_) => {
                panic!("RevealSurface cannot be restored from archived view state")
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub fn theme(&self) -> &RevealTheme {
        &self.theme
    }

    #[must_use]
    pub fn primary(&self) -> &GradientLayer {
        &self.primary
    }

    #[must_use]
    pub fn secondary(&self) -> &GradientLayer {
        &self.secondary
    }

    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Attached gradient layers, back to front. Ties keep the primary first.
    #[must_use]
    pub fn paint_order(&self) -> Vec<&GradientLayer> {
        let mut layers: Vec<&GradientLayer> = [&self.primary, &self.secondary]
            .into_iter()
            .filter(|layer| layer.is_attached())
            .collect();
        layers.sort_by_key(|layer| layer.z_index());
        layers
    }

    /// Primary indicator badge in surface coordinates: the default anchor for
    /// mask transitions and what a host reports when the user releases.
    #[must_use]
    pub fn indicator_badge_rect(&self) -> Rect {
        self.primary.indicator().badge_rect_in_parent()
    }

    /// Number of transitions scheduled since construction.
    #[must_use]
    pub fn transitions_started(&self) -> u64 {
        self.transitions_started
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.primary.is_animating() || self.secondary.is_animating() || self.label.is_sliding()
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// With reduced motion every new transition settles on the next advance.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    /// Host-driven layout. Frames snap immediately; an in-flight mask keeps
    /// its progress with endpoints recomputed for the new bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.layout();
    }

    fn layout(&mut self) {
        let bounds = self.bounds;
        let (x, y, width, height) = INDICATOR_BAND;
        let indicator = Rect::new(
            bounds.x + bounds.width * x,
            bounds.y + bounds.height * y,
            bounds.width * width,
            bounds.height * height,
        );
        self.primary.set_frame(bounds, indicator);
        self.secondary.set_frame(bounds, indicator);
        self.label.set_frame(Rect::new(
            bounds.x,
            bounds.max_y() - LABEL_BOTTOM_OFFSET,
            bounds.width,
            LABEL_HEIGHT,
        ));

        let trigger = match self.state {
            RevealState::Triggered { trigger } => trigger,
            RevealState::Collapsed | RevealState::Expanding => self.indicator_badge_rect(),
        };
        if let Some(mask) = self.primary.mask_mut() {
            let (from, to) = mask::endpoints(mask.kind(), bounds, trigger);
            mask.retarget(from, to);
        }
        trace!(?bounds, "Reveal surface laid out");
    }

    /// Register the handler fired once the trigger animation finishes. It
    /// receives the surface, so it may call [`RevealSurface::apply`].
    pub fn set_completion<F>(&mut self, handler: F) -> Result<(), SurfaceError>
    where
        F: FnOnce(&mut RevealSurface) + 'static,
    {
        if self.completion.is_some() {
            return Err(SurfaceError::CompletionPending);
        }
        self.completion = Some(Box::new(handler));
        Ok(())
    }

    #[must_use]
    pub fn has_completion(&self) -> bool {
        self.completion.is_some()
    }

    /// Single-shot channel resolved alongside the completion handler. A new
    /// call replaces (and closes) the previous receiver.
    pub fn completion_signal(&mut self) -> oneshot::Receiver<()> {
        let (tx, rx) = oneshot::channel();
        self.signal = Some(tx);
        rx
    }

    /// Report the observed interaction phase. Equal states are ignored.
    pub fn apply(&mut self, state: RevealState) {
        if state == self.state {
            return;
        }

        if self.state.is_triggered() && !state.is_triggered() {
            debug!(to = state.name(), "Leaving triggered state, rebuilding baseline");
            self.restore_baseline();
        }

        let default_trigger = self.indicator_badge_rect();
        let previous = mem::replace(&mut self.state, state);
        debug!(from = previous.name(), to = state.name(), "Reveal state changed");

        let duration = self.transition_duration();
        match state {
            RevealState::Collapsed => {
                self.begin_mask(TransitionKind::Collapse, default_trigger);
                self.rotate_indicators(duration);
                self.label.set_text(&self.theme.strings.swipe);
                self.label.slide_in_from_right(duration);
            }
            RevealState::Expanding => {
                self.begin_mask(TransitionKind::Expand, default_trigger);
                self.rotate_indicators(duration);
                self.label.set_text(&self.theme.strings.release);
                self.label.slide_in_from_left(duration);
            }
            RevealState::Triggered { trigger } => {
                self.begin_mask(TransitionKind::Trigger, trigger);
                self.label.slide_out_left(duration);
            }
        }
    }

    /// Advance every running animation by `delta` and deliver finished
    /// transitions. Returns whether anything is still animating.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.label.advance(delta);
        let finished = [self.primary.advance(delta), self.secondary.advance(delta)];
        for kind in finished.into_iter().flatten() {
            self.on_transition_finished(kind);
        }
        self.is_animating()
    }

    /// Return to the resting composition without animating. A registered
    /// completion handler stays registered.
    pub fn reset(&mut self) {
        self.restore_baseline();
        self.state = RevealState::Collapsed;
        debug!("Reveal surface reset");
    }

    fn restore_baseline(&mut self) {
        for (layer, z_index) in [(&mut self.primary, LOWER_Z), (&mut self.secondary, UPPER_Z)] {
            layer.attach();
            layer.set_z_index(z_index);
            layer.clear_mask();
            layer.indicator_mut().settle_rotation(COLLAPSED_GLYPH_ANGLE);
        }
        self.label.set_text(&self.theme.strings.swipe);
        self.label.rest();
    }

    fn transition_duration(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.theme.transition
        }
    }

    fn rotate_indicators(&mut self, duration: Duration) {
        let Some(angle) = self.state.glyph_angle() else {
            return;
        };
        self.primary.indicator_mut().set_rotation(angle, duration);
        self.secondary.indicator_mut().set_rotation(angle, duration);
    }

    fn begin_mask(&mut self, kind: TransitionKind, trigger: Rect) {
        let transition =
            mask::mask_transition(kind, self.bounds, trigger, self.transition_duration());
        if let Some(previous) = self.primary.replace_mask(transition)
            && previous.is_pending()
        {
            trace!(superseded = ?previous.kind(), by = ?kind, "Mask transition superseded");
        }
        self.transitions_started += 1;
        self.on_transition_started(kind);
    }

    fn on_transition_started(&mut self, kind: TransitionKind) {
        match kind {
            TransitionKind::Collapse => {}
            TransitionKind::Expand => {
                self.primary.set_z_index(UPPER_Z);
                self.secondary.set_z_index(LOWER_Z);
                trace!("Primary layer promoted");
            }
            TransitionKind::Trigger => {
                self.secondary.detach();
                trace!("Secondary layer detached");
            }
        }
    }

    fn on_transition_finished(&mut self, kind: TransitionKind) {
        match kind {
            TransitionKind::Collapse => {
                self.primary.set_z_index(LOWER_Z);
                self.secondary.set_z_index(UPPER_Z);
                trace!("Layer order reset");
            }
            TransitionKind::Expand => {
                self.primary.set_z_index(UPPER_Z);
            }
            TransitionKind::Trigger => {
                self.primary.detach();
                debug!("Reveal finished, firing completion");
                if let Some(signal) = self.signal.take() {
                    let _ = signal.send(());
                }
                if let Some(handler) = self.completion.take() {
                    handler(self);
                }
            }
        }
    }
}
