//! Pull-to-reveal host: turns key presses into a pull distance and reports
//! the matching reveal state to the surface.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::oneshot;
use tracing::{debug, info};

use reveal_engine::{Rect, RevealState, RevealSurface, RevealTheme};
use reveal_tui::{HostCommand, RenderOptions, Scene};

/// Logical points per terminal column.
pub const POINTS_PER_COLUMN: f64 = 8.0;
/// Logical points per terminal row.
pub const POINTS_PER_ROW: f64 = 16.0;

const PULL_STEP: f64 = 24.0;
const MAX_PULL: f64 = 240.0;
/// Pull distance at which the host reports `Expanding`.
pub const EXPAND_THRESHOLD: f64 = 96.0;
/// Points per second the list rides back up once the user stops pulling.
const RELAX_RATE: f64 = 240.0;
const RELAX_DELAY: Duration = Duration::from_millis(600);

const CHATS: &[&str] = &[
    "Saved Messages",
    "Design review",
    "Mom",
    "Rust in Production",
    "Weekend hike",
    "Build bot",
];
const ARCHIVED_CHATS: &[&str] = &["Old project", "Conference 2023", "Flat hunting"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct PullHost {
    surface: RevealSurface,
    pull: f64,
    columns: u16,
    idle: Duration,
    reveal: Option<oneshot::Receiver<()>>,
    showing_archive: bool,
    chats: Vec<String>,
    archived: Vec<String>,
    options: RenderOptions,
}

impl PullHost {
    #[must_use]
    pub fn new(theme: RevealTheme, columns: u16, options: RenderOptions) -> Self {
        let surface = RevealSurface::new(Rect::default(), theme);
        let mut host = Self {
            surface,
            pull: 0.0,
            columns,
            idle: Duration::ZERO,
            reveal: None,
            showing_archive: false,
            chats: CHATS.iter().map(ToString::to_string).collect(),
            archived: ARCHIVED_CHATS.iter().map(ToString::to_string).collect(),
            options,
        };
        host.sync();
        host
    }

    #[must_use]
    pub fn surface(&self) -> &RevealSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut RevealSurface {
        &mut self.surface
    }

    #[must_use]
    pub fn pull(&self) -> f64 {
        self.pull
    }

    #[must_use]
    pub fn showing_archive(&self) -> bool {
        self.showing_archive
    }

    /// True between a release and the end of the reveal animation.
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Terminal rows the overlay currently needs.
    #[must_use]
    pub fn overlay_rows(&self) -> u16 {
        (self.pull / POINTS_PER_ROW).ceil() as u16
    }

    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            surface: &self.surface,
            overlay_rows: self.overlay_rows(),
            chats: if self.showing_archive {
                &self.archived
            } else {
                &self.chats
            },
            showing_archive: self.showing_archive,
            options: self.options,
        }
    }

    pub fn set_columns(&mut self, columns: u16) {
        if columns != self.columns {
            self.columns = columns;
            self.sync();
        }
    }

    pub fn handle(&mut self, command: HostCommand) -> Result<Flow> {
        match command {
            HostCommand::Quit => return Ok(Flow::Quit),
            HostCommand::Reset => {
                self.reveal = None;
                self.surface.reset();
                self.pull = 0.0;
                self.sync();
            }
            // The list is locked while the reveal animation runs.
            _ if self.is_revealing() => {}
            HostCommand::Pull => self.drag(PULL_STEP),
            HostCommand::Ease => self.drag(-PULL_STEP),
            HostCommand::Release => self.release()?,
        }
        Ok(Flow::Continue)
    }

    /// Move time forward by one frame.
    pub fn tick(&mut self, delta: Duration) {
        if !self.is_revealing() {
            self.idle = self.idle.saturating_add(delta);
            if self.idle >= RELAX_DELAY && self.pull > 0.0 {
                self.pull = (self.pull - RELAX_RATE * delta.as_secs_f64()).max(0.0);
                self.sync();
            }
        }

        self.surface.advance(delta);

        if let Some(reveal) = &mut self.reveal {
            match reveal.try_recv() {
                Ok(()) => self.finish_reveal(),
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => self.reveal = None,
            }
        }
    }

    fn drag(&mut self, step: f64) {
        self.idle = Duration::ZERO;
        self.pull = (self.pull + step).clamp(0.0, MAX_PULL);
        self.sync();
    }

    fn release(&mut self) -> Result<()> {
        if self.surface.state() != RevealState::Expanding {
            // Below the threshold letting go just lets the list relax.
            self.idle = RELAX_DELAY;
            return Ok(());
        }

        if !self.surface.has_completion() {
            self.surface.set_completion(|surface| {
                debug!("Reveal completion rebuilding overlay");
                surface.apply(RevealState::Collapsed);
            })?;
        }
        self.reveal = Some(self.surface.completion_signal());
        let trigger = self.surface.indicator_badge_rect();
        self.surface.apply(RevealState::triggered(trigger));
        Ok(())
    }

    fn finish_reveal(&mut self) {
        self.reveal = None;
        self.showing_archive = !self.showing_archive;
        self.surface.reset();
        self.pull = 0.0;
        self.idle = Duration::ZERO;
        self.sync();
        info!(archive = self.showing_archive, "Archive toggled");
    }

    /// Report bounds and pull state to the surface.
    fn sync(&mut self) {
        self.surface.set_bounds(Rect::new(
            0.0,
            0.0,
            f64::from(self.columns) * POINTS_PER_COLUMN,
            self.pull,
        ));
        if self.is_revealing() {
            return;
        }
        let state = if self.pull >= EXPAND_THRESHOLD {
            RevealState::Expanding
        } else {
            RevealState::Collapsed
        };
        self.surface.apply(state);
    }
}
