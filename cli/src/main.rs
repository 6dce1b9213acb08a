//! Archive reveal demo - binary entry point and terminal session management.
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`reveal_tui::InputPump`])
//! 3. Advance the host and its reveal surface by the elapsed time
//! 4. Render frame

mod host;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use reveal_config::RevealConfig;
use reveal_tui::{InputPump, RenderOptions, draw, handle_events};

use crate::host::{Flow, PullHost};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config file, ~/.archive-reveal/logs/archive-reveal.log
    if let Some(config_path) = RevealConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("archive-reveal.log"));
    }

    // Fallback: ./.archive-reveal/logs/archive-reveal.log
    candidates.push(
        PathBuf::from(".archive-reveal")
            .join("logs")
            .join("archive-reveal.log"),
    );

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, bracketed paste, the alternate screen and alternate scroll mode
/// (scroll wheel arrives as Up/Down keys) are restored on drop, even after a
/// panic or early return.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableBracketedPaste, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
            return Err(err.into());
        }
        // Enable alternate scroll mode: CSI ? 1007 h
        let _ = out.write_all(b"\x1b[?1007h");
        let _ = out.flush();

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = out.write_all(b"\x1b[?1007l");
                let _ = out.flush();
                let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        // Disable alternate scroll mode: CSI ? 1007 l
        let _ = self.terminal.backend_mut().write_all(b"\x1b[?1007l");
        let _ = Write::flush(self.terminal.backend_mut());
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match RevealConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            warn!(path = %err.path().display(), "Using default config: {err}");
            RevealConfig::default()
        }
    };
    let options = RenderOptions {
        ascii_only: config.ascii_only(),
    };

    let mut session = TerminalSession::new()?;
    let columns = session.terminal.size()?.width;
    let mut host = PullHost::new(config.theme(), columns, options);
    host.surface_mut()
        .set_reduced_motion(config.reduced_motion());

    let result = run(&mut session.terminal, &mut host).await;
    drop(session);

    if let Err(err) = &result {
        eprintln!("Error: {err:?}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run<B>(terminal: &mut Terminal<B>, host: &mut PullHost) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    let result: Result<()> = 'frames: loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let commands = match handle_events(&mut input) {
            Ok(commands) => commands,
            Err(e) => break Err(e),
        };
        for command in commands {
            match host.handle(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break 'frames Ok(()),
                Err(e) => break 'frames Err(e),
            }
        }

        let now = Instant::now();
        host.tick(now.duration_since(last_frame));
        last_frame = now;

        match terminal.size() {
            Ok(size) => host.set_columns(size.width),
            Err(e) => break Err(e.into()),
        }
        if let Err(e) = terminal.draw(|frame| draw(frame, &host.scene())) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
