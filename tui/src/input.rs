//! Keyboard input for the demo host.
//!
//! A blocking reader thread feeds a bounded channel; the frame loop drains it
//! with [`handle_events`] and turns keys into [`HostCommand`]s.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, spawn_blocking};
use tokio::time::timeout;
use tracing::debug;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// What the user asked the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Pull the list further down.
    Pull,
    /// Let the list ride back up a step.
    Ease,
    /// Let go of the list.
    Release,
    /// Snap back to the resting composition.
    Reset,
    Quit,
}

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<JoinHandle<()>>,
}

impl InputPump {
    /// Start the reader thread. Must be called inside a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = Arc::clone(&stop);

        let join = spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = timeout(SHUTDOWN_TIMEOUT, join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; never block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Map a terminal event to a host command. Releases and unbound keys map to
/// nothing.
#[must_use]
pub fn command_for(ev: &Event) -> Option<HostCommand> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press | KeyEventKind::Repeat,
        ..
    }) = ev
    else {
        return None;
    };

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(HostCommand::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(HostCommand::Pull),
        KeyCode::Up | KeyCode::Char('k') => Some(HostCommand::Ease),
        KeyCode::Enter | KeyCode::Char(' ') => Some(HostCommand::Release),
        KeyCode::Char('r') => Some(HostCommand::Reset),
        KeyCode::Esc | KeyCode::Char('q') => Some(HostCommand::Quit),
        _ => None,
    }
}

/// Drain pending input without blocking, at most one frame's worth.
pub fn handle_events(input: &mut InputPump) -> Result<Vec<HostCommand>> {
    let mut commands = Vec::new();
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        if let Some(command) = command_for(&ev) {
            debug!(?command, "Host command");
            commands.push(command);
        }
    }
    Ok(commands)
}
