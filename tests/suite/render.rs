//! Full host frames drawn through a virtual terminal.

use ratatui::Terminal;

use reveal_engine::{RevealState, RevealSurface, Rgb};
use reveal_tui::{RenderOptions, Scene, draw};

use crate::common::{sample_chats, settle, terminal_surface};
use crate::vt100_backend::VT100Backend;

const COLUMNS: u16 = 80;
const ROWS: u16 = 12;
const OVERLAY_ROWS: u16 = 6;
const LABEL_ROW: u16 = 4;
/// Logical x sampled by the rightmost column of a 640 point wide surface.
const LAST_COLUMN_X: f64 = 79.5 * 8.0;

fn render(
    surface: &RevealSurface,
    showing_archive: bool,
    options: RenderOptions,
) -> Terminal<VT100Backend> {
    let chats = sample_chats();
    let mut terminal = Terminal::new(VT100Backend::new(COLUMNS, ROWS)).unwrap();
    let scene = Scene {
        surface,
        overlay_rows: OVERLAY_ROWS,
        chats: &chats,
        showing_archive,
        options,
    };
    terminal.draw(|frame| draw(frame, &scene)).unwrap();
    terminal
}

fn rgb(color: Rgb) -> Option<(u8, u8, u8)> {
    Some((color.r, color.g, color.b))
}

#[test]
fn resting_frame_shows_swipe_hint_and_list() {
    let surface = terminal_surface();
    let terminal = render(&surface, false, RenderOptions::default());
    let screen = terminal.backend();

    assert!(screen.row(LABEL_ROW).contains("Swipe down for archive"));
    let contents = screen.contents();
    assert!(contents.contains("Chats"));
    assert!(contents.contains("Saved Messages"));
    assert!(contents.contains("[collapsed]"));
    // The badge is taller than a row here; its glyph lands on the label row.
    assert!(screen.row(LABEL_ROW).contains('↓'));
    assert_eq!(
        screen.background(COLUMNS - 1, 0),
        rgb(surface.secondary().color_at(LAST_COLUMN_X))
    );
}

#[test]
fn expanded_frame_shows_release_hint_over_primary() {
    let mut surface = terminal_surface();
    surface.apply(RevealState::Expanding);
    settle(&mut surface);
    let terminal = render(&surface, false, RenderOptions::default());
    let screen = terminal.backend();

    assert!(screen.row(LABEL_ROW).contains("Release for archive"));
    assert!(screen.contents().contains("[expanding]"));
    assert!(screen.row(LABEL_ROW).contains('↑'));
    assert_eq!(
        screen.background(COLUMNS - 1, 0),
        rgb(surface.primary().color_at(LAST_COLUMN_X))
    );
}

#[test]
fn finished_reveal_shows_host_background() {
    let mut surface = terminal_surface();
    surface.apply(RevealState::Expanding);
    surface.apply(RevealState::triggered(surface.indicator_badge_rect()));
    settle(&mut surface);
    let terminal = render(&surface, true, RenderOptions::default());
    let screen = terminal.backend();

    assert!(!screen.row(LABEL_ROW).contains("Release"));
    assert_eq!(screen.background(COLUMNS - 1, 0), Some((22, 22, 29)));
    assert!(screen.contents().contains("Archived chats"));
}

#[test]
fn ascii_only_frame() {
    let surface = terminal_surface();
    let terminal = render(&surface, false, RenderOptions { ascii_only: true });
    let screen = terminal.backend();
    let contents = screen.contents();
    assert!(!contents.contains('↓'));
    assert!(contents.contains("v/j"));
    assert!(contents.contains(" * Saved Messages"));
}
