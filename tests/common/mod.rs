//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use reveal_engine::{Rect, RevealSurface, RevealTheme};

/// One 60 Hz frame.
pub const FRAME: Duration = Duration::from_millis(16);

/// Square surface used by the state machine scenarios.
pub fn square_surface() -> RevealSurface {
    RevealSurface::new(Rect::new(0.0, 0.0, 100.0, 100.0), RevealTheme::default())
}

/// Surface sized like an 80 column terminal pulled six rows down.
pub fn terminal_surface() -> RevealSurface {
    RevealSurface::new(Rect::new(0.0, 0.0, 640.0, 96.0), RevealTheme::default())
}

/// Advance frame by frame until nothing animates. Panics after ten seconds of
/// simulated time.
pub fn settle(surface: &mut RevealSurface) {
    for _ in 0..625 {
        if !surface.advance(FRAME) {
            return;
        }
    }
    panic!("surface still animating after 10s");
}

/// Register a completion that counts how often it fired.
pub fn counting_completion(surface: &mut RevealSurface) -> Rc<Cell<u32>> {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    surface
        .set_completion(move |_| counter.set(counter.get() + 1))
        .expect("no completion registered yet");
    fired
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Layout multiplies by fractional ratios, so compare rectangles loosely.
pub fn approx_rect(a: Rect, b: Rect) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.width, b.width) && approx(a.height, b.height)
}

pub fn sample_chats() -> Vec<String> {
    ["Saved Messages", "Design review", "Weekend hike"]
        .iter()
        .map(ToString::to_string)
        .collect()
}
