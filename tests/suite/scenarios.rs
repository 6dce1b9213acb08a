//! End-to-end reveal cycles driven through the public surface API.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use reveal_engine::{
    AnimPhase, ArchivedView, COLLAPSED_GLYPH_ANGLE, Construction, EXPANDED_GLYPH_ANGLE,
    LayerRole, Rect, RevealState, RevealSurface, TransitionKind,
};

use crate::common::{FRAME, approx, approx_rect, counting_completion, settle, square_surface};

fn trigger_rect() -> Rect {
    Rect::new(5.0, 5.0, 20.0, 20.0)
}

fn top_layer(surface: &RevealSurface) -> Option<LayerRole> {
    surface.paint_order().last().map(|layer| layer.role())
}

#[test]
fn expanding_from_rest() {
    let mut surface = square_surface();

    surface.apply(RevealState::Collapsed);
    assert_eq!(surface.transitions_started(), 0);
    assert!(surface.primary().mask().is_none());

    surface.apply(RevealState::Expanding);
    let mask = surface.primary().mask().expect("expand schedules a mask");
    assert_eq!(mask.kind(), TransitionKind::Expand);
    assert!(approx_rect(mask.from().rect, Rect::new(7.0, 88.0, 6.0, 6.0)));
    assert!(approx(mask.from().corner_radius, 3.0));
    assert!(mask.to().rect.width >= 200.0 * 2f64.sqrt() - 1e-9);
    assert!(approx(mask.to().corner_radius, mask.to().rect.width / 2.0));
    assert_eq!(surface.label().text(), "Release for archive");
    assert_eq!(top_layer(&surface), Some(LayerRole::Primary));
}

#[test]
fn trigger_detaches_layers_and_fires_once() {
    let mut surface = square_surface();
    let fired = counting_completion(&mut surface);
    surface.apply(RevealState::Expanding);

    surface.apply(RevealState::triggered(trigger_rect()));
    let mask = surface.primary().mask().expect("trigger schedules a mask");
    assert_eq!(mask.kind(), TransitionKind::Trigger);
    assert_eq!(mask.to().rect, trigger_rect());
    assert!(approx(mask.to().corner_radius, 10.0));
    let center = mask.to().rect.center();
    assert!(approx(center.x, 15.0) && approx(center.y, 15.0));

    assert!(!surface.secondary().is_attached());
    assert!(surface.primary().is_attached());
    assert_eq!(fired.get(), 0);

    settle(&mut surface);
    assert!(!surface.primary().is_attached());
    assert!(surface.paint_order().is_empty());
    assert_eq!(fired.get(), 1);

    // Nothing left to deliver.
    surface.advance(Duration::from_secs(1));
    assert_eq!(fired.get(), 1);
}

#[test]
fn completion_may_reenter_apply() {
    let mut surface = square_surface();
    surface
        .set_completion(|surface| surface.apply(RevealState::Collapsed))
        .unwrap();
    surface.apply(RevealState::Expanding);
    surface.apply(RevealState::triggered(trigger_rect()));
    settle(&mut surface);

    assert_eq!(surface.state(), RevealState::Collapsed);
    assert!(surface.primary().is_attached());
    assert!(surface.secondary().is_attached());
    assert_eq!(top_layer(&surface), Some(LayerRole::Secondary));
    assert_eq!(surface.label().text(), "Swipe down for archive");
    assert!(approx(surface.label().offset(), 0.0));
}

#[test]
fn repeated_states_do_no_work() {
    let mut surface = square_surface();
    surface.apply(RevealState::Expanding);
    surface.apply(RevealState::Expanding);
    assert_eq!(surface.transitions_started(), 1);

    surface.apply(RevealState::triggered(trigger_rect()));
    surface.apply(RevealState::triggered(trigger_rect()));
    assert_eq!(surface.transitions_started(), 2);

    // A different rectangle is a different state.
    surface.apply(RevealState::triggered(Rect::new(6.0, 5.0, 20.0, 20.0)));
    assert_eq!(surface.transitions_started(), 3);
}

#[test]
fn rotation_targets_are_absolute() {
    let mut surface = square_surface();
    let target = |surface: &RevealSurface| {
        (
            surface.primary().indicator().rotation_target(),
            surface.secondary().indicator().rotation_target(),
        )
    };
    assert_eq!(target(&surface), (COLLAPSED_GLYPH_ANGLE, COLLAPSED_GLYPH_ANGLE));

    for _ in 0..3 {
        surface.apply(RevealState::Expanding);
        settle(&mut surface);
        assert_eq!(target(&surface), (EXPANDED_GLYPH_ANGLE, EXPANDED_GLYPH_ANGLE));
        assert!(approx(surface.primary().indicator().rotation(), -360.0));

        surface.apply(RevealState::Collapsed);
        settle(&mut surface);
        assert_eq!(target(&surface), (COLLAPSED_GLYPH_ANGLE, COLLAPSED_GLYPH_ANGLE));
        assert!(approx(surface.secondary().indicator().rotation(), 180.0));
    }
}

#[test]
fn trigger_keeps_rotation_and_text() {
    let mut surface = square_surface();
    surface.apply(RevealState::Expanding);
    settle(&mut surface);
    surface.apply(RevealState::triggered(trigger_rect()));

    assert!(!surface.primary().indicator().is_rotating());
    assert_eq!(surface.label().text(), "Release for archive");
    assert!(approx(surface.label().slide().to_offset(), -150.0));

    settle(&mut surface);
    assert!(approx(surface.label().center().x, -100.0));
}

#[test]
fn collapse_end_puts_secondary_back_on_top() {
    let mut surface = square_surface();
    surface.apply(RevealState::Expanding);
    settle(&mut surface);
    assert_eq!(top_layer(&surface), Some(LayerRole::Primary));

    surface.apply(RevealState::Collapsed);
    assert_eq!(top_layer(&surface), Some(LayerRole::Primary));
    settle(&mut surface);
    assert_eq!(top_layer(&surface), Some(LayerRole::Secondary));
    assert_eq!(surface.label().text(), "Swipe down for archive");
}

#[test]
fn superseded_trigger_never_completes() {
    let mut surface = square_surface();
    let fired = counting_completion(&mut surface);
    surface.apply(RevealState::Expanding);
    surface.apply(RevealState::triggered(trigger_rect()));
    surface.advance(FRAME);

    surface.apply(RevealState::Collapsed);
    assert!(surface.secondary().is_attached());
    settle(&mut surface);

    assert_eq!(fired.get(), 0);
    assert!(surface.has_completion());
    assert_eq!(surface.paint_order().len(), 2);
}

#[test]
fn leaving_triggered_rebuilds_baseline_first() {
    let mut surface = square_surface();
    surface.apply(RevealState::triggered(trigger_rect()));
    settle(&mut surface);

    surface.apply(RevealState::Expanding);
    assert_eq!(surface.paint_order().len(), 2);
    assert_eq!(top_layer(&surface), Some(LayerRole::Primary));
    assert_eq!(
        surface.primary().mask().map(|mask| mask.kind()),
        Some(TransitionKind::Expand)
    );
    assert!(approx(surface.label().slide().from_offset(), -150.0));
}

#[test]
fn resize_keeps_progress() {
    let mut surface = square_surface();
    surface.apply(RevealState::Expanding);
    surface.advance(Duration::from_millis(70));
    let before = surface.primary().mask().unwrap().phase();

    surface.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
    let mask = surface.primary().mask().unwrap();
    assert_eq!(mask.phase(), before);
    assert!(matches!(mask.phase(), AnimPhase::Running { .. }));
    assert_eq!(mask.from().rect, surface.indicator_badge_rect());
    assert!(mask.to().rect.width >= 2.0 * 200f64.hypot(100.0) - 1e-9);
}

#[test]
fn reduced_motion_snaps_every_transition() {
    let mut surface = square_surface();
    surface.set_reduced_motion(true);
    let fired = counting_completion(&mut surface);

    surface.apply(RevealState::Expanding);
    assert!(!surface.advance(Duration::ZERO));
    surface.apply(RevealState::triggered(trigger_rect()));
    assert!(!surface.advance(Duration::ZERO));
    assert_eq!(fired.get(), 1);
}

#[test]
fn second_completion_is_rejected_until_fired() {
    let mut surface = square_surface();
    let _fired = counting_completion(&mut surface);
    assert!(surface.set_completion(|_| {}).is_err());

    surface.apply(RevealState::triggered(trigger_rect()));
    settle(&mut surface);
    let called = Rc::new(Cell::new(false));
    let flag = Rc::clone(&called);
    assert!(surface.set_completion(move |_| flag.set(true)).is_ok());
    assert!(!called.get());
}

#[tokio::test]
async fn completion_signal_resolves_after_detach() {
    let mut surface = square_surface();
    let stale = surface.completion_signal();
    let signal = surface.completion_signal();
    assert!(stale.await.is_err());

    surface.apply(RevealState::triggered(trigger_rect()));
    settle(&mut surface);
    assert!(signal.await.is_ok());
    assert!(surface.paint_order().is_empty());
}

#[test]
#[should_panic(expected = "cannot be restored")]
fn restoring_from_archive_is_fatal() {
    let _ = RevealSurface::construct(Construction::Restored(ArchivedView::default()));
}
