// Host-side tests for the scroll reveal observer and its geometric watcher.

use paint_landing::constants::REVEAL_THRESHOLD;
use paint_landing::core::{
    ElementId, GeometricWatcher, Rect, RevealObserver, Viewport, VisibilityWatcher,
};

const VIEW_W: f32 = 1000.0;
const VIEW_H: f32 = 800.0;

fn at_scroll(y: f32) -> Viewport {
    Viewport::new(0.0, y, VIEW_W, VIEW_H)
}

fn observer() -> RevealObserver {
    RevealObserver::new(GeometricWatcher::new(REVEAL_THRESHOLD))
}

#[test]
fn element_below_fold_reveals_once_scrolled_into_view() {
    let mut obs = observer();
    let id = obs.register(Rect::new(0.0, 1500.0, 400.0, 200.0)).unwrap();

    assert!(obs.update(&at_scroll(0.0)).is_empty());
    assert!(!obs.is_revealed(id));

    // 5% visible: below the threshold.
    assert!(obs.update(&at_scroll(710.0)).is_empty());
    assert!(!obs.is_revealed(id));

    // 25% visible.
    let revealed = obs.update(&at_scroll(750.0));
    assert_eq!(revealed.as_slice(), &[id]);
    assert!(obs.is_revealed(id));
}

#[test]
fn reveal_is_permanent_and_reported_once() {
    let mut obs = observer();
    let id = obs.register(Rect::new(0.0, 100.0, 400.0, 200.0)).unwrap();

    assert_eq!(obs.update(&at_scroll(0.0)).as_slice(), &[id]);
    for y in [5000.0, 0.0, 5000.0, 50.0] {
        assert!(obs.update(&at_scroll(y)).is_empty());
        assert!(obs.is_revealed(id));
    }
    assert_eq!(obs.revealed_count(), 1);
    assert!(obs.element(id).unwrap().has_been_revealed());
}

#[test]
fn never_visible_element_stays_hidden() {
    let mut obs = observer();
    let id = obs.register(Rect::new(0.0, 10_000.0, 10.0, 10.0)).unwrap();
    for y in [0.0, 2000.0, 4000.0] {
        obs.update(&at_scroll(y));
    }
    assert!(!obs.is_revealed(id));
}

#[test]
fn elements_above_the_fold_reveal_on_first_snapshot() {
    let mut obs = observer();
    let a = obs.register(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
    let b = obs.register(Rect::new(0.0, 300.0, 100.0, 100.0)).unwrap();
    let c = obs.register(Rect::new(0.0, 3000.0, 100.0, 100.0)).unwrap();
    let revealed = obs.update(&at_scroll(0.0));
    assert_eq!(revealed.as_slice(), &[a, b]);
    assert!(!obs.is_revealed(c));
}

#[test]
fn refreshed_bounds_are_used_for_pending_elements() {
    let mut obs = observer();
    let id = obs.register(Rect::new(0.0, 5000.0, 100.0, 100.0)).unwrap();
    assert!(obs.update(&at_scroll(0.0)).is_empty());
    obs.refresh_bounds(id, Rect::new(0.0, 200.0, 100.0, 100.0));
    assert_eq!(obs.update(&at_scroll(0.0)).as_slice(), &[id]);
}

#[test]
fn disconnect_stops_reveals_and_registration() {
    let mut obs = observer();
    let id = obs.register(Rect::new(0.0, 1500.0, 100.0, 100.0)).unwrap();
    assert!(obs.is_connected());
    obs.disconnect();
    assert!(!obs.is_connected());
    assert!(obs.update(&at_scroll(1400.0)).is_empty());
    assert!(!obs.is_revealed(id));
    assert!(obs.register(Rect::new(0.0, 0.0, 10.0, 10.0)).is_none());
    assert!(obs.watcher().is_empty());
}

#[test]
fn watcher_reports_initial_state_then_only_changes() {
    let mut w = GeometricWatcher::new(0.5);
    w.observe(ElementId(7), Rect::new(0.0, 750.0, 100.0, 200.0));

    let first = w.poll(&at_scroll(0.0));
    assert_eq!(first.len(), 1);
    assert!(!first[0].visible);

    assert!(w.poll(&at_scroll(0.0)).is_empty());

    let flipped = w.poll(&at_scroll(200.0));
    assert_eq!(flipped.len(), 1);
    assert!(flipped[0].visible);
    assert!((flipped[0].ratio - 1.0).abs() < 1e-6);
}

#[test]
fn zero_threshold_needs_contact() {
    let mut w = GeometricWatcher::new(0.0);
    w.observe(ElementId(0), Rect::new(0.0, 900.0, 100.0, 100.0));
    assert!(!w.poll(&at_scroll(0.0))[0].visible);
    // Bottom edge of the viewport touches the element.
    assert!(w.poll(&at_scroll(100.0))[0].visible);
}
