//! Timeline properties checked through the public library API

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cuesync::catalog::{demo, first_annotation_start_time, last_annotation_end_time};
use cuesync::locate::next_track;
use cuesync::{
    Annotation, AnnotationId, HookRegistry, OverlayDriver, Player, StepSearchController,
    TrackCatalog, Transition,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Event {
    Show(AnnotationId),
    Hide(AnnotationId),
}

fn events(transition: &Transition) -> Vec<Event> {
    let mut out = Vec::new();
    if let Some(hidden) = transition.to_hide {
        out.push(Event::Hide(hidden.id));
    }
    if let Some(shown) = transition.to_show {
        out.push(Event::Show(shown.id));
    }
    out
}

fn sweep(catalog: TrackCatalog, from: f64, to: f64, step: f64) -> Vec<Event> {
    let mut controller = StepSearchController::new(catalog);
    let mut log = Vec::new();
    let mut time = from;
    while time <= to {
        log.extend(events(&controller.query(time)));
        time += step;
    }
    log
}

fn id(track: usize, index: usize) -> AnnotationId {
    AnnotationId::new(track, index)
}

#[test]
fn demo_scenario() {
    let mut controller = StepSearchController::new(demo());

    assert_eq!(events(&controller.query(2.5)), vec![Event::Show(id(0, 0))]);
    assert_eq!(
        events(&controller.query(3.5)),
        vec![Event::Hide(id(0, 0)), Event::Show(id(0, 1))]
    );
    assert_eq!(events(&controller.query(4.5)), vec![Event::Hide(id(0, 1))]);
    assert_eq!(events(&controller.query(6.0)), vec![Event::Show(id(1, 0))]);
    // Leaving 5-8 for the gap before track 4 still hides it
    assert_eq!(events(&controller.query(11.0)), vec![Event::Hide(id(1, 0))]);
    assert!(controller.query(11.0).is_empty());
    assert!(controller.query(20.0).is_empty());
}

#[test]
fn demo_bounds_and_next_track() {
    let catalog = demo();
    assert_eq!(first_annotation_start_time(catalog.tracks()), Some(2.0));
    assert_eq!(last_annotation_end_time(catalog.tracks()), Some(19.0));

    let next = next_track(&catalog, 1).unwrap();
    assert_eq!(
        next.track.annotations(),
        &[Annotation::new(12.0, 14.0), Annotation::new(17.0, 19.0)]
    );
}

#[test]
fn monotonic_sweep_shows_and_hides_each_annotation_once_in_order() {
    let catalog = demo();
    let expected: Vec<Event> = catalog
        .iter()
        .flat_map(|a| [Event::Show(a.id), Event::Hide(a.id)])
        .collect();

    for step in [0.1, 0.25, 0.3, 0.5] {
        assert_eq!(sweep(demo(), 0.0, 21.0, step), expected, "step {}", step);
    }
}

#[test]
fn repeated_time_is_idempotent() {
    let mut controller = StepSearchController::new(demo());
    let mut time = 0.0;
    while time <= 21.0 {
        controller.query(time);
        assert!(controller.query(time).is_empty(), "second query at {}", time);
        time += 0.125;
    }
}

#[test]
fn shared_boundary_hands_over_without_double_show() {
    let catalog = TrackCatalog::from(vec![
        vec![Annotation::new(1.0, 2.0), Annotation::new(2.0, 3.0)],
        vec![Annotation::new(3.0, 4.0)],
    ]);
    let mut controller = StepSearchController::new(catalog);

    assert_eq!(events(&controller.query(1.5)), vec![Event::Show(id(0, 0))]);
    assert!(controller.query(2.0).is_empty());
    assert_eq!(
        events(&controller.query(2.5)),
        vec![Event::Hide(id(0, 0)), Event::Show(id(0, 1))]
    );
    assert!(controller.query(3.0).is_empty());
    assert_eq!(
        events(&controller.query(3.5)),
        vec![Event::Hide(id(0, 1)), Event::Show(id(1, 0))]
    );
    assert_eq!(events(&controller.query(4.5)), vec![Event::Hide(id(1, 0))]);
}

#[test]
fn no_show_outside_every_annotation() {
    let mut controller = StepSearchController::new(demo());
    for time in [0.0, 1.0, 4.5, 8.5, 11.0, 15.0, 16.9, 19.5, 100.0] {
        assert!(controller.query(time).to_show.is_none(), "show at {}", time);
    }
}

#[test]
fn empty_catalog_never_transitions() {
    let mut controller = StepSearchController::new(TrackCatalog::from(vec![vec![], vec![]]));
    for time in [0.0, 1.0, 50.0] {
        assert!(controller.query(time).is_empty());
    }
    assert!(controller.cursor().bounds().is_none());
}

#[test]
fn player_drives_hooks_through_overlay_driver() {
    let catalog = demo();
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut hooks = HookRegistry::new();
    for annotation in catalog.iter() {
        let show_log = Arc::clone(&log);
        let hide_log = Arc::clone(&log);
        let id = annotation.id;
        hooks
            .on_show(id, move || show_log.lock().unwrap().push(Event::Show(id)))
            .on_hide(id, move || hide_log.lock().unwrap().push(Event::Hide(id)));
    }

    let expected: Vec<Event> = catalog
        .iter()
        .flat_map(|a| [Event::Show(a.id), Event::Hide(a.id)])
        .collect();

    let mut player = Player::new(Duration::ZERO, 0.25);
    player.subscribe(Box::new(OverlayDriver::new(
        StepSearchController::new(catalog),
        hooks,
    )));

    let stop = AtomicBool::new(false);
    let last = player.play(&stop, Some(20.0));

    assert_eq!(last, 20.0);
    assert!(!stop.load(Ordering::SeqCst));
    assert_eq!(*log.lock().unwrap(), expected);
}

#[test]
fn cursor_survives_serialization() {
    let mut controller = StepSearchController::new(demo());
    controller.query(6.0);

    let saved = serde_json::to_string(controller.cursor()).unwrap();
    let cursor = serde_json::from_str(&saved).unwrap();
    let mut resumed = StepSearchController::resume(demo(), cursor);

    assert!(resumed.query(7.0).is_empty());
    assert_eq!(events(&resumed.query(8.5)), vec![Event::Hide(id(1, 0))]);
}
