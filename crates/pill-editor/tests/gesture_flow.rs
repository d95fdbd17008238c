//! Integration tests: pointer event sequences through the session.
//!
//! Targets are chosen the way a host does it, by hit-testing the current
//! frame before each pointer-down.

use pill_core::{PastelPalette, PillId, Point, SessionConfig};
use pill_editor::{HitTarget, InputEvent, Session, UpOutcome};
use pill_render::hit::hit_test;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_session() -> Session {
    init_logging();
    Session::new(PastelPalette::from_seed(42))
}

fn down(s: &mut Session, x: f64, y: f64) -> bool {
    let target = HitTarget::from(hit_test(s.pills().as_slice(), x, y));
    s.handle(&InputEvent::from_pointer_down(x, y, target))
}

fn draw(s: &mut Session, x: f64, y: f64, w: f64, h: f64) -> PillId {
    down(s, x, y);
    s.handle(&InputEvent::from_pointer_move(x + w, y + h));
    match s.pointer_up(x + w, y + h) {
        UpOutcome::Committed(id) => id,
        other => panic!("expected commit, got {other:?}"),
    }
}

fn assert_unique_ids(s: &Session) {
    let ids: HashSet<PillId> = s.pills().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), s.pills().len(), "duplicate pill ids");
}

// ─── Creation ───────────────────────────────────────────────────────────

#[test]
fn click_on_empty_canvas_creates_instead_of_splitting() {
    let mut s = make_session();
    down(&mut s, 10.0, 10.0);
    let outcome = s.pointer_up(10.0, 10.0);

    assert_eq!(outcome, UpOutcome::Committed(PillId::new(1)));
    let p = s.pills().get(0).unwrap();
    assert_eq!((p.x, p.y, p.width, p.height), (10.0, 10.0, 40.0, 40.0));
}

#[test]
fn provisional_pill_is_visible_while_drawing() {
    let mut s = make_session();
    down(&mut s, 100.0, 100.0);
    s.handle(&InputEvent::from_pointer_move(250.0, 180.0));

    let frame = s.frame();
    assert!(s.pills().is_empty());
    assert_eq!(frame.provisional, Some(frame.pills[0].id));
    assert_eq!(frame.pills.len(), 1);
    assert_eq!((frame.pills[0].width, frame.pills[0].height), (150.0, 80.0));
    assert_eq!(frame.cursor, Point::new(250.0, 180.0));
}

// ─── Click vs drag ──────────────────────────────────────────────────────

#[test]
fn release_past_threshold_is_not_a_click() {
    let mut s = make_session();
    let id = draw(&mut s, 0.0, 0.0, 200.0, 200.0);
    let before = s.pills().clone();

    assert!(!down(&mut s, 40.0, 40.0));
    let outcome = s.pointer_up(50.0, 50.0);

    assert_eq!(outcome, UpOutcome::DragEnded);
    assert_eq!(s.pills(), &before);
    assert!(s.pills().get_by_id(id).is_some());
}

#[test]
fn release_within_threshold_is_a_click() {
    let mut s = make_session();
    draw(&mut s, 0.0, 0.0, 200.0, 200.0);

    down(&mut s, 40.0, 40.0);
    let outcome = s.pointer_up(45.0, 45.0);

    assert!(matches!(outcome, UpOutcome::Split(r) if r.split == 1));
    assert_eq!(s.pills().len(), 2);
    assert_eq!(s.pills().get(0).unwrap().width, 45.0);
}

#[test]
fn threshold_is_exclusive() {
    let mut s = make_session();
    draw(&mut s, 0.0, 0.0, 200.0, 200.0);

    down(&mut s, 40.0, 40.0);
    let outcome = s.pointer_up(45.0, 40.0);
    assert!(matches!(outcome, UpOutcome::Split(_)), "exactly 5 is still a click");
}

// ─── Dragging ───────────────────────────────────────────────────────────

#[test]
fn drag_follows_pointer_outside_pill_and_container() {
    let mut s = make_session();
    let id = draw(&mut s, 0.0, 0.0, 100.0, 60.0);
    let colour = s.pills().get(0).unwrap().color;

    down(&mut s, 50.0, 30.0);
    for (x, y) in [(80.0, 30.0), (400.0, 300.0), (-50.0, -50.0)] {
        s.handle(&InputEvent::from_pointer_move(x, y));
    }
    let outcome = s.pointer_up(-50.0, -50.0);
    assert_eq!(outcome, UpOutcome::DragEnded);

    let p = s.pills().get_by_id(id).unwrap();
    assert_eq!((p.x, p.y), (-100.0, -80.0));
    assert_eq!((p.width, p.height, p.color), (100.0, 60.0, colour));
}

#[test]
fn move_after_release_does_not_drag() {
    let mut s = make_session();
    let id = draw(&mut s, 0.0, 0.0, 100.0, 60.0);
    down(&mut s, 50.0, 30.0);
    s.handle(&InputEvent::from_pointer_move(300.0, 300.0));
    s.pointer_up(300.0, 300.0);

    let resting = *s.pills().get_by_id(id).unwrap();
    s.handle(&InputEvent::from_pointer_move(600.0, 600.0));
    assert_eq!(s.pills().get_by_id(id), Some(&resting));
}

// ─── Splitting ──────────────────────────────────────────────────────────

#[test]
fn clicking_repeatedly_subdivides_and_keeps_ids_unique() {
    let mut s = make_session();
    draw(&mut s, 0.0, 0.0, 300.0, 200.0);
    draw(&mut s, 400.0, 0.0, 120.0, 120.0);

    let clicks = [
        (150.0, 100.0),
        (60.0, 50.0),
        (30.0, 150.0),
        (450.0, 60.0),
        (470.0, 10.0),
        (250.0, 190.0),
    ];
    for (x, y) in clicks {
        down(&mut s, x, y);
        s.pointer_up(x, y);
        assert_unique_ids(&s);
    }
    assert!(s.pills().len() > 2);
    for p in s.pills() {
        assert!(p.height >= 20.0);
    }
}

#[test]
fn tiny_pill_is_nudged_on_click() {
    let config = SessionConfig {
        min_pill_size: 25.0,
        ..SessionConfig::default()
    };
    init_logging();
    let mut s = Session::with_config(config, PastelPalette::from_seed(1)).unwrap();
    let id = draw(&mut s, 0.0, 0.0, 25.0, 25.0);

    down(&mut s, 12.0, 12.0);
    let outcome = s.pointer_up(12.0, 12.0);

    assert!(matches!(outcome, UpOutcome::Split(r) if r.nudged == 1 && r.split == 0));
    let p = s.pills().get(0).unwrap();
    assert_eq!(p.id, id);
    assert_eq!((p.x, p.y, p.width, p.height), (10.0, 0.0, 25.0, 25.0));
}

#[test]
fn split_parts_inherit_colour() {
    let mut s = make_session();
    draw(&mut s, 0.0, 0.0, 100.0, 60.0);
    let colour = s.pills().get(0).unwrap().color;

    down(&mut s, 70.0, 10.0);
    s.pointer_up(70.0, 10.0);

    assert!(s.pills().iter().all(|p| p.color == colour));
}

#[test]
fn split_ids_continue_the_creation_counter() {
    let mut s = make_session();
    draw(&mut s, 0.0, 0.0, 100.0, 60.0);
    down(&mut s, 70.0, 10.0);
    s.pointer_up(70.0, 10.0);

    let ids: Vec<u64> = s.pills().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![2, 3]);

    let next = draw(&mut s, 300.0, 300.0, 50.0, 50.0);
    assert_eq!(next, PillId::new(4));
}

#[test]
fn frame_json_round_trips_through_host_contract() {
    let mut s = make_session();
    draw(&mut s, 5.0, 5.0, 60.0, 45.0);
    s.handle(&InputEvent::from_pointer_move(12.0, 34.0));

    let json = s.frame().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pills"][0]["width"], 60.0);
    assert_eq!(value["cursor"]["y"], 34.0);
    assert!(
        value["pills"][0]["color"]
            .as_str()
            .unwrap()
            .starts_with("hsl(")
    );
}
