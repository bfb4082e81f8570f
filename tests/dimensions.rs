use std::cell::RefCell;
use std::rc::Rc;

use payplot::data::viewport::DimensionTracker;
use payplot::Viewport;

fn recording_tracker() -> (DimensionTracker, Rc<RefCell<Vec<Viewport>>>) {
    let seen: Rc<RefCell<Vec<Viewport>>> = Rc::new(RefCell::new(Vec::new()));
    let tracker = DimensionTracker::new();
    (tracker, seen)
}

#[test]
fn subscriber_before_first_measurement_waits_for_it() {
    let (mut tracker, seen) = recording_tracker();
    let sink = seen.clone();
    tracker.subscribe(move |vp| sink.borrow_mut().push(vp));

    // Host not measured yet: nothing emitted, nothing errored.
    assert!(seen.borrow().is_empty());

    tracker.observe(640.0, 480.0);
    assert_eq!(*seen.borrow(), vec![Viewport::new(640.0, 480.0)]);
}

#[test]
fn subscriber_after_first_measurement_gets_it_immediately() {
    let (mut tracker, seen) = recording_tracker();
    tracker.observe(800.0, 600.0);

    let sink = seen.clone();
    tracker.subscribe(move |vp| sink.borrow_mut().push(vp));
    assert_eq!(*seen.borrow(), vec![Viewport::new(800.0, 600.0)]);
}

#[test]
fn unchanged_observations_are_deduplicated() {
    let (mut tracker, seen) = recording_tracker();
    let sink = seen.clone();
    tracker.subscribe(move |vp| sink.borrow_mut().push(vp));

    assert!(tracker.observe(300.0, 200.0));
    assert!(!tracker.observe(300.0, 200.0));
    assert!(!tracker.observe(300.0, 200.0));
    assert!(tracker.observe(300.0, 250.0));

    assert_eq!(
        *seen.borrow(),
        vec![Viewport::new(300.0, 200.0), Viewport::new(300.0, 250.0)]
    );
}

#[test]
fn unsubscribed_callbacks_never_fire_again() {
    let (mut tracker, seen) = recording_tracker();
    let sink = seen.clone();
    let id = tracker.subscribe(move |vp| sink.borrow_mut().push(vp));

    tracker.observe(100.0, 100.0);
    tracker.unsubscribe(id);
    tracker.observe(500.0, 500.0);

    assert_eq!(*seen.borrow(), vec![Viewport::new(100.0, 100.0)]);
}

#[test]
fn multiple_subscribers_each_get_notified() {
    let (mut tracker, seen) = recording_tracker();
    let a = seen.clone();
    let b = seen.clone();
    tracker.subscribe(move |vp| a.borrow_mut().push(vp));
    tracker.subscribe(move |vp| b.borrow_mut().push(vp));

    tracker.observe(50.0, 40.0);
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(tracker.current(), Some(Viewport::new(50.0, 40.0)));
}
