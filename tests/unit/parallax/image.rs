use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::animation::ease::Ease;

fn machine() -> ImageLoadStateMachine {
    ImageLoadStateMachine::new(TimingConfig::new(500, Ease::OutQuad), true)
}

fn event(uri: &str) -> ImageEvent {
    ImageEvent {
        uri: Some(uri.to_owned()),
        ..ImageEvent::default()
    }
}

fn recorder() -> (Rc<RefCell<Vec<ImageEvent>>>, ImageCallback) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, Box::new(move |e: &ImageEvent| sink.borrow_mut().push(e.clone())))
}

fn finish_fade(m: &mut ImageLoadStateMachine) {
    m.tick(Duration::from_millis(250));
    m.tick(Duration::from_millis(250));
}

#[test]
fn load_then_fade_completes_transition() {
    let mut m = machine();
    assert_eq!(m.state(), ImageState::Loading);
    assert!(m.is_spinner_visible());
    assert_eq!(m.opacity(), 0.0);

    m.on_load(&event("a.png"));
    assert_eq!(m.state(), ImageState::Loaded);
    assert!(!m.is_spinner_visible());

    m.tick(Duration::from_millis(250));
    assert_eq!(m.state(), ImageState::Loaded);
    // OutQuad at t = 0.5 is 0.75.
    assert!((m.opacity() - 0.75).abs() < 1e-9);

    m.tick(Duration::from_millis(250));
    assert_eq!(m.state(), ImageState::TransitionComplete);
    assert_eq!(m.opacity(), 1.0);
}

#[test]
fn error_after_transition_is_ignored() {
    let (errors, cb) = recorder();
    let mut m = machine();
    m.set_on_error(Some(cb));

    m.on_load(&event("a.png"));
    finish_fade(&mut m);
    m.on_error(&event("a.png"));

    assert_eq!(m.state(), ImageState::TransitionComplete);
    assert!(errors.borrow().is_empty());
}

#[test]
fn error_while_loading_or_fading_is_terminal() {
    let mut m = machine();
    m.on_error(&event("a.png"));
    assert_eq!(m.state(), ImageState::Error);
    assert!(!m.is_spinner_visible());

    let mut m = machine();
    m.on_load(&event("a.png"));
    m.tick(Duration::from_millis(100));
    m.on_error(&event("a.png"));
    assert_eq!(m.state(), ImageState::Error);

    // The fade still runs out but does not promote a failed image.
    finish_fade(&mut m);
    assert_eq!(m.state(), ImageState::Error);

    m.on_load(&event("a.png"));
    assert_eq!(m.state(), ImageState::Error);
}

#[test]
fn repeated_errors_are_surfaced_once() {
    let (errors, cb) = recorder();
    let mut m = machine();
    m.set_on_error(Some(cb));

    m.on_error(&event("a.png"));
    m.on_error(&event("a.png"));
    assert_eq!(m.state(), ImageState::Error);
    assert_eq!(errors.borrow().len(), 1);

    let (errors, cb) = recorder();
    let mut fading = machine();
    fading.set_on_error(Some(cb));
    fading.on_load(&event("b.png"));
    fading.on_error(&event("b.png"));
    fading.on_error(&event("b.png"));
    assert_eq!(fading.state(), ImageState::Error);
    assert_eq!(errors.borrow().len(), 1);
}

#[test]
fn callbacks_receive_events_verbatim() {
    let (loads, on_load) = recorder();
    let (errors, on_error) = recorder();
    let mut m = machine();
    m.set_on_load(Some(on_load));
    m.set_on_error(Some(on_error));

    let loaded = ImageEvent {
        uri: Some("https://example.com/a.jpg".into()),
        width: Some(640.0),
        height: Some(480.0),
        message: None,
    };
    m.on_load(&loaded);
    m.on_load(&loaded);
    assert_eq!(*loads.borrow(), vec![loaded.clone(), loaded]);

    let failed = ImageEvent {
        message: Some("decode failed".into()),
        ..ImageEvent::default()
    };
    m.on_error(&failed);
    assert_eq!(*errors.borrow(), vec![failed]);
}

#[test]
fn unmount_stops_all_mutation() {
    let (loads, cb) = recorder();
    let mut m = machine();
    m.set_on_load(Some(cb));
    m.on_load(&event("a.png"));
    m.tick(Duration::from_millis(100));
    let opacity = m.opacity();

    m.unmount();
    assert!(!m.is_mounted());
    finish_fade(&mut m);
    m.on_error(&event("a.png"));
    m.on_load(&event("a.png"));

    assert_eq!(m.state(), ImageState::Loaded);
    assert_eq!(m.opacity(), opacity);
    assert_eq!(loads.borrow().len(), 1);
}

#[test]
fn spinner_can_be_disabled() {
    let m = ImageLoadStateMachine::new(TimingConfig::new(500, Ease::OutQuad), false);
    assert_eq!(m.state(), ImageState::Loading);
    assert!(!m.is_spinner_visible());
}
