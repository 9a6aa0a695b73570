//! End-to-end pad scenarios: a host driving the pad through entry,
//! verification and rejection.

use std::time::{Duration, Instant};

use pinpad_core::{Dot, PinEvent, PinPad, PinPadOptions, StatusRegion, ValidationStatus};

fn pad(max_length: usize) -> PinPad {
    PinPad::new(PinPadOptions::default().with_max_length(max_length)).unwrap()
}

fn completions(events: &[PinEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            PinEvent::Completed(code) => Some(code.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn completes_once_at_max_length() {
    let mut pad = pad(4);
    let mut events = Vec::new();

    for d in [1, 2, 3] {
        events.push(pad.press_digit(d));
    }
    assert_eq!(pad.entry(), "123");
    assert!(completions(&events).is_empty());

    events.push(pad.press_digit(4));
    assert_eq!(pad.entry(), "1234");
    assert_eq!(completions(&events), vec!["1234"]);

    // Further presses while the host hasn't answered do nothing
    for d in [5, 6] {
        events.push(pad.press_digit(d));
    }
    assert_eq!(completions(&events), vec!["1234"]);
    assert_eq!(pad.len(), 4);
}

#[test]
fn invalid_resets_any_length_and_shakes_once() {
    let now = Instant::now();
    for prior in 0..=4 {
        let mut pad = pad(4);
        for d in 0..prior {
            pad.press_digit(d as u8);
        }
        assert!(pad.set_status(ValidationStatus::Invalid, now));
        assert_eq!(pad.len(), 0, "prior length {}", prior);
    }
}

#[test]
fn wrong_then_right_pin() {
    let start = Instant::now();
    let secret = "2580";
    let mut pad = pad(4);
    let mut shakes = 0;

    let attempt = |pad: &mut PinPad, code: &str, at: Instant| {
        let mut completed = None;
        for c in code.chars() {
            if let PinEvent::Completed(code) = pad.press_digit(c.to_digit(10).unwrap() as u8) {
                completed = Some(code);
            }
        }
        let code = completed.expect("pin should complete");
        pad.set_status(ValidationStatus::Verifying, at);
        assert_eq!(pad.status_region(), StatusRegion::Spinner);
        assert!(pad.dots_muted());

        let verdict = if code == secret {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        };
        pad.set_status(verdict, at + Duration::from_millis(700))
    };

    if attempt(&mut pad, "1111", start) {
        shakes += 1;
    }
    assert!(pad.is_empty());
    assert_eq!(pad.status(), ValidationStatus::Invalid);

    if attempt(&mut pad, secret, start + Duration::from_secs(3)) {
        shakes += 1;
    }
    assert_eq!(shakes, 1);
    assert_eq!(pad.status(), ValidationStatus::Valid);
    assert_eq!(pad.entry(), secret);
    assert_eq!(pad.dots(), vec![Dot::Filled; 4]);
}

#[test]
fn backspace_scenario() {
    let mut pad = pad(4);
    pad.press_digit(1);
    pad.press_digit(2);
    assert_eq!(pad.backspace(), PinEvent::Removed);
    assert_eq!(pad.entry(), "1");
}

#[test]
fn dots_track_entry_length() {
    let mut pad = pad(6);
    for entered in 0..=6 {
        let dots = pad.dots();
        assert_eq!(dots.len(), 6);
        assert_eq!(dots.iter().filter(|d| **d == Dot::Filled).count(), entered);
        pad.press_digit(9);
    }
}
