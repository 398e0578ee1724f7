use std::time::Duration;

use test_helpers::spawn_toast;
use toast::{Edge, Phase, Position, ToastConfig, ToastId};

#[test]
fn settles_after_entry_delay() {
    let toast = spawn_toast(&ToastConfig::new(ToastId::new(), "Hello"));

    toast.clock.advance_ms(49);
    assert_eq!(toast.state().phase, Phase::Entering);
    assert!(toast.states.is_empty());

    toast.clock.advance_ms(1);
    let state = toast.state();
    assert_eq!(state.phase, Phase::Visible);
    assert_eq!(state.opacity, 1.0);
    assert_eq!(state.offset, 15);

    let changes = toast.states.entries();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].0, Duration::from_millis(50));
    assert_eq!(changes[0].1, state);
}

#[test]
fn bottom_positions_animate_bottom_margin() {
    for position in Position::ALL {
        let config = ToastConfig::new(ToastId::new(), "Hello")
            .position(position)
            .no_auto_hide();
        let toast = spawn_toast(&config);
        let expected = match position {
            Position::BottomLeft
            | Position::BottomCenter
            | Position::BottomRight => Edge::Bottom,
            _ => Edge::Top,
        };

        assert_eq!(toast.state().edge, expected, "{position}");
        toast.clock.advance_ms(50);
        assert_eq!(toast.state().edge, expected, "{position}");
        toast.set_visible(false);
        assert_eq!(toast.state().edge, expected, "{position}");
    }
}

#[test]
fn hide_before_entry_delay_wins() {
    let toast = spawn_toast(&ToastConfig::new(ToastId::new(), "Hello"));

    toast.clock.advance_ms(20);
    toast.set_visible(false);
    assert_eq!(toast.state().phase, Phase::Leaving);

    // The entry timer still fires at 50ms but must not revive the toast.
    toast.clock.advance_ms(40);
    let state = toast.state();
    assert_eq!(state.phase, Phase::Leaving);
    assert_eq!(state.opacity, 0.0);
    assert_eq!(state.offset, -15);
    assert_eq!(toast.states.entries().len(), 1);

    toast.clock.advance_to_ms(320);
    let dismissals = toast.dismissals.entries();
    assert_eq!(dismissals.len(), 1);
    assert_eq!(dismissals[0].at, Duration::from_millis(320));
}

#[test]
fn phases_never_regress() {
    let toast = spawn_toast(&ToastConfig::new(ToastId::new(), "Hello"));

    toast.clock.advance_ms(5000);

    let phases: Vec<Phase> =
        toast.states.entries().iter().map(|(_, s)| s.phase).collect();
    assert_eq!(phases, vec![Phase::Visible, Phase::Leaving]);
    assert!(phases.windows(2).all(|pair| pair[0] < pair[1]));
}
