use std::time::Duration;

use test_helpers::spawn_toast;
use toast::{Phase, Position, ToastConfig, ToastId};

#[test]
fn auto_hide_dismisses_after_exit_animation() {
    let id = ToastId::new();
    let config = ToastConfig::new(id, "Could not save")
        .kind("error")
        .hide_after(3.0)
        .position(Position::TopRight);
    let toast = spawn_toast(&config);

    toast.clock.advance_ms(2999);
    assert_eq!(toast.state().phase, Phase::Visible);

    toast.clock.advance_ms(1);
    let state = toast.state();
    assert_eq!(state.phase, Phase::Leaving);
    assert_eq!(state.opacity, 0.0);
    assert_eq!(state.offset, -15);

    toast.clock.advance_to_ms(3299);
    assert!(toast.dismissals.is_empty());
    assert!(!toast.lifecycle().is_dismissed());

    toast.clock.advance_to_ms(3300);
    let dismissals = toast.dismissals.entries();
    assert_eq!(dismissals.len(), 1);
    assert_eq!(dismissals[0].at, Duration::from_millis(3300));
    assert_eq!(dismissals[0].id, id);
    assert_eq!(dismissals[0].position, Position::TopRight);
    assert!(toast.lifecycle().is_dismissed());
    assert_eq!(toast.clock.pending(), 0);
}

#[test]
fn dismissal_time_tracks_hide_after() {
    for seconds in [0.5, 1.0, 2.0, 7.0] {
        let config =
            ToastConfig::new(ToastId::new(), "Hello").hide_after(seconds);
        let toast = spawn_toast(&config);

        toast.clock.advance_ms(60_000);

        let expected = Duration::from_secs_f64(seconds)
            + Duration::from_millis(300);
        let dismissals = toast.dismissals.entries();
        assert_eq!(dismissals.len(), 1, "{seconds}s");
        assert_eq!(dismissals[0].at, expected, "{seconds}s");
    }
}

#[test]
fn zero_hide_after_waits_for_caller() {
    let config = ToastConfig::new(ToastId::new(), "Hello").no_auto_hide();
    let toast = spawn_toast(&config);
    assert_eq!(toast.clock.pending(), 1); // entry only

    toast.clock.advance_ms(1000);
    assert_eq!(toast.state().phase, Phase::Visible);
    toast.set_visible(false);
    assert_eq!(toast.state().phase, Phase::Leaving);

    toast.clock.advance_to_ms(1299);
    assert!(toast.dismissals.is_empty());

    toast.clock.advance_to_ms(1300);
    assert_eq!(toast.dismissals.count(), 1);
    assert_eq!(toast.dismissals.entries()[0].at, Duration::from_millis(1300));
}

#[test]
fn zero_hide_after_never_dismisses_on_its_own() {
    let config = ToastConfig::new(ToastId::new(), "Hello").no_auto_hide();
    let toast = spawn_toast(&config);

    toast.clock.advance(Duration::from_secs(3600));

    assert_eq!(toast.state().phase, Phase::Visible);
    assert!(toast.dismissals.is_empty());
    assert_eq!(toast.clock.pending(), 0);
}

#[test]
fn second_hide_trigger_is_ignored() {
    let config = ToastConfig::new(ToastId::new(), "Hello").hide_after(1.0);
    let toast = spawn_toast(&config);

    toast.clock.advance_ms(1000);
    assert_eq!(toast.state().phase, Phase::Leaving);

    // Caller flips `visible` after the timeout already fired.
    toast.clock.advance_ms(100);
    toast.set_visible(false);
    assert!(!toast.lifecycle().hide());

    toast.clock.advance_ms(10_000);
    let dismissals = toast.dismissals.entries();
    assert_eq!(dismissals.len(), 1);
    assert_eq!(dismissals[0].at, Duration::from_millis(1300));
    // visible, leaving; the ignored triggers report nothing
    assert_eq!(toast.states.entries().len(), 2);
}

#[test]
fn external_hide_cancels_auto_hide_effect() {
    let config = ToastConfig::new(ToastId::new(), "Hello").hide_after(2.0);
    let toast = spawn_toast(&config);

    toast.clock.advance_ms(500);
    assert!(toast.lifecycle().hide());

    toast.clock.advance_ms(10_000);
    let dismissals = toast.dismissals.entries();
    assert_eq!(dismissals.len(), 1);
    assert_eq!(dismissals[0].at, Duration::from_millis(800));
}

#[test]
fn visible_is_edge_triggered() {
    let config = ToastConfig::new(ToastId::new(), "Hello").no_auto_hide();
    let toast = spawn_toast(&config);

    toast.set_visible(true);
    toast.set_visible(true);
    toast.clock.advance_ms(100);
    assert_eq!(toast.state().phase, Phase::Visible);

    toast.set_visible(false);
    toast.set_visible(false);
    toast.set_visible(true);
    toast.set_visible(false);

    toast.clock.advance_ms(1000);
    assert_eq!(toast.dismissals.count(), 1);
}

#[test]
fn mounting_invisible_hides_at_once() {
    let config = ToastConfig::new(ToastId::new(), "Hello").visible(false);
    let toast = spawn_toast(&config);

    assert_eq!(toast.state().phase, Phase::Leaving);
    toast.clock.advance_ms(300);
    assert_eq!(toast.dismissals.count(), 1);
}

#[test]
fn oversized_hide_after_never_dismisses() {
    let config = ToastConfig::new(ToastId::new(), "Hello").hide_after(1e20);
    let toast = spawn_toast(&config);
    assert_eq!(toast.clock.pending(), 1); // entry only

    toast.clock.advance(Duration::from_secs(3600));
    assert_eq!(toast.state().phase, Phase::Visible);
    assert!(toast.dismissals.is_empty());

    toast.set_visible(false);
    toast.clock.advance_ms(300);
    assert_eq!(toast.dismissals.count(), 1);
}
