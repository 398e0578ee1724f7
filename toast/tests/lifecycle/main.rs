mod dismissal;
mod entry;
mod teardown;

use test_helpers::spawn_toast;
use toast::{Phase, ToastConfig, ToastId};

#[test]
fn mounts_hidden() {
    let toast = spawn_toast(&ToastConfig::new(ToastId::new(), "Hello"));

    let state = toast.state();
    assert_eq!(state.phase, Phase::Entering);
    assert_eq!(state.opacity, 0.0);
    assert_eq!(state.offset, -15);
    assert!(toast.states.is_empty());
    assert_eq!(toast.clock.pending(), 2); // entry + auto-hide
}
