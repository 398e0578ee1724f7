use std::cell::RefCell;
use std::rc::Rc;

use test_helpers::{ManualScheduler, spawn_toast};
use toast::{Lifecycle, Phase, ToastConfig, ToastId};

#[test]
fn unmount_before_entry_is_silent() {
    let mut toast = spawn_toast(&ToastConfig::new(ToastId::new(), "Hello"));

    toast.clock.advance_ms(10);
    toast.unmount();
    assert_eq!(toast.clock.pending(), 0);

    toast.clock.advance_ms(60_000);
    assert!(toast.states.is_empty());
    assert!(toast.dismissals.is_empty());
}

#[test]
fn unmount_while_visible_cancels_auto_hide() {
    let mut toast = spawn_toast(&ToastConfig::new(ToastId::new(), "Hello"));

    toast.clock.advance_ms(1000);
    assert_eq!(toast.state().phase, Phase::Visible);
    toast.unmount();
    assert_eq!(toast.clock.pending(), 0);

    toast.clock.advance_ms(60_000);
    assert_eq!(toast.states.entries().len(), 1);
    assert!(toast.dismissals.is_empty());
}

#[test]
fn unmount_during_exit_animation() {
    let config = ToastConfig::new(ToastId::new(), "Hello").no_auto_hide();
    let mut toast = spawn_toast(&config);

    toast.clock.advance_ms(100);
    toast.set_visible(false);
    toast.clock.advance_ms(150);
    toast.unmount();
    assert_eq!(toast.clock.pending(), 0);

    toast.clock.advance_ms(1000);
    assert!(toast.dismissals.is_empty());
}

#[test]
fn unmount_from_dismissal_callback() {
    // A caller removing the toast from its collection as soon as it is
    // told the toast is gone.
    let clock = ManualScheduler::new();
    let slot: Rc<RefCell<Option<Lifecycle<ManualScheduler>>>> =
        Rc::default();
    let dismissed = Rc::new(RefCell::new(Vec::new()));

    let config = ToastConfig::new(ToastId::new(), "Hello").hide_after(1.0);
    let lifecycle = Lifecycle::mount(&config, clock.clone(), |_| {}, {
        let slot = slot.clone();
        let dismissed = dismissed.clone();
        move |id, _| {
            dismissed.borrow_mut().push(id);
            slot.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(lifecycle);

    clock.advance_ms(5000);
    assert_eq!(*dismissed.borrow(), vec![config.id]);
    assert!(slot.borrow().is_none());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn unmount_from_change_callback() {
    let clock = ManualScheduler::new();
    let slot: Rc<RefCell<Option<Lifecycle<ManualScheduler>>>> =
        Rc::default();
    let dismissed = Rc::new(RefCell::new(0));

    let config = ToastConfig::new(ToastId::new(), "Hello").hide_after(1.0);
    let lifecycle = Lifecycle::mount(
        &config,
        clock.clone(),
        {
            let slot = slot.clone();
            move |state| {
                if state.phase == Phase::Leaving {
                    slot.borrow_mut().take();
                }
            }
        },
        {
            let dismissed = dismissed.clone();
            move |_, _| *dismissed.borrow_mut() += 1
        },
    );
    *slot.borrow_mut() = Some(lifecycle);

    clock.advance_ms(5000);
    assert!(slot.borrow().is_none());
    assert_eq!(*dismissed.borrow(), 0);
    assert_eq!(clock.pending(), 0);
}
