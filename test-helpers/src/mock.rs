//! Recorders standing in for the caller's callbacks.
//!
//! Each entry is stamped with the virtual time it was reported at, so tests
//! can assert on exact timings.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use toast::{Position, ToastId, VisualState};

use crate::ManualScheduler;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dismissal {
    pub at: Duration,
    pub id: ToastId,
    pub position: Position,
}

/// Records every `on_dismissed` call.
#[derive(Clone)]
pub struct DismissalLog {
    clock: ManualScheduler,
    entries: Rc<RefCell<Vec<Dismissal>>>,
}

impl DismissalLog {
    pub fn new(clock: &ManualScheduler) -> Self {
        Self {
            clock: clock.clone(),
            entries: Rc::default(),
        }
    }

    pub fn sink(&self) -> impl Fn(ToastId, Position) + 'static {
        let log = self.clone();
        move |id, position| {
            log.entries.borrow_mut().push(Dismissal {
                at: log.clock.now(),
                id,
                position,
            });
        }
    }

    pub fn entries(&self) -> Vec<Dismissal> {
        self.entries.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Records every visual transition reported through `on_change`.
#[derive(Clone)]
pub struct StateLog {
    clock: ManualScheduler,
    entries: Rc<RefCell<Vec<(Duration, VisualState)>>>,
}

impl StateLog {
    pub fn new(clock: &ManualScheduler) -> Self {
        Self {
            clock: clock.clone(),
            entries: Rc::default(),
        }
    }

    pub fn sink(&self) -> impl Fn(VisualState) + 'static {
        let log = self.clone();
        move |state| {
            log.entries.borrow_mut().push((log.clock.now(), state));
        }
    }

    pub fn entries(&self) -> Vec<(Duration, VisualState)> {
        self.entries.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
