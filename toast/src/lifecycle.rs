//! The toast's entry → visible → leaving state machine.
//!
//! Every timer callback only holds a `Weak` reference to the shared state and
//! checks the phase it expects before doing anything, so a timer outliving
//! its [`Lifecycle`] or firing after a hide is a no-op.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::config::{Edge, Position, ToastConfig, ToastId};
use crate::timer::Scheduler;

/// Delay before the settled style is applied, so the hidden style is
/// rendered first and the transition is actually observed.
pub const ENTRY_DELAY: Duration = Duration::from_millis(50);
/// Length of the exit animation; `on_dismissed` fires this long after hide.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);
/// Magnitude of the animated margin offset, in pixels.
pub const OFFSET: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

/// What the toast currently renders: its phase and the two animated
/// properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub phase: Phase,
    pub opacity: f32,
    /// Margin offset in pixels, applied on `edge`.
    pub offset: i32,
    pub edge: Edge,
}

impl VisualState {
    pub fn hidden(edge: Edge) -> Self {
        Self {
            phase: Phase::Entering,
            opacity: 0.0,
            offset: -OFFSET,
            edge,
        }
    }

    pub fn settled(edge: Edge) -> Self {
        Self {
            phase: Phase::Visible,
            opacity: 1.0,
            offset: OFFSET,
            edge,
        }
    }

    pub fn leaving(edge: Edge) -> Self {
        Self {
            phase: Phase::Leaving,
            opacity: 0.0,
            offset: -OFFSET,
            edge,
        }
    }
}

type OnChange = Rc<dyn Fn(VisualState)>;
type OnDismissed = Rc<dyn Fn(ToastId, Position)>;

struct Shared<S: Scheduler> {
    id: ToastId,
    position: Position,
    state: VisualState,
    last_visible: bool,
    dismissed: bool,
    scheduler: S,
    timers: Vec<S::Handle>,
    on_change: OnChange,
    on_dismissed: OnDismissed,
}

/// Drives one toast from mount to dismissal.
///
/// Owns every timer it arms; dropping the `Lifecycle` cancels them all and
/// no callback fires afterwards.
pub struct Lifecycle<S: Scheduler> {
    shared: Rc<RefCell<Shared<S>>>,
}

impl<S: Scheduler> Lifecycle<S> {
    /// Start the toast hidden and arm the entry timer, plus the auto-hide
    /// timer when the config asks for one.
    ///
    /// `on_change` is called after every visual transition and
    /// `on_dismissed` exactly once, when the exit animation is over.
    pub fn mount<M>(
        config: &ToastConfig<M>,
        scheduler: S,
        on_change: impl Fn(VisualState) + 'static,
        on_dismissed: impl Fn(ToastId, Position) + 'static,
    ) -> Self {
        let position = config.options.position;
        let shared = Rc::new(RefCell::new(Shared {
            id: config.id,
            position,
            state: VisualState::hidden(position.edge()),
            last_visible: true,
            dismissed: false,
            scheduler,
            timers: Vec::with_capacity(3),
            on_change: Rc::new(on_change),
            on_dismissed: Rc::new(on_dismissed),
        }));

        tracing::debug!(
            toast = %config.id,
            %position,
            kind = %config.options.kind,
            "mounting toast"
        );

        arm(&shared, ENTRY_DELAY, enter);
        if let Some(delay) = config.auto_hide() {
            arm(&shared, delay, |shared| {
                tracing::debug!(
                    toast = %shared.borrow().id,
                    "auto-hide timer fired"
                );
                begin_hide(shared);
            });
        }

        let lifecycle = Self { shared };
        if !config.visible {
            lifecycle.observe_visible(false);
        }
        lifecycle
    }

    pub fn id(&self) -> ToastId {
        self.shared.borrow().id
    }

    pub fn state(&self) -> VisualState {
        self.shared.borrow().state
    }

    pub fn is_dismissed(&self) -> bool {
        self.shared.borrow().dismissed
    }

    /// Feed the caller's current `visible` flag. Only a `true → false` edge
    /// starts the hide sequence; repeated observations of the same value do
    /// nothing.
    pub fn observe_visible(&self, visible: bool) {
        let was_visible = {
            let mut shared = self.shared.borrow_mut();
            std::mem::replace(&mut shared.last_visible, visible)
        };
        if was_visible && !visible {
            tracing::debug!(toast = %self.id(), "hide requested by caller");
            begin_hide(&self.shared);
        }
    }

    /// Start the exit animation. Returns `false` if the toast was already
    /// leaving, in which case nothing happens.
    pub fn hide(&self) -> bool {
        begin_hide(&self.shared)
    }
}

impl<S: Scheduler> Drop for Lifecycle<S> {
    fn drop(&mut self) {
        // Timer callbacks only hold weak references, but the handles are
        // dropped here as well so nothing stays queued.
        let timers = match self.shared.try_borrow_mut() {
            Ok(mut shared) => std::mem::take(&mut shared.timers),
            Err(_) => return,
        };
        if !timers.is_empty() {
            tracing::trace!(
                count = timers.len(),
                "releasing toast timers on teardown"
            );
        }
        drop(timers);
    }
}

fn arm<S: Scheduler>(
    shared: &Rc<RefCell<Shared<S>>>,
    delay: Duration,
    step: fn(&Rc<RefCell<Shared<S>>>),
) {
    let weak: Weak<RefCell<Shared<S>>> = Rc::downgrade(shared);
    let scheduler = shared.borrow().scheduler.clone();
    let handle = scheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                step(&shared);
            }
        }),
    );
    shared.borrow_mut().timers.push(handle);
}

fn enter<S: Scheduler>(shared: &Rc<RefCell<Shared<S>>>) {
    let (on_change, state) = {
        let mut shared = shared.borrow_mut();
        if shared.state.phase != Phase::Entering {
            tracing::trace!(
                toast = %shared.id,
                "entry timer fired after hide, ignoring"
            );
            return;
        }
        shared.state = VisualState::settled(shared.state.edge);
        tracing::debug!(toast = %shared.id, "toast visible");
        (shared.on_change.clone(), shared.state)
    };
    on_change(state);
}

fn begin_hide<S: Scheduler>(shared: &Rc<RefCell<Shared<S>>>) -> bool {
    let (on_change, state) = {
        let mut shared = shared.borrow_mut();
        if shared.state.phase == Phase::Leaving {
            tracing::trace!(toast = %shared.id, "already leaving, ignoring hide");
            return false;
        }
        shared.state = VisualState::leaving(shared.state.edge);
        tracing::debug!(toast = %shared.id, "toast leaving");
        (shared.on_change.clone(), shared.state)
    };
    // Armed before notifying so a caller dropping the lifecycle from
    // `on_change` also cancels the exit timer.
    arm(shared, EXIT_DURATION, finish);
    on_change(state);
    true
}

fn finish<S: Scheduler>(shared: &Rc<RefCell<Shared<S>>>) {
    let (on_dismissed, id, position) = {
        let mut shared = shared.borrow_mut();
        if shared.dismissed {
            return;
        }
        shared.dismissed = true;
        tracing::debug!(toast = %shared.id, "toast dismissed");
        (shared.on_dismissed.clone(), shared.id, shared.position)
    };
    on_dismissed(id, position);
}
