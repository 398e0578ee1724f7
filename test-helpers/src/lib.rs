use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use toast::{Lifecycle, Scheduler, ToastConfig, VisualState};
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

pub mod mock;

use mock::{DismissalLog, StateLog};

/// Install a test-friendly subscriber. Safe to call from every test.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("error"));
    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();
}

struct Timer {
    due: Duration,
    seq: u64,
    callback: Box<dyn FnOnce()>,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    queue: Vec<Timer>,
}

/// Deterministic [`Scheduler`] on a virtual clock starting at zero.
///
/// Timers only fire from [`ManualScheduler::advance`] and
/// [`ManualScheduler::advance_to`], in due order, ties broken by scheduling
/// order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its timer when dropped.
pub struct TimerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerHandle;

    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.queue.push(Timer {
            due,
            seq,
            callback,
            cancelled: cancelled.clone(),
        });
        TimerHandle { cancelled }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn advance(&self, duration: Duration) {
        let target = self.now() + duration;
        self.advance_to(target);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Run every timer due up to `target` and leave the clock there. Timers
    /// scheduled by a callback run too if they fall inside the window.
    pub fn advance_to(&self, target: Duration) {
        while let Some(timer) = self.pop_due(target) {
            (timer.callback)();
        }
        let mut clock = self.clock.borrow_mut();
        if clock.now < target {
            clock.now = target;
        }
    }

    pub fn advance_to_ms(&self, millis: u64) {
        self.advance_to(Duration::from_millis(millis));
    }

    /// Timers that are neither fired nor cancelled.
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .queue
            .iter()
            .filter(|timer| !timer.cancelled.get())
            .count()
    }

    fn pop_due(&self, target: Duration) -> Option<Timer> {
        let mut clock = self.clock.borrow_mut();
        clock.queue.retain(|timer| !timer.cancelled.get());
        let index = clock
            .queue
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= target)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(index, _)| index)?;
        let timer = clock.queue.swap_remove(index);
        clock.now = timer.due;
        Some(timer)
    }
}

/// A mounted toast on its own virtual clock, with everything it reported.
pub struct TestToast {
    pub clock: ManualScheduler,
    pub lifecycle: Option<Lifecycle<ManualScheduler>>,
    pub states: StateLog,
    pub dismissals: DismissalLog,
}

impl TestToast {
    pub fn lifecycle(&self) -> &Lifecycle<ManualScheduler> {
        self.lifecycle
            .as_ref()
            .expect("toast has already been unmounted")
    }

    pub fn state(&self) -> VisualState {
        self.lifecycle().state()
    }

    pub fn set_visible(&self, visible: bool) {
        self.lifecycle().observe_visible(visible);
    }

    /// Drop the lifecycle, as a rendering surface does on unmount.
    pub fn unmount(&mut self) {
        self.lifecycle = None;
    }
}

pub fn spawn_toast<M>(config: &ToastConfig<M>) -> TestToast {
    init_tracing();

    let clock = ManualScheduler::new();
    let states = StateLog::new(&clock);
    let dismissals = DismissalLog::new(&clock);
    let lifecycle = Lifecycle::mount(
        config,
        clock.clone(),
        states.sink(),
        dismissals.sink(),
    );

    TestToast {
        clock,
        lifecycle: Some(lifecycle),
        states,
        dismissals,
    }
}
