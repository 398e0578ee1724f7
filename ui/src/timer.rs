use gloo_timers::callback::Timeout;
use std::time::Duration;
use toast::Scheduler;
use toast::timer::delay_millis;

/// Schedules lifecycle timers with `setTimeout`. Dropping the returned
/// `Timeout` clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_millis(delay), callback)
    }
}
