use std::time::Duration;

/// Source of one-shot timers for a [`Lifecycle`](crate::Lifecycle).
///
/// Dropping the returned handle must cancel the timer if it has not fired
/// yet, the way `gloo_timers::callback::Timeout` does. Callbacks are never
/// run synchronously from `schedule`.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Self::Handle;
}

/// Largest delay `setTimeout` honours; anything above fires immediately.
pub const MAX_DELAY_MILLIS: u32 = i32::MAX as u32;

/// Clamp a delay to the whole milliseconds browser timers accept.
pub fn delay_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis())
        .unwrap_or(MAX_DELAY_MILLIS)
        .min(MAX_DELAY_MILLIS)
}
