//! Timer abstraction for delayed and repeating work.
//!
//! The browser binding schedules through `gloo-timers`; tests advance a
//! manual clock instead of waiting on real time.

/// Returned by each interval tick to keep or cancel the interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerControl {
    Continue,
    Stop,
}

/// Single-threaded timer host. Ticks of one interval never overlap.
pub trait Scheduler: 'static {
    /// Run `task` once after `delay_ms`.
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    /// Run `tick` every `period_ms` until it returns [`TimerControl::Stop`].
    fn interval(&self, period_ms: u32, tick: Box<dyn FnMut() -> TimerControl>);
}
