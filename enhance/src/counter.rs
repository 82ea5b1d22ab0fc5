//! Count-up animation for elements declaring `data-count`.
//!
//! Each element runs its own [`CounterAnimation`] on a short interval. The
//! step is `ceil(target / frames)`, so the value reaches the target in at
//! most `frames` ticks whatever its size, and the last frame is clamped to
//! the exact target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::rc::Rc;

use crate::dom::{Document, Element};
use crate::timer::{Scheduler, TimerControl};

pub const COUNT_ATTR: &str = "data-count";
/// Set once an element's animation has been scheduled.
pub const BOUND_ATTR: &str = "data-count-bound";

/// Result of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTick {
    pub value: i64,
    pub done: bool,
}

/// Count-up state for one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: i64,
    step: i64,
    value: i64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: i64, frames: u32) -> Self {
        let frames = i64::from(frames.max(1));
        let span = target.max(0);
        let step = (span / frames + i64::from(span % frames != 0)).max(1);
        Self { target, step, value: 0 }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.value >= self.target
    }

    /// Advance one step, clamping to the target.
    pub fn tick(&mut self) -> CounterTick {
        self.value = self.value.saturating_add(self.step).min(self.target);
        CounterTick { value: self.value, done: self.is_done() }
    }
}

/// Parse a `data-count` integer, negative values included.
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(target) => Some(target),
        Err(err) => {
            log::debug!("counter: skipping {COUNT_ATTR}={raw:?}: {err}");
            None
        }
    }
}

/// Starts an animation on every `data-count` element.
pub struct CounterAnimator<D: Document, S: Scheduler> {
    doc: Rc<D>,
    scheduler: Rc<S>,
    tick_ms: u32,
    frames: u32,
}

impl<D: Document, S: Scheduler> CounterAnimator<D, S> {
    pub fn new(doc: Rc<D>, scheduler: Rc<S>, tick_ms: u32, frames: u32) -> Self {
        Self { doc, scheduler, tick_ms, frames }
    }

    /// Schedule animations. Returns how many timers were started; a target
    /// of zero or below is written directly without a timer.
    pub fn start(&self) -> usize {
        let mut started = 0;
        for el in self.doc.query_all(&format!("[{COUNT_ATTR}]")) {
            if el.attribute(BOUND_ATTR).is_some() {
                continue;
            }
            let raw = el.attribute(COUNT_ATTR).unwrap_or_default();
            let Some(target) = parse_target(&raw) else {
                continue;
            };
            el.set_attribute(BOUND_ATTR, "");
            if target <= 0 {
                el.set_text(&target.to_string());
                continue;
            }
            let mut animation = CounterAnimation::new(target, self.frames);
            self.scheduler.interval(
                self.tick_ms,
                Box::new(move || {
                    let tick = animation.tick();
                    el.set_text(&tick.value.to_string());
                    if tick.done { TimerControl::Stop } else { TimerControl::Continue }
                }),
            );
            started += 1;
        }
        started
    }
}
