//! `gloo-timers` implementation of the `enhance` scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use enhance::timer::{Scheduler, TimerControl};
use gloo_timers::callback::{Interval, Timeout};

/// Schedules on the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }

    fn interval(&self, period_ms: u32, mut tick: Box<dyn FnMut() -> TimerControl>) {
        let holder: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let interval = Interval::new(period_ms, move || {
            if tick() == TimerControl::Continue {
                return;
            }
            if let Some(interval) = holder_for_cb.borrow_mut().take() {
                // The JS closure is still running here; free it on a later turn.
                let closure = interval.cancel();
                Timeout::new(0, move || drop(closure)).forget();
            }
        });
        *holder.borrow_mut() = Some(interval);
    }
}
