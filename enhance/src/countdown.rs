//! Day countdown labels (`.countdown`).
//!
//! A label starts as a bare day count. Every period the count drops by one
//! and the label reads `"<n> days left"`; once it would reach zero the label
//! becomes `"Coming Today!"` and that label's timer is cancelled for good.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use std::rc::Rc;

use crate::dom::{Document, Element};
use crate::timer::{Scheduler, TimerControl};

pub const COUNTDOWN_SELECTOR: &str = ".countdown";
pub const BOUND_ATTR: &str = "data-countdown-bound";
pub const TERMINAL_LABEL: &str = "Coming Today!";

/// Countdown state for one label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Counting(i64),
    Done,
}

impl Countdown {
    /// Parse the leading integer of a label, ignoring leading whitespace and
    /// any trailing text. `None` when the label does not start with a number.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['-', '+']));
        let digits = trimmed[sign_len..].chars().take_while(char::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        match trimmed[..sign_len + digits].parse() {
            Ok(days) => Some(Self::Counting(days)),
            Err(err) => {
                log::debug!("countdown: unusable label {label:?}: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn is_done(self) -> bool {
        self == Self::Done
    }

    /// Advance one period. Returns the new label, or `None` once done.
    pub fn tick(&mut self) -> Option<String> {
        match *self {
            Self::Counting(days) => {
                let left = days.saturating_sub(1);
                if left > 0 {
                    *self = Self::Counting(left);
                    Some(format!("{left} days left"))
                } else {
                    *self = Self::Done;
                    Some(TERMINAL_LABEL.to_owned())
                }
            }
            Self::Done => None,
        }
    }
}

/// Starts one independent timer per countdown label.
pub struct CountdownUpdater<D: Document, S: Scheduler> {
    doc: Rc<D>,
    scheduler: Rc<S>,
    period_ms: u32,
}

impl<D: Document, S: Scheduler> CountdownUpdater<D, S> {
    pub fn new(doc: Rc<D>, scheduler: Rc<S>, period_ms: u32) -> Self {
        Self { doc, scheduler, period_ms }
    }

    /// Returns how many timers were started. Non-numeric labels are left
    /// untouched.
    pub fn start(&self) -> usize {
        let mut started = 0;
        for el in self.doc.query_all(COUNTDOWN_SELECTOR) {
            if el.attribute(BOUND_ATTR).is_some() {
                continue;
            }
            let label = el.text();
            let Some(mut countdown) = Countdown::parse(&label) else {
                log::debug!("countdown: skipping non-numeric label {label:?}");
                continue;
            };
            el.set_attribute(BOUND_ATTR, "");
            self.scheduler.interval(
                self.period_ms,
                Box::new(move || {
                    if let Some(label) = countdown.tick() {
                        el.set_text(&label);
                    }
                    if countdown.is_done() { TimerControl::Stop } else { TimerControl::Continue }
                }),
            );
            started += 1;
        }
        started
    }
}
