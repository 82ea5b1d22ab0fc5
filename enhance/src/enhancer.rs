//! Session controller that boots every enhancement once per page.
//!
//! DESIGN
//! ======
//! One [`Enhancer`] owns the session state (theme applier, in-memory
//! watchlist) and hands shared handles to the components. Boot order:
//!
//! 1. apply the saved theme and inject the global stylesheet,
//! 2. mount the toggle button,
//! 3. start countdowns,
//! 4. after the settling delay, decorate cards and bind hover previews,
//! 5. on window load, start counters.
//!
//! Each component also guards against re-running on the same elements, so a
//! second enhancer on the same page adds nothing.

#[cfg(test)]
#[path = "enhancer_test.rs"]
mod enhancer_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::Config;
use crate::countdown::CountdownUpdater;
use crate::counter::CounterAnimator;
use crate::dom::Document;
use crate::preview::HoverPreviewController;
use crate::store::KeyValueStore;
use crate::theme::{ThemeApplier, ThemeStore};
use crate::timer::Scheduler;
use crate::toggle::ThemeToggle;
use crate::watchlist::{WatchlistDecorator, WatchlistStore};

pub struct Enhancer<D: Document, S: Scheduler> {
    config: Config,
    doc: Rc<D>,
    scheduler: Rc<S>,
    theme: Rc<ThemeApplier<D>>,
    watchlist: Rc<WatchlistStore>,
    booted: Cell<bool>,
}

impl<D: Document, S: Scheduler> Enhancer<D, S> {
    /// Build the session. Reads the watchlist from `store` once.
    pub fn new(config: Config, doc: Rc<D>, scheduler: Rc<S>, store: Rc<dyn KeyValueStore>) -> Self {
        let theme = Rc::new(ThemeApplier::new(
            Rc::clone(&doc),
            ThemeStore::new(Rc::clone(&store), config.theme_key.clone()),
        ));
        let watchlist = Rc::new(WatchlistStore::load(store, config.watchlist_key.clone()));
        Self { config, doc, scheduler, theme, watchlist, booted: Cell::new(false) }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeApplier<D> {
        &self.theme
    }

    #[must_use]
    pub fn watchlist(&self) -> &WatchlistStore {
        &self.watchlist
    }

    /// Start all enhancements. Returns `false` if this enhancer already
    /// booted.
    pub fn boot(&self) -> bool {
        if self.booted.replace(true) {
            return false;
        }

        let mode = self.theme.store().load();
        self.theme.apply(mode);
        self.theme.inject_stylesheet();
        ThemeToggle::new(Rc::clone(&self.doc), Rc::clone(&self.theme)).mount();

        let countdowns =
            CountdownUpdater::new(Rc::clone(&self.doc), Rc::clone(&self.scheduler), self.config.countdown_period_ms)
                .start();

        let decorator = WatchlistDecorator::new(Rc::clone(&self.doc), Rc::clone(&self.watchlist));
        let previews = HoverPreviewController::new(Rc::clone(&self.doc));
        self.scheduler.timeout(
            self.config.settle_delay_ms,
            Box::new(move || {
                decorator.decorate();
                previews.enable();
            }),
        );

        let counters = CounterAnimator::new(
            Rc::clone(&self.doc),
            Rc::clone(&self.scheduler),
            self.config.counter_tick_ms,
            self.config.counter_frames,
        );
        self.doc.on_load(Box::new(move || {
            counters.start();
        }));

        log::info!("cinehub: enhancements started (theme {}, {countdowns} countdowns)", mode.as_str());
        true
    }
}
