//! Page enhancements for the CineHub movie-browsing site.
//!
//! This crate holds everything that does not need a browser: the theme
//! palettes and preference store, the watchlist, the counter and countdown
//! state machines, and the components that wire them onto a page. DOM access,
//! persistent storage and timers all go through the small traits in [`dom`],
//! [`store`] and [`timer`], so the `client` crate can bind them to `web-sys`
//! while tests drive them with an in-memory page and a manual clock.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`enhancer`] | Session controller that boots every component once |
//! | [`theme`] | Palettes, theme preference store, stylesheet and root variables |
//! | [`toggle`] | Floating dark/light toggle button |
//! | [`watchlist`] | Persisted favorites and the card decorator |
//! | [`counter`] | Count-up animation for `data-count` elements |
//! | [`preview`] | Hover video overlay for `data-preview` cards |
//! | [`countdown`] | Day countdown labels |
//! | [`config`] | Keys, delays and periods with serde defaults |
//! | [`store`] | Key-value storage trait and in-memory store |
//! | [`dom`] / [`timer`] | Host abstractions implemented by the browser binding |

pub mod config;
pub mod countdown;
pub mod counter;
pub mod dom;
pub mod enhancer;
pub mod error;
pub mod preview;
pub mod store;
pub mod theme;
pub mod timer;
pub mod toggle;
pub mod watchlist;

#[cfg(test)]
pub(crate) mod testing;

pub use config::Config;
pub use enhancer::Enhancer;
