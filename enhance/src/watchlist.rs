//! Favorited titles and the heart indicator attached to each movie card.
//!
//! DESIGN
//! ======
//! The list is read from storage once per session and then owned in memory
//! by [`WatchlistStore`]. Every toggle writes the whole list back before the
//! click handler returns, so the stored copy never lags the indicators.
//!
//! A card's identity is its `data-title` attribute when present, otherwise
//! its trimmed rendered text. Two cards with the same identity share one
//! entry.

#[cfg(test)]
#[path = "watchlist_test.rs"]
mod watchlist_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Document, Element, EventKind, Propagation};
use crate::error::StoreError;
use crate::store::KeyValueStore;

pub const CARD_SELECTOR: &str = ".movie-card";
pub const INDICATOR_CLASS: &str = "fav";
/// Optional explicit card identity.
pub const TITLE_ATTR: &str = "data-title";
/// Identity recorded on each indicator, since the glyph becomes part of the
/// card text once attached.
pub const KEY_ATTR: &str = "data-watchlist-key";

pub const GLYPH_SAVED: &str = "\u{2764}\u{fe0f}";
pub const GLYPH_UNSAVED: &str = "\u{1f90d}";

/// Ordered, duplicate-free list of titles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Watchlist {
    titles: Vec<String>,
}

impl Watchlist {
    /// Build from titles, keeping the first occurrence of each.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for title in titles {
            let title = title.into();
            if !list.contains(&title) {
                list.titles.push(title);
            }
        }
        list
    }

    /// Decode the stored JSON array.
    ///
    /// # Errors
    ///
    /// Returns the decode error for anything other than an array of strings.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let titles: Vec<String> = serde_json::from_str(raw)?;
        Ok(Self::from_titles(titles))
    }

    /// Encode as a JSON array of strings.
    ///
    /// # Errors
    ///
    /// Propagates serializer failure.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.titles)
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Remove `title` if present, append it otherwise. Returns the new
    /// membership.
    pub fn toggle(&mut self, title: &str) -> bool {
        if let Some(index) = self.titles.iter().position(|t| t == title) {
            self.titles.remove(index);
            false
        } else {
            self.titles.push(title.to_owned());
            true
        }
    }

    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Session copy of the watchlist plus its storage slot.
pub struct WatchlistStore {
    store: Rc<dyn KeyValueStore>,
    key: String,
    list: RefCell<Watchlist>,
}

impl WatchlistStore {
    /// Load the persisted list. Missing or malformed data yields an empty
    /// list.
    pub fn load(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let list = match store.get(&key) {
            None => Watchlist::default(),
            Some(raw) => Watchlist::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("watchlist: discarding malformed `{key}`: {err}");
                Watchlist::default()
            }),
        };
        log::debug!("watchlist: loaded {} titles", list.len());
        Self { store, key, list: RefCell::new(list) }
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.list.borrow().contains(title)
    }

    #[must_use]
    pub fn snapshot(&self) -> Watchlist {
        self.list.borrow().clone()
    }

    /// Flip membership and persist immediately. Returns the new membership.
    pub fn toggle(&self, title: &str) -> bool {
        let member = self.list.borrow_mut().toggle(title);
        if let Err(err) = self.persist() {
            log::warn!("watchlist: {err}");
        }
        member
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = self
            .list
            .borrow()
            .to_json()
            .map_err(|source| StoreError::Encode { key: self.key.clone(), source })?;
        self.store.set(&self.key, &raw)
    }
}

#[must_use]
pub fn indicator_glyph(member: bool) -> &'static str {
    if member { GLYPH_SAVED } else { GLYPH_UNSAVED }
}

/// Watchlist identity for a card.
pub fn card_key<E: Element>(card: &E) -> String {
    card.attribute(TITLE_ATTR)
        .map(|title| title.trim().to_owned())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| card.text().trim().to_owned())
}

/// Attaches favorite indicators to rendered cards.
pub struct WatchlistDecorator<D: Document> {
    doc: Rc<D>,
    watchlist: Rc<WatchlistStore>,
}

impl<D: Document> WatchlistDecorator<D> {
    pub fn new(doc: Rc<D>, watchlist: Rc<WatchlistStore>) -> Self {
        Self { doc, watchlist }
    }

    /// Decorate every card that has no indicator yet. Returns how many cards
    /// were decorated by this call.
    pub fn decorate(&self) -> usize {
        let mut decorated = 0;
        for card in self.doc.query_all(CARD_SELECTOR) {
            if card.query(&format!(".{INDICATOR_CLASS}")).is_some() {
                continue;
            }
            let Some(indicator) = self.doc.create("span") else {
                continue;
            };
            let title = card_key(&card);
            indicator.set_attribute("class", INDICATOR_CLASS);
            indicator.set_attribute(KEY_ATTR, &title);
            indicator.set_text(indicator_glyph(self.watchlist.contains(&title)));
            indicator.set_style("position", "absolute");
            indicator.set_style("top", "8px");
            indicator.set_style("right", "8px");
            indicator.set_style("cursor", "pointer");

            let doc = Rc::clone(&self.doc);
            let watchlist = Rc::clone(&self.watchlist);
            indicator.listen(
                EventKind::Click,
                Propagation::Stop,
                Box::new(move || {
                    let member = watchlist.toggle(&title);
                    sync_indicators(&*doc, &title, member);
                }),
            );

            card.set_style("position", "relative");
            card.append(&indicator);
            decorated += 1;
        }
        log::debug!("watchlist: decorated {decorated} cards");
        decorated
    }
}

/// Set the glyph on every indicator keyed by `title`.
fn sync_indicators<D: Document>(doc: &D, title: &str, member: bool) {
    for indicator in doc.query_all(&format!(".{INDICATOR_CLASS}")) {
        if indicator.attribute(KEY_ATTR).as_deref() == Some(title) {
            indicator.set_text(indicator_glyph(member));
        }
    }
}
