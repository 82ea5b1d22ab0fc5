//! Dark/light palettes, the persisted preference, and painting the page.
//!
//! Each palette is applied by writing five CSS custom properties onto the
//! `<html>` element. A global stylesheet injected once at boot makes the
//! site's header, cards, text and buttons consume those variables, so a
//! palette switch repaints the whole page.
//!
//! TRADE-OFFS
//! ==========
//! The stylesheet uses `!important` on `body` so pages with their own inline
//! background still follow the theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use crate::dom::{Document, Element};
use crate::store::KeyValueStore;

pub const VAR_BACKGROUND: &str = "--bg";
pub const VAR_CARD: &str = "--card";
pub const VAR_TEXT: &str = "--text";
pub const VAR_MUTED: &str = "--muted";
pub const VAR_ACCENT: &str = "--accent";

/// `id` of the injected `<style>` element.
pub const STYLE_ID: &str = "cinehub-theme-style";

/// Global rules consuming the palette variables.
pub const GLOBAL_CSS: &str = r"
:root{
  --bg:#0d0d0d;
  --card:#161616;
  --text:#ffffff;
  --muted:#aaaaaa;
  --accent:#ff4c4c;
}

body{
  background:var(--bg) !important;
  color:var(--text) !important;
  transition:background .35s ease, color .35s ease;
}

header, footer, .modal-content, .movie-card, .section, .footer-col{
  background:var(--card);
  color:var(--text);
}

p, span, small{
  color:var(--muted);
}

a, .logo, h1, h2, h3, h4{
  color:var(--text);
}

button, .filter-btn, .play-btn{
  background:var(--accent);
  color:#fff;
}

.theme-toggle{
  position:fixed;
  bottom:25px;
  right:25px;
  width:48px;
  height:48px;
  border-radius:50%;
  border:none;
  font-size:18px;
  cursor:pointer;
  z-index:9999;
  box-shadow:0 6px 20px rgba(0,0,0,.35);
}
";

/// Persisted theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    /// Parse a stored value. Anything other than `"light"` is dark.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }

    /// Glyph for the toggle button: a sun while dark, a moon while light.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}\u{fe0f}",
            Self::Light => "\u{1f319}",
        }
    }
}

/// Colors for the five themed roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
}

pub const DARK: Palette = Palette {
    background: "#0d0d0d",
    card: "#161616",
    text: "#ffffff",
    muted: "#aaaaaa",
    accent: "#ff4c4c",
};

pub const LIGHT: Palette = Palette {
    background: "#f5f5f5",
    card: "#ffffff",
    text: "#111111",
    muted: "#555555",
    accent: "#ff4c4c",
};

impl Palette {
    /// `(custom property, color)` pairs in a fixed order.
    #[must_use]
    pub fn variables(&self) -> [(&'static str, &'static str); 5] {
        [
            (VAR_BACKGROUND, self.background),
            (VAR_CARD, self.card),
            (VAR_TEXT, self.text),
            (VAR_MUTED, self.muted),
            (VAR_ACCENT, self.accent),
        ]
    }
}

/// Reads and writes the theme preference.
#[derive(Clone)]
pub struct ThemeStore {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl ThemeStore {
    pub fn new(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Saved preference, dark when absent or unrecognized.
    #[must_use]
    pub fn load(&self) -> ThemePreference {
        self.store
            .get(&self.key)
            .map_or(ThemePreference::Dark, |raw| ThemePreference::parse(&raw))
    }

    pub fn save(&self, mode: ThemePreference) {
        if let Err(err) = self.store.set(&self.key, mode.as_str()) {
            log::warn!("theme: could not persist {}: {err}", mode.as_str());
        }
    }
}

/// Paints palettes onto the page root and owns the global stylesheet.
pub struct ThemeApplier<D: Document> {
    doc: Rc<D>,
    store: ThemeStore,
}

impl<D: Document> ThemeApplier<D> {
    pub fn new(doc: Rc<D>, store: ThemeStore) -> Self {
        Self { doc, store }
    }

    #[must_use]
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Write `mode`'s palette onto `<html>` and persist `mode`.
    pub fn apply(&self, mode: ThemePreference) {
        let root = self.doc.root();
        for (name, value) in mode.palette().variables() {
            root.set_style(name, value);
        }
        self.store.save(mode);
        log::debug!("theme: applied {}", mode.as_str());
    }

    /// Apply a raw mode string; unrecognized values apply dark.
    pub fn set_theme(&self, raw: &str) -> ThemePreference {
        let mode = ThemePreference::parse(raw);
        self.apply(mode);
        mode
    }

    /// Insert the global stylesheet into `<head>`. Returns `false` when it is
    /// already present or the page has no head.
    pub fn inject_stylesheet(&self) -> bool {
        if self.doc.query(&format!("#{STYLE_ID}")).is_some() {
            return false;
        }
        let Some(head) = self.doc.head() else {
            log::warn!("theme: page has no <head>, stylesheet skipped");
            return false;
        };
        let Some(style) = self.doc.create("style") else {
            return false;
        };
        style.set_attribute("id", STYLE_ID);
        style.set_text(GLOBAL_CSS);
        head.append(&style);
        true
    }
}
