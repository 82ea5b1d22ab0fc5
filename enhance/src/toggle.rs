//! Floating button that flips between the dark and light palettes.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use std::rc::Rc;

use crate::dom::{Document, Element, EventKind, Propagation};
use crate::theme::ThemeApplier;

pub const TOGGLE_CLASS: &str = "theme-toggle";

/// Mounts the toggle button onto `<body>`.
pub struct ThemeToggle<D: Document> {
    doc: Rc<D>,
    applier: Rc<ThemeApplier<D>>,
}

impl<D: Document> ThemeToggle<D> {
    pub fn new(doc: Rc<D>, applier: Rc<ThemeApplier<D>>) -> Self {
        Self { doc, applier }
    }

    /// Create and attach the button. Returns `false` if a toggle is already
    /// on the page or there is no body to attach to.
    pub fn mount(&self) -> bool {
        if self.doc.query(&format!(".{TOGGLE_CLASS}")).is_some() {
            log::debug!("theme toggle already mounted");
            return false;
        }
        let Some(body) = self.doc.body() else {
            return false;
        };
        let Some(button) = self.doc.create("button") else {
            return false;
        };
        button.set_attribute("class", TOGGLE_CLASS);
        button.set_attribute("type", "button");
        button.set_attribute("aria-label", "Toggle theme");
        button.set_text(self.applier.store().load().toggle_glyph());

        let applier = Rc::clone(&self.applier);
        let glyph_target = button.clone();
        button.listen(
            EventKind::Click,
            Propagation::Bubble,
            Box::new(move || {
                // The stored mode decides, not the glyph on screen.
                let next = applier.store().load().toggled();
                applier.apply(next);
                glyph_target.set_text(next.toggle_glyph());
            }),
        );
        body.append(&button);
        true
    }
}
