//! Hover video preview for cards declaring `data-preview`.
//!
//! Pointer-enter builds a fresh looping, muted video covering the card;
//! pointer-leave removes it. Each card holds at most one overlay.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::{Document, Element, EventKind, Propagation};

pub const PREVIEW_ATTR: &str = "data-preview";
pub const BOUND_ATTR: &str = "data-preview-bound";
pub const OVERLAY_CLASS: &str = "preview-overlay";

/// Wires hover handlers onto preview cards.
pub struct HoverPreviewController<D: Document> {
    doc: Rc<D>,
}

impl<D: Document> HoverPreviewController<D> {
    pub fn new(doc: Rc<D>) -> Self {
        Self { doc }
    }

    /// Bind every preview card not bound yet. Returns how many were bound.
    pub fn enable(&self) -> usize {
        let mut bound = 0;
        for card in self.doc.query_all(&format!("[{PREVIEW_ATTR}]")) {
            if card.attribute(BOUND_ATTR).is_some() {
                continue;
            }
            card.set_attribute(BOUND_ATTR, "");
            self.bind(&card);
            bound += 1;
        }
        log::debug!("preview: bound {bound} cards");
        bound
    }

    fn bind(&self, card: &D::Element) {
        let overlay: Rc<RefCell<Option<D::Element>>> = Rc::new(RefCell::new(None));

        let doc = Rc::clone(&self.doc);
        let slot = Rc::clone(&overlay);
        let target = card.clone();
        card.listen(
            EventKind::MouseEnter,
            Propagation::Bubble,
            Box::new(move || {
                if slot.borrow().is_some() {
                    return;
                }
                let Some(src) = target.attribute(PREVIEW_ATTR) else {
                    return;
                };
                if let Some(video) = build_overlay(&*doc, &src) {
                    target.append(&video);
                    *slot.borrow_mut() = Some(video);
                }
            }),
        );

        card.listen(
            EventKind::MouseLeave,
            Propagation::Bubble,
            Box::new(move || {
                if let Some(video) = overlay.borrow_mut().take() {
                    video.remove();
                }
            }),
        );
    }
}

fn build_overlay<D: Document>(doc: &D, src: &str) -> Option<D::Element> {
    let video = doc.create("video")?;
    video.set_attribute("class", OVERLAY_CLASS);
    video.set_attribute("src", src);
    video.set_flag("autoplay", true);
    video.set_flag("muted", true);
    video.set_flag("loop", true);
    video.set_flag("playsInline", true);
    video.set_style("position", "absolute");
    video.set_style("inset", "0");
    video.set_style("width", "100%");
    video.set_style("height", "100%");
    video.set_style("object-fit", "cover");
    Some(video)
}
