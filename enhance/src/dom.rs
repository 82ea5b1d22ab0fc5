//! Minimal page model the components are written against.
//!
//! SYSTEM CONTEXT
//! ==============
//! The components only ever query elements, create a few new ones, change
//! text, attributes and inline style, and listen for a handful of events.
//! These traits cover exactly that surface. The `client` crate implements
//! them on `web-sys`; tests implement them on an in-memory tree.

/// Events the components listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }
}

/// Whether a listener lets the event continue to ancestors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Propagation {
    #[default]
    Bubble,
    Stop,
}

/// Event listener body.
pub type Handler = Box<dyn FnMut()>;

/// Handle to one page element. Clones refer to the same element.
pub trait Element: Clone + 'static {
    /// Rendered text of the element and its descendants.
    fn text(&self) -> String;
    /// Replace all content with a single text node.
    fn set_text(&self, text: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    /// Set a boolean element property such as `muted` or `loop`.
    fn set_flag(&self, name: &str, value: bool);
    /// Set an inline style property, including `--custom` variables.
    fn set_style(&self, property: &str, value: &str);
    /// First descendant matching `selector`.
    fn query(&self, selector: &str) -> Option<Self>;
    fn append(&self, child: &Self);
    /// Detach from the parent. Detached elements are left untouched.
    fn remove(&self);
    fn listen(&self, event: EventKind, propagation: Propagation, handler: Handler);
}

/// Handle to the page document.
pub trait Document: 'static {
    type Element: Element;

    /// The `<html>` element.
    fn root(&self) -> Self::Element;
    fn head(&self) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Create a detached element, `None` if the host refuses the tag.
    fn create(&self, tag: &str) -> Option<Self::Element>;
    /// Run `handler` once the page has fully loaded, immediately if it
    /// already has.
    fn on_load(&self, handler: Handler);
}
