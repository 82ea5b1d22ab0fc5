//! `web-sys` implementation of the `enhance` page traits.

use enhance::dom::{Document, Element, EventKind, Handler, Propagation};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// A live DOM element.
#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl Element for WebElement {
    fn text(&self) -> String {
        match self.0.dyn_ref::<web_sys::HtmlElement>() {
            Some(html) => html.inner_text(),
            None => self.0.text_content().unwrap_or_default(),
        }
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            log::warn!("page: set attribute {name}: {err:?}");
        }
    }

    fn set_flag(&self, name: &str, value: bool) {
        if let Err(err) = js_sys::Reflect::set(&self.0, &JsValue::from_str(name), &JsValue::from_bool(value)) {
            log::warn!("page: set property {name}: {err:?}");
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.0.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            log::warn!("page: set style {property}: {err:?}");
        }
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(Self)
    }

    fn append(&self, child: &Self) {
        if let Err(err) = self.0.append_child(&child.0) {
            log::warn!("page: append: {err:?}");
        }
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn listen(&self, event: EventKind, propagation: Propagation, mut handler: Handler) {
        let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            if propagation == Propagation::Stop {
                ev.stop_propagation();
            }
            handler();
        }) as Box<dyn FnMut(_)>);
        if let Err(err) = self
            .0
            .add_event_listener_with_callback(event.as_str(), cb.as_ref().unchecked_ref())
        {
            log::warn!("page: listen {}: {err:?}", event.as_str());
        }
        // Listeners live as long as the page.
        cb.forget();
    }
}

/// The current window's document.
pub struct WebDocument {
    window: web_sys::Window,
    doc: web_sys::Document,
    root: web_sys::Element,
}

impl WebDocument {
    /// `None` outside a browser window.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let doc = window.document()?;
        let root = doc.document_element()?;
        Some(Self { window, doc, root })
    }

    /// Text of the element with `id`, if present.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.doc.get_element_by_id(id).and_then(|el| el.text_content())
    }

    fn is_loaded(&self) -> bool {
        self.doc.ready_state() == "complete"
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn root(&self) -> WebElement {
        WebElement(self.root.clone())
    }

    fn head(&self) -> Option<WebElement> {
        self.doc.head().map(|head| WebElement(head.into()))
    }

    fn body(&self) -> Option<WebElement> {
        self.doc.body().map(|body| WebElement(body.into()))
    }

    fn query(&self, selector: &str) -> Option<WebElement> {
        self.doc.query_selector(selector).ok().flatten().map(WebElement)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        let Ok(list) = self.doc.query_selector_all(selector) else {
            log::warn!("page: bad selector {selector:?}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn create(&self, tag: &str) -> Option<WebElement> {
        match self.doc.create_element(tag) {
            Ok(el) => Some(WebElement(el)),
            Err(err) => {
                log::warn!("page: create <{tag}>: {err:?}");
                None
            }
        }
    }

    fn on_load(&self, mut handler: Handler) {
        // The module may finish loading after the window `load` event.
        if self.is_loaded() {
            handler();
            return;
        }
        let cb = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        if let Err(err) = self
            .window
            .add_event_listener_with_callback("load", cb.as_ref().unchecked_ref())
        {
            log::warn!("page: listen load: {err:?}");
        }
        cb.forget();
    }
}
