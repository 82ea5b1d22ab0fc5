//! In-memory page and manual clock for component tests.
//!
//! `FakeDocument` supports the simple selectors the components use
//! (`.class`, `#id`, `[attr]`, `tag`). `ManualScheduler` only runs timers
//! when a test calls [`ManualScheduler::advance`].

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::dom::{Document, Element, EventKind, Handler, Propagation};
use crate::timer::{Scheduler, TimerControl};

struct Listener {
    event: EventKind,
    propagation: Propagation,
    handler: Handler,
}

#[derive(Default)]
struct Node {
    tag: String,
    text: RefCell<String>,
    attrs: RefCell<BTreeMap<String, String>>,
    flags: RefCell<BTreeMap<String, bool>>,
    style: RefCell<BTreeMap<String, String>>,
    children: RefCell<Vec<FakeElement>>,
    parent: RefCell<Weak<Node>>,
    listeners: RefCell<Vec<Listener>>,
}

#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeElement")
            .field("tag", &self.0.tag)
            .field("attrs", &self.0.attrs.borrow())
            .finish_non_exhaustive()
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(Node { tag: tag.to_owned(), ..Node::default() }))
    }

    pub fn with_class(self, class: &str) -> Self {
        self.set_attribute("class", class);
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.children.borrow().clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.style.borrow().get(property).cloned()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.0.flags.borrow().get(name).copied().unwrap_or(false)
    }

    pub fn parent(&self) -> Option<FakeElement> {
        self.0.parent.borrow().upgrade().map(FakeElement)
    }

    pub fn count(&self, selector: &str) -> usize {
        self.descendants().iter().filter(|el| el.matches(selector)).count()
    }

    pub fn click(&self) {
        self.dispatch(EventKind::Click, true);
    }

    pub fn mouse_enter(&self) {
        self.dispatch(EventKind::MouseEnter, false);
    }

    pub fn mouse_leave(&self) {
        self.dispatch(EventKind::MouseLeave, false);
    }

    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            return self
                .attribute("class")
                .is_some_and(|list| list.split_whitespace().any(|c| c == class));
        }
        if let Some(id) = selector.strip_prefix('#') {
            return self.attribute("id").as_deref() == Some(id);
        }
        if let Some(attr) = selector.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return self.0.attrs.borrow().contains_key(attr);
        }
        self.0.tag == selector
    }

    fn descendants(&self) -> Vec<FakeElement> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(child.clone());
            out.extend(child.descendants());
        }
        out
    }

    fn dispatch(&self, event: EventKind, bubbles: bool) {
        let mut current = Some(self.clone());
        while let Some(el) = current {
            let stopped = el.run_listeners(event);
            if stopped || !bubbles {
                break;
            }
            current = el.parent();
        }
    }

    fn run_listeners(&self, event: EventKind) -> bool {
        let mut taken = std::mem::take(&mut *self.0.listeners.borrow_mut());
        let mut stopped = false;
        for listener in taken.iter_mut().filter(|l| l.event == event) {
            (listener.handler)();
            stopped |= listener.propagation == Propagation::Stop;
        }
        let mut slot = self.0.listeners.borrow_mut();
        let added = std::mem::take(&mut *slot);
        *slot = taken;
        slot.extend(added);
        stopped
    }
}

impl Element for FakeElement {
    fn text(&self) -> String {
        let mut text = self.0.text.borrow().clone();
        for child in self.children() {
            text.push_str(&child.text());
        }
        text
    }

    fn set_text(&self, text: &str) {
        for child in self.children() {
            child.remove();
        }
        *self.0.text.borrow_mut() = text.to_owned();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attrs.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.attrs.borrow_mut().insert(name.to_owned(), value.to_owned());
    }

    fn set_flag(&self, name: &str, value: bool) {
        self.0.flags.borrow_mut().insert(name.to_owned(), value);
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0.style.borrow_mut().insert(property.to_owned(), value.to_owned());
    }

    fn query(&self, selector: &str) -> Option<Self> {
        self.descendants().into_iter().find(|el| el.matches(selector))
    }

    fn append(&self, child: &Self) {
        child.remove();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
    }

    fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.0.children.borrow_mut().retain(|c| c != self);
        *self.0.parent.borrow_mut() = Weak::new();
    }

    fn listen(&self, event: EventKind, propagation: Propagation, handler: Handler) {
        self.0.listeners.borrow_mut().push(Listener { event, propagation, handler });
    }
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FakeDocument {
    root: FakeElement,
    head: FakeElement,
    body: FakeElement,
    loaded: Cell<bool>,
    load_handlers: RefCell<Vec<Handler>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        let root = FakeElement::new("html");
        let head = FakeElement::new("head");
        let body = FakeElement::new("body");
        root.append(&head);
        root.append(&body);
        Self { root, head, body, loaded: Cell::new(false), load_handlers: RefCell::new(Vec::new()) }
    }

    pub fn body_el(&self) -> FakeElement {
        self.body.clone()
    }

    pub fn head_el(&self) -> FakeElement {
        self.head.clone()
    }

    /// Append a new element to `<body>` and return it.
    pub fn add(&self, el: FakeElement) -> FakeElement {
        self.body.append(&el);
        el
    }

    pub fn count(&self, selector: &str) -> usize {
        self.root.count(selector)
    }

    pub fn fire_load(&self) {
        self.loaded.set(true);
        let handlers = std::mem::take(&mut *self.load_handlers.borrow_mut());
        for mut handler in handlers {
            handler();
        }
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn root(&self) -> FakeElement {
        self.root.clone()
    }

    fn head(&self) -> Option<FakeElement> {
        Some(self.head.clone())
    }

    fn body(&self) -> Option<FakeElement> {
        Some(self.body.clone())
    }

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.root.query(selector)
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.root.descendants().into_iter().filter(|el| el.matches(selector)).collect()
    }

    fn create(&self, tag: &str) -> Option<FakeElement> {
        Some(FakeElement::new(tag))
    }

    fn on_load(&self, mut handler: Handler) {
        if self.loaded.get() {
            handler();
        } else {
            self.load_handlers.borrow_mut().push(handler);
        }
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat { period: u64, tick: Box<dyn FnMut() -> TimerControl> },
}

struct Timer {
    id: u64,
    due: u64,
    task: Task,
}

/// Simulated clock. Timers fire in due order, ties by creation order.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<u64>,
    fired: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks run so far.
    pub fn fired(&self) -> u64 {
        self.fired.get()
    }

    /// Timers still scheduled.
    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = self
                .timers
                .borrow()
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= target)
                .min_by_key(|(_, t)| (t.due, t.id))
                .map(|(index, _)| index);
            let Some(index) = next else {
                break;
            };
            let timer = self.timers.borrow_mut().remove(index);
            self.now.set(timer.due);
            self.fired.set(self.fired.get() + 1);
            match timer.task {
                Task::Once(task) => task(),
                Task::Repeat { period, mut tick } => {
                    if tick() == TimerControl::Continue {
                        self.timers.borrow_mut().push(Timer {
                            id: timer.id,
                            due: timer.due + period,
                            task: Task::Repeat { period, tick },
                        });
                    }
                }
            }
        }
        self.now.set(target);
    }

    fn push(&self, delay: u64, task: Task) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let due = self.now.get() + delay;
        self.timers.borrow_mut().push(Timer { id, due, task });
    }
}

impl Scheduler for ManualScheduler {
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.push(u64::from(delay_ms), Task::Once(task));
    }

    fn interval(&self, period_ms: u32, tick: Box<dyn FnMut() -> TimerControl>) {
        let period = u64::from(period_ms.max(1));
        self.push(period, Task::Repeat { period, tick });
    }
}
