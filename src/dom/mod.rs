//! In-memory document model.
//!
//! A small retained element tree with the parts of the browser DOM the
//! flashcard board relies on: string ids, class lists, text, a hidden flag,
//! click handlers with bubbling, and scroll requests. The GUI paints it and
//! forwards clicks into it; tests drive it directly.

mod events;

use std::{
    collections::HashMap,
    fmt,
    rc::Rc,
};

pub use events::{
    ClickEvent,
    ClickHandler,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

pub struct Element {
    tag: String,
    html_id: Option<String>,
    classes: Vec<String>,
    text: String,
    hidden: bool,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    on_click: Option<ClickHandler>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            html_id: None,
            classes: Vec::new(),
            text: String::new(),
            hidden: false,
            parent: None,
            children: Vec::new(),
            on_click: None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("html_id", &self.html_id)
            .field("classes", &self.classes)
            .field("text", &self.text)
            .field("hidden", &self.hidden)
            .field("children", &self.children)
            .field("on_click", &self.on_click.as_ref().map(|_| "ClickHandler"))
            .finish()
    }
}

/// Pending request to bring an element into view. The view scrolls to it
/// with its usual animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ElementId,
}

#[derive(Debug)]
pub struct Document {
    elements: HashMap<ElementId, Element>,
    ids: HashMap<String, ElementId>,
    next_id: usize,
    body: ElementId,
    scroll_request: Option<ScrollRequest>,
}

impl Document {
    pub fn new() -> Self {
        let mut document = Self {
            elements: HashMap::new(),
            ids: HashMap::new(),
            next_id: 0,
            body: ElementId(0),
            scroll_request: None,
        };
        document.body = document.create_element("body");
        document
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Number of live elements, including the body.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Creates a detached element. Attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element::new(tag));
        id
    }

    pub fn get_element_by_id(&self, html_id: &str) -> Option<ElementId> {
        self.ids.get(html_id).copied().filter(|id| self.contains(*id))
    }

    /// Gives an element a lookup id. The most recent assignment of an id wins.
    pub fn set_id(&mut self, id: ElementId, html_id: &str) {
        let Some(element) = self.elements.get_mut(&id) else {
            return;
        };
        if let Some(previous) = element.html_id.replace(html_id.to_string()) {
            if self.ids.get(&previous) == Some(&id) {
                self.ids.remove(&previous);
            }
        }
        self.ids.insert(html_id.to_string(), id);
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.text = text.into();
        }
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.element(id).map(Element::text)
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.hidden = hidden;
        }
    }

    /// Stale ids report `None`.
    pub fn is_hidden(&self, id: ElementId) -> Option<bool> {
        self.element(id).map(Element::is_hidden)
    }

    /// Flips the hidden flag and returns the new value.
    pub fn toggle_hidden(&mut self, id: ElementId) -> Option<bool> {
        let element = self.elements.get_mut(&id)?;
        element.hidden = !element.hidden;
        Some(element.hidden)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.element(id).map(Element::children).unwrap_or(&[])
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).and_then(Element::parent)
    }

    /// Moves `child` under `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }
        if self.is_ancestor(child, parent) {
            return;
        }

        if let Some(old_parent) = self.parent(child) {
            if let Some(element) = self.elements.get_mut(&old_parent) {
                element.children.retain(|c| *c != child);
            }
        }
        if let Some(element) = self.elements.get_mut(&child) {
            element.parent = Some(parent);
        }
        if let Some(element) = self.elements.get_mut(&parent) {
            element.children.push(child);
        }
    }

    /// Removes every descendant of `id`, their ids and their handlers.
    pub fn clear_children(&mut self, id: ElementId) {
        let children = match self.elements.get_mut(&id) {
            Some(element) => std::mem::take(&mut element.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn remove_subtree(&mut self, id: ElementId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(element) = self.elements.remove(&current) {
                if let Some(html_id) = &element.html_id {
                    if self.ids.get(html_id) == Some(&current) {
                        self.ids.remove(html_id);
                    }
                }
                if self.scroll_request.is_some_and(|r| r.target == current) {
                    self.scroll_request = None;
                }
                stack.extend(element.children);
            }
        }
    }

    fn is_ancestor(&self, ancestor: ElementId, of: ElementId) -> bool {
        let mut current = self.parent(of);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Descendants of `root` carrying `class`, in document order.
    pub fn descendants_with_class(&self, root: ElementId, class: &str) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                found.push(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        found
    }

    pub fn first_with_class(&self, root: ElementId, class: &str) -> Option<ElementId> {
        self.descendants_with_class(root, class).into_iter().next()
    }

    pub fn set_on_click<F>(&mut self, id: ElementId, handler: F)
    where
        F: Fn(&mut Document, &mut ClickEvent) + 'static,
    {
        if let Some(element) = self.elements.get_mut(&id) {
            element.on_click = Some(Rc::new(handler));
        }
    }

    /// Dispatches a click on `target`, bubbling towards the body until a
    /// handler stops propagation. Clicking a removed element does nothing.
    pub fn click(&mut self, target: ElementId) {
        if !self.contains(target) {
            return;
        }

        let mut path = vec![target];
        let mut current = self.parent(target);
        while let Some(id) = current {
            path.push(id);
            current = self.parent(id);
        }

        let mut event = ClickEvent::new(target);
        for id in path {
            let handler = match self.element(id).and_then(|e| e.on_click.clone()) {
                Some(handler) => handler,
                None => continue,
            };
            event.current_target = id;
            handler(self, &mut event);
            if event.is_propagation_stopped() {
                break;
            }
        }
    }

    pub fn scroll_into_view(&mut self, id: ElementId) {
        if self.contains(id) {
            self.scroll_request = Some(ScrollRequest { target: id });
        }
    }

    pub fn scroll_request(&self) -> Option<ScrollRequest> {
        self.scroll_request
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.scroll_request.take()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
