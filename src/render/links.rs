use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

use tracing::debug;

use super::cards::reveal;
use crate::dom::{
    Document,
    ElementId,
};

pub const LINKS_CLASS: &str = "links";
pub const LINK_CLASS: &str = "link";

type LinkIndex = Rc<RefCell<HashMap<String, ElementId>>>;

/// Front-text lookup for one render pass.
///
/// Link handlers share the index and resolve their target when clicked, so a
/// card may link to cards rendered after it.
#[derive(Debug, Default)]
pub struct LinkResolver {
    index: LinkIndex,
    duplicates: Vec<String>,
}

impl LinkResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `front` to `card`. A repeated front is remapped to the newer card.
    pub fn register(&mut self, front: &str, card: ElementId) {
        let previous = self.index.borrow_mut().insert(front.to_string(), card);
        if previous.is_some() && !self.duplicates.iter().any(|d| d == front) {
            debug!(front, "Duplicate flashcard front, later card wins");
            self.duplicates.push(front.to_string());
        }
    }

    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Distinct fronts registered so far.
    pub(crate) fn len(&self) -> usize {
        self.index.borrow().len()
    }

    /// Adds a row of link elements to `card`, one per referenced front.
    ///
    /// Clicking a link never toggles its own card. It reveals and scrolls to
    /// the target card, or does nothing when the target does not exist.
    pub fn attach_links(&self, document: &mut Document, card: ElementId, links: &[String]) {
        let row = document.create_element("div");
        document.add_class(row, LINKS_CLASS);
        document.append_child(card, row);

        for target in links {
            let link = document.create_element("span");
            document.add_class(link, LINK_CLASS);
            document.set_text(link, target.as_str());
            document.append_child(row, link);

            let index = Rc::clone(&self.index);
            let target = target.clone();
            document.set_on_click(link, move |document, event| {
                event.stop_propagation();

                let found = index.borrow().get(&target).copied();
                match found {
                    Some(linked) if document.contains(linked) => {
                        document.scroll_into_view(linked);
                        reveal(document, linked);
                    }
                    _ => debug!(link = %target, "Dangling flashcard link"),
                }
            });
        }
    }
}
