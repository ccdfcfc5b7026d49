use std::rc::Rc;

use super::{
    Document,
    ElementId,
};

pub type ClickHandler = Rc<dyn Fn(&mut Document, &mut ClickEvent)>;

#[derive(Debug, Clone)]
pub struct ClickEvent {
    target: ElementId,
    pub(super) current_target: ElementId,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub(super) fn new(target: ElementId) -> Self {
        Self { target, current_target: target, propagation_stopped: false }
    }

    /// The element that was clicked.
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// The element whose handler is running.
    pub fn current_target(&self) -> ElementId {
        self.current_target
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
