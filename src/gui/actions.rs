use std::path::PathBuf;

use crate::dom::ElementId;

// A simple ui action queue so panels don't need mutable access to the app
#[derive(Debug, Clone)]
pub enum UiAction {
    // Input panel
    FileChosen(PathBuf),
    UploadFile,
    ProcessText,
    LoadSaved,

    // Board
    Click(ElementId),

    // Settings
    SetDarkMode(bool),
    SetZoom(f32),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
