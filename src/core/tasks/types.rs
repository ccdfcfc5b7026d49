use crate::core::{
    FlashError,
    Flashcard,
};

/// Which user action a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Upload,
    Text,
    Saved,
}

impl RequestKind {
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::Upload => "upload",
            RequestKind::Text => "text",
            RequestKind::Saved => "saved",
        }
    }
}

#[derive(Debug)]
pub enum TaskResult {
    Flashcards { kind: RequestKind, result: Result<Vec<Flashcard>, FlashError> },
}
