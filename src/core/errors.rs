use thiserror::Error;
use tracing::{
    error,
    info,
    warn,
};

use super::{
    models::SkippedCard,
    notice::Notice,
};

#[derive(Error, Debug)]
pub enum FlashError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Please enter some text to process")]
    EmptyText,

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Request failed: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String, body: String },

    #[error("Malformed JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Could not access local file {path}: {reason}")]
    LocalFile { path: String, reason: String },

    #[error("Container element '{0}' not found")]
    MissingContainer(String),

    #[error("None of the {total} flashcards could be displayed")]
    NothingRendered { total: usize, skipped: Vec<SkippedCard> },
}

/// Where a failure came from, which decides how it is logged and titled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    UserInput,
    Transport,
    Protocol,
    RenderEnvironment,
    DataValidity,
    /// Settings and other files kept by the app itself.
    LocalStorage,
}

impl FlashError {
    pub fn class(&self) -> ErrorClass {
        match self {
            FlashError::NoFileSelected | FlashError::EmptyText => ErrorClass::UserInput,
            FlashError::Io(_) | FlashError::Reqwest(_) | FlashError::HttpStatus { .. } => {
                ErrorClass::Transport
            }
            FlashError::Json(_) | FlashError::UnexpectedShape(_) => ErrorClass::Protocol,
            FlashError::MissingContainer(_) => ErrorClass::RenderEnvironment,
            FlashError::LocalFile { .. } => ErrorClass::LocalStorage,
            FlashError::NothingRendered { .. } => ErrorClass::DataValidity,
        }
    }

    pub fn log(&self) {
        match self.class() {
            ErrorClass::UserInput => info!(reason = %self, "Request refused"),
            ErrorClass::DataValidity => warn!(error = %self, "No displayable flashcards"),
            ErrorClass::LocalStorage => warn!(error = %self, "Local file unavailable"),
            class => error!(?class, error = %self, "Request failed"),
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            FlashError::NoFileSelected => {
                Notice::info("No File Selected", "Please choose a file to upload first.")
            }
            FlashError::EmptyText => {
                Notice::info("No Text", "Please enter some text before processing.")
            }
            FlashError::Io(e) => {
                Notice::error("Could Not Read File", "The selected file could not be read.")
                    .with_details(e.to_string())
            }
            FlashError::Reqwest(e) => Notice::error(
                "Connection Error",
                "Could not reach the flashcard service. Is the backend running?",
            )
            .with_details(e.to_string()),
            FlashError::HttpStatus { status, url, body } => {
                let mut details = format!("{url} answered with status {status}");
                if !body.is_empty() {
                    details.push_str("\n\n");
                    details.push_str(body);
                }
                Notice::error(
                    "Server Error",
                    format!("The flashcard service returned an error ({status})."),
                )
                .with_details(details)
            }
            FlashError::Json(e) => Notice::error(
                "Invalid Response",
                "The flashcard service sent a response that is not valid JSON.",
            )
            .with_details(e.to_string()),
            FlashError::UnexpectedShape(what) => Notice::error(
                "Invalid Response",
                "The flashcard service sent flashcards in an unexpected format.",
            )
            .with_details(what.clone()),
            FlashError::LocalFile { path, reason } => Notice::warning(
                "Settings Not Saved",
                "A local settings file could not be read or written.",
            )
            .with_details(format!("{path}: {reason}")),
            FlashError::MissingContainer(id) => Notice::error(
                "Display Error",
                "There is nowhere to show the flashcards.",
            )
            .with_details(format!("Element '{id}' is missing from the document")),
            FlashError::NothingRendered { total, skipped } => Notice::error(
                "No Flashcards Displayed",
                format!("All {total} flashcards received were incomplete and were skipped."),
            )
            .with_details(
                skipped.iter().map(SkippedCard::describe).collect::<Vec<_>>().join("\n"),
            ),
        }
    }
}

impl From<std::io::Error> for FlashError {
    fn from(error: std::io::Error) -> Self {
        FlashError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FlashError {
    fn from(error: reqwest::Error) -> Self {
        FlashError::Reqwest(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notice::NoticeLevel;

    #[test]
    fn test_error_classes() {
        assert_eq!(FlashError::EmptyText.class(), ErrorClass::UserInput);
        assert_eq!(FlashError::NoFileSelected.class(), ErrorClass::UserInput);
        let status = FlashError::HttpStatus {
            status: 500,
            url: "http://localhost/text/".to_string(),
            body: String::new(),
        };
        assert_eq!(status.class(), ErrorClass::Transport);
        assert_eq!(FlashError::UnexpectedShape("x".into()).class(), ErrorClass::Protocol);
        assert_eq!(
            FlashError::MissingContainer("flashcard-container".into()).class(),
            ErrorClass::RenderEnvironment
        );
    }

    #[test]
    fn test_local_file_errors_are_not_protocol_errors() {
        let error =
            FlashError::LocalFile { path: "settings.json".into(), reason: "denied".into() };
        assert_eq!(error.class(), ErrorClass::LocalStorage);
        assert_eq!(error.to_string(), "Could not access local file settings.json: denied");
        assert_eq!(error.notice().level, NoticeLevel::Warning);
    }

    #[test]
    fn test_transport_and_protocol_notices_differ() {
        let transport = FlashError::HttpStatus {
            status: 502,
            url: "http://localhost/upload/".to_string(),
            body: "bad gateway".to_string(),
        }
        .notice();
        let protocol = FlashError::UnexpectedShape("expected an object".into()).notice();

        assert_eq!(transport.level, NoticeLevel::Error);
        assert_ne!(transport.title, protocol.title);
        assert!(transport.message.contains("502"));
        assert!(transport.details.unwrap().contains("bad gateway"));
    }

    #[test]
    fn test_user_input_notice_is_informational() {
        let notice = FlashError::EmptyText.notice();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.details.is_none());
    }

    #[test]
    fn test_nothing_rendered_lists_skipped_records() {
        let error = FlashError::NothingRendered {
            total: 2,
            skipped: vec![
                SkippedCard { index: 0, missing: vec!["back"] },
                SkippedCard { index: 1, missing: vec!["front", "category"] },
            ],
        };
        let details = error.notice().details.unwrap();
        assert_eq!(details, "#1: missing back\n#2: missing front, category");
    }
}
