use tracing::{
    info,
    warn,
};

use crate::{
    core::{
        FlashError,
        Flashcard,
        Notice,
        SkippedCard,
    },
    dom::{
        Document,
        ElementId,
        ScrollRequest,
    },
    render::{
        self,
        card_state,
        CardState,
        RenderReport,
        CARD_CLASS,
        PLACEHOLDER_CLASS,
    },
};

/// Id of the element flashcards are rendered into.
pub const CONTAINER_ID: &str = "flashcard-container";

/// The document the app displays, holding the flashcard container.
///
/// Failed requests never touch the document: whatever was on screen stays.
#[derive(Debug)]
pub struct Board {
    document: Document,
    container: ElementId,
}

impl Board {
    pub fn new() -> Self {
        let mut document = Document::new();
        let container = document.create_element("div");
        document.set_id(container, CONTAINER_ID);
        let body = document.body();
        document.append_child(body, container);

        Self { document, container }
    }

    /// Wraps an existing document. Rendering fails with
    /// [`FlashError::MissingContainer`] until it has a `flashcard-container`.
    pub fn with_document(document: Document) -> Self {
        let container = document.get_element_by_id(CONTAINER_ID).unwrap_or(document.body());
        Self { document, container }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Shows the outcome of a request and returns what the user should be told.
    pub fn apply(&mut self, outcome: Result<Vec<Flashcard>, FlashError>) -> Vec<Notice> {
        let flashcards = match outcome {
            Ok(flashcards) => flashcards,
            Err(error) => {
                error.log();
                return vec![error.notice()];
            }
        };

        match render::render(&mut self.document, CONTAINER_ID, Some(&flashcards)) {
            Ok(report) => {
                info!(
                    received = report.total,
                    rendered = report.rendered.len(),
                    skipped = report.skipped.len(),
                    "Board updated"
                );
                report_notices(&report)
            }
            Err(error) => {
                error.log();
                vec![error.notice()]
            }
        }
    }

    pub fn click(&mut self, element: ElementId) {
        self.document.click(element);
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.document.take_scroll_request()
    }

    pub fn cards(&self) -> Vec<ElementId> {
        self.document.descendants_with_class(self.container, CARD_CLASS)
    }

    pub fn card_count(&self) -> usize {
        self.cards().len()
    }

    pub fn placeholder_shown(&self) -> bool {
        self.document.first_with_class(self.container, PLACEHOLDER_CLASS).is_some()
    }

    pub fn revealed_cards(&self) -> Vec<ElementId> {
        self.cards()
            .into_iter()
            .filter(|card| card_state(&self.document, *card) == Some(CardState::Revealed))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn report_notices(report: &RenderReport) -> Vec<Notice> {
    let mut notices = Vec::new();

    if !report.skipped.is_empty() {
        warn!(skipped = report.skipped.len(), total = report.total, "Some flashcards were skipped");
        notices.push(
            Notice::warning(
                "Incomplete Flashcards",
                format!(
                    "{} of {} flashcards were missing a question, answer or category and were skipped.",
                    report.skipped.len(),
                    report.total
                ),
            )
            .with_details(
                report.skipped.iter().map(SkippedCard::describe).collect::<Vec<_>>().join("\n"),
            ),
        );
    }

    if !report.duplicate_fronts.is_empty() {
        warn!(duplicates = ?report.duplicate_fronts, "Duplicate flashcard questions");
        notices.push(
            Notice::warning(
                "Duplicate Questions",
                "Some questions appear on more than one card. Links to them open the last one.",
            )
            .with_details(report.duplicate_fronts.join("\n")),
        );
    }

    notices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NoticeLevel;

    fn cards(count: usize) -> Vec<Flashcard> {
        (1..=count)
            .map(|i| Flashcard::new(format!("Q{i}"), format!("A{i}"), "General"))
            .collect()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.card_count(), 0);
        assert!(!board.placeholder_shown());
        assert_eq!(board.document().get_element_by_id(CONTAINER_ID), Some(board.container()));
    }

    #[test]
    fn test_successful_outcome_renders() {
        let mut board = Board::new();

        let notices = board.apply(Ok(cards(3)));

        assert!(notices.is_empty());
        assert_eq!(board.card_count(), 3);
    }

    #[test]
    fn test_empty_outcome_shows_placeholder() {
        let mut board = Board::new();
        board.apply(Ok(cards(2)));

        let notices = board.apply(Ok(Vec::new()));

        assert!(notices.is_empty());
        assert_eq!(board.card_count(), 0);
        assert!(board.placeholder_shown());
    }

    #[test]
    fn test_failed_request_keeps_previous_cards() {
        let mut board = Board::new();
        board.apply(Ok(cards(2)));
        let first = board.cards()[0];
        board.click(first);
        let snapshot = format!("{:?}", board.document());

        let notices = board.apply(Err(FlashError::HttpStatus {
            status: 500,
            url: "http://127.0.0.1:8000/text/".to_string(),
            body: "Internal Server Error".to_string(),
        }));

        assert_eq!(format!("{:?}", board.document()), snapshot);
        assert_eq!(board.revealed_cards(), vec![first]);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].title, "Server Error");
    }

    #[test]
    fn test_protocol_error_notice_is_distinct() {
        let mut board = Board::new();
        board.apply(Ok(cards(1)));

        let notices = board.apply(Err(FlashError::UnexpectedShape("got an array".into())));

        assert_eq!(board.card_count(), 1);
        assert_eq!(notices[0].title, "Invalid Response");
    }

    #[test]
    fn test_skipped_and_duplicate_records_are_reported() {
        let mut board = Board::new();
        let flashcards = vec![
            Flashcard::new("Q1", "A1", "General"),
            Flashcard::new("Q1", "A1 again", "General"),
            Flashcard::new("Q2", "", "General"),
        ];

        let notices = board.apply(Ok(flashcards));

        assert_eq!(board.card_count(), 2);
        let titles: Vec<_> = notices.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Incomplete Flashcards", "Duplicate Questions"]);
        assert_eq!(notices[0].details.as_deref(), Some("#3: missing back"));
        assert_eq!(notices[1].details.as_deref(), Some("Q1"));
    }

    #[test]
    fn test_all_invalid_records_are_an_error() {
        let mut board = Board::new();

        let notices = board.apply(Ok(vec![Flashcard::default()]));

        assert_eq!(board.card_count(), 0);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].title, "No Flashcards Displayed");
    }

    #[test]
    fn test_missing_container_is_reported() {
        let mut board = Board::with_document(Document::new());

        let notices = board.apply(Ok(cards(1)));

        assert_eq!(notices[0].title, "Display Error");
        assert_eq!(board.document().len(), 1);
    }
}
