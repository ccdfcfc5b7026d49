use tracing::{
    debug,
    warn,
};

use super::links::LinkResolver;
use crate::{
    core::{
        models::SkippedCard,
        FlashError,
        Flashcard,
    },
    dom::{
        Document,
        ElementId,
    },
};

pub const CARD_CLASS: &str = "flashcard";
pub const FRONT_CLASS: &str = "front";
pub const BACK_CLASS: &str = "back";
pub const CATEGORY_CLASS: &str = "category";
pub const PLACEHOLDER_CLASS: &str = "placeholder";

pub const PLACEHOLDER_TEXT: &str =
    "No flashcards generated. Try another file or a more descriptive text.";

/// Visibility state of a card's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Collapsed,
    Revealed,
}

/// Outcome of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Records received, valid or not.
    pub total: usize,
    /// Card elements, in input order.
    pub rendered: Vec<ElementId>,
    pub skipped: Vec<SkippedCard>,
    /// Fronts shared by more than one rendered card. Links to them resolve to
    /// the last such card.
    pub duplicate_fronts: Vec<String>,
    pub placeholder: bool,
}

/// Replaces the children of the element with id `container_id` with one card
/// per valid flashcard.
///
/// An absent or empty list renders the placeholder. Invalid records are
/// skipped; if every record is invalid the container is left empty and
/// [`FlashError::NothingRendered`] is returned.
pub fn render(
    document: &mut Document,
    container_id: &str,
    flashcards: Option<&[Flashcard]>,
) -> Result<RenderReport, FlashError> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| FlashError::MissingContainer(container_id.to_string()))?;

    document.clear_children(container);

    let mut report = RenderReport::default();

    let flashcards = match flashcards {
        Some(cards) if !cards.is_empty() => cards,
        _ => {
            let placeholder = document.create_element("p");
            document.add_class(placeholder, PLACEHOLDER_CLASS);
            document.set_text(placeholder, PLACEHOLDER_TEXT);
            document.append_child(container, placeholder);
            report.placeholder = true;
            return Ok(report);
        }
    };

    report.total = flashcards.len();
    let mut resolver = LinkResolver::new();

    for (index, flashcard) in flashcards.iter().enumerate() {
        let missing = flashcard.missing_fields();
        if !missing.is_empty() {
            warn!(index, ?missing, "Skipping invalid flashcard");
            report.skipped.push(SkippedCard { index, missing });
            continue;
        }

        let card = build_card(document, flashcard);
        document.append_child(container, card);
        resolver.register(&flashcard.front, card);

        if !flashcard.links.is_empty() {
            resolver.attach_links(document, card, &flashcard.links);
        }

        report.rendered.push(card);
    }

    report.duplicate_fronts = resolver.duplicates().to_vec();

    if report.rendered.is_empty() {
        return Err(FlashError::NothingRendered { total: report.total, skipped: report.skipped });
    }

    debug!(
        rendered = report.rendered.len(),
        skipped = report.skipped.len(),
        links = resolver.len(),
        "Rendered flashcards"
    );

    Ok(report)
}

fn build_card(document: &mut Document, flashcard: &Flashcard) -> ElementId {
    let card = document.create_element("div");
    document.add_class(card, CARD_CLASS);

    let front = document.create_element("h3");
    document.add_class(front, FRONT_CLASS);
    document.set_text(front, flashcard.front.as_str());
    document.append_child(card, front);

    let back = document.create_element("p");
    document.add_class(back, BACK_CLASS);
    document.set_text(back, flashcard.back.as_str());
    document.set_hidden(back, true);
    document.append_child(card, back);

    let category = document.create_element("span");
    document.add_class(category, CATEGORY_CLASS);
    document.set_text(category, flashcard.category.as_str());
    document.append_child(card, category);

    document.set_on_click(card, move |document, _| {
        document.toggle_hidden(back);
    });

    card
}

/// Shows the answer of `card` without toggling. Returns false for elements
/// that are not rendered cards.
pub fn reveal(document: &mut Document, card: ElementId) -> bool {
    if !document.has_class(card, CARD_CLASS) {
        return false;
    }
    match document.first_with_class(card, BACK_CLASS) {
        Some(back) => {
            document.set_hidden(back, false);
            true
        }
        None => false,
    }
}

pub fn card_state(document: &Document, card: ElementId) -> Option<CardState> {
    if !document.has_class(card, CARD_CLASS) {
        return None;
    }
    let back = document.first_with_class(card, BACK_CLASS)?;
    match document.is_hidden(back)? {
        true => Some(CardState::Collapsed),
        false => Some(CardState::Revealed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::links::LINK_CLASS;

    const CONTAINER: &str = "flashcard-container";

    fn document_with_container() -> (Document, ElementId) {
        let mut document = Document::new();
        let container = document.create_element("div");
        document.set_id(container, CONTAINER);
        let body = document.body();
        document.append_child(body, container);
        (document, container)
    }

    fn sample_cards(count: usize) -> Vec<Flashcard> {
        (1..=count)
            .map(|i| Flashcard::new(format!("Q{i}"), format!("A{i}"), "General"))
            .collect()
    }

    fn cards_in(document: &Document, container: ElementId) -> Vec<ElementId> {
        document.descendants_with_class(container, CARD_CLASS)
    }

    #[test]
    fn test_every_valid_card_is_rendered() {
        let (mut document, container) = document_with_container();
        let flashcards = sample_cards(4);

        let report = render(&mut document, CONTAINER, Some(&flashcards)).unwrap();

        let cards = cards_in(&document, container);
        assert_eq!(cards.len(), 4);
        assert_eq!(report.rendered, cards);
        assert!(report.skipped.is_empty());

        let fronts: Vec<_> = cards
            .iter()
            .map(|c| {
                let front = document.first_with_class(*c, FRONT_CLASS).unwrap();
                document.text(front).unwrap().to_string()
            })
            .collect();
        assert_eq!(fronts, vec!["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn test_card_layout() {
        let (mut document, _) = document_with_container();
        let flashcards = vec![Flashcard::new("What is AI?", "Machines that reason.", "Basics")];

        let report = render(&mut document, CONTAINER, Some(&flashcards)).unwrap();
        let card = report.rendered[0];

        let front = document.first_with_class(card, FRONT_CLASS).unwrap();
        let back = document.first_with_class(card, BACK_CLASS).unwrap();
        let category = document.first_with_class(card, CATEGORY_CLASS).unwrap();

        assert_eq!(document.is_hidden(front), Some(false));
        assert_eq!(document.is_hidden(back), Some(true));
        assert_eq!(document.is_hidden(category), Some(false));
        assert_eq!(document.text(category), Some("Basics"));
        assert_eq!(card_state(&document, card), Some(CardState::Collapsed));
        assert!(document.first_with_class(card, LINK_CLASS).is_none());
    }

    #[test]
    fn test_invalid_record_is_skipped() {
        let (mut document, container) = document_with_container();
        let mut flashcards = sample_cards(3);
        flashcards[1].back.clear();

        let report = render(&mut document, CONTAINER, Some(&flashcards)).unwrap();

        assert_eq!(cards_in(&document, container).len(), 2);
        assert_eq!(report.skipped, vec![SkippedCard { index: 1, missing: vec!["back"] }]);
        let has_q2 = document
            .descendants_with_class(container, FRONT_CLASS)
            .into_iter()
            .any(|f| document.text(f) == Some("Q2"));
        assert!(!has_q2);
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let (mut document, container) = document_with_container();

        for input in [Some(&[][..]), None] {
            let report = render(&mut document, CONTAINER, input).unwrap();

            assert!(report.placeholder);
            assert_eq!(document.children(container).len(), 1);
            assert_eq!(document.descendants_with_class(container, PLACEHOLDER_CLASS).len(), 1);
            assert!(cards_in(&document, container).is_empty());
        }
    }

    #[test]
    fn test_render_replaces_previous_cards() {
        let (mut document, container) = document_with_container();
        let first = render(&mut document, CONTAINER, Some(&sample_cards(3))).unwrap();
        render(&mut document, CONTAINER, Some(&sample_cards(1))).unwrap();

        assert_eq!(cards_in(&document, container).len(), 1);
        assert!(first.rendered.iter().all(|c| !document.contains(*c)));
    }

    #[test]
    fn test_two_clicks_restore_visibility() {
        let (mut document, _) = document_with_container();
        let report = render(&mut document, CONTAINER, Some(&sample_cards(2))).unwrap();
        let card = report.rendered[0];

        document.click(card);
        assert_eq!(card_state(&document, card), Some(CardState::Revealed));
        document.click(card);
        assert_eq!(card_state(&document, card), Some(CardState::Collapsed));

        // clicks on the question bubble to the card
        let front = document.first_with_class(card, FRONT_CLASS).unwrap();
        document.click(front);
        assert_eq!(card_state(&document, card), Some(CardState::Revealed));
        assert_eq!(card_state(&document, report.rendered[1]), Some(CardState::Collapsed));
    }

    #[test]
    fn test_missing_container() {
        let mut document = Document::new();
        let before = document.len();

        let result = render(&mut document, CONTAINER, Some(&sample_cards(2)));

        assert!(matches!(result, Err(FlashError::MissingContainer(id)) if id == CONTAINER));
        assert_eq!(document.len(), before);
    }

    #[test]
    fn test_all_invalid_is_an_error() {
        let (mut document, container) = document_with_container();
        render(&mut document, CONTAINER, Some(&sample_cards(2))).unwrap();
        let flashcards = vec![Flashcard::new("Q1", "", "General"), Flashcard::default()];

        let result = render(&mut document, CONTAINER, Some(&flashcards));

        match result {
            Err(FlashError::NothingRendered { total, skipped }) => {
                assert_eq!(total, 2);
                assert_eq!(skipped.len(), 2);
            }
            other => panic!("Expected NothingRendered, got {:?}", other),
        }
        assert!(document.children(container).is_empty());
    }

    #[test]
    fn test_reveal_is_not_a_toggle() {
        let (mut document, _) = document_with_container();
        let report = render(&mut document, CONTAINER, Some(&sample_cards(1))).unwrap();
        let card = report.rendered[0];

        assert!(reveal(&mut document, card));
        assert!(reveal(&mut document, card));
        assert_eq!(card_state(&document, card), Some(CardState::Revealed));

        let container = document.get_element_by_id(CONTAINER).unwrap();
        assert!(!reveal(&mut document, container));
    }
}
