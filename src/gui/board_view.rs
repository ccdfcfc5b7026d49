use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    board::Board,
    dom::{
        Document,
        ElementId,
    },
    render::{
        BACK_CLASS,
        CARD_CLASS,
        CATEGORY_CLASS,
        FRONT_CLASS,
        LINKS_CLASS,
        LINK_CLASS,
        PLACEHOLDER_CLASS,
    },
};

/// Paints the board's flashcard container. Clicks are queued as
/// [`UiAction::Click`] and dispatched into the document by the app.
pub fn board_view(ui: &mut egui::Ui, board: &mut Board, theme: &Theme, actions: &mut ActionQueue) {
    let scroll_target = board.take_scroll_request().map(|request| request.target);
    let document = board.document();
    let container = board.container();

    egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
        if document.children(container).is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(theme.hint(ui, "Upload a file or paste some text to generate flashcards."));
            });
            return;
        }

        let mut painter = ElementPainter { document, theme, scroll_target, actions };
        for &child in document.children(container) {
            painter.paint(ui, child);
        }
    });
}

struct ElementPainter<'a> {
    document: &'a Document,
    theme: &'a Theme,
    scroll_target: Option<ElementId>,
    actions: &'a mut ActionQueue,
}

impl ElementPainter<'_> {
    fn paint(&mut self, ui: &mut egui::Ui, id: ElementId) {
        let document = self.document;
        let Some(element) = document.element(id) else {
            return;
        };
        if element.is_hidden() {
            return;
        }

        if element.has_class(CARD_CLASS) {
            self.paint_card(ui, id);
        } else if element.has_class(FRONT_CLASS) {
            ui.label(self.theme.question(ui, element.text()));
        } else if element.has_class(BACK_CLASS) {
            ui.add_space(4.0);
            ui.label(self.theme.answer(ui, element.text()));
        } else if element.has_class(CATEGORY_CLASS) {
            ui.add_space(4.0);
            ui.label(self.theme.category(ui, element.text()));
        } else if element.has_class(LINKS_CLASS) {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.small("See also:");
                for &child in element.children() {
                    self.paint(ui, child);
                }
            });
        } else if element.has_class(LINK_CLASS) {
            let button = egui::Button::new(self.theme.link(ui, element.text())).small();
            if ui.add(button).clicked() {
                self.actions.push(UiAction::Click(id));
            }
        } else if element.has_class(PLACEHOLDER_CLASS) {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(self.theme.hint(ui, element.text()));
            });
        } else {
            if !element.text().is_empty() {
                ui.label(element.text());
            }
            for &child in element.children() {
                self.paint(ui, child);
            }
        }
    }

    fn paint_card(&mut self, ui: &mut egui::Ui, id: ElementId) {
        let document = self.document;
        let Some(element) = document.element(id) else {
            return;
        };

        // The card senses clicks below its children, so link buttons win.
        let builder = egui::UiBuilder::new().sense(egui::Sense::click());
        let response = ui
            .scope_builder(builder, |ui| {
                egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(10)).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    for &child in element.children() {
                        self.paint(ui, child);
                    }
                });
            })
            .response
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if response.clicked() {
            self.actions.push(UiAction::Click(id));
        }
        if self.scroll_target == Some(id) {
            response.scroll_to_me(Some(egui::Align::Center));
        }

        ui.add_space(8.0);
    }
}
