use std::collections::VecDeque;

use eframe::egui;
use tracing::{
    debug,
    info,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    board_view::board_view,
    input_panel::{
        InputPanel,
        InputState,
    },
    notice_modal::NoticeModal,
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    board::Board,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        FlashError,
        Notice,
    },
    persistence::save_json,
    transport::{
        require_file,
        validate_text,
        FlashcardClient,
    },
};

const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 3.0;

pub struct FlashstudyApp {
    board: Board,
    settings: SettingsData,
    input: InputState,
    notice_modal: NoticeModal,
    notices: VecDeque<Notice>,
    task_manager: TaskManager,
    theme: Theme,
}

impl FlashstudyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: SettingsData) -> Result<Self, FlashError> {
        let client = FlashcardClient::new()?;
        let mut task_manager = TaskManager::new(client)?;

        let ctx = cc.egui_ctx.clone();
        task_manager.set_repaint_callback(move || ctx.request_repaint());

        set_theme(&cc.egui_ctx, settings.dark_mode);
        cc.egui_ctx.set_zoom_factor(settings.zoom.clamp(MIN_ZOOM, MAX_ZOOM));

        info!(origin = task_manager.client().origin(), "Flashstudy started");

        Ok(Self {
            board: Board::new(),
            settings,
            input: InputState::default(),
            notice_modal: NoticeModal::new(),
            notices: VecDeque::new(),
            task_manager,
            theme: Theme::study(),
        })
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Flashcards { kind, result } => {
                debug!(kind = kind.label(), ok = result.is_ok(), "Request finished");
                let notices = self.board.apply(result);
                self.notices.extend(notices);
            }
        }
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: UiAction) {
        match action {
            UiAction::FileChosen(path) => {
                self.settings.last_directory = path.parent().map(|dir| dir.to_path_buf());
                self.input.selected_file = Some(path);
                self.save_settings();
            }
            UiAction::UploadFile => self.upload_file(),
            UiAction::ProcessText => self.process_text(),
            UiAction::LoadSaved => self.task_manager.load_saved(),
            UiAction::Click(element) => self.board.click(element),
            UiAction::SetDarkMode(dark_mode) => {
                self.settings.dark_mode = dark_mode;
                set_theme(ctx, dark_mode);
                self.save_settings();
            }
            UiAction::SetZoom(zoom) => {
                let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
                self.settings.zoom = zoom;
                ctx.set_zoom_factor(zoom);
                self.save_settings();
            }
        }
    }

    /// Rejects a missing selection locally; nothing is sent.
    fn upload_file(&mut self) {
        match require_file(self.input.selected_file.as_deref()) {
            Ok(path) => {
                let path = path.to_path_buf();
                self.task_manager.upload_file(path);
            }
            Err(e) => self.report(e),
        }
    }

    /// Rejects blank text locally; nothing is sent.
    fn process_text(&mut self) {
        match validate_text(&self.input.text) {
            Ok(()) => self.task_manager.submit_text(self.input.text.clone()),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: FlashError) {
        error.log();
        self.notices.push_back(error.notice());
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            e.log();
        }
    }
}

impl eframe::App for FlashstudyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let mut actions = ActionQueue::new();

        TopBar::show(
            ctx,
            &self.settings,
            self.task_manager.client().origin(),
            self.task_manager.pending(),
            &mut actions,
        );
        InputPanel::show(
            ctx,
            &mut self.input,
            self.settings.last_directory.as_deref(),
            &mut actions,
        );
        egui::CentralPanel::default().show(ctx, |ui| {
            board_view(ui, &mut self.board, &self.theme, &mut actions);
        });

        let pending: Vec<UiAction> = actions.drain().collect();
        for action in pending {
            self.handle_action(ctx, action);
        }

        if !self.notice_modal.is_open() {
            if let Some(notice) = self.notices.pop_front() {
                self.notice_modal.show_notice(notice);
            }
        }
        self.notice_modal.show(ctx);

        // a click may have queued a scroll for the next frame
        if self.board.document().scroll_request().is_some() {
            ctx.request_repaint();
        }
    }
}
