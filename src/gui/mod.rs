pub mod actions;
pub mod app;
pub mod board_view;
pub mod input_panel;
pub mod notice_modal;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::FlashstudyApp;
