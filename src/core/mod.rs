pub mod errors;
pub mod models;
pub mod notice;
pub mod tasks;
pub mod utils;

pub use errors::{
    ErrorClass,
    FlashError,
};
pub use models::{
    Flashcard,
    SkippedCard,
};
pub use notice::{
    Notice,
    NoticeLevel,
};
