pub mod cards;
pub mod links;

pub use cards::{
    card_state,
    render,
    reveal,
    CardState,
    RenderReport,
    BACK_CLASS,
    CARD_CLASS,
    CATEGORY_CLASS,
    FRONT_CLASS,
    PLACEHOLDER_CLASS,
    PLACEHOLDER_TEXT,
};
pub use links::{
    LinkResolver,
    LINKS_CLASS,
    LINK_CLASS,
};
