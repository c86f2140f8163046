pub mod header;
pub mod about;
pub mod portfolio;
pub mod filter_bar;
pub mod project_card;
pub mod project_modal;
pub mod footer;
