pub mod confirm_modal;
pub mod footer;
pub mod header;
pub mod hotel_card;
pub mod modal;
pub mod search_bar;
