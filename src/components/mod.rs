pub mod activity_card;
pub mod header;
pub mod signup_form;
pub mod status_banner;
pub mod toolbar;
