pub mod actions;
pub mod api;
pub mod app;
pub mod app_assets;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod models;
pub mod pages;
pub mod platform;
pub mod state;
pub mod view;

pub use app::App;
pub use app::Route;
