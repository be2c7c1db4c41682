//! Blog Frontend
//!
//! Single-page blog client: home, search, article detail, create and
//! feedback screens over a small HTTP API.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod format;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod request_state;

pub use app::App;
