pub mod api;
pub mod breeds;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod favorites;
pub mod images;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod ui;
