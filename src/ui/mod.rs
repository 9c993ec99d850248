pub mod app;
pub mod breed_picker;
pub mod events;
pub mod favorites;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod toast;
pub mod widgets;
