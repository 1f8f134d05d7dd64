pub mod bridge;
pub mod commands;
pub mod gui;
pub mod hotkey;
pub mod layout;
pub mod logging;
pub mod panel;
pub mod settings;
pub mod store;
