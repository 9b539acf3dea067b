// Export our modules for use in the binary and tests
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod terminal;
pub mod ui;

pub use domain::{Notice, NoticeKind, Panel, PanelId, PanelState};
