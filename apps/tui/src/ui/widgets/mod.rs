pub mod charts;
pub mod panel;
pub mod popup;
pub mod selector;
