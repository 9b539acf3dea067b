// App module for agro-dash
// Handles application state, API dispatch, and input

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{ApiEvent, AppActions, PanelPayload};
pub use input::handle_input;
pub use state::{App, AppScreen};
