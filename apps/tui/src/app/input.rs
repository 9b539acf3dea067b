use crossterm::event::KeyCode;

use crate::app::state::{App, AppScreen, PredictionForm};

pub fn handle_input(app: &mut App, key: KeyCode) {
    if app.modal.is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Esc) {
            app.modal = None;
        }
        return;
    }

    if handle_help_toggle(app, key) {
        return;
    }

    if handle_global(app, key) {
        return;
    }

    match app.screen {
        AppScreen::RegionAnalysis => handle_region_analysis_input(app, key),
        AppScreen::CropAnalysis => handle_crop_analysis_input(app, key),
        AppScreen::Prediction => handle_prediction_input(app, key),
        AppScreen::Strategies => handle_strategies_input(app, key),
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

/// Screen switching and quit keys. Character shortcuts are suspended while
/// a numeric field has focus so typing "1" edits the field instead of
/// jumping to another tab.
fn handle_global(app: &mut App, key: KeyCode) -> bool {
    let typing = app.screen == AppScreen::Prediction && app.prediction.focus_is_numeric();

    match key {
        KeyCode::Esc => {
            app.running = false;
            true
        }
        KeyCode::Tab => {
            let next = (app.screen.index() + 1) % AppScreen::ALL.len();
            app.screen = AppScreen::from_index(next).unwrap_or(AppScreen::RegionAnalysis);
            true
        }
        KeyCode::BackTab => {
            let count = AppScreen::ALL.len();
            let prev = (app.screen.index() + count - 1) % count;
            app.screen = AppScreen::from_index(prev).unwrap_or(AppScreen::RegionAnalysis);
            true
        }
        KeyCode::Char('q') if !typing => {
            app.running = false;
            true
        }
        KeyCode::Char('r') if !typing => {
            app.status_message = "Reloading regions and crops".to_string();
            app.reload_reference_lists();
            true
        }
        KeyCode::Char(c @ '1'..='4') if !typing => {
            let index = c as usize - '1' as usize;
            if let Some(screen) = AppScreen::from_index(index) {
                app.screen = screen;
            }
            true
        }
        _ => false,
    }
}

fn handle_region_analysis_input(app: &mut App, key: KeyCode) {
    let state = &mut app.region_analysis;
    match key {
        KeyCode::Up | KeyCode::Down => {
            state.focus = (state.focus + 1) % 2;
        }
        KeyCode::Left => {
            if state.focus == 0 {
                state.region.prev();
            } else {
                state.crop_filter.prev();
            }
        }
        KeyCode::Right => {
            if state.focus == 0 {
                state.region.next();
            } else {
                state.crop_filter.next();
            }
        }
        KeyCode::Enter => app.trigger_region_analysis(),
        _ => {}
    }
}

fn handle_crop_analysis_input(app: &mut App, key: KeyCode) {
    let state = &mut app.crop_analysis;
    match key {
        KeyCode::Up | KeyCode::Down => {
            state.focus = (state.focus + 1) % 2;
        }
        KeyCode::Left => {
            if state.focus == 0 {
                state.crop.prev();
            } else {
                state.region_filter.prev();
            }
        }
        KeyCode::Right => {
            if state.focus == 0 {
                state.crop.next();
            } else {
                state.region_filter.next();
            }
        }
        KeyCode::Enter => app.trigger_crop_analysis(),
        _ => {}
    }
}

fn handle_prediction_input(app: &mut App, key: KeyCode) {
    let form = &mut app.prediction;
    match key {
        KeyCode::Down => {
            form.focus = (form.focus + 1) % PredictionForm::FIELD_COUNT;
        }
        KeyCode::Up => {
            form.focus = (form.focus + PredictionForm::FIELD_COUNT - 1) % PredictionForm::FIELD_COUNT;
        }
        KeyCode::Left if form.focus == 0 => form.region.prev(),
        KeyCode::Right if form.focus == 0 => form.region.next(),
        KeyCode::Left if form.focus == 1 => form.crop.prev(),
        KeyCode::Right if form.focus == 1 => form.crop.next(),
        KeyCode::Char(c) => {
            if let Some(field) = form.numeric_field_mut() {
                field.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = form.numeric_field_mut() {
                field.pop();
            }
        }
        KeyCode::Enter => app.trigger_prediction(),
        _ => {}
    }
}

fn handle_strategies_input(app: &mut App, key: KeyCode) {
    let state = &mut app.strategy;
    match key {
        KeyCode::Up | KeyCode::Down => {
            state.focus = (state.focus + 1) % 2;
        }
        KeyCode::Left => {
            if state.focus == 0 {
                state.region.prev();
            } else {
                state.crop.prev();
            }
        }
        KeyCode::Right => {
            if state.focus == 0 {
                state.region.next();
            } else {
                state.crop.next();
            }
        }
        KeyCode::Enter => app.trigger_strategies(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::app::actions::AppActions;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_app() -> App {
        let client = Arc::new(ApiClient::new(
            "http://127.0.0.1:1",
            Duration::from_millis(10),
        ));
        let (actions, _rx) = AppActions::new(client);
        App::new(actions)
    }

    #[test]
    fn q_quits_from_any_screen() {
        let mut app = test_app();
        app.screen = AppScreen::Strategies;
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn q_types_nothing_and_keeps_running_while_a_numeric_field_has_focus() {
        let mut app = test_app();
        app.screen = AppScreen::Prediction;
        app.prediction.focus = 2;
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.prediction.rainfall.buffer, "");
    }

    #[test]
    fn digits_go_into_the_focused_numeric_field() {
        let mut app = test_app();
        app.screen = AppScreen::Prediction;
        app.prediction.focus = 3;
        handle_input(&mut app, KeyCode::Char('8'));
        handle_input(&mut app, KeyCode::Char('0'));
        assert_eq!(app.prediction.irrigation.buffer, "80");

        handle_input(&mut app, KeyCode::Backspace);
        assert_eq!(app.prediction.irrigation.buffer, "8");
    }

    #[test]
    fn tab_cycles_screens_and_wraps() {
        let mut app = test_app();
        for expected in [
            AppScreen::CropAnalysis,
            AppScreen::Prediction,
            AppScreen::Strategies,
            AppScreen::RegionAnalysis,
        ] {
            handle_input(&mut app, KeyCode::Tab);
            assert_eq!(app.screen, expected);
        }
    }

    #[test]
    fn modal_swallows_input_until_dismissed() {
        let mut app = test_app();
        app.modal = Some("Please select a region".to_string());

        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert!(app.modal.is_some());

        handle_input(&mut app, KeyCode::Enter);
        assert!(app.modal.is_none());
    }

    #[test]
    fn help_overlay_toggles_and_blocks_other_keys() {
        let mut app = test_app();
        handle_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);

        handle_input(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, AppScreen::RegionAnalysis);

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
