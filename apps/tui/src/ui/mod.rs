// UI module for agro-dash
// Handles all UI rendering functions

pub mod screens;
pub mod viewmodel;
pub mod widgets;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::state::AppScreen;
use crate::app::App;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(8),    // Screen content
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)))
        .to_vec();

    render_tabs(app, f, layout[0]);

    match app.screen {
        AppScreen::RegionAnalysis => screens::region::render(app, f, layout[1]),
        AppScreen::CropAnalysis => screens::crop::render(app, f, layout[1]),
        AppScreen::Prediction => screens::predict::render(app, f, layout[1]),
        AppScreen::Strategies => screens::strategies::render(app, f, layout[1]),
    }

    render_status(app, f, layout[2]);
    render_shortcuts(app, f, layout[3]);

    if app.show_help {
        screens::help::render_help(f);
    }

    if let Some(message) = app.modal.clone() {
        widgets::popup::render_modal(f, &message);
    }
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = AppScreen::ALL
        .iter()
        .enumerate()
        .map(|(index, screen)| TextLine::from(format!("{} {}", index + 1, screen.title())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .block(
            Block::default()
                .title(" Agro Dash ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from(Span::styled(
            format!(
                "{} regions, {} crops loaded",
                app.reference.regions.len(),
                app.reference.crops.len()
            ),
            Style::default().fg(Color::Gray),
        ))
    } else {
        let style = if app.status_message.starts_with("Error") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Text::from(Span::styled(&app.status_message, style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let keys = match app.screen {
        AppScreen::Prediction => {
            "Tab switch | Up/Down focus | Left/Right select | 0-9 type | Enter predict | F1 help | q quit"
        }
        _ => "Tab switch | Up/Down focus | Left/Right select | Enter run | r reload | F1 help | q quit",
    };

    let shortcuts = Paragraph::new(Span::styled(keys, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    f.render_widget(shortcuts, area);
}
