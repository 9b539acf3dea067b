use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::api::models::Strategy;
use crate::app::App;
use crate::ui::widgets::panel::render_panel;
use crate::ui::widgets::selector::render_selector;

pub fn render(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    render_selector(f, controls[0], &app.strategy.region, app.strategy.focus == 0);
    render_selector(f, controls[1], &app.strategy.crop, app.strategy.focus == 1);

    let title = format!(
        "Improvement Strategies: {} / {}",
        app.strategy.region.display(),
        app.strategy.crop.display()
    );
    if let Some((view, inner)) = render_panel(
        f,
        rows[1],
        &title,
        &app.strategy.strategies,
        &mut app.throbber,
    ) {
        let mut lines: Vec<TextLine<'_>> = Vec::new();
        for strategy in &view.strategies {
            lines.extend(strategy_lines(strategy));
            lines.push(TextLine::from(""));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        f.render_widget(paragraph, inner);
    }
}

fn strategy_lines(strategy: &Strategy) -> Vec<TextLine<'_>> {
    vec![
        TextLine::from(vec![
            Span::styled(
                strategy.factor.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  impact {}, current {}", strategy.impact, strategy.current_value),
                Style::default().fg(Color::Gray),
            ),
        ]),
        TextLine::from(Span::styled(
            strategy.recommendation.as_str(),
            Style::default().fg(Color::White),
        )),
    ]
}
