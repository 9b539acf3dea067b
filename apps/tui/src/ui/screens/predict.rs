use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::viewmodel;
use crate::ui::widgets::panel::render_panel;
use crate::ui::widgets::selector::{render_numeric_field, render_selector};

pub fn render(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(24)])
        .split(area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let form = &app.prediction;
    render_selector(f, fields[0], &form.region, form.focus == 0);
    render_selector(f, fields[1], &form.crop, form.focus == 1);
    render_numeric_field(f, fields[2], &form.rainfall, form.focus == 2);
    render_numeric_field(f, fields[3], &form.irrigation, form.focus == 3);
    render_numeric_field(f, fields[4], &form.fertilizer, form.focus == 4);

    if let Some((view, inner)) = render_panel(
        f,
        columns[1],
        "Predicted Yield",
        &app.prediction.result,
        &mut app.throbber,
    ) {
        let text = viewmodel::prediction_lines(view).join("\n");
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, inner);
    }
}
