use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::domain::PanelState;
use crate::ui::viewmodel;
use crate::ui::widgets::charts::{render_bar_rows, render_trend_chart};
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

    render_selector(
        f,
        controls[0],
        &app.region_analysis.region,
        app.region_analysis.focus == 0,
    );
    render_selector(
        f,
        controls[1],
        &app.region_analysis.crop_filter,
        app.region_analysis.focus == 1,
    );

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let trend_title = match app.region_analysis.trend.state() {
        PanelState::Ready(view) => viewmodel::trend_title(view),
        _ => "Yield Trend".to_string(),
    };
    if let Some((view, inner)) = render_panel(
        f,
        content[0],
        &trend_title,
        &app.region_analysis.trend,
        &mut app.throbber,
    ) {
        render_trend_chart(f, inner, view);
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content[1]);

    if let Some((factors, inner)) = render_panel(
        f,
        side[0],
        "Factor Impact on Yield",
        &app.region_analysis.factors,
        &mut app.throbber,
    ) {
        render_bar_rows(f, inner, &viewmodel::factor_bars(factors));
    }

    if let Some((insights, inner)) = render_panel(
        f,
        side[1],
        "Regional Insights",
        &app.region_analysis.insights,
        &mut app.throbber,
    ) {
        let text = viewmodel::regional_insight_lines(insights).join("\n");
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, inner);
    }
}
