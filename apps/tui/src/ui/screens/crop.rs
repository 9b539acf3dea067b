use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::domain::PanelState;
use crate::ui::viewmodel;
use crate::ui::widgets::charts::render_bar_rows;
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
        &app.crop_analysis.crop,
        app.crop_analysis.focus == 0,
    );
    render_selector(
        f,
        controls[1],
        &app.crop_analysis.region_filter,
        app.crop_analysis.focus == 1,
    );

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let zones_title = match app.crop_analysis.zones.state() {
        PanelState::Ready(view) => viewmodel::zones_title(view),
        _ => "Yield by Agro-Climatic Zone".to_string(),
    };
    if let Some((view, inner)) = render_panel(
        f,
        content[0],
        &zones_title,
        &app.crop_analysis.zones,
        &mut app.throbber,
    ) {
        render_bar_rows(f, inner, &viewmodel::zone_bars(&view.zones));
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content[1]);

    if let Some((factors, inner)) = render_panel(
        f,
        side[0],
        "Factor Impact on Yield",
        &app.crop_analysis.factors,
        &mut app.throbber,
    ) {
        render_bar_rows(f, inner, &viewmodel::factor_bars(factors));
    }

    if let Some((insights, inner)) = render_panel(
        f,
        side[1],
        "Crop Insights",
        &app.crop_analysis.insights,
        &mut app.throbber,
    ) {
        let text = viewmodel::crop_insight_lines(insights).join("\n");
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, inner);
    }
}
