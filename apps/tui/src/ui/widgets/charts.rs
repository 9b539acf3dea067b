use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::app::state::TrendView;
use crate::ui::viewmodel::{self, BarRow};

/// Line chart of yield over years.
pub fn render_trend_chart(f: &mut Frame<'_>, area: Rect, view: &TrendView) {
    let series = viewmodel::trend_series(&view.points);
    let (x_bounds, y_bounds) = viewmodel::trend_bounds(&view.points);

    let datasets = vec![Dataset::default()
        .name(view.crop.as_deref().unwrap_or("All Crops"))
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&series)];

    let x_labels: Vec<Span<'_>> = viewmodel::year_labels(x_bounds)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels: Vec<Span<'_>> = viewmodel::yield_labels(y_bounds)
        .into_iter()
        .map(Span::raw)
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("Year")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Yield (t/ha)")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// Horizontal bar chart of pre-computed rows, one bar per row.
pub fn render_bar_rows(f: &mut Frame<'_>, area: Rect, rows: &[BarRow]) {
    let bars: Vec<Bar<'_>> = rows
        .iter()
        .map(|row| {
            Bar::default()
                .value(row.value)
                .text_value(row.text.clone())
                .label(TextLine::from(row.label.clone()))
                .style(Style::default().fg(Color::Cyan))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = rows.iter().map(|row| row.value).max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(0)
        .bar_width(1);

    f.render_widget(chart, area);
}
