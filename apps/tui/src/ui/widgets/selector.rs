use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::state::{NumericField, Selector};

/// Render a select control. The focused control gets a cyan border and
/// arrows hinting at Left/Right cycling.
pub fn render_selector(f: &mut Frame<'_>, area: ratatui::layout::Rect, selector: &Selector, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .title(format!(" {} ", selector.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let value_style = if selector.selected().is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = if focused {
        TextLine::from(vec![
            Span::styled("< ", Style::default().fg(Color::Cyan)),
            Span::styled(selector.display().to_string(), value_style),
            Span::styled(" >", Style::default().fg(Color::Cyan)),
        ])
    } else {
        TextLine::from(Span::styled(selector.display().to_string(), value_style))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Render a numeric input field with its unit and a cursor mark when focused.
pub fn render_numeric_field(
    f: &mut Frame<'_>,
    area: ratatui::layout::Rect,
    field: &NumericField,
    focused: bool,
) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .title(format!(" {} ({}) ", field.label, field.unit))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let mut spans = vec![Span::styled(
        field.buffer.clone(),
        Style::default().fg(Color::White),
    )];
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    f.render_widget(Paragraph::new(TextLine::from(spans)).block(block), area);
}
