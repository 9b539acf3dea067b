use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::widgets::popup::centered_rect;

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        heading("Navigation"),
        entry("Tab / Shift+Tab", "next / previous screen"),
        entry("1-4", "jump to a screen"),
        entry("Up / Down", "move focus between controls"),
        TextLine::from(""),
        heading("Controls"),
        entry("Left / Right", "cycle the focused select"),
        entry("0-9 and .", "type into the focused numeric field"),
        entry("Backspace", "delete the last character"),
        entry("Enter", "run the current screen's analysis"),
        TextLine::from(""),
        heading("General"),
        entry("r", "reload region and crop lists"),
        entry("F1", "toggle this help"),
        entry("q / Esc", "quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry(key: &'static str, action: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("  {key:<16}"), Style::default().fg(Color::Cyan)),
        Span::styled(action, Style::default().fg(Color::White)),
    ])
}
