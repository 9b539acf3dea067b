use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_SIX};

use crate::domain::{NoticeKind, Panel, PanelState};

const fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Info => Color::Cyan,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Danger => Color::Red,
    }
}

/// Draw the panel frame and its non-content states. For a panel holding
/// data, the value and the inner drawing area are handed back so the screen
/// can render the content itself.
pub fn render_panel<'a, T>(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    panel: &'a Panel<T>,
    throbber: &mut ThrobberState,
) -> Option<(&'a T, Rect)> {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    f.render_widget(block, area);
    let inner = area.inner(Margin::new(1, 1));

    match panel.state() {
        PanelState::Idle => {
            let hint = Paragraph::new("Press Enter to run the analysis")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(hint, inner);
            None
        }
        PanelState::Loading => {
            let spinner = Throbber::default()
                .label("Loading...")
                .style(Style::default().fg(Color::Cyan))
                .throbber_set(BRAILLE_SIX);
            f.render_stateful_widget(spinner, inner, throbber);
            None
        }
        PanelState::Notice(notice) => {
            let style = Style::default()
                .fg(notice_color(notice.kind))
                .add_modifier(Modifier::BOLD);
            let paragraph = Paragraph::new(notice.message.clone())
                .style(style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, inner);
            None
        }
        PanelState::Ready(value) => Some((value, inner)),
    }
}
