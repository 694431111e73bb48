//! Status bar: key hints, fetch state, service banner, errors

use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &[(&str, &str)] = &[
    ("q", "quit"),
    ("j/k", "move"),
    ("enter", "comments"),
    ("v", "layout"),
    ("+/-", "limit"),
    ("r", "refresh"),
];

/// Render the one-line status bar
pub fn render(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let colors = &theme.colors.status_bar;
    let palette = &theme.colors.palette;

    let mut spans: Vec<Span> = Vec::new();
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(colors.text)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors.hint_key)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(colors.text),
        ));
    }

    if let Some(error) = &model.last_error {
        spans.push(Span::styled(
            format!("  ✗ {}", error),
            Style::default().fg(palette.error),
        ));
    } else if model.posts.loading || model.comments.loading {
        spans.push(Span::styled(
            "  ⟳ fetching".to_string(),
            Style::default().fg(palette.accent),
        ));
    } else if let Some(refreshed) = &model.posts.last_refresh {
        spans.push(Span::styled(
            format!("  refreshed {}", refreshed.format("%H:%M:%S")),
            Style::default().fg(palette.success),
        ));
    }

    if let Some(banner) = &model.banner {
        spans.push(Span::styled(
            format!("  │ {}", banner),
            Style::default().fg(palette.accent),
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(colors.background).fg(colors.text));
    frame.render_widget(bar, area);
}
