//! Comment panel rendering

use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the expanded comment panel for the given post
pub fn render(frame: &mut Frame, area: Rect, post_id: i64, model: &Model, theme: &Theme) {
    let block = Block::default()
        .title(format!(" comments · post {} ", post_id))
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Stale comments from a previously open post are never shown here; the
    // placeholder covers the gap until this post's fetch lands.
    if !model.comments_ready() {
        frame.render_widget(
            super::loading_placeholder("Loading comments...", theme),
            inner,
        );
        return;
    }

    let colors = &theme.colors.comment_panel;
    let mut lines: Vec<Line> = Vec::new();

    for comment in &model.comments.items {
        lines.push(Line::from(Span::styled(
            comment.name.clone(),
            Style::default()
                .fg(colors.name)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            comment.email.clone(),
            Style::default()
                .fg(colors.email)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(Span::styled(
            comment.body.clone(),
            Style::default().fg(colors.body),
        )));
        lines.push(Line::default());
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(panel, inner);
}
