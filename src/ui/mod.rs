//! Terminal interface rendering
//!
//! Pure view layer: every frame is drawn from the current model and theme,
//! nothing here mutates state.

pub mod comments;
pub mod posts;
pub mod status_bar;

use crate::tea::model::CommentPanel;
use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole interface for one frame
pub fn draw(frame: &mut Frame, model: &Model, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, chunks[0], model, theme);
    render_body(frame, chunks[1], model, theme);
    status_bar::render(frame, chunks[2], model, theme);
}

/// Header: title, post limit control, layout mode
fn render_header(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let palette = &theme.colors.palette;

    let line = Line::from(vec![
        Span::styled("posts: ", Style::default().fg(palette.text_muted)),
        Span::styled(
            model.posts.limit.to_string(),
            Style::default().fg(palette.accent),
        ),
        Span::styled("  layout: ", Style::default().fg(palette.text_muted)),
        Span::styled(model.layout.label(), Style::default().fg(palette.accent)),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" boletim ")
                .borders(Borders::ALL)
                .border_style(theme.border_style(false)),
        );

    frame.render_widget(header, area);
}

/// Body: the post collection, plus the comment panel when one is open
fn render_body(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    match model.comments.panel {
        CommentPanel::OpenFor(post_id) => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);

            posts::render(frame, panes[0], model, theme);
            comments::render(frame, panes[1], post_id, model, theme);
        }
        CommentPanel::Closed => {
            posts::render(frame, area, model, theme);
        }
    }
}

/// Centered loading placeholder used by both panes
pub(crate) fn loading_placeholder(text: &str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(theme.colors.palette.text_muted),
    )))
    .alignment(Alignment::Center)
}
