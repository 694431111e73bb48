//! Post collection rendering: card grid and single-column list

use crate::api::models::Post;
use crate::tea::message::LayoutMode;
use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 7;
const CARD_MIN_WIDTH: u16 = 30;

/// Render the post collection in the current layout
pub fn render(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let block = Block::default()
        .title(" posts ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The placeholder persists until the first successful fetch lands,
    // indefinitely so when every fetch fails.
    if model.posts.items.is_empty() {
        frame.render_widget(super::loading_placeholder("Loading posts...", theme), inner);
        return;
    }

    match model.layout {
        LayoutMode::Cards => render_cards(frame, inner, model, theme),
        LayoutMode::List => render_list(frame, inner, model, theme),
    }
}

/// Single-column list: one two-line item per post
fn render_list(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let colors = &theme.colors.post_list;

    let items: Vec<ListItem> = model
        .posts
        .items
        .iter()
        .map(|post| {
            let marker = if model.is_panel_open(post.id) {
                Span::styled("▾ ", Style::default().fg(colors.open_marker))
            } else {
                Span::raw("  ")
            };

            let title = Line::from(vec![
                marker,
                Span::styled(post.title.clone(), Style::default().fg(colors.title)),
            ]);
            let body = Line::from(Span::styled(
                format!("  {}", first_line(&post.body)),
                Style::default().fg(colors.body),
            ));

            ListItem::new(vec![title, body])
        })
        .collect();

    let list = List::new(items).highlight_style(theme.selection_style());

    let mut state = ListState::default();
    state.select(Some(model.posts.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Multi-column card grid, scrolled row-wise to keep the cursor visible
fn render_cards(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let columns = (area.width / CARD_MIN_WIDTH).clamp(1, 3) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

    let selected_row = model.posts.selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        let column_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (column, cell) in column_areas.iter().enumerate() {
            let index = row * columns + column;
            if let Some(post) = model.posts.items.get(index) {
                render_card(frame, *cell, post, index == model.posts.selected, model, theme);
            }
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    post: &Post,
    selected: bool,
    model: &Model,
    theme: &Theme,
) {
    let colors = &theme.colors.post_list;

    let border_style = if selected {
        theme.border_style(true)
    } else {
        theme.border_style(false)
    };

    let title_style = if selected {
        theme.selection_style().fg(colors.title)
    } else {
        Style::default().fg(colors.title)
    };

    let mut lines = vec![Line::from(Span::styled(
        post.body.clone(),
        Style::default().fg(colors.body),
    ))];
    if model.is_panel_open(post.id) {
        lines.push(Line::from(Span::styled(
            "▾ comments",
            Style::default().fg(colors.open_marker),
        )));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(Span::styled(truncate(&post.title, area.width), title_style))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(card, area);
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

fn truncate(text: &str, width: u16) -> String {
    let max = width.saturating_sub(4) as usize;
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
