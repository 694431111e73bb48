//! Color themes for the terminal interface

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Main theme structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Complete theme color scheme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub palette: ColorPalette,
    pub post_list: PostListColors,
    pub comment_panel: CommentPanelColors,
    pub status_bar: StatusBarColors,
}

/// Base color palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub accent: Color,
    pub text_muted: Color,
    pub success: Color,
    pub error: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListColors {
    pub title: Color,
    pub body: Color,
    pub open_marker: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentPanelColors {
    pub name: Color,
    pub email: Color,
    pub body: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarColors {
    pub background: Color,
    pub text: Color,
    pub hint_key: Color,
}

impl Theme {
    /// Default dark theme
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            colors: ThemeColors {
                palette: ColorPalette {
                    background: Color::Reset,
                    foreground: Color::White,
                    border: Color::DarkGray,
                    border_focused: Color::Cyan,
                    selection: Color::Rgb(60, 70, 90),
                    accent: Color::Cyan,
                    text_muted: Color::Gray,
                    success: Color::Green,
                    error: Color::Red,
                },
                post_list: PostListColors {
                    title: Color::White,
                    body: Color::Gray,
                    open_marker: Color::Cyan,
                },
                comment_panel: CommentPanelColors {
                    name: Color::Yellow,
                    email: Color::DarkGray,
                    body: Color::White,
                },
                status_bar: StatusBarColors {
                    background: Color::Rgb(30, 34, 42),
                    text: Color::Gray,
                    hint_key: Color::Cyan,
                },
            },
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            colors: ThemeColors {
                palette: ColorPalette {
                    background: Color::Reset,
                    foreground: Color::Black,
                    border: Color::Gray,
                    border_focused: Color::Blue,
                    selection: Color::Rgb(200, 215, 235),
                    accent: Color::Blue,
                    text_muted: Color::DarkGray,
                    success: Color::Green,
                    error: Color::Red,
                },
                post_list: PostListColors {
                    title: Color::Black,
                    body: Color::DarkGray,
                    open_marker: Color::Blue,
                },
                comment_panel: CommentPanelColors {
                    name: Color::Rgb(120, 80, 0),
                    email: Color::Gray,
                    body: Color::Black,
                },
                status_bar: StatusBarColors {
                    background: Color::Rgb(225, 228, 235),
                    text: Color::DarkGray,
                    hint_key: Color::Blue,
                },
            },
        }
    }

    /// Style for a pane border, highlighted when focused
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.colors.palette.border_focused)
        } else {
            Style::default().fg(self.colors.palette.border)
        }
    }

    /// Style for the selected post
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.colors.palette.selection)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
