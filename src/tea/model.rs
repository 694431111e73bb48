/// Application model following TEA pattern
///
/// Contains all application state in a centralized structure that is only
/// ever changed by the update function in response to messages.
use crate::api::models::{Comment, Post};
use crate::config::Config;
use crate::tea::message::LayoutMode;
use chrono::{DateTime, Local};

/// Bounds within which the post limit is clamped
pub const MIN_POST_LIMIT: u16 = 1;
pub const MAX_POST_LIMIT: u16 = 100;

/// Main application model containing all state
#[derive(Debug, Clone)]
pub struct Model {
    /// Application lifecycle state
    pub app_state: AppState,

    /// Post collection state
    pub posts: PostsState,

    /// Comment panel state
    pub comments: CommentsState,

    /// Current layout presentation
    pub layout: LayoutMode,

    /// Service banner text, once fetched
    pub banner: Option<String>,

    /// Most recent fetch failure, shown in the status line
    pub last_error: Option<String>,
}

/// Application lifecycle state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Terminal dimensions
    pub terminal_size: (u16, u16),
}

/// Post collection and cursor state
#[derive(Debug, Clone)]
pub struct PostsState {
    /// Loaded posts; replaced wholesale on every successful fetch
    pub items: Vec<Post>,

    /// How many posts to request, always within [1, 100]
    pub limit: u16,

    /// Cursor position within `items`
    pub selected: usize,

    /// Whether a post fetch is in flight
    pub loading: bool,

    /// Generation of the most recently issued post fetch; responses tagged
    /// with an older generation are discarded
    pub generation: u64,

    /// When the last successful fetch landed
    pub last_refresh: Option<DateTime<Local>>,
}

/// Comment panel state
///
/// The comment collection corresponds to the most recently fetched post
/// only. Closing a panel deliberately leaves the previous collection in
/// place; it is replaced when the next fetch lands.
#[derive(Debug, Clone)]
pub struct CommentsState {
    /// Which post's panel is expanded, if any
    pub panel: CommentPanel,

    /// Loaded comments for `loaded_for`
    pub items: Vec<Comment>,

    /// The post the current `items` belong to
    pub loaded_for: Option<i64>,

    /// Whether a comment fetch is in flight
    pub loading: bool,

    /// Generation of the most recently issued comment fetch
    pub generation: u64,
}

/// Comment panel state machine: either closed or open for a single post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentPanel {
    Closed,
    OpenFor(i64),
}

impl Model {
    /// Create a new model seeded from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            app_state: AppState {
                should_quit: false,
                terminal_size: (80, 24),
            },
            posts: PostsState {
                items: Vec::new(),
                limit: config
                    .ui
                    .post_limit
                    .clamp(MIN_POST_LIMIT, MAX_POST_LIMIT),
                selected: 0,
                loading: false,
                generation: 0,
                last_refresh: None,
            },
            comments: CommentsState {
                panel: CommentPanel::Closed,
                items: Vec::new(),
                loaded_for: None,
                loading: false,
                generation: 0,
            },
            layout: config.ui.layout,
            banner: None,
            last_error: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.app_state.should_quit
    }

    /// The post currently under the cursor
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.items.get(self.posts.selected)
    }

    /// Whether the given post's comment panel is open
    pub fn is_panel_open(&self, post_id: i64) -> bool {
        self.comments.panel == CommentPanel::OpenFor(post_id)
    }

    /// Whether the comment panel shows loaded comments rather than the
    /// loading placeholder
    pub fn comments_ready(&self) -> bool {
        match self.comments.panel {
            CommentPanel::OpenFor(id) => {
                !self.comments.loading && self.comments.loaded_for == Some(id)
            }
            CommentPanel::Closed => false,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
