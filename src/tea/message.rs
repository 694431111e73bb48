/// Central message type for the entire application following TEA pattern
///
/// All user interactions, system events, and async fetch results flow
/// through this message system for centralized state management.
use crate::api::models::{Comment, Post, ServiceBanner};
use serde::{Deserialize, Serialize};

/// Main application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// System-level messages
    System(SystemMessage),

    /// UI interaction messages
    Ui(UiMessage),

    /// Post collection messages
    Posts(PostsMessage),

    /// Comment panel messages
    Comments(CommentsMessage),

    /// Service banner messages
    Banner(BannerMessage),
}

/// System-level messages for application lifecycle
#[derive(Debug, Clone)]
pub enum SystemMessage {
    /// Application should quit
    Quit,

    /// Terminal was resized
    Resize(u16, u16),
}

/// UI-related messages for interface interactions
#[derive(Debug, Clone)]
pub enum UiMessage {
    /// Flip between the cards and list presentations
    ToggleLayout,

    /// Move the cursor to the next post
    SelectNext,

    /// Move the cursor to the previous post
    SelectPrevious,

    /// Move the cursor to the first post
    SelectFirst,

    /// Move the cursor to the last post
    SelectLast,

    /// Set the requested post count
    SetLimit(u16),

    /// Raise the requested post count by one
    IncrementLimit,

    /// Lower the requested post count by one
    DecrementLimit,
}

/// Post collection messages
#[derive(Debug, Clone)]
pub enum PostsMessage {
    /// Fetch posts at the current limit
    Load,

    /// Posts fetched successfully
    Loaded { generation: u64, posts: Vec<Post> },

    /// Post fetch failed
    LoadFailed { generation: u64, error: String },
}

/// Comment panel messages
#[derive(Debug, Clone)]
pub enum CommentsMessage {
    /// Toggle the comment panel of the given post
    Toggle(i64),

    /// Comments fetched successfully
    Loaded {
        generation: u64,
        post_id: i64,
        comments: Vec<Comment>,
    },

    /// Comment fetch failed
    LoadFailed {
        generation: u64,
        post_id: i64,
        error: String,
    },
}

/// Service banner messages
#[derive(Debug, Clone)]
pub enum BannerMessage {
    /// Fetch the service banner
    Load,

    /// Banner fetched successfully
    Loaded(ServiceBanner),

    /// Banner fetch failed
    LoadFailed(String),
}

/// Layout presentation modes; purely cosmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Multi-column card grid
    Cards,
    /// Single-column list
    List,
}

impl LayoutMode {
    /// The other presentation
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Cards => LayoutMode::List,
            LayoutMode::List => LayoutMode::Cards,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Cards => "cards",
            LayoutMode::List => "list",
        }
    }
}

impl From<SystemMessage> for Message {
    fn from(msg: SystemMessage) -> Self {
        Message::System(msg)
    }
}

impl From<UiMessage> for Message {
    fn from(msg: UiMessage) -> Self {
        Message::Ui(msg)
    }
}

impl From<PostsMessage> for Message {
    fn from(msg: PostsMessage) -> Self {
        Message::Posts(msg)
    }
}

impl From<CommentsMessage> for Message {
    fn from(msg: CommentsMessage) -> Self {
        Message::Comments(msg)
    }
}

impl From<BannerMessage> for Message {
    fn from(msg: BannerMessage) -> Self {
        Message::Banner(msg)
    }
}
