/// Command system for TEA pattern
///
/// Commands represent side effects that should be executed as a result of
/// model updates. They are processed asynchronously and feed their results
/// back into the update loop as messages.
use crate::api::ApiClient;
use crate::tea::message::{BannerMessage, CommentsMessage, Message, PostsMessage};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Command that can be executed to perform side effects
#[derive(Debug)]
pub enum Command {
    /// No operation - used when no side effects are needed
    None,

    /// Send a message back to the update loop
    SendMessage(Message),

    /// Batch multiple commands
    Batch(Vec<Command>),

    /// Fetch a bounded list of posts
    FetchPosts { limit: u16, generation: u64 },

    /// Fetch the comments of a single post
    FetchComments { post_id: i64, generation: u64 },

    /// Fetch the one-shot service banner
    FetchBanner,
}

impl Command {
    /// Create a no-op command
    pub fn none() -> Self {
        Command::None
    }

    /// Create a command to send a message
    pub fn message(msg: impl Into<Message>) -> Self {
        Command::SendMessage(msg.into())
    }

    /// Create a batch of commands
    pub fn batch(commands: Vec<Command>) -> Self {
        Command::Batch(commands)
    }
}

/// Command executor that processes commands asynchronously
///
/// Fetches run on spawned tasks so the update loop is never blocked; each
/// task reports back over the message channel. In-flight requests are never
/// aborted - a late response simply carries a stale generation and is
/// dropped by the update function.
pub struct CommandExecutor {
    client: Arc<ApiClient>,
    message_sender: mpsc::UnboundedSender<Message>,
}

impl CommandExecutor {
    /// Create a new command executor
    pub fn new(client: Arc<ApiClient>, message_sender: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            client,
            message_sender,
        }
    }

    /// Execute a command
    pub async fn execute(&self, command: Command) {
        match command {
            Command::None => {
                // No operation
            }
            Command::SendMessage(message) => {
                if let Err(e) = self.message_sender.send(message) {
                    tracing::error!("Failed to send message: {}", e);
                }
            }
            Command::Batch(commands) => {
                for cmd in commands {
                    Box::pin(self.execute(cmd)).await;
                }
            }
            Command::FetchPosts { limit, generation } => {
                self.spawn_post_fetch(limit, generation);
            }
            Command::FetchComments {
                post_id,
                generation,
            } => {
                self.spawn_comment_fetch(post_id, generation);
            }
            Command::FetchBanner => {
                self.spawn_banner_fetch();
            }
        }
    }

    fn spawn_post_fetch(&self, limit: u16, generation: u64) {
        let client = self.client.clone();
        let sender = self.message_sender.clone();

        tokio::spawn(async move {
            let message = match client.fetch_posts(limit).await {
                Ok(posts) => PostsMessage::Loaded { generation, posts },
                Err(e) => {
                    tracing::warn!("Failed to fetch posts: {}", e);
                    PostsMessage::LoadFailed {
                        generation,
                        error: e.to_string(),
                    }
                }
            };

            let _ = sender.send(Message::Posts(message));
        });
    }

    fn spawn_comment_fetch(&self, post_id: i64, generation: u64) {
        let client = self.client.clone();
        let sender = self.message_sender.clone();

        tokio::spawn(async move {
            let message = match client.fetch_comments(post_id).await {
                Ok(comments) => CommentsMessage::Loaded {
                    generation,
                    post_id,
                    comments,
                },
                Err(e) => {
                    tracing::warn!("Failed to fetch comments for post {}: {}", post_id, e);
                    CommentsMessage::LoadFailed {
                        generation,
                        post_id,
                        error: e.to_string(),
                    }
                }
            };

            let _ = sender.send(Message::Comments(message));
        });
    }

    fn spawn_banner_fetch(&self) {
        if !self.client.has_service_endpoint() {
            return;
        }

        let client = self.client.clone();
        let sender = self.message_sender.clone();

        tokio::spawn(async move {
            let message = match client.fetch_service_banner().await {
                Ok(banner) => BannerMessage::Loaded(banner),
                Err(e) => {
                    tracing::warn!("Failed to fetch service banner: {}", e);
                    BannerMessage::LoadFailed(e.to_string())
                }
            };

            let _ = sender.send(Message::Banner(message));
        });
    }
}
