/// Update function for TEA pattern
///
/// Central update function that handles all messages and updates the model
/// accordingly. This is the heart of the architecture: every state change
/// happens here, and every side effect leaves as a command.
use crate::tea::message::{
    BannerMessage, CommentsMessage, Message, PostsMessage, SystemMessage, UiMessage,
};
use crate::tea::model::{CommentPanel, Model, MAX_POST_LIMIT, MIN_POST_LIMIT};
use crate::tea::{Command, UpdateResult};
use chrono::Local;

/// Main update function that processes messages and returns the updated
/// model together with the commands to execute
pub fn update(model: Model, message: Message) -> UpdateResult<Model> {
    match message {
        Message::System(msg) => update_system(model, msg),
        Message::Ui(msg) => update_ui(model, msg),
        Message::Posts(msg) => update_posts(model, msg),
        Message::Comments(msg) => update_comments(model, msg),
        Message::Banner(msg) => update_banner(model, msg),
    }
}

/// Handle system messages
fn update_system(mut model: Model, message: SystemMessage) -> UpdateResult<Model> {
    match message {
        SystemMessage::Quit => {
            model.app_state.should_quit = true;
            UpdateResult::just_model(model)
        }

        SystemMessage::Resize(width, height) => {
            model.app_state.terminal_size = (width, height);
            UpdateResult::just_model(model)
        }
    }
}

/// Handle UI messages
fn update_ui(mut model: Model, message: UiMessage) -> UpdateResult<Model> {
    match message {
        UiMessage::ToggleLayout => {
            model.layout = model.layout.toggled();
            UpdateResult::just_model(model)
        }

        UiMessage::SelectNext => {
            if !model.posts.items.is_empty() {
                model.posts.selected =
                    (model.posts.selected + 1).min(model.posts.items.len() - 1);
            }
            UpdateResult::just_model(model)
        }

        UiMessage::SelectPrevious => {
            model.posts.selected = model.posts.selected.saturating_sub(1);
            UpdateResult::just_model(model)
        }

        UiMessage::SelectFirst => {
            model.posts.selected = 0;
            UpdateResult::just_model(model)
        }

        UiMessage::SelectLast => {
            if !model.posts.items.is_empty() {
                model.posts.selected = model.posts.items.len() - 1;
            }
            UpdateResult::just_model(model)
        }

        UiMessage::SetLimit(limit) => set_limit(model, limit),

        UiMessage::IncrementLimit => {
            let limit = model.posts.limit.saturating_add(1);
            set_limit(model, limit)
        }

        UiMessage::DecrementLimit => {
            let limit = model.posts.limit.saturating_sub(1);
            set_limit(model, limit)
        }
    }
}

/// Handle post collection messages
fn update_posts(mut model: Model, message: PostsMessage) -> UpdateResult<Model> {
    match message {
        PostsMessage::Load => issue_post_fetch(model),

        PostsMessage::Loaded { generation, posts } => {
            // A response from a superseded fetch must not overwrite newer state.
            if generation != model.posts.generation {
                return UpdateResult::just_model(model);
            }

            let mut posts = posts;
            posts.truncate(model.posts.limit as usize);

            model.posts.items = posts;
            model.posts.loading = false;
            model.posts.last_refresh = Some(Local::now());
            model.last_error = None;

            if model.posts.items.is_empty() {
                model.posts.selected = 0;
            } else {
                model.posts.selected = model.posts.selected.min(model.posts.items.len() - 1);
            }

            UpdateResult::just_model(model)
        }

        PostsMessage::LoadFailed { generation, error } => {
            if generation != model.posts.generation {
                return UpdateResult::just_model(model);
            }

            // Prior items are kept; the failure only surfaces in the status line.
            model.posts.loading = false;
            model.last_error = Some(error);
            UpdateResult::just_model(model)
        }
    }
}

/// Handle comment panel messages
fn update_comments(mut model: Model, message: CommentsMessage) -> UpdateResult<Model> {
    match message {
        CommentsMessage::Toggle(post_id) => match model.comments.panel {
            CommentPanel::OpenFor(open_id) if open_id == post_id => {
                // Close without clearing: the stale collection stays until
                // another post's fetch replaces it.
                model.comments.panel = CommentPanel::Closed;
                model.comments.loading = false;
                UpdateResult::just_model(model)
            }
            _ => open_comment_panel(model, post_id),
        },

        CommentsMessage::Loaded {
            generation,
            post_id,
            comments,
        } => {
            if generation != model.comments.generation {
                return UpdateResult::just_model(model);
            }

            model.comments.items = comments;
            model.comments.loaded_for = Some(post_id);
            model.comments.loading = false;
            UpdateResult::just_model(model)
        }

        CommentsMessage::LoadFailed {
            generation,
            post_id: _,
            error,
        } => {
            if generation != model.comments.generation {
                return UpdateResult::just_model(model);
            }

            model.comments.loading = false;
            model.last_error = Some(error);
            UpdateResult::just_model(model)
        }
    }
}

/// Handle service banner messages
fn update_banner(mut model: Model, message: BannerMessage) -> UpdateResult<Model> {
    match message {
        BannerMessage::Load => UpdateResult::with_command(model, Command::FetchBanner),

        BannerMessage::Loaded(banner) => {
            model.banner = Some(banner.message);
            UpdateResult::just_model(model)
        }

        // Already logged at the executor boundary; the banner is cosmetic.
        BannerMessage::LoadFailed(_) => UpdateResult::just_model(model),
    }
}

/// Apply a new post limit and re-fetch when it actually changed
fn set_limit(mut model: Model, limit: u16) -> UpdateResult<Model> {
    let limit = limit.clamp(MIN_POST_LIMIT, MAX_POST_LIMIT);

    if limit == model.posts.limit {
        return UpdateResult::just_model(model);
    }

    model.posts.limit = limit;
    issue_post_fetch(model)
}

/// Issue a post fetch at the current limit under a fresh generation
fn issue_post_fetch(mut model: Model) -> UpdateResult<Model> {
    model.posts.generation += 1;
    model.posts.loading = true;

    let command = Command::FetchPosts {
        limit: model.posts.limit,
        generation: model.posts.generation,
    };

    UpdateResult::with_command(model, command)
}

/// Open the panel for a post and fetch its comments under a fresh generation
fn open_comment_panel(mut model: Model, post_id: i64) -> UpdateResult<Model> {
    model.comments.panel = CommentPanel::OpenFor(post_id);
    model.comments.generation += 1;
    model.comments.loading = true;

    let command = Command::FetchComments {
        post_id,
        generation: model.comments.generation,
    };

    UpdateResult::with_command(model, command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Comment, Post};
    use crate::tea::message::LayoutMode;

    fn post(id: i64) -> Post {
        Post {
            id,
            title: format!("post {}", id),
            body: format!("body of post {}", id),
        }
    }

    fn comment(id: i64) -> Comment {
        Comment {
            id,
            name: format!("commenter {}", id),
            email: format!("commenter{}@example.com", id),
            body: "well said".to_string(),
        }
    }

    fn model_with_posts(count: i64) -> Model {
        let mut model = Model::default();
        model.posts.items = (1..=count).map(post).collect();
        model
    }

    fn fetch_comment_commands(commands: &[Command]) -> Vec<i64> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::FetchComments { post_id, .. } => Some(*post_id),
                _ => None,
            })
            .collect()
    }

    fn has_post_fetch(commands: &[Command]) -> bool {
        commands
            .iter()
            .any(|c| matches!(c, Command::FetchPosts { .. }))
    }

    #[test]
    fn test_quit() {
        let result = update(Model::default(), SystemMessage::Quit.into());
        assert!(result.model.should_quit());
        assert!(result.commands.is_empty());
    }

    #[test]
    fn test_resize_updates_terminal_size() {
        let result = update(Model::default(), SystemMessage::Resize(132, 50).into());
        assert_eq!(result.model.app_state.terminal_size, (132, 50));
    }

    #[test]
    fn test_set_limit_triggers_refetch() {
        let result = update(Model::default(), UiMessage::SetLimit(10).into());

        assert_eq!(result.model.posts.limit, 10);
        assert!(result.model.posts.loading);
        assert_eq!(result.commands.len(), 1);
        match &result.commands[0] {
            Command::FetchPosts { limit, generation } => {
                assert_eq!(*limit, 10);
                assert_eq!(*generation, result.model.posts.generation);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_set_same_limit_is_a_no_op() {
        let result = update(Model::default(), UiMessage::SetLimit(5).into());
        assert!(result.commands.is_empty());
        assert!(!result.model.posts.loading);
    }

    #[test]
    fn test_limit_is_clamped() {
        let result = update(Model::default(), UiMessage::SetLimit(0).into());
        assert_eq!(result.model.posts.limit, MIN_POST_LIMIT);

        let result = update(Model::default(), UiMessage::SetLimit(250).into());
        assert_eq!(result.model.posts.limit, MAX_POST_LIMIT);
    }

    #[test]
    fn test_decrement_at_minimum_stays_put() {
        let mut model = Model::default();
        model.posts.limit = MIN_POST_LIMIT;

        let result = update(model, UiMessage::DecrementLimit.into());
        assert_eq!(result.model.posts.limit, MIN_POST_LIMIT);
        assert!(result.commands.is_empty());
    }

    #[test]
    fn test_loaded_posts_are_bounded_by_limit() {
        let mut model = Model::default();
        model.posts.limit = 3;
        model.posts.generation = 1;

        let result = update(
            model,
            PostsMessage::Loaded {
                generation: 1,
                posts: (1..=10).map(post).collect(),
            }
            .into(),
        );

        assert!(result.model.posts.items.len() <= 3);
        assert!(!result.model.posts.loading);
        assert!(result.model.posts.last_refresh.is_some());
    }

    #[test]
    fn test_stale_post_response_is_discarded() {
        let model = Model::default();

        // Two fetches issued back to back; only the second is current.
        let result = update(model, PostsMessage::Load.into());
        let result = update(result.model, PostsMessage::Load.into());
        let current = result.model.posts.generation;

        let result = update(
            result.model,
            PostsMessage::Loaded {
                generation: current - 1,
                posts: vec![post(99)],
            }
            .into(),
        );
        assert!(result.model.posts.items.is_empty());
        assert!(result.model.posts.loading);

        let result = update(
            result.model,
            PostsMessage::Loaded {
                generation: current,
                posts: vec![post(1)],
            }
            .into(),
        );
        assert_eq!(result.model.posts.items, vec![post(1)]);
        assert!(!result.model.posts.loading);
    }

    #[test]
    fn test_post_fetch_failure_keeps_prior_items() {
        let mut model = model_with_posts(3);
        model.posts.generation = 2;
        model.posts.loading = true;
        let before = model.posts.items.clone();

        let result = update(
            model,
            PostsMessage::LoadFailed {
                generation: 2,
                error: "network error: connection refused".to_string(),
            }
            .into(),
        );

        assert_eq!(result.model.posts.items, before);
        assert!(!result.model.posts.loading);
        assert!(result.model.last_error.is_some());
    }

    #[test]
    fn test_selection_clamped_when_collection_shrinks() {
        let mut model = model_with_posts(10);
        model.posts.selected = 9;
        model.posts.limit = 2;
        model.posts.generation = 1;

        let result = update(
            model,
            PostsMessage::Loaded {
                generation: 1,
                posts: vec![post(1), post(2)],
            }
            .into(),
        );

        assert_eq!(result.model.posts.selected, 1);
    }

    #[test]
    fn test_toggle_opens_panel_and_fetches_once() {
        let model = model_with_posts(5);

        let result = update(model, CommentsMessage::Toggle(3).into());

        assert_eq!(result.model.comments.panel, CommentPanel::OpenFor(3));
        assert!(result.model.comments.loading);
        assert_eq!(fetch_comment_commands(&result.commands), vec![3]);
    }

    #[test]
    fn test_toggle_open_panel_closes_without_fetch() {
        let model = model_with_posts(5);

        let result = update(model, CommentsMessage::Toggle(3).into());
        let generation = result.model.comments.generation;
        let result = update(
            result.model,
            CommentsMessage::Loaded {
                generation,
                post_id: 3,
                comments: vec![comment(1), comment(2)],
            }
            .into(),
        );

        let result = update(result.model, CommentsMessage::Toggle(3).into());

        assert_eq!(result.model.comments.panel, CommentPanel::Closed);
        assert!(result.commands.is_empty());
        // The stale collection survives the close.
        assert_eq!(result.model.comments.items.len(), 2);
        assert_eq!(result.model.comments.loaded_for, Some(3));
    }

    #[test]
    fn test_switching_posts_fetches_the_new_post_only() {
        let model = model_with_posts(5);

        let result = update(model, CommentsMessage::Toggle(1).into());
        let result = update(result.model, CommentsMessage::Toggle(2).into());

        assert_eq!(result.model.comments.panel, CommentPanel::OpenFor(2));
        assert_eq!(fetch_comment_commands(&result.commands), vec![2]);
    }

    #[test]
    fn test_switching_posts_keeps_old_comments_until_response_lands() {
        let model = model_with_posts(5);

        let result = update(model, CommentsMessage::Toggle(1).into());
        let generation = result.model.comments.generation;
        let result = update(
            result.model,
            CommentsMessage::Loaded {
                generation,
                post_id: 1,
                comments: vec![comment(1)],
            }
            .into(),
        );

        let result = update(result.model, CommentsMessage::Toggle(2).into());

        assert_eq!(result.model.comments.items, vec![comment(1)]);
        assert_eq!(result.model.comments.loaded_for, Some(1));
        // But they are not presented as post 2's comments.
        assert!(!result.model.comments_ready());

        let generation = result.model.comments.generation;
        let result = update(
            result.model,
            CommentsMessage::Loaded {
                generation,
                post_id: 2,
                comments: vec![comment(7), comment(8)],
            }
            .into(),
        );

        assert_eq!(result.model.comments.loaded_for, Some(2));
        assert!(result.model.comments_ready());
    }

    #[test]
    fn test_stale_comment_response_is_discarded() {
        let model = model_with_posts(5);

        let result = update(model, CommentsMessage::Toggle(1).into());
        let stale_generation = result.model.comments.generation;
        let result = update(result.model, CommentsMessage::Toggle(2).into());

        // Post 1's response arrives after post 2's fetch was issued.
        let result = update(
            result.model,
            CommentsMessage::Loaded {
                generation: stale_generation,
                post_id: 1,
                comments: vec![comment(1)],
            }
            .into(),
        );

        assert!(result.model.comments.items.is_empty());
        assert!(result.model.comments.loading);
        assert_eq!(result.model.comments.loaded_for, None);
    }

    #[test]
    fn test_comment_fetch_failure_keeps_prior_items() {
        let model = model_with_posts(5);

        let result = update(model, CommentsMessage::Toggle(1).into());
        let generation = result.model.comments.generation;
        let result = update(
            result.model,
            CommentsMessage::LoadFailed {
                generation,
                post_id: 1,
                error: "invalid response body: EOF".to_string(),
            }
            .into(),
        );

        assert!(result.model.comments.items.is_empty());
        assert!(!result.model.comments_ready());
        assert!(result.model.last_error.is_some());
    }

    #[test]
    fn test_toggle_layout_twice_restores_original_without_fetch() {
        let model = Model::default();
        let original = model.layout;

        let result = update(model, UiMessage::ToggleLayout.into());
        assert_eq!(result.model.layout, LayoutMode::List);
        assert!(!has_post_fetch(&result.commands));
        assert!(fetch_comment_commands(&result.commands).is_empty());

        let result = update(result.model, UiMessage::ToggleLayout.into());
        assert_eq!(result.model.layout, original);
        assert!(result.commands.is_empty());
    }

    #[test]
    fn test_cursor_movement_stays_in_bounds() {
        let model = model_with_posts(3);

        let result = update(model, UiMessage::SelectPrevious.into());
        assert_eq!(result.model.posts.selected, 0);

        let result = update(result.model, UiMessage::SelectLast.into());
        assert_eq!(result.model.posts.selected, 2);

        let result = update(result.model, UiMessage::SelectNext.into());
        assert_eq!(result.model.posts.selected, 2);

        let result = update(result.model, UiMessage::SelectFirst.into());
        assert_eq!(result.model.posts.selected, 0);
    }

    #[test]
    fn test_banner_loaded_sets_status_text() {
        let result = update(
            Model::default(),
            BannerMessage::Loaded(crate::api::models::ServiceBanner {
                message: "Hello from the API".to_string(),
            })
            .into(),
        );
        assert_eq!(result.model.banner.as_deref(), Some("Hello from the API"));
    }

    #[test]
    fn test_banner_failure_changes_nothing() {
        let result = update(
            Model::default(),
            BannerMessage::LoadFailed("boom".to_string()).into(),
        );
        assert!(result.model.banner.is_none());
        assert!(result.model.last_error.is_none());
        assert!(result.commands.is_empty());
    }
}
