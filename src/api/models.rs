//! Wire types returned by the post service

use serde::{Deserialize, Serialize};

/// A blog-style entry with a title and body text.
///
/// Posts are immutable once fetched; every successful fetch replaces the
/// whole collection rather than merging into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// A reader response attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// One-shot service banner from the auxiliary `/api/data` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBanner {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialization() {
        let json = r#"{"userId": 1, "id": 3, "title": "ea molestias", "body": "et iusto sed quo iure"}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.id, 3);
        assert_eq!(post.title, "ea molestias");
        assert_eq!(post.body, "et iusto sed quo iure");
    }

    #[test]
    fn test_comment_deserialization() {
        let json = r#"{
            "postId": 3,
            "id": 11,
            "name": "fugit labore",
            "email": "Veronica_Goodwin@timmothy.net",
            "body": "ut dolorum nostrum id quia aut est"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();

        assert_eq!(comment.id, 11);
        assert_eq!(comment.name, "fugit labore");
        assert_eq!(comment.email, "Veronica_Goodwin@timmothy.net");
    }

    #[test]
    fn test_banner_deserialization() {
        let json = r#"{"message": "Hello from the API"}"#;
        let banner: ServiceBanner = serde_json::from_str(json).unwrap();
        assert_eq!(banner.message, "Hello from the API");
    }

    #[test]
    fn test_post_array_deserialization() {
        let json = r#"[
            {"id": 1, "title": "first", "body": "a"},
            {"id": 2, "title": "second", "body": "b"}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "second");
    }
}
