use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blog_shared::PostResponse;

/// Post entity - a stored blog post.
///
/// Two posts are equal when they share an `id`, whatever their content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated id and `created_at == updated_at`.
    pub fn new(title: String, content: String, category: String, tags: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            category,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields and bump `updated_at`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn revise(&mut self, title: String, content: String, category: String, tags: Vec<String>) {
        // Clamp so a clock step backwards cannot break updated_at >= created_at.
        self.updated_at = Utc::now().max(self.updated_at);
        self.title = title;
        self.content = content;
        self.category = category;
        self.tags = tags;
    }

    /// Case-insensitive substring match over title, content and category.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        [&self.title, &self.content, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl std::hash::Hash for Post {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            category: post.category,
            tags: post.tags,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
