//! Post lifecycle service.
//!
//! Every operation validates first, then talks to the repository, then
//! assembles the response envelope. Validation failures never reach the
//! repository.

use std::sync::Arc;

use uuid::Uuid;

use blog_shared::{ApiResponse, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::validation::{self, PostFields};

const ENTITY: &str = "Post";

/// Orchestrates validation, entity construction/mutation and persistence.
///
/// Holds no state of its own; read-modify-write sequences (`update`,
/// `delete`) are not isolated, so concurrent updates to one post are
/// last-write-wins.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create and persist a new post. Responds with status 201.
    pub async fn create(
        &self,
        request: CreatePostRequest,
    ) -> Result<ApiResponse<PostResponse>, DomainError> {
        validate(&request)?;

        let post = Post::new(request.title, request.content, request.category, request.tags);
        let saved = self.repo.save(post).await?;

        tracing::info!(post_id = %saved.id, "Post created");
        Self::post_response(Some(saved), ApiResponse::created)
    }

    /// Replace the editable fields of an existing post. Responds with status 200.
    pub async fn update(
        &self,
        id: &str,
        request: UpdatePostRequest,
    ) -> Result<ApiResponse<PostResponse>, DomainError> {
        validate(&request)?;

        let mut post = self.find_existing(id).await?;
        post.revise(request.title, request.content, request.category, request.tags);
        let saved = self.repo.save(post).await?;

        tracing::info!(post_id = %saved.id, "Post updated");
        Self::post_response(Some(saved), ApiResponse::ok)
    }

    /// Permanently remove a post.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let post = self.find_existing(id).await?;

        match self.repo.delete(post.id).await {
            Ok(()) => {}
            // Removed by someone else between the lookup and the delete.
            Err(RepoError::NotFound) => return Err(not_found(id)),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(post_id = %post.id, "Post deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<ApiResponse<PostResponse>, DomainError> {
        let post = self.find_existing(id).await?;
        Self::post_response(Some(post), ApiResponse::ok)
    }

    /// All posts when `term` is empty, otherwise the posts whose title,
    /// content or category contains `term` (case-insensitive).
    pub async fn search(&self, term: &str) -> Result<ApiResponse<Vec<PostResponse>>, DomainError> {
        let posts = if term.is_empty() {
            self.repo.find_all().await?
        } else {
            self.repo.search(term).await?
        };

        tracing::debug!(term, matches = posts.len(), "Post search");
        Ok(ApiResponse::ok(posts.into_iter().map(Into::into).collect()))
    }

    /// Wrap a stored post in a success envelope built by `envelope`.
    pub fn post_response(
        post: Option<Post>,
        envelope: fn(PostResponse) -> ApiResponse<PostResponse>,
    ) -> Result<ApiResponse<PostResponse>, DomainError> {
        let post = post.ok_or(DomainError::NullItem)?;
        Ok(envelope(post.into()))
    }

    async fn find_existing(&self, id: &str) -> Result<Post, DomainError> {
        // A string that is not a UUID cannot name a stored post.
        let Ok(uuid) = Uuid::parse_str(id) else {
            tracing::debug!(id, "Rejected malformed post id");
            return Err(not_found(id));
        };

        self.repo.find_by_id(uuid).await?.ok_or_else(|| {
            tracing::debug!(id, "Post not found");
            not_found(id)
        })
    }
}

fn validate<T: PostFields>(request: &T) -> Result<(), DomainError> {
    let empty = validation::empty_fields(request);
    if empty.is_empty() {
        return Ok(());
    }

    tracing::debug!(fields = ?empty, "Rejected post with empty fields");
    Err(DomainError::EmptyFields(empty))
}

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id: id.to_string(),
    }
}
