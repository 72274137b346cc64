//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{Condition, EntityTrait, QueryFilter, QueryOrder};

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Build a `LIKE` pattern matching `term` anywhere, with wildcards in the
/// term itself taken literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(term, "Searching posts");

        let pattern = contains_pattern(term);
        let condition = [post::Column::Title, post::Column::Content, post::Column::Category]
            .into_iter()
            .fold(Condition::any(), |cond, column| {
                cond.add(Expr::expr(Func::lower(Expr::col(column))).like(pattern.clone()))
            });

        let result = PostEntity::find()
            .filter(condition)
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
