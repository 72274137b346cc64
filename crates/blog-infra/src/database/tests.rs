#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::{PostgresPostRepository, contains_pattern};
    use blog_core::domain::Post;
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Statement, Value};

    fn model(id: uuid::Uuid, title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            category: "Software Development".to_owned(),
            tags: vec!["#software".to_owned(), "#rust".to_owned()],
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    /// Every statement the repository sent to the mock connection.
    fn logged_statements(repo: PostgresPostRepository) -> Vec<Statement> {
        repo.db
            .into_transaction_log()
            .iter()
            .flat_map(|txn| txn.statements().to_vec())
            .collect()
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post_id, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.tags, vec!["#software", "#rust"]);
    }

    #[tokio::test]
    async fn test_find_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_save_returns_stored_post() {
        let post = Post::new(
            "Test Post".to_owned(),
            "Content".to_owned(),
            "Software Development".to_owned(),
            vec!["#software".to_owned(), "#rust".to_owned()],
        );

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(post.id, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let saved = BaseRepository::<Post, uuid::Uuid>::save(&repo, post.clone())
            .await
            .unwrap();
        assert_eq!(saved.id, post.id);
        assert_eq!(saved.title, "Test Post");

        let statements = logged_statements(repo);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.starts_with(r#"INSERT INTO "posts""#), "{sql}");
        assert!(sql.contains(r#"ON CONFLICT ("id") DO UPDATE SET"#), "{sql}");
        for column in ["title", "content", "category", "tags", "updated_at"] {
            assert!(
                sql.contains(&format!(r#""{column}" = "excluded"."{column}""#)),
                "{column} not overwritten on conflict: {sql}"
            );
        }
        assert!(sql.contains("RETURNING"), "{sql}");
    }

    #[tokio::test]
    async fn test_delete_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_search_posts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(uuid::Uuid::new_v4(), "Rust ownership"),
                model(uuid::Uuid::new_v4(), "Rust lifetimes"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.search("100% Rust").await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Rust ownership");

        let statements = logged_statements(repo);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert_eq!(sql.matches("LOWER(").count(), 3, "{sql}");
        assert_eq!(sql.matches(" LIKE ").count(), 3, "{sql}");
        assert_eq!(sql.matches(" OR ").count(), 2, "{sql}");
        for column in ["title", "content", "category"] {
            assert!(sql.contains(&format!(r#""{column}")"#)), "{column} not searched: {sql}");
        }
        assert!(sql.contains(r#""created_at" ASC"#), "{sql}");
        assert!(sql.find("ORDER BY") > sql.find("WHERE"), "{sql}");

        let pattern = Value::from("%100\\% rust%");
        let values = &statements[0].values.as_ref().unwrap().0;
        assert_eq!(values.iter().filter(|v| **v == pattern).count(), 3);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_creation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(uuid::Uuid::new_v4(), "Only")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert_eq!(repo.find_all().await.unwrap().len(), 1);

        let statements = logged_statements(repo);
        let sql = &statements[0].sql;
        assert!(!sql.contains("WHERE"), "{sql}");
        assert!(sql.contains("ORDER BY"), "{sql}");
        assert!(sql.contains(r#""created_at" ASC"#), "{sql}");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Rust"), "%rust%");
        assert_eq!(contains_pattern("100%_"), "%100\\%\\_%");
    }
}
