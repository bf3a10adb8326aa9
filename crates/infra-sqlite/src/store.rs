// SQLite Store - User, Question and Reply finders

use crate::error::map_sqlx_error;
use crate::rows::{QuestionRow, ReplyRow, UserRow, QUESTION_COLUMNS, REPLY_COLUMNS, USER_COLUMNS};
use async_trait::async_trait;
use questions_core::domain::{Question, QuestionId, Reply, ReplyId, User, UserId};
use questions_core::error::Result;
use questions_core::port::{QuestionRepository, ReplyRepository, UserRepository};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

/// Ids bound per `IN (...)` query; SQLite caps bound variables at 32766
const MAX_IN_LIST: usize = 500;

/// Read-only store over one SQLite pool
///
/// Finders return rows in the order SQLite produces them; none of them adds
/// an ORDER BY of its own.
#[derive(Clone)]
pub struct SqliteStore {
    pub(crate) pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE id = ?",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(user_id = id, found = row.is_some(), "find_user_by_id");
        Ok(row.map(|r| r.into_user()))
    }

    async fn find_user_by_name(&self, fname: &str, lname: &str) -> Result<Option<User>> {
        // Names are not unique; take the first row
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE fname = ? AND lname = ? LIMIT 1",
            USER_COLUMNS
        ))
        .bind(fname)
        .bind(lname)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(fname, lname, found = row.is_some(), "find_user_by_name");
        Ok(row.map(|r| r.into_user()))
    }

    async fn find_users_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows: Vec<UserRow> = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(MAX_IN_LIST) {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new(format!("SELECT {} FROM users WHERE id IN (", USER_COLUMNS));
            let mut separated = builder.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(")");

            let batch: Vec<UserRow> = builder
                .build_query_as()
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
            rows.extend(batch);
        }

        debug!(requested = ids.len(), found = rows.len(), "find_users_by_ids");
        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }
}

#[async_trait]
impl QuestionRepository for SqliteStore {
    async fn find_question_by_id(&self, id: QuestionId) -> Result<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {} FROM questions WHERE id = ?",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(question_id = id, found = row.is_some(), "find_question_by_id");
        Ok(row.map(|r| r.into_question()))
    }

    async fn find_questions_by_author_id(&self, author_id: UserId) -> Result<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM questions WHERE author_id = ?",
            QUESTION_COLUMNS
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(author_id, rows = rows.len(), "find_questions_by_author_id");
        Ok(rows.into_iter().map(|r| r.into_question()).collect())
    }
}

impl SqliteStore {
    /// `SELECT ... FROM replies WHERE <column> = ?`
    async fn find_replies_where(&self, column: &'static str, key: i64) -> Result<Vec<Reply>> {
        let rows: Vec<ReplyRow> = sqlx::query_as(&format!(
            "SELECT {} FROM replies WHERE {} = ?",
            REPLY_COLUMNS, column
        ))
        .bind(key)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(column, key, rows = rows.len(), "find_replies");
        Ok(rows.into_iter().map(|r| r.into_reply()).collect())
    }
}

#[async_trait]
impl ReplyRepository for SqliteStore {
    async fn find_reply_by_id(&self, id: ReplyId) -> Result<Option<Reply>> {
        let row = sqlx::query_as::<_, ReplyRow>(&format!(
            "SELECT {} FROM replies WHERE id = ?",
            REPLY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(reply_id = id, found = row.is_some(), "find_reply_by_id");
        Ok(row.map(|r| r.into_reply()))
    }

    async fn find_replies_by_author_id(&self, author_id: UserId) -> Result<Vec<Reply>> {
        self.find_replies_where("author_id", author_id).await
    }

    async fn find_replies_by_question_id(&self, question_id: QuestionId) -> Result<Vec<Reply>> {
        self.find_replies_where("question_id", question_id).await
    }

    async fn find_replies_by_parent_id(&self, parent_reply_id: ReplyId) -> Result<Vec<Reply>> {
        self.find_replies_where("parent_reply_id", parent_reply_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{empty_store, seeded_store};
    use questions_core::AppError;

    #[tokio::test]
    async fn test_find_by_id_on_empty_tables() {
        let store = empty_store().await;

        assert!(store.find_user_by_id(1).await.unwrap().is_none());
        assert!(store.find_question_by_id(1).await.unwrap().is_none());
        assert!(store.find_reply_by_id(1).await.unwrap().is_none());
        assert!(store.find_questions_by_author_id(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_finders() {
        let store = seeded_store().await;

        let ada = store.find_user_by_name("Ada", "Lovelace").await.unwrap();
        assert_eq!(ada, Some(User::new(1, "Ada", "Lovelace")));

        assert!(store.find_user_by_id(999).await.unwrap().is_none());
        assert!(store
            .find_user_by_name("Ada", "Byron")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_users_by_ids() {
        let store = seeded_store().await;

        let mut users = store.find_users_by_ids(&[3, 1, 999]).await.unwrap();
        users.sort_by_key(|u| u.id);
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);

        assert!(store.find_users_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_users_by_ids_past_variable_limit() {
        let store = seeded_store().await;

        let ids: Vec<UserId> = (1..=40_000).collect();
        let mut users = store.find_users_by_ids(&ids).await.unwrap();
        users.sort_by_key(|u| u.id);
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_question_fields_match_row() {
        let store = seeded_store().await;

        let question = store.find_question_by_id(1).await.unwrap().unwrap();
        assert_eq!(
            question,
            Question::new(1, "Engines", "Can the engine compose music?", 1)
        );

        let by_ada = store.find_questions_by_author_id(1).await.unwrap();
        assert_eq!(by_ada.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_reply_finders() {
        let store = seeded_store().await;

        let top = store.find_reply_by_id(1).await.unwrap().unwrap();
        assert_eq!(top.parent_reply_id, None);

        let nested = store.find_reply_by_id(2).await.unwrap().unwrap();
        assert_eq!(nested.parent_reply_id, Some(1));

        let on_question = store.find_replies_by_question_id(1).await.unwrap();
        assert_eq!(on_question.len(), 3);

        let children = store.find_replies_by_parent_id(1).await.unwrap();
        assert_eq!(children.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);

        let by_grace = store.find_replies_by_author_id(3).await.unwrap();
        assert_eq!(by_grace.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[tokio::test]
    async fn test_finder_is_idempotent() {
        let store = seeded_store().await;

        let first = store.find_replies_by_question_id(1).await.unwrap();
        let second = store.find_replies_by_question_id(1).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_schema_is_storage_error() {
        let pool = crate::create_pool(&crate::StoreConfig::default())
            .await
            .unwrap();
        let store = SqliteStore::new(pool);

        let result = store.find_user_by_id(1).await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
