// SQLite AssociationRepository - follows and likes through one code path

use crate::error::map_sqlx_error;
use crate::rows::{link_table, QuestionRow, UserRow, QUESTION_COLUMNS, USER_COLUMNS};
use crate::SqliteStore;
use async_trait::async_trait;
use questions_core::domain::{Association, Question, QuestionId, User, UserId};
use questions_core::error::Result;
use questions_core::port::AssociationRepository;
use tracing::debug;

#[async_trait]
impl AssociationRepository for SqliteStore {
    async fn users_for_question(
        &self,
        association: Association,
        question_id: QuestionId,
    ) -> Result<Vec<User>> {
        let table = link_table(association);
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            r#"
            SELECT {columns}
            FROM users
            JOIN {table} ON users.id = {table}.user_id
            WHERE {table}.question_id = ?
            "#,
            columns = USER_COLUMNS,
            table = table,
        ))
        .bind(question_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(%association, question_id, rows = rows.len(), "users_for_question");
        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }

    async fn questions_for_user(
        &self,
        association: Association,
        user_id: UserId,
    ) -> Result<Vec<Question>> {
        let table = link_table(association);
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            r#"
            SELECT {columns}
            FROM questions
            JOIN {table} ON questions.id = {table}.question_id
            WHERE {table}.user_id = ?
            "#,
            columns = QUESTION_COLUMNS,
            table = table,
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(%association, user_id, rows = rows.len(), "questions_for_user");
        Ok(rows.into_iter().map(|r| r.into_question()).collect())
    }

    async fn count_for_question(
        &self,
        association: Association,
        question_id: QuestionId,
    ) -> Result<i64> {
        let table = link_table(association);
        let count: i64 = sqlx::query_scalar(&format!(
            r#"
            SELECT COUNT(*)
            FROM questions
            JOIN {table} ON questions.id = {table}.question_id
            WHERE questions.id = ?
            "#,
            table = table,
        ))
        .bind(question_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(%association, question_id, count, "count_for_question");
        Ok(count)
    }

    async fn most_associated_questions(
        &self,
        association: Association,
        n: u32,
    ) -> Result<Vec<Question>> {
        // No secondary sort key: ties come back in whatever order SQLite groups them
        let table = link_table(association);
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!(
            r#"
            SELECT {columns}
            FROM questions
            JOIN {table} ON questions.id = {table}.question_id
            GROUP BY questions.id
            ORDER BY COUNT(*) DESC
            LIMIT ?
            "#,
            columns = QUESTION_COLUMNS,
            table = table,
        ))
        .bind(i64::from(n))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(%association, n, rows = rows.len(), "most_associated_questions");
        Ok(rows.into_iter().map(|r| r.into_question()).collect())
    }

    async fn average_karma(&self, user_id: UserId) -> Result<f64> {
        // x / 0 is NULL in SQLite, which covers users without questions
        let karma: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT CAST(COUNT(question_likes.user_id) AS REAL) / COUNT(DISTINCT questions.id)
            FROM questions
            LEFT JOIN question_likes ON questions.id = question_likes.question_id
            WHERE questions.author_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(user_id, ?karma, "average_karma");
        Ok(karma.unwrap_or(0.0))
    }
}
